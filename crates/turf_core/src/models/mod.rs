//! Data records exchanged with the form layer.

pub mod analysis;
pub mod environment;
pub mod prediction;
pub mod turf;

pub use analysis::FieldAnalysis;
pub use environment::{EnvironmentalConditions, Precipitation, TimeOfDay, WindDirection};
pub use prediction::{
    ConfidenceBand, DefensiveApproach, PassingStrategy, PlayStyle, RatingBand, SpeedOfPlay,
    StrategyPrediction, FRAGMENT_SEPARATOR, NO_RISK_SENTINEL,
};
pub use turf::{
    Evenness, GrassHeight, MoistureLevel, SurfaceQuality, SurfaceType, TurfConditions,
};
