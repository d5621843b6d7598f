//! Ordered adjustment rules.
//!
//! Each rule takes the current state by value and hands back the adjusted state.
//! Order matters: the surface-quality rule overrides tempo and passing set by the
//! moisture gate, the heat rule can only downgrade a fast tempo, and the
//! defensive shape is read off the tempo after every tempo change.
//!
//! | # | rule | effect |
//! |---|------|--------|
//! | 1 | `surface_moisture` | sets play style, passing, tempo and ratings |
//! | 2 | `wind` | lowers aerial play |
//! | 3 | `traction` | moves dribbling |
//! | 4 | `surface_quality` | raises ball control, forces slow short play |
//! | 5 | `temperature` | cold/heat warnings, heat caps tempo at medium |
//! | 6 | `humidity` | advisory only |
//! | 7 | `defensive_shape` | derives the defensive approach from tempo |
//! | 8 | `evenness` | injury risk on very uneven ground |

use super::conditions::ResolvedConditions;
use super::config::ThresholdsConfig;
use super::state::PredictionState;
use crate::models::{
    DefensiveApproach, Evenness, MoistureLevel, PassingStrategy, PlayStyle, SpeedOfPlay,
    SurfaceQuality,
};

pub trait AdjustmentRule: Send + Sync {
    /// Stable identifier, used in traces and logs
    fn id(&self) -> &'static str;

    fn apply(
        &self,
        conditions: &ResolvedConditions,
        thresholds: &ThresholdsConfig,
        state: PredictionState,
    ) -> PredictionState;
}

/// The standard rule set in evaluation order.
pub fn standard_rules() -> Vec<Box<dyn AdjustmentRule>> {
    vec![
        Box::new(SurfaceMoistureRule),
        Box::new(WindRule),
        Box::new(TractionRule),
        Box::new(SurfaceQualityRule),
        Box::new(TemperatureRule),
        Box::new(HumidityRule),
        Box::new(DefensiveShapeRule),
        Box::new(EvennessRule),
    ]
}

// ========== Surface moisture ==========

const WET_INSIGHT_SHORT_PASSING: &str =
    "Wet conditions favor short, controlled passing to minimize ball skidding";
const WET_INSIGHT_GROUND_BALL: &str =
    "Keep the ball on the ground - aerial play is unpredictable in wet weather";
const WET_RISK_BALL_SKIP: &str = "Ball may skip or slow unexpectedly on wet surfaces";
const WET_RISK_FOOTING: &str = "Players may lose footing during quick directional changes";
const FAST_INSIGHT_COUNTERS: &str = "Fast surface enables quick counter-attacks and long passes";
const FAST_INSIGHT_DRIBBLING: &str =
    "Excellent conditions for skillful dribbling and one-on-one situations";
const FAST_RISK_TURNOVERS: &str = "High-speed play may lead to turnovers if ball control is poor";
const NORMAL_INSIGHT: &str = "Normal conditions allow for varied tactical approaches";

/// Three-way gate on the primary surface condition: wet, dry and fast, or normal.
pub struct SurfaceMoistureRule;

impl AdjustmentRule for SurfaceMoistureRule {
    fn id(&self) -> &'static str {
        "surface_moisture"
    }

    fn apply(
        &self,
        conditions: &ResolvedConditions,
        thresholds: &ThresholdsConfig,
        state: PredictionState,
    ) -> PredictionState {
        if conditions.is_wet() {
            PredictionState {
                play_style: PlayStyle::ControlledPossession,
                passing: PassingStrategy::ShortPasses,
                speed_of_play: SpeedOfPlay::Medium,
                ball_control: 8,
                aerial_play: 3,
                dribbling: 4,
                ..state
            }
            .insight(WET_INSIGHT_SHORT_PASSING)
            .insight(WET_INSIGHT_GROUND_BALL)
            .risk(WET_RISK_BALL_SKIP)
            .risk(WET_RISK_FOOTING)
            .confidence_delta(5)
        } else if conditions.moisture == MoistureLevel::Dry
            && conditions.ball_speed >= thresholds.fast_surface_ball_speed
        {
            PredictionState {
                play_style: PlayStyle::FastAttacking,
                passing: PassingStrategy::MixedFastSurface,
                speed_of_play: SpeedOfPlay::Fast,
                ball_control: 6,
                aerial_play: 6,
                dribbling: 7,
                ..state
            }
            .insight(FAST_INSIGHT_COUNTERS)
            .insight(FAST_INSIGHT_DRIBBLING)
            .risk(FAST_RISK_TURNOVERS)
            .confidence_delta(10)
        } else {
            PredictionState {
                play_style: PlayStyle::Balanced,
                passing: PassingStrategy::Mixed,
                speed_of_play: SpeedOfPlay::Medium,
                ball_control: 6,
                aerial_play: 5,
                dribbling: 6,
                ..state
            }
            .insight(NORMAL_INSIGHT)
        }
    }
}

// ========== Wind ==========

const STRONG_WIND_INSIGHT: &str =
    "Strong winds will significantly affect aerial passes and lifted shots";
const STRONG_WIND_RISK: &str = "High wind speeds may disrupt passing accuracy and ball trajectory";
const MODERATE_WIND_INSIGHT: &str = "Moderate winds require adjustment for aerial plays";

pub struct WindRule;

impl AdjustmentRule for WindRule {
    fn id(&self) -> &'static str {
        "wind"
    }

    fn apply(
        &self,
        conditions: &ResolvedConditions,
        thresholds: &ThresholdsConfig,
        state: PredictionState,
    ) -> PredictionState {
        let wind = conditions.wind_speed_kmh;
        if wind > thresholds.strong_wind_kmh {
            let aerial_play = (state.aerial_play - 3).max(1);
            PredictionState { aerial_play, ..state }
                .insight(STRONG_WIND_INSIGHT)
                .risk(STRONG_WIND_RISK)
                .confidence_delta(-5)
        } else if wind > thresholds.moderate_wind_kmh {
            let aerial_play = (state.aerial_play - 1).max(2);
            PredictionState { aerial_play, ..state }.insight(MODERATE_WIND_INSIGHT)
        } else {
            state
        }
    }
}

// ========== Traction ==========

const POOR_TRACTION_RISK: &str = "Poor traction increases injury risk during quick movements";
const HIGH_TRACTION_INSIGHT: &str =
    "Excellent traction supports aggressive pressing and quick movements";

pub struct TractionRule;

impl AdjustmentRule for TractionRule {
    fn id(&self) -> &'static str {
        "traction"
    }

    fn apply(
        &self,
        conditions: &ResolvedConditions,
        thresholds: &ThresholdsConfig,
        state: PredictionState,
    ) -> PredictionState {
        if conditions.traction < thresholds.poor_traction_below {
            let dribbling = (state.dribbling - 2).max(2);
            PredictionState { dribbling, ..state }.risk(POOR_TRACTION_RISK).confidence_delta(-10)
        } else if conditions.traction >= thresholds.high_traction_from {
            let dribbling = (state.dribbling + 1).min(10);
            PredictionState { dribbling, ..state }.insight(HIGH_TRACTION_INSIGHT)
        } else {
            state
        }
    }
}

// ========== Surface quality ==========

const DEGRADED_SURFACE_INSIGHT: &str =
    "Poor surface quality demands careful ball control and shorter passes";
const DEGRADED_SURFACE_RISK: &str = "Uneven surface may cause unpredictable ball bounces";
const EXCELLENT_SURFACE_INSIGHT: &str = "Excellent surface quality enables precise technical play";

pub struct SurfaceQualityRule;

impl AdjustmentRule for SurfaceQualityRule {
    fn id(&self) -> &'static str {
        "surface_quality"
    }

    fn apply(
        &self,
        conditions: &ResolvedConditions,
        _thresholds: &ThresholdsConfig,
        state: PredictionState,
    ) -> PredictionState {
        if conditions.surface_quality.is_degraded() {
            // Ball control may exceed 10 here; finish() clamps it.
            let ball_control = state.ball_control + 2;
            PredictionState {
                ball_control,
                speed_of_play: SpeedOfPlay::Slow,
                passing: PassingStrategy::ShortPasses,
                ..state
            }
            .insight(DEGRADED_SURFACE_INSIGHT)
            .risk(DEGRADED_SURFACE_RISK)
            .confidence_delta(-15)
        } else if conditions.surface_quality == SurfaceQuality::Excellent {
            state.confidence_delta(5).insight(EXCELLENT_SURFACE_INSIGHT)
        } else {
            state
        }
    }
}

// ========== Temperature ==========

const COLD_INSIGHT: &str = "Cold conditions may affect player stamina and ball behavior";
const COLD_RISK: &str = "Cold weather increases muscle injury risk - ensure proper warm-up";
const HEAT_INSIGHT: &str = "High temperature requires focus on hydration and rotation";
const HEAT_RISK: &str = "Heat may cause faster fatigue - plan for more substitutions";

pub struct TemperatureRule;

impl AdjustmentRule for TemperatureRule {
    fn id(&self) -> &'static str {
        "temperature"
    }

    fn apply(
        &self,
        conditions: &ResolvedConditions,
        thresholds: &ThresholdsConfig,
        state: PredictionState,
    ) -> PredictionState {
        let temp = conditions.temperature_c;
        if temp < thresholds.cold_below_c {
            state.insight(COLD_INSIGHT).risk(COLD_RISK).confidence_delta(-5)
        } else if temp > thresholds.hot_above_c {
            // One-way: heat never raises the tempo.
            let speed_of_play = match state.speed_of_play {
                SpeedOfPlay::Fast => SpeedOfPlay::Medium,
                other => other,
            };
            PredictionState { speed_of_play, ..state }
                .insight(HEAT_INSIGHT)
                .risk(HEAT_RISK)
                .confidence_delta(-5)
        } else {
            state
        }
    }
}

// ========== Humidity ==========

const HUMID_INSIGHT: &str = "High humidity will affect player endurance";
const HUMID_RISK: &str = "Humid conditions may cause grip issues with stick handling";

pub struct HumidityRule;

impl AdjustmentRule for HumidityRule {
    fn id(&self) -> &'static str {
        "humidity"
    }

    fn apply(
        &self,
        conditions: &ResolvedConditions,
        thresholds: &ThresholdsConfig,
        state: PredictionState,
    ) -> PredictionState {
        if conditions.humidity_pct > thresholds.humid_above_pct {
            state.insight(HUMID_INSIGHT).risk(HUMID_RISK)
        } else {
            state
        }
    }
}

// ========== Defensive shape ==========

/// Must run after every rule that can change the tempo.
pub struct DefensiveShapeRule;

impl AdjustmentRule for DefensiveShapeRule {
    fn id(&self) -> &'static str {
        "defensive_shape"
    }

    fn apply(
        &self,
        _conditions: &ResolvedConditions,
        _thresholds: &ThresholdsConfig,
        state: PredictionState,
    ) -> PredictionState {
        let defensive_approach = DefensiveApproach::for_tempo(state.speed_of_play);
        PredictionState { defensive_approach, ..state }
    }
}

// ========== Evenness ==========

const VERY_UNEVEN_RISK: &str = "Uneven surface significantly increases injury risk";

/// Independent of the surface-quality rule; both can fire.
pub struct EvennessRule;

impl AdjustmentRule for EvennessRule {
    fn id(&self) -> &'static str {
        "evenness"
    }

    fn apply(
        &self,
        conditions: &ResolvedConditions,
        _thresholds: &ThresholdsConfig,
        state: PredictionState,
    ) -> PredictionState {
        match conditions.evenness {
            Some(Evenness::VeryUneven) => state.risk(VERY_UNEVEN_RISK).confidence_delta(-10),
            _ => state,
        }
    }
}
