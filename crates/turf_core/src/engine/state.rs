//! Accumulator threaded through the adjustment rules.

use super::config::BaselineConfig;
use crate::models::{
    DefensiveApproach, PassingStrategy, PlayStyle, SpeedOfPlay, StrategyPrediction,
    FRAGMENT_SEPARATOR, NO_RISK_SENTINEL,
};

pub const RATING_MIN: i32 = 1;
pub const RATING_MAX: i32 = 10;
pub const CONFIDENCE_MIN: i32 = 0;
pub const CONFIDENCE_MAX: i32 = 100;
/// Placeholder ratings; the surface-moisture rule always replaces all three.
pub const BASELINE_RATING: i32 = 5;

/// Intermediate prediction state.
///
/// Ratings and confidence are unbounded while rules run and are only clamped in
/// [`PredictionState::finish`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionState {
    pub play_style: PlayStyle,
    pub passing: PassingStrategy,
    pub speed_of_play: SpeedOfPlay,
    pub defensive_approach: DefensiveApproach,
    pub ball_control: i32,
    pub aerial_play: i32,
    pub dribbling: i32,
    pub confidence: i32,
    pub insights: Vec<&'static str>,
    pub risks: Vec<&'static str>,
}

impl PredictionState {
    pub fn baseline(baseline: &BaselineConfig) -> Self {
        Self {
            play_style: PlayStyle::default(),
            passing: PassingStrategy::default(),
            speed_of_play: SpeedOfPlay::default(),
            defensive_approach: DefensiveApproach::default(),
            ball_control: BASELINE_RATING,
            aerial_play: BASELINE_RATING,
            dribbling: BASELINE_RATING,
            confidence: baseline.confidence,
            insights: Vec::new(),
            risks: Vec::new(),
        }
    }

    pub fn insight(mut self, text: &'static str) -> Self {
        self.insights.push(text);
        self
    }

    pub fn risk(mut self, text: &'static str) -> Self {
        self.risks.push(text);
        self
    }

    pub fn confidence_delta(mut self, delta: i32) -> Self {
        self.confidence = self.confidence.saturating_add(delta);
        self
    }

    /// Clamp the numeric fields and join the collected fragments.
    pub fn finish(self) -> StrategyPrediction {
        let risk_factors = if self.risks.is_empty() {
            NO_RISK_SENTINEL.to_string()
        } else {
            self.risks.join(FRAGMENT_SEPARATOR)
        };

        StrategyPrediction {
            play_style_recommendation: self.play_style,
            passing_strategy: self.passing,
            speed_of_play: self.speed_of_play,
            defensive_approach: self.defensive_approach,
            ball_control_importance: clamp_rating(self.ball_control),
            aerial_play_viability: clamp_rating(self.aerial_play),
            dribbling_effectiveness: clamp_rating(self.dribbling),
            key_insights: self.insights.join(FRAGMENT_SEPARATOR),
            risk_factors,
            confidence_score: self.confidence.clamp(CONFIDENCE_MIN, CONFIDENCE_MAX) as u8,
        }
    }
}

fn clamp_rating(value: i32) -> u8 {
    value.clamp(RATING_MIN, RATING_MAX) as u8
}
