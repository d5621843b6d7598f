//! Strategy recommendation produced by the predictor.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Risk text used when no rule flagged a risk.
pub const NO_RISK_SENTINEL: &str = "No significant risk factors identified";

/// Separator between advisory sentences in the joined text fields.
pub const FRAGMENT_SEPARATOR: &str = "\n\n";

/// Fully populated recommendation. Built fresh on every prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StrategyPrediction {
    pub play_style_recommendation: PlayStyle,
    pub passing_strategy: PassingStrategy,
    pub speed_of_play: SpeedOfPlay,
    pub defensive_approach: DefensiveApproach,
    /// 1-10
    pub ball_control_importance: u8,
    /// 1-10
    pub aerial_play_viability: u8,
    /// 1-10
    pub dribbling_effectiveness: u8,
    /// Advisory sentences joined by blank lines; may be empty
    pub key_insights: String,
    /// Risk sentences joined by blank lines, or [`NO_RISK_SENTINEL`]
    pub risk_factors: String,
    /// 0-100
    pub confidence_score: u8,
}

impl StrategyPrediction {
    pub fn confidence_band(&self) -> ConfidenceBand {
        ConfidenceBand::from_score(self.confidence_score)
    }

    pub fn has_risks(&self) -> bool {
        self.risk_factors != NO_RISK_SENTINEL
    }

    pub fn insight_lines(&self) -> Vec<&str> {
        split_fragments(&self.key_insights)
    }

    /// Individual risk sentences; empty when the sentinel is set.
    pub fn risk_lines(&self) -> Vec<&str> {
        if self.has_risks() {
            split_fragments(&self.risk_factors)
        } else {
            Vec::new()
        }
    }
}

fn split_fragments(text: &str) -> Vec<&str> {
    text.split(FRAGMENT_SEPARATOR).filter(|line| !line.is_empty()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum PlayStyle {
    #[serde(rename = "Controlled possession with emphasis on ground passes")]
    ControlledPossession,
    #[serde(rename = "Fast-paced attacking with quick transitions")]
    FastAttacking,
    #[default]
    #[serde(rename = "Balanced approach with tactical flexibility")]
    Balanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum PassingStrategy {
    #[serde(rename = "Short passes")]
    ShortPasses,
    #[serde(rename = "Mixed - exploit fast surface")]
    MixedFastSurface,
    #[default]
    Mixed,
}

/// Tempo of play. Drives the defensive approach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum SpeedOfPlay {
    Slow,
    #[default]
    Medium,
    Fast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum DefensiveApproach {
    #[serde(rename = "High press")]
    HighPress,
    #[serde(rename = "Deep defense")]
    DeepDefense,
    #[default]
    #[serde(rename = "Mid-field")]
    MidField,
}

impl DefensiveApproach {
    pub fn for_tempo(speed: SpeedOfPlay) -> Self {
        match speed {
            SpeedOfPlay::Fast => Self::HighPress,
            SpeedOfPlay::Slow => Self::DeepDefense,
            SpeedOfPlay::Medium => Self::MidField,
        }
    }
}

/// How much trust to place in a prediction, bucketed for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceBand {
    /// 80 and above
    High,
    /// 60-79
    Moderate,
    /// 40-59
    Low,
    VeryLow,
}

impl ConfidenceBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::High,
            60..=79 => Self::Moderate,
            40..=59 => Self::Low,
            _ => Self::VeryLow,
        }
    }
}

/// Bucket for a 1-10 skill rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RatingBand {
    Strong,
    Good,
    Fair,
    Weak,
}

impl RatingBand {
    pub fn from_rating(rating: u8) -> Self {
        match rating {
            8.. => Self::Strong,
            6..=7 => Self::Good,
            4..=5 => Self::Fair,
            _ => Self::Weak,
        }
    }
}
