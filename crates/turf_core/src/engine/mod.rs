//! # Strategy prediction engine
//!
//! A prediction is a fold over the ordered [`rules::standard_rules`] list,
//! starting from a baseline [`PredictionState`] and finishing with a clamp and
//! serialize step. The engine is synchronous, side-effect free (apart from
//! `trace` logging) and total over its inputs.
//!
//! ```rust
//! use turf_core::engine::predict_strategy;
//! use turf_core::models::{EnvironmentalConditions, SpeedOfPlay, TurfConditions};
//!
//! let prediction = predict_strategy(&EnvironmentalConditions::default(), &TurfConditions::default());
//! assert_eq!(prediction.speed_of_play, SpeedOfPlay::Medium);
//! assert_eq!(prediction.confidence_score, 75);
//! ```

pub mod conditions;
pub mod config;
pub mod rules;
pub mod state;


pub use conditions::ResolvedConditions;
pub use config::{BaselineConfig, PredictorConfig, ThresholdsConfig};
pub use rules::{standard_rules, AdjustmentRule};
pub use state::PredictionState;

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::models::{EnvironmentalConditions, StrategyPrediction, TurfConditions};

/// What a single rule contributed to a prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RuleTrace {
    pub rule: String,
    pub confidence_delta: i32,
    pub insights_added: usize,
    pub risks_added: usize,
}

impl RuleTrace {
    /// Whether the rule changed anything the caller can see in the text fields or score.
    pub fn fired(&self) -> bool {
        self.confidence_delta != 0 || self.insights_added > 0 || self.risks_added > 0
    }
}

pub struct StrategyPredictor {
    config: PredictorConfig,
    rules: Vec<Box<dyn AdjustmentRule>>,
}

impl StrategyPredictor {
    pub fn new(config: PredictorConfig) -> Self {
        Self { config, rules: standard_rules() }
    }

    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    /// Rule identifiers in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.id()).collect()
    }

    pub fn predict(
        &self,
        environmental: &EnvironmentalConditions,
        turf: &TurfConditions,
    ) -> StrategyPrediction {
        let conditions = ResolvedConditions::resolve(environmental, turf);
        let prediction = self
            .rules
            .iter()
            .fold(PredictionState::baseline(&self.config.baseline), |state, rule| {
                let before = state.confidence;
                let next = rule.apply(&conditions, &self.config.thresholds, state);
                trace!(
                    rule = rule.id(),
                    confidence_delta = next.confidence.saturating_sub(before),
                    "applied adjustment rule"
                );
                next
            })
            .finish();
        debug!(
            "Predicted {:?} tempo with confidence {}",
            prediction.speed_of_play, prediction.confidence_score
        );
        prediction
    }

    /// Same result as [`StrategyPredictor::predict`], plus one trace entry per rule.
    pub fn predict_traced(
        &self,
        environmental: &EnvironmentalConditions,
        turf: &TurfConditions,
    ) -> (StrategyPrediction, Vec<RuleTrace>) {
        let conditions = ResolvedConditions::resolve(environmental, turf);
        let mut traces = Vec::with_capacity(self.rules.len());

        let state = self.rules.iter().fold(
            PredictionState::baseline(&self.config.baseline),
            |state, rule| {
                let (confidence, insights, risks) =
                    (state.confidence, state.insights.len(), state.risks.len());
                let next = rule.apply(&conditions, &self.config.thresholds, state);

                let entry = RuleTrace {
                    rule: rule.id().to_string(),
                    confidence_delta: next.confidence.saturating_sub(confidence),
                    insights_added: next.insights.len() - insights,
                    risks_added: next.risks.len() - risks,
                };
                trace!(
                    rule = rule.id(),
                    confidence_delta = entry.confidence_delta,
                    insights_added = entry.insights_added,
                    risks_added = entry.risks_added,
                    "applied adjustment rule"
                );
                traces.push(entry);
                next
            },
        );

        (state.finish(), traces)
    }
}

impl Default for StrategyPredictor {
    fn default() -> Self {
        Self::new(PredictorConfig::default())
    }
}

impl fmt::Debug for StrategyPredictor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyPredictor")
            .field("config", &self.config)
            .field("rules", &self.rule_names())
            .finish()
    }
}

/// Predict with the default configuration.
pub fn predict_strategy(
    environmental: &EnvironmentalConditions,
    turf: &TurfConditions,
) -> StrategyPrediction {
    StrategyPredictor::default().predict(environmental, turf)
}
