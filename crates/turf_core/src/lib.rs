//! # turf_core - Field hockey strategy prediction from turf and weather
//!
//! Combines manually entered weather readings, turf observations and an
//! optional image-derived turf guess into a tactical recommendation.
//!
//! ## Features
//! - Pure, total rule engine (same inputs = same prediction)
//! - Per-rule explain trace
//! - Configurable baseline and thresholds
//! - JSON API for embedding hosts

// Struct initialization pattern used intentionally
#![allow(clippy::field_reassign_with_default)]

pub mod analyzer;
pub mod api;
pub mod engine;
pub mod error;
pub mod models;

// Re-export main API functions
pub use analyzer::{FingerprintTurfAnalyzer, PlaceholderTurfAnalyzer, TurfImageAnalyzer};
pub use api::{
    analyze_field_json, detect_turf_json, predict_strategy_json, StrategyRequest,
    StrategyResponse,
};
pub use engine::{predict_strategy, PredictorConfig, RuleTrace, StrategyPredictor};
pub use error::{Result, TurfError};
pub use models::{EnvironmentalConditions, FieldAnalysis, StrategyPrediction, TurfConditions};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version of the JSON request/response envelope
pub const SCHEMA_VERSION: u32 = 1;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_basic_prediction() {
        let request = json!({
            "schema_version": 1,
            "environmental": { "temperature": 22, "humidity": 55, "windSpeed": 8 },
            "turf": {
                "moistureLevel": "Dry",
                "ballSpeedRating": 8,
                "tractionRating": 8,
                "surfaceQuality": "Good"
            }
        });

        let result = predict_strategy_json(&request.to_string());
        assert!(result.is_ok(), "Prediction should succeed");

        let parsed: serde_json::Value = serde_json::from_str(&result.unwrap()).unwrap();
        assert_eq!(parsed["schema_version"], 1);
        assert_eq!(parsed["prediction"]["speedOfPlay"], "Fast");
        assert_eq!(parsed["prediction"]["defensiveApproach"], "High press");
        assert_eq!(parsed["prediction"]["confidenceScore"], 85);
    }

    #[test]
    fn test_determinism() {
        let request = json!({
            "environmental": { "temperature": 3, "windSpeed": 24, "precipitation": "Drizzle" },
            "turf": { "evenness": "Very uneven", "tractionRating": 4 }
        })
        .to_string();

        let first = predict_strategy_json(&request).unwrap();
        for _ in 0..5 {
            assert_eq!(predict_strategy_json(&request).unwrap(), first);
        }
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert_eq!(SCHEMA_VERSION, 1);
    }
}
