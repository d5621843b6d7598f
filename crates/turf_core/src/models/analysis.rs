use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{EnvironmentalConditions, StrategyPrediction, TurfConditions};
use crate::engine::StrategyPredictor;

/// A completed field analysis: the inputs that were used and the strategy derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldAnalysis {
    pub id: Uuid,
    pub field_name: String,
    /// Reference to the uploaded turf image (URL, path or data URI)
    pub image_url: String,
    pub analysis_date: DateTime<Utc>,
    pub environmental: EnvironmentalConditions,
    /// Turf inputs after merging manual entries over any detected guess
    pub turf: TurfConditions,
    pub strategy: StrategyPrediction,
}

impl FieldAnalysis {
    pub fn new(
        field_name: impl Into<String>,
        image_url: impl Into<String>,
        environmental: EnvironmentalConditions,
        turf: TurfConditions,
        strategy: StrategyPrediction,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            field_name: field_name.into(),
            image_url: image_url.into(),
            analysis_date: Utc::now(),
            environmental,
            turf,
            strategy,
        }
    }

    /// Merge the detected turf guess (if any) under the manual entries and predict.
    pub fn run(
        predictor: &StrategyPredictor,
        field_name: impl Into<String>,
        image_url: impl Into<String>,
        environmental: EnvironmentalConditions,
        manual_turf: &TurfConditions,
        detected_turf: Option<&TurfConditions>,
    ) -> Self {
        let turf = match detected_turf {
            Some(detected) => manual_turf.overlay(detected),
            None => manual_turf.clone(),
        };
        let strategy = predictor.predict(&environmental, &turf);
        Self::new(field_name, image_url, environmental, turf, strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MoistureLevel, PlayStyle, SurfaceQuality};

    #[test]
    fn test_run_uses_detected_turf_for_missing_fields() {
        let detected = TurfConditions {
            moisture_level: Some(MoistureLevel::Wet),
            surface_quality: Some(SurfaceQuality::Good),
            ..Default::default()
        };
        let analysis = FieldAnalysis::run(
            &StrategyPredictor::default(),
            "Olympic Stadium Field #1",
            "uploads/field1.jpg",
            EnvironmentalConditions::default(),
            &TurfConditions::default(),
            Some(&detected),
        );

        assert_eq!(analysis.turf.moisture_level, Some(MoistureLevel::Wet));
        assert_eq!(
            analysis.strategy.play_style_recommendation,
            PlayStyle::ControlledPossession
        );
        assert_eq!(analysis.field_name, "Olympic Stadium Field #1");
    }

    #[test]
    fn test_each_analysis_gets_its_own_id() {
        let predictor = StrategyPredictor::default();
        let a = FieldAnalysis::run(
            &predictor,
            "A",
            "a.png",
            EnvironmentalConditions::default(),
            &TurfConditions::default(),
            None,
        );
        let b = FieldAnalysis::run(
            &predictor,
            "A",
            "a.png",
            EnvironmentalConditions::default(),
            &TurfConditions::default(),
            None,
        );
        assert_ne!(a.id, b.id);
        assert_eq!(a.strategy, b.strategy);
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let analysis = FieldAnalysis::run(
            &StrategyPredictor::default(),
            "Pitch 3",
            "p3.jpg",
            EnvironmentalConditions::default(),
            &TurfConditions::default(),
            None,
        );
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["fieldName"], "Pitch 3");
        assert_eq!(json["imageUrl"], "p3.jpg");
        assert!(json["analysisDate"].is_string());
        assert!(json["strategy"]["confidenceScore"].is_number());

        let back: FieldAnalysis = serde_json::from_value(json).unwrap();
        assert_eq!(back.id, analysis.id);
    }
}
