//! Playing-surface attributes.
//!
//! A `TurfConditions` value is a partial record: it can come from manual entry,
//! from an image analyzer guess, or from both merged with [`TurfConditions::overlay`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TurfConditions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface_type: Option<SurfaceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moisture_level: Option<MoistureLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grass_height: Option<GrassHeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface_quality: Option<SurfaceQuality>,
    /// Absent means no evenness adjustment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evenness: Option<Evenness>,
    /// How fast the ball runs on the surface, 1-10 (default 5)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 10))]
    pub ball_speed_rating: Option<i32>,
    /// Footing available to players, 1-10 (default 5)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 10))]
    pub traction_rating: Option<i32>,
}

impl TurfConditions {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge manually entered fields over a detected guess.
    ///
    /// Every field set on `self` wins; gaps are filled from `detected`.
    pub fn overlay(&self, detected: &TurfConditions) -> TurfConditions {
        TurfConditions {
            surface_type: self.surface_type.or(detected.surface_type),
            moisture_level: self.moisture_level.or(detected.moisture_level),
            grass_height: self.grass_height.or(detected.grass_height),
            surface_quality: self.surface_quality.or(detected.surface_quality),
            evenness: self.evenness.or(detected.evenness),
            ball_speed_rating: self.ball_speed_rating.or(detected.ball_speed_rating),
            traction_rating: self.traction_rating.or(detected.traction_rating),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum SurfaceType {
    #[serde(rename = "Natural grass")]
    NaturalGrass,
    #[serde(rename = "Artificial turf")]
    ArtificialTurf,
    Hybrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum MoistureLevel {
    Dry,
    #[default]
    Normal,
    Wet,
    Waterlogged,
}

impl MoistureLevel {
    /// Wet or waterlogged surfaces
    pub fn is_wet(&self) -> bool {
        matches!(self, Self::Wet | Self::Waterlogged)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum GrassHeight {
    Short,
    Medium,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum SurfaceQuality {
    Excellent,
    #[default]
    Good,
    Fair,
    Poor,
}

impl SurfaceQuality {
    /// Fair and poor surfaces both force a slow, short-passing game.
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Fair | Self::Poor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Evenness {
    Level,
    #[serde(rename = "Slightly uneven")]
    SlightlyUneven,
    #[serde(rename = "Very uneven")]
    VeryUneven,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_prefers_manual_entries() {
        let detected = TurfConditions {
            surface_type: Some(SurfaceType::ArtificialTurf),
            moisture_level: Some(MoistureLevel::Dry),
            surface_quality: Some(SurfaceQuality::Fair),
            ball_speed_rating: Some(7),
            traction_rating: Some(7),
            ..Default::default()
        };
        let manual = TurfConditions {
            moisture_level: Some(MoistureLevel::Wet),
            traction_rating: Some(3),
            evenness: Some(Evenness::VeryUneven),
            ..Default::default()
        };

        let merged = manual.overlay(&detected);
        assert_eq!(merged.surface_type, Some(SurfaceType::ArtificialTurf));
        assert_eq!(merged.moisture_level, Some(MoistureLevel::Wet));
        assert_eq!(merged.surface_quality, Some(SurfaceQuality::Fair));
        assert_eq!(merged.evenness, Some(Evenness::VeryUneven));
        assert_eq!(merged.ball_speed_rating, Some(7));
        assert_eq!(merged.traction_rating, Some(3));
        assert_eq!(merged.grass_height, None);
    }

    #[test]
    fn test_overlay_of_empty_records_is_empty() {
        let merged = TurfConditions::default().overlay(&TurfConditions::default());
        assert!(merged.is_empty());
    }

    #[test]
    fn test_wire_names() {
        let turf: TurfConditions = serde_json::from_str(
            r#"{"surfaceType": "Natural grass", "moistureLevel": "Waterlogged", "evenness": "Slightly uneven", "ballSpeedRating": 6}"#,
        )
        .unwrap();
        assert_eq!(turf.surface_type, Some(SurfaceType::NaturalGrass));
        assert!(turf.moisture_level.unwrap().is_wet());
        assert_eq!(turf.evenness, Some(Evenness::SlightlyUneven));
        assert_eq!(turf.ball_speed_rating, Some(6));
    }

    #[test]
    fn test_degraded_quality() {
        assert!(SurfaceQuality::Poor.is_degraded());
        assert!(SurfaceQuality::Fair.is_degraded());
        assert!(!SurfaceQuality::Good.is_degraded());
        assert!(!SurfaceQuality::Excellent.is_degraded());
    }

    #[test]
    fn test_rating_range_validation() {
        let bad = TurfConditions { ball_speed_rating: Some(15), ..Default::default() };
        assert!(bad.validate().is_err());

        let ok = TurfConditions { traction_rating: Some(10), ..Default::default() };
        assert!(ok.validate().is_ok());
    }
}
