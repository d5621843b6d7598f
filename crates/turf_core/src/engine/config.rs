//! Predictor configuration.
//!
//! All tuning numbers the rules compare against live here rather than as magic
//! numbers inside the rules. `PredictorConfig::default()` reproduces the
//! standard rule set exactly; a JSON document can override any subset.
//!
//! ```rust
//! use turf_core::engine::PredictorConfig;
//!
//! let config = PredictorConfig::default();
//! assert_eq!(config.baseline.confidence, 75);
//!
//! let gusty = PredictorConfig::from_json(r#"{"thresholds": {"strong_wind_kmh": 30.0}}"#).unwrap();
//! assert_eq!(gusty.thresholds.moderate_wind_kmh, 10.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, TurfError};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    pub baseline: BaselineConfig,
    pub thresholds: ThresholdsConfig,
}

/// Starting point before any adjustment rule runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaselineConfig {
    /// Initial confidence score (default: 75)
    pub confidence: i32,
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self { confidence: 75 }
    }
}

/// Rule trigger thresholds. Comparisons are strict unless noted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdsConfig {
    /// Dry surface counts as fast from this ball-speed rating (inclusive, default: 7)
    pub fast_surface_ball_speed: i32,
    /// Moderate wind above this speed in km/h (default: 10)
    pub moderate_wind_kmh: f64,
    /// Strong wind above this speed in km/h (default: 20)
    pub strong_wind_kmh: f64,
    /// Poor footing below this traction rating (default: 5)
    pub poor_traction_below: i32,
    /// Excellent footing from this traction rating (inclusive, default: 8)
    pub high_traction_from: i32,
    /// Cold below this temperature in °C (default: 5)
    pub cold_below_c: f64,
    /// Hot above this temperature in °C (default: 30)
    pub hot_above_c: f64,
    /// Humid above this relative humidity (default: 80)
    pub humid_above_pct: f64,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            fast_surface_ball_speed: 7,
            moderate_wind_kmh: 10.0,
            strong_wind_kmh: 20.0,
            poor_traction_below: 5,
            high_traction_from: 8,
            cold_below_c: 5.0,
            hot_above_c: 30.0,
            humid_above_pct: 80.0,
        }
    }
}

impl PredictorConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| TurfError::InvalidConfig(format!("Failed to parse config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let t = &self.thresholds;

        if !(0..=100).contains(&self.baseline.confidence) {
            return Err(TurfError::InvalidConfig(format!(
                "baseline.confidence must be within 0-100, got {}",
                self.baseline.confidence
            )));
        }

        let floats = [
            ("moderate_wind_kmh", t.moderate_wind_kmh),
            ("strong_wind_kmh", t.strong_wind_kmh),
            ("cold_below_c", t.cold_below_c),
            ("hot_above_c", t.hot_above_c),
            ("humid_above_pct", t.humid_above_pct),
        ];
        if let Some((name, _)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            return Err(TurfError::InvalidConfig(format!("thresholds.{name} must be finite")));
        }

        if t.moderate_wind_kmh > t.strong_wind_kmh {
            return Err(TurfError::InvalidConfig(format!(
                "moderate wind threshold ({}) exceeds strong wind threshold ({})",
                t.moderate_wind_kmh, t.strong_wind_kmh
            )));
        }
        if t.cold_below_c >= t.hot_above_c {
            return Err(TurfError::InvalidConfig(format!(
                "cold threshold ({}) must be below hot threshold ({})",
                t.cold_below_c, t.hot_above_c
            )));
        }
        if t.poor_traction_below > t.high_traction_from {
            return Err(TurfError::InvalidConfig(format!(
                "poor traction threshold ({}) exceeds high traction threshold ({})",
                t.poor_traction_below, t.high_traction_from
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let cfg = PredictorConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.baseline.confidence, 75);
        assert_eq!(cfg.thresholds.strong_wind_kmh, 20.0);
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let cfg = PredictorConfig::from_json(r#"{"thresholds": {"hot_above_c": 28.0}}"#).unwrap();
        assert_eq!(cfg.thresholds.hot_above_c, 28.0);
        assert_eq!(cfg.thresholds.cold_below_c, 5.0);
        assert_eq!(cfg.baseline, BaselineConfig::default());
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(PredictorConfig::from_json("{}").unwrap(), PredictorConfig::default());
    }

    #[test]
    fn test_inverted_wind_thresholds_rejected() {
        let err = PredictorConfig::from_json(
            r#"{"thresholds": {"moderate_wind_kmh": 25.0, "strong_wind_kmh": 15.0}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, TurfError::InvalidConfig(_)));
    }

    #[test]
    fn test_out_of_range_baseline_rejected() {
        let mut cfg = PredictorConfig::default();
        cfg.baseline.confidence = 120;
        assert!(cfg.validate().is_err());

        let mut cfg = PredictorConfig::default();
        cfg.baseline.confidence = -1;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(PredictorConfig::from_json("{\"baseline\": 3").is_err());
    }

    #[test]
    fn test_config_serialization() {
        let cfg = PredictorConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let parsed: PredictorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cfg);
    }
}
