//! Defaulted view over the two partial input records.

use crate::models::{
    EnvironmentalConditions, Evenness, MoistureLevel, Precipitation, SurfaceQuality,
    TurfConditions,
};

pub const DEFAULT_TEMPERATURE_C: f64 = 20.0;
pub const DEFAULT_HUMIDITY_PCT: f64 = 50.0;
pub const DEFAULT_WIND_SPEED_KMH: f64 = 0.0;
pub const DEFAULT_RATING: i32 = 5;

/// Every input the rules consume, with defaults filled in.
///
/// Numeric fields fall back to their default when absent, zero or not finite, so an
/// untouched form field (sent as `0`) reads as missing. Out-of-range values are passed
/// through untouched; only the outputs are clamped.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConditions {
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub wind_speed_kmh: f64,
    pub precipitation: Precipitation,
    pub moisture: MoistureLevel,
    pub surface_quality: SurfaceQuality,
    pub evenness: Option<Evenness>,
    pub ball_speed: i32,
    pub traction: i32,
}

impl ResolvedConditions {
    pub fn resolve(env: &EnvironmentalConditions, turf: &TurfConditions) -> Self {
        Self {
            temperature_c: reading_or(env.temperature, DEFAULT_TEMPERATURE_C),
            humidity_pct: reading_or(env.humidity, DEFAULT_HUMIDITY_PCT),
            wind_speed_kmh: reading_or(env.wind_speed, DEFAULT_WIND_SPEED_KMH),
            precipitation: env.precipitation.unwrap_or_default(),
            moisture: turf.moisture_level.unwrap_or_default(),
            surface_quality: turf.surface_quality.unwrap_or_default(),
            evenness: turf.evenness,
            ball_speed: rating_or_default(turf.ball_speed_rating),
            traction: rating_or_default(turf.traction_rating),
        }
    }

    /// Wet turf or any falling precipitation.
    pub fn is_wet(&self) -> bool {
        self.moisture.is_wet() || self.precipitation.is_falling()
    }
}

impl Default for ResolvedConditions {
    fn default() -> Self {
        Self::resolve(&EnvironmentalConditions::default(), &TurfConditions::default())
    }
}

fn reading_or(value: Option<f64>, default: f64) -> f64 {
    value.filter(|v| v.is_finite() && *v != 0.0).unwrap_or(default)
}

fn rating_or_default(value: Option<i32>) -> i32 {
    value.filter(|v| *v != 0).unwrap_or(DEFAULT_RATING)
}
