//! Environmental readings captured before a match.
//!
//! Every field is optional at the boundary: the form layer only sends what the
//! user filled in, and the predictor substitutes defaults for the rest.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Weather at the pitch, as entered on the environment step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalConditions {
    /// Air temperature in °C (default 20)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Relative humidity, 0-100 % (default 50)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub humidity: Option<f64>,
    /// Wind speed in km/h (default 0)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub wind_speed: Option<f64>,
    /// Informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_direction: Option<WindDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precipitation: Option<Precipitation>,
    /// Informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<TimeOfDay>,
}

impl EnvironmentalConditions {
    /// True when no field has been filled in.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum WindDirection {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

/// Falling precipitation. Anything other than `Clear` counts as a wet pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum Precipitation {
    #[default]
    #[serde(rename = "None")]
    Clear,
    #[serde(rename = "Light rain")]
    LightRain,
    #[serde(rename = "Moderate rain")]
    ModerateRain,
    #[serde(rename = "Heavy rain")]
    HeavyRain,
    Drizzle,
}

impl Precipitation {
    pub fn is_falling(&self) -> bool {
        !matches!(self, Self::Clear)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_payload_deserializes_to_default() {
        let env: EnvironmentalConditions = serde_json::from_str("{}").unwrap();
        assert!(env.is_empty());
    }

    #[test]
    fn test_camel_case_and_display_strings() {
        let env: EnvironmentalConditions = serde_json::from_str(
            r#"{"windSpeed": 12.5, "windDirection": "SW", "precipitation": "Light rain", "timeOfDay": "Evening"}"#,
        )
        .unwrap();
        assert_eq!(env.wind_speed, Some(12.5));
        assert_eq!(env.wind_direction, Some(WindDirection::SW));
        assert_eq!(env.precipitation, Some(Precipitation::LightRain));
        assert_eq!(env.time_of_day, Some(TimeOfDay::Evening));

        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json["precipitation"], "Light rain");
        assert!(json.get("temperature").is_none(), "absent fields stay absent");
    }

    #[test]
    fn test_no_precipitation_is_serialized_as_none() {
        assert_eq!(serde_json::to_string(&Precipitation::Clear).unwrap(), r#""None""#);
        assert!(!Precipitation::Clear.is_falling());
        assert!(Precipitation::Drizzle.is_falling());
    }

    #[test]
    fn test_unknown_precipitation_is_rejected() {
        let result: Result<EnvironmentalConditions, _> =
            serde_json::from_str(r#"{"precipitation": "Snow"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_range_validation() {
        let ok = EnvironmentalConditions { humidity: Some(80.0), ..Default::default() };
        assert!(ok.validate().is_ok());

        let bad = EnvironmentalConditions {
            humidity: Some(130.0),
            wind_speed: Some(-4.0),
            ..Default::default()
        };
        let errors = bad.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("humidity"));
        assert_eq!(fields.len(), 2);
    }
}
