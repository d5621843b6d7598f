// Strategy prediction JSON API layer
// Entry points for hosts that talk to the engine through JSON strings

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use validator::{Validate, ValidationErrors};

use crate::analyzer::{FingerprintTurfAnalyzer, TurfImageAnalyzer};
use crate::engine::{RuleTrace, StrategyPredictor};
use crate::error::{Result, TurfError};
use crate::models::{
    ConfidenceBand, EnvironmentalConditions, FieldAnalysis, StrategyPrediction, TurfConditions,
};
use crate::SCHEMA_VERSION;

// ========== Request/Response Structures ==========

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate)]
pub struct StrategyRequest {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    #[validate]
    pub environmental: EnvironmentalConditions,
    #[serde(default)]
    #[validate]
    pub turf: TurfConditions,
    /// Image analyzer guess; manual `turf` fields take precedence
    #[serde(default)]
    pub detected_turf: Option<TurfConditions>,
    /// Reject out-of-range inputs instead of logging and continuing
    #[serde(default)]
    pub strict: bool,
}

impl StrategyRequest {
    /// Turf inputs after merging the manual entries over the detected guess.
    pub fn effective_turf(&self) -> TurfConditions {
        match &self.detected_turf {
            Some(detected) => self.turf.overlay(detected),
            None => self.turf.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StrategyResponse {
    pub schema_version: u32,
    pub prediction: StrategyPrediction,
    pub confidence_band: ConfidenceBand,
    pub rule_trace: Vec<RuleTrace>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate)]
pub struct FieldAnalysisRequest {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    #[validate(length(min = 1, max = 100))]
    pub field_name: String,
    /// URL, path or data URI of the uploaded image
    #[serde(default, alias = "image_url")]
    pub image_ref: String,
    #[serde(default)]
    #[validate]
    pub environmental: EnvironmentalConditions,
    #[serde(default)]
    #[validate]
    pub turf: TurfConditions,
    #[serde(default)]
    pub detected_turf: Option<TurfConditions>,
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DetectionResponse {
    pub schema_version: u32,
    pub detected_turf: TurfConditions,
}

// ========== Helpers ==========

fn check_schema_version(found: u32) -> Result<()> {
    if found != SCHEMA_VERSION {
        warn!("Rejecting request with schema_version {}", found);
        return Err(TurfError::UnsupportedSchemaVersion { found, expected: SCHEMA_VERSION });
    }
    Ok(())
}

/// Out-of-range inputs only fail the request in strict mode.
fn check_inputs(result: std::result::Result<(), ValidationErrors>, strict: bool) -> Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(errors) if strict => {
            warn!("Strict request validation failed: {}", errors);
            Err(TurfError::Validation(errors))
        }
        Err(errors) => {
            warn!("Continuing with out-of-range inputs: {}", errors);
            Ok(())
        }
    }
}

fn parse<'a, T: Deserialize<'a>>(request_json: &'a str, kind: &str) -> Result<T> {
    serde_json::from_str(request_json).map_err(|e| {
        error!("Failed to parse {}: {}", kind, e);
        TurfError::from(e)
    })
}

// ========== API Functions ==========

/// Predict a strategy from a JSON `StrategyRequest` with the default predictor.
///
/// # Returns
/// JSON string containing a `StrategyResponse`
pub fn predict_strategy_json(request_json: &str) -> Result<String> {
    predict_strategy_json_with(&StrategyPredictor::default(), request_json)
}

pub fn predict_strategy_json_with(
    predictor: &StrategyPredictor,
    request_json: &str,
) -> Result<String> {
    info!("Processing strategy prediction request");

    let request: StrategyRequest = parse(request_json, "StrategyRequest")?;
    check_schema_version(request.schema_version)?;
    check_inputs(request.validate(), request.strict)?;

    let turf = request.effective_turf();
    let (prediction, rule_trace) = predictor.predict_traced(&request.environmental, &turf);
    info!(
        "Predicted strategy: {:?}, confidence {}",
        prediction.speed_of_play, prediction.confidence_score
    );

    let response = StrategyResponse {
        schema_version: SCHEMA_VERSION,
        confidence_band: prediction.confidence_band(),
        prediction,
        rule_trace,
    };
    Ok(serde_json::to_string(&response)?)
}

/// Run a full field analysis from a JSON `FieldAnalysisRequest`.
///
/// The field name is always checked; the remaining ranges follow `strict`.
pub fn analyze_field_json(request_json: &str) -> Result<String> {
    info!("Processing field analysis request");

    let request: FieldAnalysisRequest = parse(request_json, "FieldAnalysisRequest")?;
    check_schema_version(request.schema_version)?;

    if let Err(errors) = request.validate() {
        if errors.field_errors().contains_key("field_name") {
            warn!("Field analysis request has an invalid field name: {}", errors);
            return Err(TurfError::Validation(errors));
        }
        check_inputs(Err(errors), request.strict)?;
    }

    let analysis = FieldAnalysis::run(
        &StrategyPredictor::default(),
        request.field_name,
        request.image_ref,
        request.environmental,
        &request.turf,
        request.detected_turf.as_ref(),
    );
    info!("Completed field analysis: {} (ID: {})", analysis.field_name, analysis.id);

    Ok(serde_json::to_string(&analysis)?)
}

/// Guess turf conditions from raw image bytes.
///
/// # Returns
/// JSON string containing a `DetectionResponse`
pub fn detect_turf_json(image: &[u8]) -> Result<String> {
    info!("Processing turf detection for {} bytes", image.len());

    let response = DetectionResponse {
        schema_version: SCHEMA_VERSION,
        detected_turf: FingerprintTurfAnalyzer.analyze(image),
    };
    Ok(serde_json::to_string(&response)?)
}
