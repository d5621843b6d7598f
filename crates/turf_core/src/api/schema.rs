//! JSON Schema export for hosts that generate their form bindings.

use schemars::schema::RootSchema;
use schemars::schema_for;

use super::strategy_json::{StrategyRequest, StrategyResponse};
use crate::error::Result;

pub fn request_schema() -> RootSchema {
    schema_for!(StrategyRequest)
}

pub fn prediction_schema() -> RootSchema {
    schema_for!(StrategyResponse)
}

/// Pretty-printed schema of `StrategyRequest`.
pub fn request_schema_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&request_schema())?)
}

/// Pretty-printed schema of `StrategyResponse`.
pub fn prediction_schema_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&prediction_schema())?)
}
