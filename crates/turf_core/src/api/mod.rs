// JSON API layer for embedding hosts

pub mod schema;
pub mod strategy_json;

pub use schema::{prediction_schema_json, request_schema_json};
pub use strategy_json::{
    analyze_field_json, detect_turf_json, predict_strategy_json, predict_strategy_json_with,
    DetectionResponse, FieldAnalysisRequest, StrategyRequest, StrategyResponse,
};
