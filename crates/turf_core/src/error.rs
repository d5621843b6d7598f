use thiserror::Error;

/// Errors raised at the JSON and configuration boundary.
///
/// The predictor itself never fails; these only surface when decoding requests,
/// encoding responses, or loading a `PredictorConfig`.
#[derive(Error, Debug)]
pub enum TurfError {
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchemaVersion { found: u32, expected: u32 },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl TurfError {
    /// Whether the caller can fix the problem by correcting its request.
    pub fn is_client_error(&self) -> bool {
        match self {
            TurfError::Deserialization(_) => true,
            TurfError::UnsupportedSchemaVersion { .. } => true,
            TurfError::Validation(_) => true,
            TurfError::InvalidConfig(_) => true,
            TurfError::Serialization(_) => false,
        }
    }
}

impl From<serde_json::Error> for TurfError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            TurfError::Deserialization(err.to_string())
        } else {
            TurfError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, TurfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_syntax_error_maps_to_deserialization() {
        let err: TurfError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, TurfError::Deserialization(_)));
        assert!(err.is_client_error());
    }

    #[test]
    fn test_schema_version_message() {
        let err = TurfError::UnsupportedSchemaVersion { found: 3, expected: 1 };
        assert_eq!(err.to_string(), "Unsupported schema version: found 3, expected 1");
    }
}
