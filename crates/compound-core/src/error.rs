use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompoundError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Could not parse '{input}' as an amount: {reason}")]
    ParseError { input: String, reason: String },

    #[error("Non-finite value in {field}")]
    NonFiniteValue { field: String },

    #[error("Query string error: {0}")]
    QueryError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CompoundError {
    fn from(e: serde_json::Error) -> Self {
        CompoundError::SerializationError(e.to_string())
    }
}
