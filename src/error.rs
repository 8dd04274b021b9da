//! Error types for the ordercast pipeline

use thiserror::Error;

/// Result type alias for ordercast operations
pub type Result<T> = std::result::Result<T, OrdercastError>;

/// Main error type for the ordercast crate
#[derive(Error, Debug)]
pub enum OrdercastError {
    #[error("Data access error: {0}")]
    DataAccess(String),

    #[error("Feature preparation error: {0}")]
    FeaturePreparation(String),

    #[error("Training error: {0}")]
    Training(String),

    #[error("Evaluation error: {0}")]
    Evaluation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid shape: expected {expected}, got {actual}")]
    ShapeError { expected: String, actual: String },

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Model not fitted")]
    ModelNotFitted,

    #[error("Invalid parameter: {name} = {value}, {reason}")]
    InvalidParameter {
        name: String,
        value: String,
        reason: String,
    },
}

impl From<polars::error::PolarsError> for OrdercastError {
    fn from(err: polars::error::PolarsError) -> Self {
        OrdercastError::FeaturePreparation(err.to_string())
    }
}

impl From<sqlx::Error> for OrdercastError {
    fn from(err: sqlx::Error) -> Self {
        OrdercastError::DataAccess(err.to_string())
    }
}

impl From<serde_json::Error> for OrdercastError {
    fn from(err: serde_json::Error) -> Self {
        OrdercastError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OrdercastError::DataAccess("connection refused".to_string());
        assert_eq!(err.to_string(), "Data access error: connection refused");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: OrdercastError = io_err.into();
        assert!(matches!(err, OrdercastError::Io(_)));
    }

    #[test]
    fn test_shape_error_display() {
        let err = OrdercastError::ShapeError {
            expected: "y length = 10".to_string(),
            actual: "y length = 8".to_string(),
        };
        assert!(err.to_string().contains("expected y length = 10"));
    }
}
