//! Error types for the retail CLI.

use retail_core::types::RetailError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Analytics operation failed
    #[error("Analytics error: {0}")]
    Analytics(#[from] RetailError),

    /// Input file not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Input file lacks a column the command needs
    #[error("Input '{path}' has no '{column}' column")]
    MissingColumn {
        /// Input file path
        path: String,
        /// Required column name
        column: &'static str,
    },

    /// CSV parsing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialisation error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::MissingColumn {
            path: "sales.csv".to_string(),
            column: "cost",
        };
        assert_eq!(err.to_string(), "Input 'sales.csv' has no 'cost' column");
    }

    #[test]
    fn test_retail_error_conversion() {
        let err: CliError = RetailError::InsufficientData { got: 1, need: 2 }.into();
        assert!(err.to_string().contains("need at least 2"));
    }
}
