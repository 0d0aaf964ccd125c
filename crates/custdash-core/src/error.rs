//! Error types for custdash-core
//!
//! Error codes, severities, and detailed messages for the core dataset
//! functionality, mirrored into API responses.

use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Dataset not loaded
    NotLoaded,
    /// Customer not found
    CustomerNotFound,
    /// Transaction not found
    TransactionNotFound,
    /// Document parse error
    ParseError,
    /// IO error
    IoError,
    /// Configuration error
    ConfigError,
    /// Internal error
    InternalError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::NotLoaded => write!(f, "NOT_LOADED"),
            ErrorCode::CustomerNotFound => write!(f, "CUSTOMER_NOT_FOUND"),
            ErrorCode::TransactionNotFound => write!(f, "TRANSACTION_NOT_FOUND"),
            ErrorCode::ParseError => write!(f, "PARSE_ERROR"),
            ErrorCode::IoError => write!(f, "IO_ERROR"),
            ErrorCode::ConfigError => write!(f, "CONFIG_ERROR"),
            ErrorCode::InternalError => write!(f, "INTERNAL_ERROR"),
        }
    }
}

/// Detailed error information for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Suggestions for resolution
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ErrorDetails {
    /// Create a new error detail
    pub fn new(code: ErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            details: None,
            suggestions: vec![],
        }
    }

    /// Add detail information
    pub fn with_detail(mut self, detail: serde_json::Value) -> Self {
        self.details = Some(detail);
        self
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}

impl std::fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, "\nDetails: {}", details)?;
        }
        if !self.suggestions.is_empty() {
            write!(f, "\nSuggestions:")?;
            for suggestion in &self.suggestions {
                write!(f, "\n  - {}", suggestion)?;
            }
        }
        Ok(())
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Debug information
    Debug,
    /// Informational
    Info,
    /// Warning - operation may be affected
    Warning,
    /// Error - operation failed
    Error,
    /// Critical - application may be unstable
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Debug => write!(f, "debug"),
            ErrorSeverity::Info => write!(f, "info"),
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
            ErrorSeverity::Critical => write!(f, "critical"),
        }
    }
}

/// Main error type for custdash-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Dataset not loaded")]
    NotLoaded,

    #[error("Customer not found: {id}")]
    CustomerNotFound { id: i64 },

    #[error("Transaction not found: {id}")]
    TransactionNotFound { id: i64 },

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("IO error occurred")]
    IoError,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

impl CoreError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::NotLoaded => ErrorCode::NotLoaded,
            CoreError::CustomerNotFound { .. } => ErrorCode::CustomerNotFound,
            CoreError::TransactionNotFound { .. } => ErrorCode::TransactionNotFound,
            CoreError::ParseError { .. } => ErrorCode::ParseError,
            CoreError::IoError => ErrorCode::IoError,
            CoreError::ConfigError { .. } => ErrorCode::ConfigError,
            CoreError::InternalError { .. } => ErrorCode::InternalError,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::NotLoaded => ErrorSeverity::Warning,
            CoreError::CustomerNotFound { .. } => ErrorSeverity::Info,
            CoreError::TransactionNotFound { .. } => ErrorSeverity::Info,
            CoreError::ParseError { .. } => ErrorSeverity::Error,
            CoreError::IoError => ErrorSeverity::Error,
            CoreError::ConfigError { .. } => ErrorSeverity::Critical,
            CoreError::InternalError { .. } => ErrorSeverity::Critical,
        }
    }

    /// Convert to detailed error info
    pub fn to_details(&self) -> ErrorDetails {
        let mut details = ErrorDetails::new(self.code(), self.to_string());

        match self {
            CoreError::CustomerNotFound { id } => {
                details = details.with_suggestion(format!(
                    "Check if customer '{}' exists in the dataset document.",
                    id
                ));
                details = details.with_suggestion(
                    "Use the /api/customers endpoint to list all customers.".to_string(),
                );
            }
            CoreError::TransactionNotFound { .. } => {
                details = details
                    .with_suggestion("Check if the transaction ID is correct.".to_string());
                details = details.with_suggestion(
                    "Use the /api/transactions endpoint to list all transactions.".to_string(),
                );
            }
            CoreError::ParseError { message } => {
                details = details.with_detail(serde_json::json!({ "parse_message": message }));
                details = details
                    .with_suggestion("Check the structure of the dataset document.".to_string());
            }
            _ => {}
        }

        details
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl From<io::Error> for CoreError {
    fn from(_error: io::Error) -> Self {
        CoreError::IoError
    }
}

impl From<custdash_data::DataError> for CoreError {
    fn from(error: custdash_data::DataError) -> Self {
        match error {
            custdash_data::DataError::IoError(_) => CoreError::IoError,
            other => CoreError::ParseError {
                message: other.to_string(),
            },
        }
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::NotLoaded.to_string(), "NOT_LOADED");
        assert_eq!(ErrorCode::CustomerNotFound.to_string(), "CUSTOMER_NOT_FOUND");
        assert_eq!(ErrorCode::ParseError.to_string(), "PARSE_ERROR");
    }

    #[test]
    fn test_error_severity_display() {
        assert_eq!(ErrorSeverity::Debug.to_string(), "debug");
        assert_eq!(ErrorSeverity::Warning.to_string(), "warning");
        assert_eq!(ErrorSeverity::Error.to_string(), "error");
        assert_eq!(ErrorSeverity::Critical.to_string(), "critical");
    }

    #[test]
    fn test_core_error_code() {
        let error = CoreError::CustomerNotFound { id: 7 };
        assert_eq!(error.code(), ErrorCode::CustomerNotFound);

        let error = CoreError::NotLoaded;
        assert_eq!(error.code(), ErrorCode::NotLoaded);
    }

    #[test]
    fn test_core_error_severity() {
        let error = CoreError::NotLoaded;
        assert_eq!(error.severity(), ErrorSeverity::Warning);

        let error = CoreError::ConfigError {
            message: "test".to_string(),
        };
        assert_eq!(error.severity(), ErrorSeverity::Critical);

        let error = CoreError::IoError;
        assert_eq!(error.severity(), ErrorSeverity::Error);
    }

    #[test]
    fn test_error_details_customer_not_found() {
        let error = CoreError::CustomerNotFound { id: 42 };
        let details = error.to_details();

        assert_eq!(details.code, ErrorCode::CustomerNotFound);
        assert!(!details.suggestions.is_empty());
        assert!(details.message.contains("42"));
    }

    #[test]
    fn test_error_details_parse_error() {
        let error = CoreError::ParseError {
            message: "unexpected end of document".to_string(),
        };
        let details = error.to_details();

        assert_eq!(details.code, ErrorCode::ParseError);
        assert!(details.details.is_some());
    }

    #[test]
    fn test_data_error_conversion() {
        let error: CoreError = custdash_data::DataError::InvalidDocument {
            location: "line 3".to_string(),
            message: "expected value".to_string(),
        }
        .into();
        assert_eq!(error.code(), ErrorCode::ParseError);
    }
}
