//! Error types for credito-core
//!
//! This module provides error handling for the core loan-book
//! functionality, including error codes, detailed messages, and suggestions.

use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Loan book not loaded
    NotLoaded,
    /// Client not found
    ClientNotFound,
    /// Loan not found
    LoanNotFound,
    /// Parse error
    ParseError,
    /// Validation error
    ValidationError,
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
            ErrorCode::ClientNotFound => write!(f, "CLIENT_NOT_FOUND"),
            ErrorCode::LoanNotFound => write!(f, "LOAN_NOT_FOUND"),
            ErrorCode::ParseError => write!(f, "PARSE_ERROR"),
            ErrorCode::ValidationError => write!(f, "VALIDATION_ERROR"),
            ErrorCode::IoError => write!(f, "IO_ERROR"),
            ErrorCode::ConfigError => write!(f, "CONFIG_ERROR"),
            ErrorCode::InternalError => write!(f, "INTERNAL_ERROR"),
        }
    }
}

/// Detailed error information for operator-facing reporting
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
    /// Sheet row (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
}

impl ErrorDetails {
    /// Create a new error detail
    pub fn new(code: ErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            details: None,
            suggestions: vec![],
            row: None,
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

    /// Add the sheet row the error refers to
    pub fn with_row(mut self, row: usize) -> Self {
        self.row = Some(row);
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
        if let Some(row) = self.row {
            write!(f, "\nRow: {}", row)?;
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

/// Main error type for credito-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Credit sheet not loaded")]
    NotLoaded,

    #[error("Client not found: {name}")]
    ClientNotFound { name: String },

    #[error("Loan not found: {id}")]
    LoanNotFound { id: String },

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

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
            CoreError::ClientNotFound { .. } => ErrorCode::ClientNotFound,
            CoreError::LoanNotFound { .. } => ErrorCode::LoanNotFound,
            CoreError::ParseError { .. } => ErrorCode::ParseError,
            CoreError::ValidationError { .. } => ErrorCode::ValidationError,
            CoreError::IoError => ErrorCode::IoError,
            CoreError::ConfigError { .. } => ErrorCode::ConfigError,
            CoreError::InternalError { .. } => ErrorCode::InternalError,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::NotLoaded => ErrorSeverity::Warning,
            CoreError::ClientNotFound { .. } => ErrorSeverity::Info,
            CoreError::LoanNotFound { .. } => ErrorSeverity::Info,
            CoreError::ParseError { .. } => ErrorSeverity::Error,
            CoreError::ValidationError { .. } => ErrorSeverity::Warning,
            CoreError::IoError => ErrorSeverity::Error,
            CoreError::ConfigError { .. } => ErrorSeverity::Critical,
            CoreError::InternalError { .. } => ErrorSeverity::Critical,
        }
    }

    /// Convert to detailed error info
    pub fn to_details(&self) -> ErrorDetails {
        let mut details = ErrorDetails::new(self.code(), self.to_string());

        match self {
            CoreError::ClientNotFound { name } => {
                details = details.with_suggestion(format!(
                    "Check the spelling of '{}'; lookup matches the first record whose name contains it.",
                    name
                ));
                details = details
                    .with_suggestion("Use `credito list` to see all clients.".to_string());
            }
            CoreError::LoanNotFound { id: _ } => {
                details =
                    details.with_suggestion("Check that the loan id is correct.".to_string());
            }
            CoreError::ParseError { message } => {
                details = details.with_detail(serde_json::json!({ "parse_message": message }));
                details = details.with_suggestion(
                    "Check that the credit sheet is valid CSV with a header row.".to_string(),
                );
            }
            CoreError::ValidationError { message } => {
                details =
                    details.with_detail(serde_json::json!({ "validation_message": message }));
            }
            CoreError::NotLoaded => {
                details = details.with_suggestion(
                    "Load a credit sheet before querying or mutating the book.".to_string(),
                );
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

/// Error logger trait
pub trait ErrorLogger {
    /// Log an error
    fn log_error(&self, error: &CoreError, operation: &str);
    /// Log a warning
    fn log_warning(&self, message: &str, operation: &str);
}

/// Default error logger using log crate
#[derive(Default)]
pub struct DefaultErrorLogger;

impl ErrorLogger for DefaultErrorLogger {
    fn log_error(&self, error: &CoreError, operation: &str) {
        log::error!(
            target: "credito::error",
            "ERROR [{}] {} - Operation: {}",
            error.code(),
            error.to_details(),
            operation
        );
    }

    fn log_warning(&self, message: &str, operation: &str) {
        log::warn!(
            target: "credito::error",
            "WARNING: {} - Operation: {}",
            message,
            operation
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::NotLoaded.to_string(), "NOT_LOADED");
        assert_eq!(ErrorCode::ClientNotFound.to_string(), "CLIENT_NOT_FOUND");
        assert_eq!(ErrorCode::ValidationError.to_string(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_core_error_code() {
        let error = CoreError::ClientNotFound {
            name: "Ana".to_string(),
        };
        assert_eq!(error.code(), ErrorCode::ClientNotFound);

        let error = CoreError::NotLoaded;
        assert_eq!(error.code(), ErrorCode::NotLoaded);
    }

    #[test]
    fn test_core_error_severity() {
        assert_eq!(CoreError::NotLoaded.severity(), ErrorSeverity::Warning);
        assert_eq!(
            CoreError::ConfigError {
                message: "test".to_string()
            }
            .severity(),
            ErrorSeverity::Critical
        );
        assert_eq!(CoreError::IoError.severity(), ErrorSeverity::Error);
    }

    #[test]
    fn test_error_details_client_not_found() {
        let error = CoreError::ClientNotFound {
            name: "Ana Torres".to_string(),
        };
        let details = error.to_details();

        assert_eq!(details.code, ErrorCode::ClientNotFound);
        assert!(!details.suggestions.is_empty());
        assert!(details.message.contains("Ana Torres"));
    }

    #[test]
    fn test_error_details_builder() {
        let details = ErrorDetails::new(ErrorCode::ValidationError, "Validation failed".to_string())
            .with_detail(serde_json::json!({"field": "valor"}))
            .with_suggestion("Check the value".to_string())
            .with_row(12);

        assert_eq!(details.code, ErrorCode::ValidationError);
        assert!(details.details.is_some());
        assert_eq!(details.suggestions.len(), 1);
        assert_eq!(details.row, Some(12));
    }
}
