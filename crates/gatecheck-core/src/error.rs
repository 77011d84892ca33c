//! Unified error types for Gatecheck

use thiserror::Error;

/// Unified error type for all Gatecheck operations
#[derive(Error, Debug)]
pub enum GatecheckError {
    // Browser errors
    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Element not found: {selector}")]
    ElementNotFound { selector: String },

    #[error("Screenshot failed: {0}")]
    Screenshot(String),

    // Fixture errors
    #[error("Fixture error: {0}")]
    Fixture(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Generic
    #[error("{0}")]
    Other(String),
}

/// Result type alias using GatecheckError
pub type Result<T> = std::result::Result<T, GatecheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_not_found_names_the_selector() {
        let err = GatecheckError::ElementNotFound {
            selector: "[data-testid=\"login-button\"]".to_string(),
        };
        assert!(err.to_string().contains("login-button"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: GatecheckError = io.into();
        assert!(matches!(err, GatecheckError::Io(_)));
    }
}
