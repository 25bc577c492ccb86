//! Validation related error types

use thiserror::Error;

/// Validation and configuration errors
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Algorithm mask is empty or names algorithms that are not supported
    #[error("Invalid algorithm selection {mask:#x}: {reason}")]
    InvalidSelection { mask: u64, reason: String },

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// Invalid input parameter
    #[error("Invalid parameter '{parameter}': {reason}")]
    InvalidParameter { parameter: String, reason: String },
}

impl ValidationError {
    /// Create an invalid selection error
    pub fn invalid_selection(mask: u64, reason: &str) -> Self {
        Self::InvalidSelection {
            mask,
            reason: reason.to_string(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_configuration(message: &str) -> Self {
        Self::InvalidConfiguration {
            message: message.to_string(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: &str, reason: &str) -> Self {
        Self::InvalidParameter {
            parameter: parameter.to_string(),
            reason: reason.to_string(),
        }
    }
}
