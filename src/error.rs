//! Error types and handling for the CityBrief service

use thiserror::Error;

/// Main error type for the CityBrief application
#[derive(Error, Debug)]
pub enum CityBriefError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Upstream client construction or communication errors
    #[error("Upstream error: {message}")]
    Upstream { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl CityBriefError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new upstream error
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            CityBriefError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            CityBriefError::Upstream { .. } => {
                "Unable to reach the upstream geodata services. Please check your internet connection."
                    .to_string()
            }
            CityBriefError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            CityBriefError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            CityBriefError::General { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = CityBriefError::config("missing base URL");
        assert!(matches!(config_err, CityBriefError::Config { .. }));

        let upstream_err = CityBriefError::upstream("connection refused");
        assert!(matches!(upstream_err, CityBriefError::Upstream { .. }));

        let validation_err = CityBriefError::validation("empty city name");
        assert!(matches!(validation_err, CityBriefError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = CityBriefError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let upstream_err = CityBriefError::upstream("test");
        assert!(upstream_err.user_message().contains("Unable to reach"));

        let validation_err = CityBriefError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let brief_err: CityBriefError = io_err.into();
        assert!(matches!(brief_err, CityBriefError::Io { .. }));
    }
}
