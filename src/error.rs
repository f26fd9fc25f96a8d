//! Error types and handling for the accessible spots browser

use thiserror::Error;

/// Main error type for the accessible spots browser
#[derive(Error, Debug)]
pub enum SpotsError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Spot catalog could not be parsed or violates its invariants
    #[error("Catalog error: {message}")]
    Catalog { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl SpotsError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new catalog error
    pub fn catalog<S: Into<String>>(message: S) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SpotsError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            SpotsError::Catalog { message } => {
                format!("The spot catalog could not be loaded: {message}")
            }
            SpotsError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            SpotsError::Io { .. } => {
                "File operation failed. Please check the file path and permissions.".to_string()
            }
        }
    }
}

impl From<serde_json::Error> for SpotsError {
    fn from(err: serde_json::Error) -> Self {
        SpotsError::catalog(err.to_string())
    }
}
