//! Error types for people.
//!
//! Building records cannot fail. What can fail is writing the rendering to
//! its sink and loading configuration.

use thiserror::Error;

use crate::display::OutputFormat;

/// The main error type for people operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Output Errors ===
    /// Writing a rendering to the output sink failed.
    #[error("failed to write {format} output: {source}")]
    OutputWrite {
        /// The format being written.
        format: OutputFormat,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for people operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an output write error for the given format.
    #[must_use]
    pub fn output_write(format: OutputFormat, source: std::io::Error) -> Self {
        Self::OutputWrite { format, source }
    }

    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }
}
