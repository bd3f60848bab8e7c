// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration option crate.
//!
//! Absence of a key is never an error. The variants below cover the two ways a read can
//! fail (a transform produced the wrong kind of value, or a strict converter refused a
//! value) plus parse failures at the YAML boundary.

use thiserror::Error;

/// The main error type for configuration option operations.
///
/// Marked `#[non_exhaustive]` so new failure kinds can be added without breaking callers.
///
/// # Examples
///
/// ```
/// use config_option::domain::errors::ConfigError;
///
/// let error = ConfigError::TypeMismatch {
///     key: "batch.size".to_string(),
///     expected: "integer",
///     found: "string",
/// };
/// assert!(error.to_string().contains("batch.size"));
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A transform returned a value that is not an instance of the requested type.
    ///
    /// This is a programming error in the option definition and is never defaulted.
    #[error("Transformed value for key '{key}' is a {found}, expected {expected}")]
    TypeMismatch {
        /// The option key being read
        key: String,
        /// The requested target type
        expected: &'static str,
        /// The kind of value the transform produced
        found: &'static str,
    },

    /// A converter refused to coerce a stored value into the requested type.
    #[error("Failed to convert configuration value for key '{key}' from {found} to type {target_type}")]
    TypeConversionError {
        /// The option key being read
        key: String,
        /// The requested target type
        target_type: &'static str,
        /// The kind of value that was stored
        found: &'static str,
    },

    /// Failed to parse configuration content into a map.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ConfigError {
    /// Returns the option key the error refers to, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            ConfigError::TypeMismatch { key, .. } | ConfigError::TypeConversionError { key, .. } => {
                Some(key.as_str())
            }
            ConfigError::ParseError { .. } => None,
        }
    }
}

/// A specialized Result type for configuration option operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
