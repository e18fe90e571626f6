//! Error types for readability-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while selecting or computing scores.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalysisError {
    /// An unknown score selector was provided.
    #[error("unknown score type: {name}. Use: {available}")]
    UnknownScore {
        /// The selector that was requested.
        name: String,
        /// Comma-separated list of accepted selectors.
        available: String,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
