//! Error types for parser configuration.
//!
//! SQL text never produces an error: malformed input yields a best-effort
//! tree. Only the options a caller passes in can be rejected.

use std::str::Utf8Error;

/// Errors raised while validating parse options, before any scanning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// No dialect is registered under the given name.
    #[error("Unknown SQL dialect: {0}")]
    UnknownDialect(String),

    /// The additional keywords are not a list of strings.
    #[error("Invalid additional keywords: {0}")]
    InvalidKeywords(String),

    /// The options value is malformed or carries an unknown key.
    #[error("Invalid parse options: {0}")]
    InvalidOptions(String),

    /// The byte input names an encoding that is not supported.
    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),

    /// The byte input is not valid in the named encoding.
    #[error("Failed to decode input as {encoding}: {source}")]
    Decode {
        /// Encoding the input was decoded with.
        encoding: String,
        /// Underlying decoding error.
        #[source]
        source: Utf8Error,
    },
}

/// Result type for configuration-dependent operations.
pub type Result<T> = std::result::Result<T, ConfigurationError>;
