//! Error types for strata-json
//!
//! This module defines all error types used throughout the workspace.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Nothing in the workspace degrades a failure to an empty value: every
//! parse, format, encode and decode failure surfaces as an [`Error`].

use std::io;
use thiserror::Error;

/// Result type alias for strata-json operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for strata-json
#[derive(Debug, Error)]
pub enum Error {
    /// A date/time value could not be rendered in the requested representation
    #[error("Format error ({kind}): {message}")]
    Format {
        /// Which kind of value failed ("date", "datetime", "time")
        kind: &'static str,
        /// Details
        message: String,
    },

    /// Input text does not match the expected date/time representation
    #[error("Parse error ({kind}): cannot parse {input:?}: {message}")]
    Parse {
        /// Which kind of value was expected
        kind: &'static str,
        /// The offending input
        input: String,
        /// Details
        message: String,
    },

    /// JSON encoding failed
    #[error("Encode error: {0}")]
    Encode(String),

    /// JSON decoding failed
    #[error("Decode error: {0}")]
    Decode(String),

    /// Caller passed an argument outside the accepted domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be read or interpreted
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error (config files, writers)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Build a [`Error::Parse`] for the given kind and input.
    pub fn parse(kind: &'static str, input: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Parse {
            kind,
            input: input.into(),
            message: message.into(),
        }
    }

    /// Build a [`Error::Format`] for the given kind.
    pub fn format(kind: &'static str, message: impl Into<String>) -> Self {
        Error::Format {
            kind,
            message: message.into(),
        }
    }

    /// True for errors caused by malformed input text.
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}
