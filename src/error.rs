//! Error types for feedflow
//!
//! This module provides error handling for the library, including:
//! - The single pipeline failure kind ([`Error::Step`]) carrying the failing
//!   step and the failure reason
//! - Configuration errors with context about which setting is invalid
//! - Network and serialization errors for the joke client

use crate::types::Step;
use thiserror::Error;

/// Result type alias for feedflow operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for feedflow
#[derive(Debug, Error)]
pub enum Error {
    /// A pipeline step failed
    ///
    /// This is the only failure kind the pipeline itself produces. It is
    /// caught exactly once at the pipeline boundary; there is no retry and
    /// no partial-result reporting.
    #[error("step {step} failed: {reason}")]
    Step {
        /// The step that failed
        step: Step,
        /// Failure reason as reported by the feed source
        reason: String,
    },

    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "event_capacity")
        key: Option<String>,
    },

    /// Network error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Joke API returned a non-success HTTP status
    #[error("joke API returned HTTP {status}")]
    JokeApi {
        /// HTTP status code of the failed response
        status: u16,
    },
}

impl Error {
    /// Construct a step failure for the given step
    pub fn step(step: Step, reason: impl Into<String>) -> Self {
        Self::Step {
            step,
            reason: reason.into(),
        }
    }

    /// Construct a configuration error with a key
    pub fn config(message: impl Into<String>, key: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            key: Some(key.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_error_display() {
        let err = Error::step(Step::FetchProfile, "reh");
        assert_eq!(err.to_string(), "step fetch_profile failed: reh");
    }

    #[test]
    fn test_config_error_display() {
        let err = Error::config("event_capacity must be greater than zero", "event_capacity");
        assert_eq!(
            err.to_string(),
            "configuration error: event_capacity must be greater than zero"
        );
    }
}
