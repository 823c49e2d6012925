// ── Core error types ──
//
// Errors surfaced to the screens. API failures are wrapped unchanged so the
// screens can show the typed Graniitti message; everything else is a
// generic failure.

use strum::Display;
use thiserror::Error;

/// An installation parameter required before a request can be made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Parameter {
    Token,
    Region,
    SiteId,
}

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Graniitti API failure (typed or local).
    #[error(transparent)]
    Api(#[from] frosmo_api::Error),

    /// A required installation parameter is empty, zero, or unknown.
    #[error("Missing installation parameter: {0}")]
    MissingParameter(Parameter),

    /// The host platform rejected or failed an operation.
    #[error("Host operation failed: {message}")]
    Host { message: String },
}

impl CoreError {
    pub fn host(message: impl Into<String>) -> Self {
        Self::Host {
            message: message.into(),
        }
    }

    /// The message to show the user for typed API failures, `None` for
    /// anything that should be reported generically.
    pub fn api_message(&self) -> Option<String> {
        match self {
            Self::Api(err) if err.is_api_error() => Some(err.to_string()),
            _ => None,
        }
    }
}
