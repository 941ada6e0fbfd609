//! Cross-cutting error types.
//!
//! Transport and parsing errors live in `retro-client`, session errors in
//! `retro-dashboard`. Every error in the workspace classifies itself into an
//! [`ErrorKind`] so callers can decide whether a retry affordance applies.

use std::fmt;

use thiserror::Error;

/// Classification shared by every error type in the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// User input failed a precondition. Never touches the network.
    Validation,
    /// Network failure or non-success HTTP status.
    Transport,
    /// Body was not valid JSON or did not have the required shape.
    MalformedResponse,
    /// A live client was requested without a usable credential.
    Configuration,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Transport => "transport",
            Self::MalformedResponse => "malformed_response",
            Self::Configuration => "configuration",
        }
    }

    /// Whether a manual "try again" makes sense for this class of failure.
    #[must_use]
    pub const fn is_retryable(self) -> bool {
        matches!(self, Self::Transport | Self::MalformedResponse)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by the core types themselves.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A load-phase transition was attempted that is not allowed.
    #[error("Invalid state transition: {from} to {to}")]
    InvalidTransition { from: String, to: String },
}

impl CoreError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::Validation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_network_facing_kinds_are_retryable() {
        assert!(ErrorKind::Transport.is_retryable());
        assert!(ErrorKind::MalformedResponse.is_retryable());
        assert!(!ErrorKind::Validation.is_retryable());
        assert!(!ErrorKind::Configuration.is_retryable());
    }

    #[test]
    fn invalid_transition_names_both_phases() {
        let err = CoreError::InvalidTransition {
            from: "idle".into(),
            to: "succeeded".into(),
        };
        assert_eq!(err.to_string(), "Invalid state transition: idle to succeeded");
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(!err.kind().is_retryable());
    }
}
