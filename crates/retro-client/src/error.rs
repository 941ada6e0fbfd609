//! Client error types.

use retro_core::errors::ErrorKind;
use thiserror::Error;

/// Errors that can occur when talking to the backend or the LLM.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// `error` field of the body, or a generic status message.
        message: String,
    },

    /// The API answered 2xx but the body carried an `error` field.
    #[error("backend error: {0}")]
    Backend(String),

    /// The body was not valid JSON or lacked required fields.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The request was rejected before any network call.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A live client was constructed without a usable credential.
    #[error("{0}")]
    NotConfigured(String),

    /// A Gemini call failed; `operation` names which one.
    #[error("Gemini API Error ({operation}): {source}")]
    Gemini {
        operation: &'static str,
        source: Box<ClientError>,
    },
}

impl ClientError {
    /// Classify the error for retry and display decisions.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Http(_) | Self::Api { .. } | Self::Backend(_) => ErrorKind::Transport,
            Self::Malformed(_) => ErrorKind::MalformedResponse,
            Self::InvalidRequest(_) => ErrorKind::Validation,
            Self::NotConfigured(_) => ErrorKind::Configuration,
            Self::Gemini { source, .. } => source.kind(),
        }
    }

    /// The message shown to a user: the backend's own wording where there is one.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::Backend(message)
            | Self::Malformed(message)
            | Self::InvalidRequest(message)
            | Self::NotConfigured(message) => message.clone(),
            Self::Http(error) => error.to_string(),
            Self::Gemini { operation, source } => {
                format!("Gemini API Error ({operation}): {}", source.user_message())
            }
        }
    }

    pub(crate) fn during(self, operation: &'static str) -> Self {
        Self::Gemini {
            operation,
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_shows_backend_wording() {
        let err = ClientError::Api {
            status: 500,
            message: "db down".into(),
        };
        assert_eq!(err.user_message(), "db down");
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.to_string(), "API error (500): db down");
    }

    #[test]
    fn kinds_map_onto_taxonomy() {
        assert_eq!(
            ClientError::Malformed("x".into()).kind(),
            ErrorKind::MalformedResponse
        );
        assert_eq!(
            ClientError::NotConfigured("x".into()).kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            ClientError::InvalidRequest("x".into()).kind(),
            ErrorKind::Validation
        );
        assert_eq!(ClientError::Backend("x".into()).kind(), ErrorKind::Transport);
    }

    #[test]
    fn gemini_wrapper_prefixes_message_and_keeps_kind() {
        let err = ClientError::Malformed("Received empty response".into()).during("Main Summary");
        assert_eq!(
            err.user_message(),
            "Gemini API Error (Main Summary): Received empty response"
        );
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
        assert!(std::error::Error::source(&err).is_some());
    }
}
