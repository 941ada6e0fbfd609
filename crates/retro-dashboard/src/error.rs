use retro_client::ClientError;
use retro_core::errors::{CoreError, ErrorKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// User input failed a precondition. No network call was made.
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl DashboardError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) | Self::Core(_) => ErrorKind::Validation,
            Self::Client(error) => error.kind(),
        }
    }

    /// The string stored for display.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Client(error) => error.user_message(),
            Self::Core(error) => error.to_string(),
        }
    }
}
