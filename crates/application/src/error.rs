//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A required request parameter is missing or empty
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Provider credential is missing or otherwise unusable
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Provider rejected the configured credential
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// Requested location does not resolve
    #[error("Not found: {0}")]
    NotFound(String),

    /// Provider failed or answered with an unexpected status
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Provider payload lacks required fields
    #[error("Malformed upstream payload: {0}")]
    MalformedPayload(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Whether the error stems from server-side configuration rather than the request
    pub const fn is_configuration_problem(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::NotAuthorized(_))
    }
}
