use axum::http::StatusCode;
use thiserror::Error;

use crate::portalapi::types::report::WizardStep;

/// Errors surfaced to users of the portal
#[derive(Debug, Error)]
pub enum PortalError {
    /// Network or auth failure talking to the store or the AI endpoint
    #[error("{0}")]
    Transport(String),
    /// The store refused a malformed row
    #[error("{0}")]
    Validation(String),
    /// A user facing precondition was not met, e.g. a blank field
    #[error("{0}")]
    EmptyInput(String),
    /// Missing or invalid startup configuration
    #[error("configuration error: {0}")]
    Configuration(String),
    /// The AI endpoint answered, but not with an analysis
    #[error("{0}")]
    Analysis(String),
    /// A response could not be decoded, e.g. an unknown status value
    #[error("could not decode {what}: {reason}")]
    Decode { what: &'static str, reason: String },
    #[error("cannot {event} on the {step} step")]
    InvalidTransition {
        step: WizardStep,
        event: &'static str,
    },
}

impl PortalError {
    pub fn status(&self) -> StatusCode {
        match self {
            PortalError::Transport(_) | PortalError::Analysis(_) => StatusCode::BAD_GATEWAY,
            PortalError::Validation(_)
            | PortalError::EmptyInput(_)
            | PortalError::Decode { .. } => StatusCode::BAD_REQUEST,
            PortalError::InvalidTransition { .. } => StatusCode::CONFLICT,
            PortalError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for PortalError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            PortalError::Decode {
                what: "upstream response",
                reason: e.to_string(),
            }
        } else {
            PortalError::Transport(e.to_string())
        }
    }
}
