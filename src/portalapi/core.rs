use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::impls::analyzer::MessageAnalyzer;
use crate::impls::errors::PortalError;
use crate::impls::store::CaseStore;

pub struct Error {
    pub status: StatusCode,
    pub message: String,
}

impl Error {
    /// Keeps the status of `e` but shows `message` to the user instead
    pub fn with_message(e: &PortalError, message: &str) -> Self {
        Self {
            status: e.status(),
            message: message.to_string(),
        }
    }
}

impl From<PortalError> for Error {
    fn from(e: PortalError) -> Self {
        Self {
            status: e.status(),
            message: e.to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

pub struct AppState {
    pub store: Arc<dyn CaseStore>,
    pub analyzer: Arc<dyn MessageAnalyzer>,
    pub frontend_url: String,
}
