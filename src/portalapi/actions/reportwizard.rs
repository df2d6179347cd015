use crate::impls::errors::PortalError;
use crate::impls::wizard;
use crate::portalapi::core::{AppState, Error};
use crate::portalapi::types::report::{WizardEvent, WizardState};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::error;

pub const SUBMIT_FAILED: &str = "Failed to submit report. Please try again.";

pub async fn report_wizard(
    app: &AppState,
    state: WizardState,
    event: WizardEvent,
) -> Result<Response, Error> {
    let submitting = matches!(event, WizardEvent::Submit);

    let resp = wizard::reduce(state, event, app.store.as_ref())
        .await
        .map_err(|e| match e {
            PortalError::Transport(_) | PortalError::Validation(_) | PortalError::Decode { .. }
                if submitting =>
            {
                error!("Error submitting report: {}", e);
                Error::with_message(&e, SUBMIT_FAILED)
            }
            e => {
                error!("Error advancing report wizard: {}", e);
                Error::from(e)
            }
        })?;

    Ok((StatusCode::OK, Json(resp)).into_response())
}
