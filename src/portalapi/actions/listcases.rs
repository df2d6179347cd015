use crate::portalapi::core::{AppState, Error};
use crate::portalapi::types::cases::{CaseListAction, CaseListState, ListCasesResponse};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::error;

pub const LOAD_FAILED: &str = "Failed to load cases. Please try again.";

pub async fn list_cases(
    app: &AppState,
    state: CaseListState,
    action: Option<CaseListAction>,
) -> Result<Response, Error> {
    let records = app.store.list_cases().await.map_err(|e| {
        error!("Error fetching cases: {}", e);
        Error::with_message(&e, LOAD_FAILED)
    })?;

    let state = match action {
        Some(action) => state.apply(action, &records),
        None => state,
    };

    let (state, page) = state.render(&records);

    Ok((StatusCode::OK, Json(ListCasesResponse { state, page })).into_response())
}
