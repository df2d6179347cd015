use crate::portalapi::core::{AppState, Error};
use crate::portalapi::types::webcore::Analysis;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::error;

pub async fn analyze_message(app: &AppState, message: String) -> Result<Response, Error> {
    let analysis = app.analyzer.analyze(&message).await.map_err(|e| {
        error!("Error analyzing message: {}", e);
        Error::from(e)
    })?;

    Ok((StatusCode::OK, Json(Analysis { analysis })).into_response())
}
