use crate::impls::catalog;
use crate::portalapi::core::Error;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

pub async fn featured_resources() -> Result<Response, Error> {
    Ok((StatusCode::OK, Json(catalog::featured_resources())).into_response())
}
