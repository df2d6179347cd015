use crate::impls::catalog;
use crate::portalapi::core::Error;
use crate::portalapi::types::cases::FeaturedTab;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

pub async fn featured_cases(tab: FeaturedTab) -> Result<Response, Error> {
    Ok((StatusCode::OK, Json(catalog::featured_cases(tab))).into_response())
}
