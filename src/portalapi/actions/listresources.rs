use crate::impls::catalog;
use crate::portalapi::core::Error;
use crate::portalapi::types::resources::{
    ListResourcesResponse, ResourceListAction, ResourceListState,
};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

pub async fn list_resources(
    state: ResourceListState,
    action: Option<ResourceListAction>,
) -> Result<Response, Error> {
    let records = catalog::resources();

    let state = match action {
        Some(action) => state.apply(action, records),
        None => state,
    };

    let (state, page) = state.render(records);

    Ok((StatusCode::OK, Json(ListResourcesResponse { state, page })).into_response())
}
