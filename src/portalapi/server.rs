use std::sync::Arc;

use crate::config::ServerConfig;
use crate::portalapi::actions::{
    analyzemessage, featuredcases, featuredresources, hello, listcases, listresources,
    reportwizard,
};
use crate::portalapi::core::{AppState, Error};
use crate::portalapi::portal_query::PortalQuery;
use crate::portalapi::types::{
    cases::{Case, CaseListAction, CaseListState, ListCasesResponse},
    report::{WizardEvent, WizardResponse, WizardState},
    resources::{ListResourcesResponse, Resource, ResourceListAction, ResourceListState},
    webcore::{Analysis, Hello},
};
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Json;
use axum::{extract::State, http::StatusCode, middleware, Router};
use log::{info, warn};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Requests carry screen state and file metadata only
const BODY_LIMIT: usize = 1048576;

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(origin) => Some(origin),
            Err(_) => {
                warn!("Ignoring invalid CORS origin {}", o);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}

pub fn router(state: Arc<AppState>, cors_origins: &[String]) -> Router {
    use utoipa::OpenApi;
    #[derive(OpenApi)]
    #[openapi(
        paths(query),
        components(schemas(
            PortalQuery,
            CaseListState,
            CaseListAction,
            ResourceListState,
            ResourceListAction,
            WizardState,
            WizardEvent,
            Case,
            Resource,
            Hello,
            Analysis,
            ListCasesResponse,
            ListResourcesResponse,
            WizardResponse,
        ))
    )]
    struct ApiDoc;

    async fn docs() -> impl IntoResponse {
        let mut headers = HeaderMap::new();
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        let data = ApiDoc::openapi().to_json();

        if let Ok(data) = data {
            return (headers, data).into_response();
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to generate docs".to_string(),
        )
            .into_response()
    }

    Router::new()
        .route("/openapi", get(docs))
        .route("/", post(query))
        .with_state(state)
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(middleware::from_fn(crate::loggy::log_request))
        .layer(cors_layer(cors_origins))
}

pub async fn init_portalapi(state: Arc<AppState>, cfg: &ServerConfig) -> Result<(), crate::Error> {
    let app = router(state, &cfg.cors_origins);

    let addr = format!("{}:{}", cfg.bind_addr, cfg.port);

    info!("Starting PortalAPI server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr.as_str()).await?;

    axum::serve(listener, app).await?;

    Ok(())
}

/// Make Portal Query
#[utoipa::path(
    post,
    request_body = PortalQuery,
    path = "/",
    responses(
        (status = 200, description = "Content", body = String),
        (status = BAD_REQUEST, description = "Invalid input", body = String),
        (status = CONFLICT, description = "Event not allowed on the current wizard step", body = String),
        (status = BAD_GATEWAY, description = "The store or the AI endpoint failed", body = String),
    ),
)]
#[axum::debug_handler]
async fn query(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PortalQuery>,
) -> Result<Response, Error> {
    match req {
        PortalQuery::Hello => hello::hello(&state).await,
        PortalQuery::ListCases {
            state: list_state,
            action,
        } => listcases::list_cases(&state, list_state, action).await,
        PortalQuery::FeaturedCases { tab } => featuredcases::featured_cases(tab).await,
        PortalQuery::ListResources {
            state: list_state,
            action,
        } => listresources::list_resources(list_state, action).await,
        PortalQuery::FeaturedResources => featuredresources::featured_resources().await,
        PortalQuery::ReportWizard {
            state: wizard_state,
            event,
        } => reportwizard::report_wizard(&state, wizard_state, event).await,
        PortalQuery::AnalyzeMessage { message } => {
            analyzemessage::analyze_message(&state, message).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::testing::{cases, EchoAnalyzer, MemoryStore};
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app_with(store: MemoryStore) -> Router {
        let state = Arc::new(AppState {
            store: Arc::new(store),
            analyzer: Arc::new(EchoAnalyzer),
            frontend_url: "https://portal.example.com".to_string(),
        });

        router(state, &[])
    }

    async fn send(app: &Router, body: Value) -> (StatusCode, Vec<u8>) {
        let req = Request::builder()
            .method(Method::POST)
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let resp = app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

        (status, bytes.to_vec())
    }

    async fn send_json(app: &Router, body: Value) -> (StatusCode, Value) {
        let (status, bytes) = send(app, body).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_hello() {
        let app = app_with(MemoryStore::default());

        let (status, body) = send_json(&app, json!("Hello")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["core_constants"]["frontend_url"],
            "https://portal.example.com"
        );
        assert_eq!(body["core_constants"]["tracking_code_format"], "WB-23791-XR");
        assert_eq!(body["build"]["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_list_cases() {
        let app = app_with(MemoryStore::with_cases(cases(12)));

        let (status, body) = send_json(
            &app,
            json!({"ListCases": {"state": {}, "action": {"GoToPage": {"page": 3}}}}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["state"]["page"], 3);
        assert_eq!(body["page"]["total_pages"], 3);
        assert_eq!(body["page"]["total_matches"], 12);
        assert_eq!(body["page"]["cases"].as_array().unwrap().len(), 2);
        assert_eq!(body["page"]["sort_label"], "Newest");
    }

    #[tokio::test]
    async fn test_list_returns_page_actually_shown() {
        let app = app_with(MemoryStore::with_cases(cases(4)));

        let (status, body) = send_json(
            &app,
            json!({"ListCases": {"state": {"page": 3}, "action": {"SetSort": {"sort": "most-votes"}}}}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["page"]["current_page"], 1);
        assert_eq!(body["state"]["page"], 1);
        assert_eq!(body["state"]["sort"], "most-votes");

        let (status, body) = send_json(&app, json!({"ListResources": {"state": {"page": 7}}})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["page"]["current_page"], 2);
        assert_eq!(body["state"]["page"], 2);
    }

    #[tokio::test]
    async fn test_list_cases_store_down() {
        let app = app_with(MemoryStore::failing());

        let (status, body) = send(&app, json!({"ListCases": {"state": {}}})).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body, listcases::LOAD_FAILED.as_bytes());
    }

    #[tokio::test]
    async fn test_featured() {
        let app = app_with(MemoryStore::failing());

        let (status, body) = send_json(&app, json!({"FeaturedCases": {"tab": "popular"}})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 3);

        let (status, body) = send_json(&app, json!("FeaturedResources")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_list_resources() {
        let app = app_with(MemoryStore::default());

        let (status, body) = send_json(
            &app,
            json!({"ListResources": {"state": {}, "action": {"SetCategory": {"category": "Security"}}}}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["state"]["category"], "Security");
        assert_eq!(body["page"]["total_matches"], 2);
        assert_eq!(body["page"]["resources"][0]["resource"]["id"], "resource-2");
        assert_eq!(body["page"]["resources"][0]["is_bookmarked"], true);
    }

    #[tokio::test]
    async fn test_wizard_guard() {
        let app = app_with(MemoryStore::default());

        let (status, body) = send(&app, json!({"ReportWizard": {"state": {}, "event": "Next"}})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, b"Please enter a title");

        let (status, _) = send(&app, json!({"ReportWizard": {"state": {}, "event": "Back"}})).await;
        assert_eq!(status, StatusCode::CONFLICT);

        // only store failures get the submit toast
        let (status, body) =
            send(&app, json!({"ReportWizard": {"state": {}, "event": "Submit"}})).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body, b"cannot submit on the details step");
    }

    #[tokio::test]
    async fn test_wizard_submit() {
        let review = json!({
            "step": "review",
            "draft": {
                "title": "Dumping at night",
                "description": "Trucks empty barrels into the river",
                "category": "Environmental"
            }
        });

        let app = app_with(MemoryStore::default());
        let (status, body) = send_json(
            &app,
            json!({"ReportWizard": {"state": review, "event": "Submit"}}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["state"]["step"], "submitted");
        assert_eq!(body["state"]["tracking_code"], "WB-23791-XR");
        assert_eq!(body["redirect"]["path"], "/cases");

        let app = app_with(MemoryStore::failing());
        let (status, body) = send(
            &app,
            json!({"ReportWizard": {"state": review, "event": "Submit"}}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body, reportwizard::SUBMIT_FAILED.as_bytes());
    }

    #[tokio::test]
    async fn test_analyze_message() {
        let app = app_with(MemoryStore::default());

        let (status, body) = send_json(
            &app,
            json!({"AnalyzeMessage": {"message": "Your parcel is held"}}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["analysis"], "Analysis of: Your parcel is held");

        let (status, _) = send(&app, json!({"AnalyzeMessage": {"message": "  "}})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_query() {
        let app = app_with(MemoryStore::default());

        let (status, _) = send(&app, json!({"DeleteCase": {"id": "1"}})).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_openapi() {
        let app = app_with(MemoryStore::default());

        let req = Request::builder()
            .uri("/openapi")
            .body(Body::empty())
            .unwrap();

        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let doc: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(doc["components"]["schemas"]["PortalQuery"].is_object());
    }
}
