use crate::impls::pipeline::{CASES_PER_PAGE, RESOURCES_PER_PAGE};
use crate::impls::wizard::{MAX_EVIDENCE_BYTES, TRACKING_CODE};
use crate::portalapi::core::{AppState, Error};
use crate::portalapi::types::cases::{CaseCategory, CaseStatus, SortOption};
use crate::portalapi::types::resources::ResourceType;
use crate::portalapi::types::webcore::{BuildInfo, CoreConstants, Hello, LabeledValue};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use strum::VariantNames;

pub const ROUTES: [&str; 4] = ["/", "/report", "/cases", "/resources"];

fn labeled(value: impl ToString, label: &str) -> LabeledValue {
    LabeledValue {
        value: value.to_string(),
        label: label.to_string(),
    }
}

pub fn core_constants(frontend_url: &str) -> CoreConstants {
    CoreConstants {
        frontend_url: frontend_url.to_string(),
        routes: ROUTES.iter().map(|r| r.to_string()).collect(),
        categories: CaseCategory::ALL
            .iter()
            .map(|c| labeled(c, &c.to_string()))
            .collect(),
        statuses: CaseStatus::ALL
            .iter()
            .map(|s| labeled(s, s.label()))
            .collect(),
        sort_options: SortOption::ALL
            .iter()
            .map(|s| labeled(s, s.label()))
            .collect(),
        resource_types: ResourceType::VARIANTS
            .iter()
            .map(|t| t.to_string())
            .collect(),
        cases_per_page: CASES_PER_PAGE,
        resources_per_page: RESOURCES_PER_PAGE,
        tracking_code_format: TRACKING_CODE.to_string(),
        max_evidence_bytes: MAX_EVIDENCE_BYTES,
    }
}

pub fn build_info() -> BuildInfo {
    BuildInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        build_timestamp: option_env!("VERGEN_BUILD_TIMESTAMP")
            .unwrap_or("unknown")
            .to_string(),
        rustc: option_env!("VERGEN_RUSTC_SEMVER")
            .unwrap_or("unknown")
            .to_string(),
    }
}

pub async fn hello(state: &AppState) -> Result<Response, Error> {
    Ok((
        StatusCode::OK,
        Json(Hello {
            core_constants: core_constants(&state.frontend_url),
            build: build_info(),
        }),
    )
        .into_response())
}
