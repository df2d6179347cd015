use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, TS, ToSchema, Clone)]
#[ts(export, export_to = ".generated/LabeledValue.ts")]
pub struct LabeledValue {
    /// Value as sent over the wire
    pub value: String,
    /// Value as shown to users
    pub label: String,
}

#[derive(Serialize, Deserialize, TS, ToSchema, Clone)]
#[ts(export, export_to = ".generated/BuildInfo.ts")]
pub struct BuildInfo {
    pub version: String,
    pub build_timestamp: String,
    pub rustc: String,
}

#[derive(Serialize, Deserialize, TS, ToSchema, Clone)]
#[ts(export, export_to = ".generated/CoreConstants.ts")]
pub struct CoreConstants {
    /// URL to the main site
    pub frontend_url: String,
    /// Client side routes of the portal
    pub routes: Vec<String>,
    pub categories: Vec<LabeledValue>,
    pub statuses: Vec<LabeledValue>,
    pub sort_options: Vec<LabeledValue>,
    pub resource_types: Vec<String>,
    pub cases_per_page: usize,
    pub resources_per_page: usize,
    /// Example of the tracking code shown after submission
    pub tracking_code_format: String,
    /// Largest evidence file accepted, in bytes
    pub max_evidence_bytes: u64,
}

#[derive(Serialize, Deserialize, TS, ToSchema, Clone)]
#[ts(export, export_to = ".generated/Hello.ts")]
pub struct Hello {
    pub core_constants: CoreConstants,
    pub build: BuildInfo,
}

#[derive(Serialize, Deserialize, TS, ToSchema, Clone)]
#[ts(export, export_to = ".generated/Analysis.ts")]
pub struct Analysis {
    /// Free text analysis, shown verbatim
    pub analysis: String,
}
