use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use ts_rs::TS;
use utoipa::ToSchema;

use super::cases::{CaseCategory, CaseStatus};

#[derive(
    Serialize, Deserialize, ToSchema, TS, EnumString, Display, Clone, Copy, Debug, PartialEq, Eq, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[ts(export, export_to = ".generated/WizardStep.ts")]
pub enum WizardStep {
    #[default]
    Details,
    Evidence,
    Review,
    Submitted,
}

#[derive(Serialize, Deserialize, ToSchema, TS, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[ts(export, export_to = ".generated/ContactMethod.ts")]
pub enum ContactMethod {
    /// Follow up through the tracking code only
    #[default]
    #[serde(rename = "anonymousPortal")]
    AnonymousPortal,
    #[serde(rename = "secure-email")]
    SecureEmail,
}

/// Metadata of a file picked as evidence. The contents never leave the browser
#[derive(Serialize, Deserialize, ToSchema, TS, Clone, Debug, PartialEq)]
#[ts(export, export_to = ".generated/EvidenceFile.ts")]
pub struct EvidenceFile {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, TS, Clone, Debug, PartialEq)]
#[ts(export, export_to = ".generated/ReportDraft.ts")]
pub struct ReportDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<CaseCategory>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub individuals: String,
    #[serde(default = "anonymous_by_default")]
    #[ts(as = "Option<bool>", optional)]
    pub anonymous: bool,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub contact_method: ContactMethod,
    #[serde(default)]
    pub files: Vec<EvidenceFile>,
    #[serde(default)]
    pub additional_info: String,
}

fn anonymous_by_default() -> bool {
    true
}

impl Default for ReportDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: None,
            location: String::new(),
            date: String::new(),
            organization: String::new(),
            individuals: String::new(),
            anonymous: true,
            name: String::new(),
            email: String::new(),
            contact_method: ContactMethod::AnonymousPortal,
            files: Vec::new(),
            additional_info: String::new(),
        }
    }
}

/// Free text fields of the draft that can be edited directly
#[derive(Serialize, Deserialize, ToSchema, TS, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = ".generated/DraftField.ts")]
pub enum DraftField {
    Title,
    Description,
    Location,
    Date,
    Organization,
    Individuals,
    Name,
    Email,
    AdditionalInfo,
}

#[derive(Serialize, Deserialize, ToSchema, TS, Clone, Debug, PartialEq)]
#[ts(export, export_to = ".generated/WizardEvent.ts")]
pub enum WizardEvent {
    EditField { field: DraftField, value: String },
    SetCategory { category: CaseCategory },
    /// Going anonymous clears name and email
    SetAnonymous { anonymous: bool },
    SetContactMethod { method: ContactMethod },
    AddFiles { files: Vec<EvidenceFile> },
    RemoveFile { index: usize },
    Next,
    Back,
    /// Insert the report into the store. Only valid on the review step
    Submit,
}

#[derive(Serialize, Deserialize, ToSchema, TS, Clone, Debug, PartialEq, Default)]
#[ts(export, export_to = ".generated/WizardState.ts")]
pub struct WizardState {
    #[serde(default)]
    pub step: WizardStep,
    #[serde(default)]
    pub draft: ReportDraft,
    /// Set once the report is submitted
    #[serde(default)]
    pub tracking_code: Option<String>,
}

/// Row sent to the store on submission
#[derive(Serialize, Deserialize, ToSchema, TS, Clone, Debug, PartialEq)]
#[ts(export, export_to = ".generated/NewCase.ts")]
pub struct NewCase {
    pub title: String,
    pub description: String,
    pub category: CaseCategory,
    pub location: Option<String>,
    pub date: Option<String>,
    pub organization: Option<String>,
    pub individuals: Option<String>,
    pub status: CaseStatus,
    pub votes: i64,
    pub comments: i64,
    pub views: i64,
    pub progress: u8,
}

#[derive(Serialize, Deserialize, ToSchema, TS, Clone, Debug, PartialEq)]
#[ts(export, export_to = ".generated/Redirect.ts")]
pub struct Redirect {
    pub path: String,
    pub after_ms: u64,
}

#[derive(Serialize, Deserialize, ToSchema, TS, Clone, Debug)]
#[ts(export, export_to = ".generated/WizardResponse.ts")]
pub struct WizardResponse {
    pub state: WizardState,
    /// Where the client should navigate to once the report is submitted
    pub redirect: Option<Redirect>,
}
