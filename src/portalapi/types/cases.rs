use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::{Display, EnumString, EnumVariantNames};
use ts_rs::TS;
use utoipa::ToSchema;

#[derive(
    Serialize,
    Deserialize,
    ToSchema,
    TS,
    EnumString,
    EnumVariantNames,
    Display,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Default,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
#[ts(export, export_to = ".generated/CaseStatus.ts")]
pub enum CaseStatus {
    /// Freshly submitted, nobody has looked at it yet
    #[default]
    New,
    Investigating,
    InProgress,
    Resolved,
    Closed,
}

impl CaseStatus {
    pub const ALL: [CaseStatus; 5] = [
        CaseStatus::New,
        CaseStatus::Investigating,
        CaseStatus::InProgress,
        CaseStatus::Resolved,
        CaseStatus::Closed,
    ];

    /// Human readable label of the status
    pub fn label(&self) -> &'static str {
        match self {
            CaseStatus::New => "New",
            CaseStatus::Investigating => "Investigating",
            CaseStatus::InProgress => "In Progress",
            CaseStatus::Resolved => "Resolved",
            CaseStatus::Closed => "Closed",
        }
    }
}

#[derive(
    Serialize,
    Deserialize,
    ToSchema,
    TS,
    EnumString,
    Display,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
#[ts(export, export_to = ".generated/CaseCategory.ts")]
pub enum CaseCategory {
    Cybersecurity,
    Environmental,
    #[serde(rename = "Financial Fraud")]
    #[strum(serialize = "Financial Fraud")]
    FinancialFraud,
    Healthcare,
    Corruption,
    Safety,
    Bribery,
}

impl CaseCategory {
    pub const ALL: [CaseCategory; 7] = [
        CaseCategory::Cybersecurity,
        CaseCategory::Environmental,
        CaseCategory::FinancialFraud,
        CaseCategory::Healthcare,
        CaseCategory::Corruption,
        CaseCategory::Safety,
        CaseCategory::Bribery,
    ];
}

/// A progress note shown under featured cases
#[derive(Serialize, Deserialize, ToSchema, TS, Clone, Debug, PartialEq)]
#[ts(export, export_to = ".generated/CaseUpdate.ts")]
pub struct CaseUpdate {
    pub date: String,
    pub content: String,
}

/// A submitted report as stored in the `Cases` table
#[derive(Serialize, Deserialize, ToSchema, TS, Clone, Debug, PartialEq)]
#[ts(export, export_to = ".generated/Case.ts")]
pub struct Case {
    /// Store assigned id, either a uuid or a bigint depending on the table
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: CaseCategory,
    pub location: Option<String>,
    /// Incident date as typed by the reporter
    pub date: Option<String>,
    pub organization: Option<String>,
    pub individuals: Option<String>,
    pub status: CaseStatus,
    pub votes: i64,
    pub comments: i64,
    pub views: i64,
    /// Percent, 0 to 100
    #[serde(deserialize_with = "percent")]
    pub progress: u8,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updates: Vec<CaseUpdate>,
}

fn opaque_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

fn percent<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let value = i64::deserialize(deserializer)?;

    if !(0..=100).contains(&value) {
        return Err(serde::de::Error::custom(format!(
            "progress must be between 0 and 100, got {}",
            value
        )));
    }

    Ok(value as u8)
}

#[derive(
    Serialize, Deserialize, ToSchema, TS, EnumString, Display, Clone, Copy, Debug, PartialEq, Eq, Default,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
#[ts(export, export_to = ".generated/StatusFilter.ts")]
pub enum StatusFilter {
    #[default]
    All,
    New,
    Investigating,
    InProgress,
    Resolved,
    Closed,
}

impl StatusFilter {
    /// The status this filter selects, `None` for `all`
    pub fn status(&self) -> Option<CaseStatus> {
        match self {
            StatusFilter::All => None,
            StatusFilter::New => Some(CaseStatus::New),
            StatusFilter::Investigating => Some(CaseStatus::Investigating),
            StatusFilter::InProgress => Some(CaseStatus::InProgress),
            StatusFilter::Resolved => Some(CaseStatus::Resolved),
            StatusFilter::Closed => Some(CaseStatus::Closed),
        }
    }
}

impl From<CaseStatus> for StatusFilter {
    fn from(status: CaseStatus) -> Self {
        match status {
            CaseStatus::New => StatusFilter::New,
            CaseStatus::Investigating => StatusFilter::Investigating,
            CaseStatus::InProgress => StatusFilter::InProgress,
            CaseStatus::Resolved => StatusFilter::Resolved,
            CaseStatus::Closed => StatusFilter::Closed,
        }
    }
}

#[derive(
    Serialize, Deserialize, ToSchema, TS, EnumString, Display, Clone, Copy, Debug, PartialEq, Eq, Default,
)]
#[ts(export, export_to = ".generated/CategoryFilter.ts")]
pub enum CategoryFilter {
    #[default]
    #[serde(rename = "all")]
    #[strum(serialize = "all")]
    All,
    Cybersecurity,
    Environmental,
    #[serde(rename = "Financial Fraud")]
    #[strum(serialize = "Financial Fraud")]
    FinancialFraud,
    Healthcare,
    Corruption,
    Safety,
    Bribery,
}

impl CategoryFilter {
    /// The category this filter selects, `None` for `all`
    pub fn category(&self) -> Option<CaseCategory> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Cybersecurity => Some(CaseCategory::Cybersecurity),
            CategoryFilter::Environmental => Some(CaseCategory::Environmental),
            CategoryFilter::FinancialFraud => Some(CaseCategory::FinancialFraud),
            CategoryFilter::Healthcare => Some(CaseCategory::Healthcare),
            CategoryFilter::Corruption => Some(CaseCategory::Corruption),
            CategoryFilter::Safety => Some(CaseCategory::Safety),
            CategoryFilter::Bribery => Some(CaseCategory::Bribery),
        }
    }
}

impl From<CaseCategory> for CategoryFilter {
    fn from(category: CaseCategory) -> Self {
        match category {
            CaseCategory::Cybersecurity => CategoryFilter::Cybersecurity,
            CaseCategory::Environmental => CategoryFilter::Environmental,
            CaseCategory::FinancialFraud => CategoryFilter::FinancialFraud,
            CaseCategory::Healthcare => CategoryFilter::Healthcare,
            CaseCategory::Corruption => CategoryFilter::Corruption,
            CaseCategory::Safety => CategoryFilter::Safety,
            CaseCategory::Bribery => CategoryFilter::Bribery,
        }
    }
}

#[derive(
    Serialize,
    Deserialize,
    ToSchema,
    TS,
    EnumString,
    EnumVariantNames,
    Display,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Default,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
#[ts(export, export_to = ".generated/SortOption.ts")]
pub enum SortOption {
    #[default]
    Newest,
    Oldest,
    MostVotes,
    MostViews,
}

impl SortOption {
    pub const ALL: [SortOption; 4] = [
        SortOption::Newest,
        SortOption::Oldest,
        SortOption::MostVotes,
        SortOption::MostViews,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::Newest => "Newest",
            SortOption::Oldest => "Oldest",
            SortOption::MostVotes => "Most Votes",
            SortOption::MostViews => "Most Views",
        }
    }

    /// Whether the list is shown largest/latest first
    pub fn descending(&self) -> bool {
        !matches!(self, SortOption::Oldest)
    }
}

/// A session local vote on a case. Never persisted
#[derive(Serialize, Deserialize, ToSchema, TS, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = ".generated/Vote.ts")]
pub enum Vote {
    #[default]
    None,
    Up,
    Down,
}

#[derive(Serialize, Deserialize, ToSchema, TS, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = ".generated/VoteDirection.ts")]
pub enum VoteDirection {
    Up,
    Down,
}

/// Filter state of the Cases screen. The client holds it and sends it back with every query
#[derive(Serialize, Deserialize, ToSchema, TS, Clone, Debug, PartialEq)]
#[ts(export, export_to = ".generated/CaseListState.ts")]
pub struct CaseListState {
    #[serde(default)]
    pub search_query: String,
    #[serde(default)]
    pub status_filter: StatusFilter,
    #[serde(default)]
    pub category_filter: CategoryFilter,
    #[serde(default)]
    pub sort: SortOption,
    #[serde(default = "first_page")]
    #[ts(as = "Option<u32>", optional)]
    pub page: u32,
    /// Votes cast in this session, keyed by case id
    #[serde(default)]
    pub local_votes: BTreeMap<String, Vote>,
}

pub(crate) fn first_page() -> u32 {
    1
}

impl Default for CaseListState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            status_filter: StatusFilter::All,
            category_filter: CategoryFilter::All,
            sort: SortOption::Newest,
            page: 1,
            local_votes: BTreeMap::new(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, TS, Clone, Debug, PartialEq)]
#[ts(export, export_to = ".generated/CaseListAction.ts")]
pub enum CaseListAction {
    /// Set the search query, returns to the first page
    SetSearch { query: String },
    /// Clear the search query, returns to the first page
    ClearSearch,
    /// Returns to the first page
    SetStatus { status: StatusFilter },
    /// Returns to the first page
    SetCategory { category: CategoryFilter },
    /// Change the sort order. The current page is kept
    SetSort { sort: SortOption },
    /// Jump to a page. Ignored if the page does not exist
    GoToPage { page: u32 },
    /// Reset search, filters and sort back to their defaults
    ResetFilters,
    /// Vote on a case (session local)
    Vote {
        case_id: String,
        direction: VoteDirection,
    },
}

/// One entry of the pagination control
#[derive(Serialize, Deserialize, ToSchema, TS, Clone, Debug, PartialEq, Eq)]
#[ts(export, export_to = ".generated/PageMarker.ts")]
pub enum PageMarker {
    Page { number: u32 },
    /// An ellipsis between non adjacent page numbers
    Gap,
}

#[derive(Serialize, Deserialize, ToSchema, TS, Clone, Debug, PartialEq)]
#[ts(export, export_to = ".generated/ActiveFilter.ts")]
pub enum ActiveFilter {
    Search { query: String },
    Status { status: CaseStatus },
    Category { category: CaseCategory },
}

#[derive(Serialize, Deserialize, ToSchema, TS, Clone, Debug, PartialEq)]
#[ts(export, export_to = ".generated/CaseCard.ts")]
pub struct CaseCard {
    pub case: Case,
    /// Stored votes adjusted by the session local vote
    pub displayed_votes: i64,
    pub vote: Vote,
    pub status_label: String,
}

#[derive(Serialize, Deserialize, ToSchema, TS, Clone, Debug)]
#[ts(export, export_to = ".generated/CasePage.ts")]
pub struct CasePage {
    pub cases: Vec<CaseCard>,
    pub total_pages: u32,
    pub total_matches: usize,
    /// The page actually shown, after clamping
    pub current_page: u32,
    pub page_window: Vec<PageMarker>,
    pub active_filters: Vec<ActiveFilter>,
    pub sort_label: String,
    pub sort_descending: bool,
}

#[derive(Serialize, Deserialize, ToSchema, TS, Clone, Debug)]
#[ts(export, export_to = ".generated/ListCasesResponse.ts")]
pub struct ListCasesResponse {
    pub state: CaseListState,
    pub page: CasePage,
}

#[derive(Serialize, Deserialize, ToSchema, TS, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = ".generated/FeaturedTab.ts")]
pub enum FeaturedTab {
    #[default]
    Recent,
    Popular,
}
