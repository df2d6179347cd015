use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, EnumVariantNames};
use ts_rs::TS;
use utoipa::ToSchema;

use super::cases::PageMarker;

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
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
#[ts(export, export_to = ".generated/ResourceType.ts")]
pub enum ResourceType {
    Article,
    Guide,
    Video,
    CaseStudy,
    Infographic,
}

#[derive(
    Serialize, Deserialize, ToSchema, TS, EnumString, Display, Clone, Copy, Debug, PartialEq, Eq, Default,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
#[ts(export, export_to = ".generated/ResourceTypeFilter.ts")]
pub enum ResourceTypeFilter {
    #[default]
    All,
    Article,
    Guide,
    Video,
    CaseStudy,
    Infographic,
}

impl ResourceTypeFilter {
    pub fn resource_type(&self) -> Option<ResourceType> {
        match self {
            ResourceTypeFilter::All => None,
            ResourceTypeFilter::Article => Some(ResourceType::Article),
            ResourceTypeFilter::Guide => Some(ResourceType::Guide),
            ResourceTypeFilter::Video => Some(ResourceType::Video),
            ResourceTypeFilter::CaseStudy => Some(ResourceType::CaseStudy),
            ResourceTypeFilter::Infographic => Some(ResourceType::Infographic),
        }
    }
}

/// Educational content descriptor from the static catalog
#[derive(Serialize, Deserialize, ToSchema, TS, Clone, Debug, PartialEq)]
#[ts(export, export_to = ".generated/Resource.ts")]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub description: String,
    pub r#type: ResourceType,
    /// Reading (or watching) time in minutes
    pub read_time: Option<u32>,
    pub image_url: String,
    /// Free text tags
    pub categories: Vec<String>,
    pub link: String,
}

#[derive(Serialize, Deserialize, ToSchema, TS, Clone, Debug, PartialEq)]
#[ts(export, export_to = ".generated/ResourceListState.ts")]
pub struct ResourceListState {
    #[serde(default)]
    pub search_query: String,
    #[serde(default)]
    pub type_filter: ResourceTypeFilter,
    /// Category tag to filter on, `None` shows all categories
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "super::cases::first_page")]
    #[ts(as = "Option<u32>", optional)]
    pub page: u32,
    /// Bookmarks of this session, keyed by resource id
    #[serde(default = "default_bookmarks")]
    #[ts(as = "Option<BTreeMap<String, bool>>", optional)]
    pub bookmarks: BTreeMap<String, bool>,
}

fn default_bookmarks() -> BTreeMap<String, bool> {
    BTreeMap::from([("resource-2".to_string(), true)])
}

impl Default for ResourceListState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            type_filter: ResourceTypeFilter::All,
            category: None,
            page: 1,
            bookmarks: default_bookmarks(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, TS, Clone, Debug, PartialEq)]
#[ts(export, export_to = ".generated/ResourceListAction.ts")]
pub enum ResourceListAction {
    SetSearch { query: String },
    ClearSearch,
    SetType { type_filter: ResourceTypeFilter },
    /// `None` clears the category filter
    SetCategory { category: Option<String> },
    GoToPage { page: u32 },
    ToggleBookmark { id: String },
    ResetFilters,
}

#[derive(Serialize, Deserialize, ToSchema, TS, Clone, Debug, PartialEq)]
#[ts(export, export_to = ".generated/ResourceCard.ts")]
pub struct ResourceCard {
    pub resource: Resource,
    pub is_bookmarked: bool,
}

#[derive(Serialize, Deserialize, ToSchema, TS, Clone, Debug)]
#[ts(export, export_to = ".generated/ResourcePage.ts")]
pub struct ResourcePage {
    pub resources: Vec<ResourceCard>,
    pub total_pages: u32,
    pub total_matches: usize,
    pub current_page: u32,
    pub page_window: Vec<PageMarker>,
    /// `All` followed by every tag used in the catalog, sorted
    pub all_categories: Vec<String>,
}

#[derive(Serialize, Deserialize, ToSchema, TS, Clone, Debug)]
#[ts(export, export_to = ".generated/ListResourcesResponse.ts")]
pub struct ListResourcesResponse {
    pub state: ResourceListState,
    pub page: ResourcePage,
}
