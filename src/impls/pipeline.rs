//! Filter, sort and paginate over in memory record sets
//!
//! Every function here is pure. The screens re-run the pipeline on each state change

use crate::portalapi::types::cases::{
    Case, CategoryFilter, PageMarker, SortOption, StatusFilter,
};
use crate::portalapi::types::resources::{Resource, ResourceTypeFilter};

pub const CASES_PER_PAGE: usize = 5;
pub const RESOURCES_PER_PAGE: usize = 6;

/// One page of matches
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: u32,
    pub total_matches: usize,
    /// Requested page clamped into `1..=max(total_pages, 1)`
    pub current_page: u32,
}

pub fn total_pages(matches: usize, page_size: usize) -> u32 {
    if page_size == 0 {
        return 0;
    }

    matches.div_ceil(page_size) as u32
}

/// Slices out one page of `matches`
pub fn paginate<T>(matches: Vec<T>, page: u32, page_size: usize) -> Page<T> {
    let total_matches = matches.len();
    let total_pages = total_pages(total_matches, page_size);
    let current_page = page.clamp(1, total_pages.max(1));
    let offset = (current_page as usize - 1) * page_size;

    Page {
        items: matches.into_iter().skip(offset).take(page_size).collect(),
        total_pages,
        total_matches,
        current_page,
    }
}

/// Case insensitive substring match on title or description. An empty query matches everything
pub fn matches_text(query: &str, title: &str, description: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let query = query.to_lowercase();

    title.to_lowercase().contains(&query) || description.to_lowercase().contains(&query)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseFilter {
    pub search_query: String,
    pub status: StatusFilter,
    pub category: CategoryFilter,
}

impl CaseFilter {
    pub fn matches_search(&self, case: &Case) -> bool {
        matches_text(&self.search_query, &case.title, &case.description)
    }

    pub fn matches_status(&self, case: &Case) -> bool {
        self.status.status().map_or(true, |s| s == case.status)
    }

    pub fn matches_category(&self, case: &Case) -> bool {
        self.category.category().map_or(true, |c| c == case.category)
    }

    pub fn matches(&self, case: &Case) -> bool {
        self.matches_search(case) && self.matches_status(case) && self.matches_category(case)
    }
}

pub fn sort_cases(cases: &mut [Case], sort: SortOption) {
    match sort {
        SortOption::Newest => cases.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOption::Oldest => cases.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortOption::MostVotes => cases.sort_by(|a, b| b.votes.cmp(&a.votes)),
        SortOption::MostViews => cases.sort_by(|a, b| b.views.cmp(&a.views)),
    }
}

/// Number of pages the cases matching `filter` span
pub fn case_pages(records: &[Case], filter: &CaseFilter, page_size: usize) -> u32 {
    total_pages(
        records.iter().filter(|c| filter.matches(c)).count(),
        page_size,
    )
}

/// Runs filter, sort and paginate for the Cases screen
pub fn run_cases(
    records: &[Case],
    filter: &CaseFilter,
    sort: SortOption,
    page: u32,
    page_size: usize,
) -> Page<Case> {
    let mut matches: Vec<Case> = records
        .iter()
        .filter(|c| filter.matches(c))
        .cloned()
        .collect();

    sort_cases(&mut matches, sort);

    paginate(matches, page, page_size)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceFilter {
    pub search_query: String,
    pub type_filter: ResourceTypeFilter,
    pub category: Option<String>,
}

impl ResourceFilter {
    pub fn matches(&self, resource: &Resource) -> bool {
        let matches_type = self
            .type_filter
            .resource_type()
            .map_or(true, |t| t == resource.r#type);

        let matches_category = self
            .category
            .as_ref()
            .map_or(true, |c| resource.categories.iter().any(|rc| rc == c));

        matches_text(&self.search_query, &resource.title, &resource.description)
            && matches_type
            && matches_category
    }
}

pub fn resource_pages(records: &[Resource], filter: &ResourceFilter, page_size: usize) -> u32 {
    total_pages(
        records.iter().filter(|r| filter.matches(r)).count(),
        page_size,
    )
}

/// Runs filter and paginate for the Resources screen. The catalog keeps its own order
pub fn run_resources(
    records: &[Resource],
    filter: &ResourceFilter,
    page: u32,
    page_size: usize,
) -> Page<Resource> {
    let matches = records
        .iter()
        .filter(|r| filter.matches(r))
        .cloned()
        .collect();

    paginate(matches, page, page_size)
}

/// Page numbers shown by the pagination control
///
/// The first and last page are always shown along with the neighbours of the current page,
/// other pages collapse into at most one gap on each side
pub fn page_window(current: u32, total: u32) -> Vec<PageMarker> {
    let current = current as i64;
    let total_i = total as i64;

    let mut window = Vec::new();

    for number in 1..=total {
        let n = number as i64;

        if n == 1 || n == total_i || (n >= current - 1 && n <= current + 1) {
            window.push(PageMarker::Page { number });
        } else if (n == 2 && current > 3) || (n == total_i - 1 && current < total_i - 2) {
            window.push(PageMarker::Gap);
        }
    }

    window
}
