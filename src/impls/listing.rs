//! Screen state reducers for the case list and the resource catalog

use super::pipeline::{
    case_pages, page_window, resource_pages, run_cases, run_resources, CaseFilter,
    ResourceFilter, CASES_PER_PAGE, RESOURCES_PER_PAGE,
};
use super::votes::displayed_votes;
use crate::impls::catalog;
use crate::portalapi::types::cases::{
    ActiveFilter, Case, CaseCard, CaseListAction, CaseListState, CasePage, CategoryFilter,
    SortOption, StatusFilter, Vote,
};
use crate::portalapi::types::resources::{
    Resource, ResourceCard, ResourceListAction, ResourceListState, ResourcePage,
    ResourceTypeFilter,
};

impl CaseListState {
    pub fn filter(&self) -> CaseFilter {
        CaseFilter {
            search_query: self.search_query.clone(),
            status: self.status_filter,
            category: self.category_filter,
        }
    }

    /// Applies one user action. `records` is needed to bound page jumps
    pub fn apply(mut self, action: CaseListAction, records: &[Case]) -> Self {
        match action {
            CaseListAction::SetSearch { query } => {
                self.search_query = query;
                self.page = 1;
            }
            CaseListAction::ClearSearch => {
                self.search_query.clear();
                self.page = 1;
            }
            CaseListAction::SetStatus { status } => {
                self.status_filter = status;
                self.page = 1;
            }
            CaseListAction::SetCategory { category } => {
                self.category_filter = category;
                self.page = 1;
            }
            CaseListAction::SetSort { sort } => {
                self.sort = sort;
            }
            CaseListAction::GoToPage { page } => {
                let total = case_pages(records, &self.filter(), CASES_PER_PAGE);

                if (1..=total).contains(&page) {
                    self.page = page;
                }
            }
            CaseListAction::ResetFilters => {
                self.search_query.clear();
                self.status_filter = StatusFilter::All;
                self.category_filter = CategoryFilter::All;
                self.sort = SortOption::Newest;
                self.page = 1;
            }
            CaseListAction::Vote { case_id, direction } => {
                let vote = self
                    .local_votes
                    .get(&case_id)
                    .copied()
                    .unwrap_or_default()
                    .toggle(direction);

                if vote == Vote::None {
                    self.local_votes.remove(&case_id);
                } else {
                    self.local_votes.insert(case_id, vote);
                }
            }
        }

        self
    }

    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        let mut filters = Vec::new();

        if !self.search_query.is_empty() {
            filters.push(ActiveFilter::Search {
                query: self.search_query.clone(),
            });
        }

        if let Some(status) = self.status_filter.status() {
            filters.push(ActiveFilter::Status { status });
        }

        if let Some(category) = self.category_filter.category() {
            filters.push(ActiveFilter::Category { category });
        }

        filters
    }

    /// Runs the pipeline over `records` for the current state
    pub fn page(&self, records: &[Case]) -> CasePage {
        let page = run_cases(records, &self.filter(), self.sort, self.page, CASES_PER_PAGE);

        let cases = page
            .items
            .into_iter()
            .map(|case| {
                let vote = self.local_votes.get(&case.id).copied().unwrap_or_default();

                CaseCard {
                    displayed_votes: displayed_votes(case.votes, vote),
                    vote,
                    status_label: case.status.label().to_string(),
                    case,
                }
            })
            .collect();

        CasePage {
            cases,
            total_pages: page.total_pages,
            total_matches: page.total_matches,
            current_page: page.current_page,
            page_window: page_window(page.current_page, page.total_pages),
            active_filters: self.active_filters(),
            sort_label: self.sort.label().to_string(),
            sort_descending: self.sort.descending(),
        }
    }

    /// Like [`page`](Self::page) but also moves `self.page` to the page shown
    pub fn render(mut self, records: &[Case]) -> (Self, CasePage) {
        let page = self.page(records);
        self.page = page.current_page;
        (self, page)
    }
}

impl ResourceListState {
    pub fn filter(&self) -> ResourceFilter {
        ResourceFilter {
            search_query: self.search_query.clone(),
            type_filter: self.type_filter,
            category: self.category.clone(),
        }
    }

    pub fn apply(mut self, action: ResourceListAction, records: &[Resource]) -> Self {
        match action {
            ResourceListAction::SetSearch { query } => {
                self.search_query = query;
                self.page = 1;
            }
            ResourceListAction::ClearSearch => {
                self.search_query.clear();
                self.page = 1;
            }
            ResourceListAction::SetType { type_filter } => {
                self.type_filter = type_filter;
                self.page = 1;
            }
            ResourceListAction::SetCategory { category } => {
                // "All" is what the category picker sends for no filter
                self.category = category.filter(|c| c != "All");
                self.page = 1;
            }
            ResourceListAction::GoToPage { page } => {
                let total = resource_pages(records, &self.filter(), RESOURCES_PER_PAGE);

                if (1..=total).contains(&page) {
                    self.page = page;
                }
            }
            ResourceListAction::ToggleBookmark { id } => {
                if self.bookmarks.remove(&id) != Some(true) {
                    self.bookmarks.insert(id, true);
                }
            }
            ResourceListAction::ResetFilters => {
                self.search_query.clear();
                self.type_filter = ResourceTypeFilter::All;
                self.category = None;
                self.page = 1;
            }
        }

        self
    }

    pub fn page(&self, records: &[Resource]) -> ResourcePage {
        let page = run_resources(records, &self.filter(), self.page, RESOURCES_PER_PAGE);

        let resources = page
            .items
            .into_iter()
            .map(|resource| ResourceCard {
                is_bookmarked: self.bookmarks.get(&resource.id).copied().unwrap_or(false),
                resource,
            })
            .collect();

        ResourcePage {
            resources,
            total_pages: page.total_pages,
            total_matches: page.total_matches,
            current_page: page.current_page,
            page_window: page_window(page.current_page, page.total_pages),
            all_categories: catalog::all_categories(),
        }
    }

    pub fn render(mut self, records: &[Resource]) -> (Self, ResourcePage) {
        let page = self.page(records);
        self.page = page.current_page;
        (self, page)
    }
}
