use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::portalapi::types::cases::{Case, FeaturedTab};
use crate::portalapi::types::resources::Resource;

/// Number of resources featured on the home page
pub const FEATURED_RESOURCES: usize = 3;

static RESOURCES: Lazy<Vec<Resource>> = Lazy::new(|| {
    serde_yaml::from_str(include_str!("../../data/resources.yaml"))
        .expect("embedded resource catalog is invalid")
});

#[derive(Deserialize)]
struct FeaturedCases {
    recent: Vec<Case>,
    popular: Vec<Case>,
}

/// Hand picked sample cases for the home page. These never come from the store
static FEATURED_CASES: Lazy<FeaturedCases> = Lazy::new(|| {
    serde_yaml::from_str(include_str!("../../data/featured_cases.yaml"))
        .expect("embedded featured cases are invalid")
});

pub fn resources() -> &'static [Resource] {
    &RESOURCES
}

pub fn featured_resources() -> &'static [Resource] {
    &RESOURCES[..FEATURED_RESOURCES.min(RESOURCES.len())]
}

/// `All` followed by every tag of the catalog, sorted and deduplicated
pub fn all_categories() -> Vec<String> {
    let tags: BTreeSet<&str> = RESOURCES
        .iter()
        .flat_map(|r| r.categories.iter().map(String::as_str))
        .collect();

    std::iter::once("All")
        .chain(tags)
        .map(str::to_string)
        .collect()
}

pub fn featured_cases(tab: FeaturedTab) -> &'static [Case] {
    match tab {
        FeaturedTab::Recent => &FEATURED_CASES.recent,
        FeaturedTab::Popular => &FEATURED_CASES.popular,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portalapi::types::cases::CaseStatus;

    #[test]
    fn test_catalog_parses() {
        assert_eq!(resources().len(), 10);
        assert_eq!(featured_resources().len(), 3);
        assert_eq!(featured_resources()[0].id, "resource-1");
        assert!(resources().iter().all(|r| !r.categories.is_empty()));
    }

    #[test]
    fn test_all_categories() {
        let categories = all_categories();
        assert_eq!(categories[0], "All");
        assert!(categories.contains(&"Security".to_string()));
        assert!(categories[1..].windows(2).all(|w| w[0] < w[1]));
        // Protection is used twice but listed once
        assert_eq!(categories.iter().filter(|c| *c == "Protection").count(), 1);
    }

    #[test]
    fn test_featured_cases() {
        let recent = featured_cases(FeaturedTab::Recent);
        let popular = featured_cases(FeaturedTab::Popular);

        assert_eq!(recent.len(), 3);
        assert_eq!(popular.len(), 3);
        assert_eq!(popular[0].status, CaseStatus::Resolved);
        assert_eq!(popular[0].progress, 100);
        assert_eq!(recent[0].updates.len(), 2);
    }
}
