//! Fixtures and fakes shared by the unit tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};

use super::analyzer::MessageAnalyzer;
use super::errors::PortalError;
use super::store::CaseStore;
use crate::portalapi::types::cases::{Case, CaseCategory, CaseStatus};
use crate::portalapi::types::report::NewCase;

/// A case created `minute` minutes after a fixed base time
pub fn case(
    id: &str,
    category: CaseCategory,
    status: CaseStatus,
    votes: i64,
    views: i64,
    minute: i64,
) -> Case {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    Case {
        id: id.to_string(),
        title: format!("Case {}", id),
        description: format!("Report number {}", id),
        category,
        location: None,
        date: None,
        organization: None,
        individuals: None,
        status,
        votes,
        comments: 0,
        views,
        progress: 0,
        created_at: base + Duration::minutes(minute),
        updated_at: None,
        updates: Vec::new(),
    }
}

/// `n` cases spread over every category and status, with shuffled counters
pub fn cases(n: usize) -> Vec<Case> {
    (0..n)
        .map(|i| {
            case(
                &i.to_string(),
                CaseCategory::ALL[i % CaseCategory::ALL.len()],
                CaseStatus::ALL[(i / 2) % CaseStatus::ALL.len()],
                ((i * 37) % 11) as i64,
                ((i * 53) % 17) as i64,
                ((i * 7) % 13) as i64,
            )
        })
        .collect()
}

/// In memory store. Fails every call when `failing` is set
#[derive(Default)]
pub struct MemoryStore {
    pub cases: Mutex<Vec<Case>>,
    pub failing: bool,
    pub insert_calls: AtomicUsize,
}

impl MemoryStore {
    pub fn with_cases(cases: Vec<Case>) -> Self {
        Self {
            cases: Mutex::new(cases),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    pub fn len(&self) -> usize {
        self.cases.lock().unwrap().len()
    }
}

#[async_trait]
impl CaseStore for MemoryStore {
    async fn list_cases(&self) -> Result<Vec<Case>, PortalError> {
        if self.failing {
            return Err(PortalError::Transport("connection refused".into()));
        }

        let mut cases = self.cases.lock().unwrap().clone();
        cases.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(cases)
    }

    async fn insert_case(&self, new_case: &NewCase) -> Result<Case, PortalError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);

        if self.failing {
            return Err(PortalError::Transport("connection refused".into()));
        }

        let mut cases = self.cases.lock().unwrap();

        let created = Case {
            id: format!("mem-{}", cases.len() + 1),
            title: new_case.title.clone(),
            description: new_case.description.clone(),
            category: new_case.category,
            location: new_case.location.clone(),
            date: new_case.date.clone(),
            organization: new_case.organization.clone(),
            individuals: new_case.individuals.clone(),
            status: new_case.status,
            votes: new_case.votes,
            comments: new_case.comments,
            views: new_case.views,
            progress: new_case.progress,
            created_at: Utc::now(),
            updated_at: None,
            updates: Vec::new(),
        };

        cases.push(created.clone());
        Ok(created)
    }
}

/// Analyzer answering with a canned text
pub struct EchoAnalyzer;

#[async_trait]
impl MessageAnalyzer for EchoAnalyzer {
    async fn analyze(&self, message: &str) -> Result<String, PortalError> {
        if message.trim().is_empty() {
            return Err(PortalError::EmptyInput(
                super::analyzer::EMPTY_MESSAGE.to_string(),
            ));
        }

        Ok(format!("Analysis of: {}", message))
    }
}
