use async_trait::async_trait;
use log::{debug, info};
use serde::Deserialize;

use super::errors::PortalError;
use crate::config::StoreConfig;
use crate::portalapi::types::cases::Case;
use crate::portalapi::types::report::NewCase;

/// Persistence for reported cases
#[async_trait]
pub trait CaseStore: Send + Sync {
    /// Every case, newest first
    async fn list_cases(&self) -> Result<Vec<Case>, PortalError>;

    /// Inserts one case and returns the stored row
    async fn insert_case(&self, new_case: &NewCase) -> Result<Case, PortalError>;
}

/// Error body returned by PostgREST
#[derive(Deserialize)]
struct RestError {
    message: Option<String>,
}

/// Cases table behind a Supabase (PostgREST) endpoint
pub struct SupabaseStore {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
    table: String,
}

impl SupabaseStore {
    pub fn new(cfg: &StoreConfig) -> Result<Self, PortalError> {
        if cfg.url.trim().is_empty() || cfg.anon_key.trim().is_empty() {
            return Err(PortalError::Configuration(
                "store url and key are required".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("whistleportal/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PortalError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            base_url: cfg.url.trim_end_matches('/').to_string(),
            anon_key: cfg.anon_key.clone(),
            table: cfg.table.clone(),
        })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    fn request(&self, method: reqwest::Method) -> reqwest::RequestBuilder {
        self.client
            .request(method, self.table_url())
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
    }

    /// Turns a failed response into an error carrying the PostgREST message
    async fn error_for(resp: reqwest::Response, inserting: bool) -> PortalError {
        let status = resp.status();

        let message = resp
            .json::<RestError>()
            .await
            .ok()
            .and_then(|e| e.message)
            .unwrap_or_else(|| format!("store returned {}", status));

        // 400, 409 and 422 mean the row itself was refused
        if inserting && matches!(status.as_u16(), 400 | 409 | 422) {
            PortalError::Validation(message)
        } else {
            PortalError::Transport(message)
        }
    }
}

#[async_trait]
impl CaseStore for SupabaseStore {
    async fn list_cases(&self) -> Result<Vec<Case>, PortalError> {
        debug!("Fetching cases from {}", self.table);

        let resp = self
            .request(reqwest::Method::GET)
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::error_for(resp, false).await);
        }

        let body = resp.text().await?;

        serde_json::from_str(&body).map_err(|e| PortalError::Decode {
            what: "case list",
            reason: e.to_string(),
        })
    }

    async fn insert_case(&self, new_case: &NewCase) -> Result<Case, PortalError> {
        let resp = self
            .request(reqwest::Method::POST)
            .header("Prefer", "return=representation")
            .json(&[new_case])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::error_for(resp, true).await);
        }

        let body = resp.text().await?;

        let rows: Vec<Case> = serde_json::from_str(&body).map_err(|e| PortalError::Decode {
            what: "inserted case",
            reason: e.to_string(),
        })?;

        let created = rows.into_iter().next().ok_or_else(|| PortalError::Decode {
            what: "inserted case",
            reason: "store returned no rows".to_string(),
        })?;

        info!("Stored new case {} in {}", created.id, self.table);

        Ok(created)
    }
}
