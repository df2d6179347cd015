use serde::{Deserialize, Serialize};
use std::{fs::File, io::Write};

use crate::impls::errors::PortalError;
use crate::Error;

pub const DEFAULT_GEMINI_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

/// Hosted case store (a PostgREST endpoint)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct StoreConfig {
    pub url: String,
    pub anon_key: String,
    pub table: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            table: String::from("Cases"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub api_url: String,
    /// Analysis requests fail until this is set
    pub api_key: Option<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            api_url: String::from(DEFAULT_GEMINI_URL),
            api_key: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
    /// Origins allowed to call the portal API. Empty allows any origin
    pub cors_origins: Vec<String>,
    pub frontend_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: String::from("127.0.0.1"),
            port: 3010,
            cors_origins: vec![],
            frontend_url: String::from("http://localhost:8080"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub analyzer: AnalyzerConfig,
    pub server: ServerConfig,
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        // Delete config.yaml.sample if it exists
        if std::path::Path::new("config.yaml.sample").exists() {
            std::fs::remove_file("config.yaml.sample")?;
        }

        // Create config.yaml.sample
        let mut sample = File::create("config.yaml.sample")?;

        // Write default config to config.yaml.sample
        sample.write_all(serde_yaml::to_string(&Config::default())?.as_bytes())?;

        let mut cfg = match std::fs::read_to_string("config.yaml") {
            Ok(raw) => Config::from_yaml(&raw)?,
            Err(e) => {
                log::warn!(
                    "config.yaml could not be loaded ({}), using defaults and environment",
                    e
                );
                Config::default()
            }
        };

        cfg.apply_env(|key| std::env::var(key).ok());
        cfg.validate()?;

        Ok(cfg)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, Error> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Overrides secrets from the environment. Empty values are ignored
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = lookup("SUPABASE_URL") {
            self.store.url = url;
        }

        if let Some(key) = lookup("SUPABASE_ANON_KEY") {
            self.store.anon_key = key;
        }

        if let Some(key) = lookup("GEMINI_API_KEY") {
            self.analyzer.api_key = Some(key);
        }
    }

    pub fn validate(&self) -> Result<(), PortalError> {
        if self.store.url.trim().is_empty() {
            return Err(PortalError::Configuration(
                "store url is not set (SUPABASE_URL)".to_string(),
            ));
        }

        if self.store.anon_key.trim().is_empty() {
            return Err(PortalError::Configuration(
                "store key is not set (SUPABASE_ANON_KEY)".to_string(),
            ));
        }

        if self.store.table.trim().is_empty() {
            return Err(PortalError::Configuration(
                "store table must not be empty".to_string(),
            ));
        }

        if self.analyzer.api_key.is_none() {
            log::warn!("GEMINI_API_KEY is not set, message analysis is disabled");
        }

        Ok(())
    }
}
