use std::sync::Arc;

use dotenv::dotenv;
use log::{error, info};

use crate::config::Config;
use crate::impls::analyzer::GeminiAnalyzer;
use crate::impls::store::SupabaseStore;
use crate::portalapi::core::AppState;

mod config;
mod impls;
mod loggy;
mod portalapi;

type Error = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() {
    dotenv().ok();

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "whistleportal=info");
    }

    env_logger::init();
    info!("Starting Whistleportal...");

    let cfg = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    let store = match SupabaseStore::new(&cfg.store) {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to create case store: {}", e);
            std::process::exit(1);
        }
    };

    let analyzer = match GeminiAnalyzer::new(&cfg.analyzer) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            error!("Failed to create message analyzer: {}", e);
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState {
        store: Arc::new(store),
        analyzer: Arc::new(analyzer),
        frontend_url: cfg.server.frontend_url.clone(),
    });

    if let Err(e) = portalapi::server::init_portalapi(state, &cfg.server).await {
        error!("PortalAPI server error: {}", e);
        std::process::exit(1);
    }
}
