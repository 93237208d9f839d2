// src/api/state.rs
use crate::backend::BackendClient;
use crate::config::AppConfig;
use reqwest::Client;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub backend: BackendClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            backend: BackendClient::new(Client::new()),
        }
    }
}
