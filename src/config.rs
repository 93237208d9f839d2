// src/config.rs
use crate::errors::{RelayError, Result};

/// Base URL used when `COLAB_BACKEND_URL` is not set.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Port the relay binds to when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 5000;

/// High-level application configuration loaded from environment variables.
///
/// The backend URL is typically an ngrok tunnel pointing at a Colab
/// notebook, e.g. `https://something.ngrok-free.dev`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend_url: String,
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let backend_url = std::env::var("COLAB_BACKEND_URL")
            .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());

        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| {
                RelayError::Config(format!("PORT must be a number between 1 and 65535, got '{}'", raw))
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(AppConfig { backend_url, port })
    }

    /// Backend base URL without a trailing slash, safe to join paths onto.
    pub fn backend_base(&self) -> &str {
        self.backend_url.trim_end_matches('/')
    }
}
