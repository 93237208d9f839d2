// src/backend.rs

use reqwest::Client;
use std::time::{Duration, Instant};

use crate::config::AppConfig;
use crate::errors::{RelayError, Result};
use crate::models::ForwardPayload;

/// Upper bound on waiting for an image to be generated.
pub const GENERATE_TIMEOUT: Duration = Duration::from_secs(120);

/// Upper bound on the backend health probe.
pub const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for the Colab image-generation backend. Holds a pooled
/// `reqwest::Client`; cloning is cheap and shares the pool.
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
}

impl BackendClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Forwards a generation payload to `{backend}/generate` and returns
    /// the base64 image string from the backend's response.
    pub async fn generate(&self, config: &AppConfig, payload: &ForwardPayload) -> Result<String> {
        let url = format!("{}/generate", config.backend_base());

        println!("📡 Forwarding generation to: {}", url);

        let start = Instant::now();

        let resp = self
            .client
            .post(&url)
            .timeout(GENERATE_TIMEOUT)
            .json(payload)
            .send()
            .await
            .map_err(RelayError::from_transport)?;

        let status = resp.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        println!("📥 Backend response status: {} ({}ms)", status, latency_ms);

        // Only a plain 200 counts as success; anything else is surfaced
        // to the client as a backend error.
        if status != reqwest::StatusCode::OK {
            return Err(RelayError::BackendStatus {
                status: status.as_u16(),
            });
        }

        let body: serde_json::Value = resp.json().await.map_err(RelayError::from_transport)?;

        let image = body
            .get("image")
            .and_then(|v| v.as_str())
            .ok_or_else(|| RelayError::MissingImage(body.to_string()))?;

        Ok(image.to_string())
    }

    /// Probes `{backend}/health`. Any failure at all, timeout included,
    /// reads as "not connected".
    pub async fn is_healthy(&self, config: &AppConfig) -> bool {
        let url = format!("{}/health", config.backend_base());

        match self
            .client
            .get(&url)
            .timeout(HEALTH_TIMEOUT)
            .send()
            .await
        {
            Ok(resp) => resp.status() == reqwest::StatusCode::OK,
            Err(e) => {
                log::debug!("Backend health probe failed: {}", e);
                false
            }
        }
    }
}
