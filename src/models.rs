// src/models.rs
use serde::{Deserialize, Serialize};

/// Inbound body for `POST /generate`. Every field is optional; the
/// browser client may omit any of them and no validation is performed.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct GenerationRequest {
    pub model: Option<String>,
    pub lora: Option<String>,
    pub prompt: Option<String>,
    pub seed: Option<i64>,
}

/// Payload forwarded to the backend's `/generate`. Always carries all
/// four keys; absent strings go over the wire as `null`, and a missing
/// seed is forwarded as 0.
#[derive(Serialize, Debug)]
pub struct ForwardPayload {
    pub model: Option<String>,
    pub lora: Option<String>,
    pub prompt: Option<String>,
    pub seed: i64,
}

impl ForwardPayload {
    pub fn from_request(req: &GenerationRequest) -> Self {
        Self {
            model: req.model.clone(),
            lora: req.lora.clone(),
            prompt: req.prompt.clone(),
            seed: req.seed.unwrap_or(0),
        }
    }
}

/// Response shape for `POST /generate`. `image` and `seed` appear only
/// on success, `error` only on failure. A success for a request without
/// a seed still carries an explicit `"seed": null`, hence the nested
/// `Option` on that field.
#[derive(Serialize, Debug, Clone)]
pub struct GenerationResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerationResponse {
    pub fn ok(image: String, seed: Option<i64>) -> Self {
        Self {
            success: true,
            image: Some(image),
            seed: Some(seed),
            error: None,
        }
    }

    pub fn failed(error: String) -> Self {
        Self {
            success: false,
            image: None,
            seed: None,
            error: Some(error),
        }
    }
}
