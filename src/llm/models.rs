use std::time::Duration;

use parking_lot::RwLock;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info, warn};

use super::{classify, endpoint, server_url, LmStudioError};
use crate::config::CONFIG;
use crate::utils::http::get_http_client;
use crate::utils::timing::log_llm_timing;

pub const CUSTOM_MODEL_OPTION: &str = ">> Custom Model <<";

#[derive(Debug, Deserialize)]
struct ModelsResponse {
    #[serde(default)]
    data: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
struct ModelEntry {
    #[serde(default)]
    id: Option<String>,
}

impl ModelsResponse {
    fn ids(&self) -> Vec<String> {
        self.data
            .iter()
            .filter_map(|entry| entry.id.as_deref())
            .filter(|id| !id.is_empty())
            .map(|id| id.to_string())
            .collect()
    }
}

async fn fetch_models(base_url: &str, timeout: Duration) -> Result<ModelsResponse, LmStudioError> {
    let url = endpoint(base_url, "v1/models")?;
    debug!("Fetching LM Studio models from {}", url);
    let response = get_http_client()
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .map_err(|err| classify(err, timeout))?
        .error_for_status()
        .map_err(|err| classify(err, timeout))?;
    response
        .json::<ModelsResponse>()
        .await
        .map_err(|err| classify(err, timeout))
}

async fn timed_fetch(
    base_url: &str,
    timeout: Duration,
    operation: &str,
) -> Result<ModelsResponse, LmStudioError> {
    log_llm_timing(
        "lmstudio",
        "-",
        operation,
        Some(json!({ "server_url": base_url })),
        || fetch_models(base_url, timeout),
    )
    .await
}

pub async fn list_models(base_url: &str, timeout: Duration) -> (Vec<String>, Option<String>) {
    match timed_fetch(base_url, timeout, "list_models").await {
        Ok(payload) => (payload.ids(), None),
        Err(err) => (Vec::new(), Some(err.to_string())),
    }
}

pub async fn test_connection(host: &str, port: u16, timeout: Duration) -> (bool, String) {
    let url = server_url(host, port);
    match timed_fetch(&url, timeout, "test_connection").await {
        Ok(payload) => (
            true,
            format!("Connected! {} model(s) available", payload.data.len()),
        ),
        Err(err) => (false, err.reachability_message(&url)),
    }
}

#[derive(Debug, Default, Clone)]
struct CacheState {
    models: Vec<String>,
    last_error: Option<String>,
}

/// Model ids from the last successful listing, shared by menus until the next
/// refresh. A failed refresh keeps the previous list and records the error.
#[derive(Debug, Default)]
pub struct ModelCache {
    state: RwLock<CacheState>,
}

impl ModelCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn models(&self) -> Vec<String> {
        self.state.read().models.clone()
    }

    pub fn last_error(&self) -> Option<String> {
        self.state.read().last_error.clone()
    }

    pub fn choices(&self) -> Vec<String> {
        let mut choices = vec![CUSTOM_MODEL_OPTION.to_string()];
        choices.extend(self.models());
        choices
    }

    pub async fn refresh(&self, base_url: &str, timeout: Duration) -> (bool, String) {
        let (models, error) = list_models(base_url, timeout).await;
        let mut state = self.state.write();
        if let Some(error) = error {
            state.last_error = Some(error.clone());
            return (false, error);
        }
        let message = format!("Found {} model(s)", models.len());
        state.models = models;
        state.last_error = None;
        (true, message)
    }

    pub async fn warm_up(&self, host: &str, port: u16) {
        let url = server_url(host, port);
        let (ok, message) = self.refresh(&url, CONFIG.warmup_timeout()).await;
        if ok {
            info!("LM Studio warm-up: {}", message);
        } else {
            warn!("LM Studio model fetch failed: {}", message);
        }
    }
}
