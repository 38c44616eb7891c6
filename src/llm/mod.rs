use std::time::Duration;

use serde_json::Value;
use thiserror::Error;
use url::Url;

pub mod lmstudio;
pub mod models;
pub mod settings;

pub use lmstudio::{generate, Generation, PredictionConfig};
pub use models::{list_models, test_connection, ModelCache, CUSTOM_MODEL_OPTION};
pub use settings::{build_llm_config, model_choices, LlmConfig, LlmSettingsInput};

#[derive(Debug, Error)]
pub enum LmStudioError {
    #[error("Connection refused - is LM Studio running with server enabled?")]
    ConnectionRefused,
    #[error("Connection timed out after {}s", format_seconds(.0))]
    Timeout(Duration),
    #[error("HTTP error: {status}{}", detail_suffix(.detail))]
    HttpStatus { status: u16, detail: Option<String> },
    #[error("Invalid response from LM Studio: {0}")]
    InvalidResponse(String),
    #[error("{0}")]
    Request(String),
}

impl LmStudioError {
    pub fn kind(&self) -> &'static str {
        match self {
            LmStudioError::ConnectionRefused => "ConnectionRefused",
            LmStudioError::Timeout(_) => "Timeout",
            LmStudioError::HttpStatus { .. } => "HttpStatus",
            LmStudioError::InvalidResponse(_) => "InvalidResponse",
            LmStudioError::Request(_) => "RequestError",
        }
    }

    pub fn reachability_message(&self, server_url: &str) -> String {
        match self {
            LmStudioError::ConnectionRefused => {
                format!("Cannot connect to {server_url} - is LM Studio running?")
            }
            LmStudioError::Timeout(_) => self.to_string(),
            LmStudioError::HttpStatus { status, .. } => format!("Server error: {status}"),
            other => format!("Error: {other}"),
        }
    }
}

fn format_seconds(duration: &Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs.fract() == 0.0 {
        format!("{secs:.1}")
    } else {
        format!("{secs}")
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(text) if !text.trim().is_empty() => format!(" - {}", text.trim()),
        _ => String::new(),
    }
}

pub(crate) fn classify(err: reqwest::Error, timeout: Duration) -> LmStudioError {
    if err.is_timeout() {
        LmStudioError::Timeout(timeout)
    } else if err.is_connect() {
        LmStudioError::ConnectionRefused
    } else if let Some(status) = err.status() {
        LmStudioError::HttpStatus {
            status: status.as_u16(),
            detail: None,
        }
    } else if err.is_decode() {
        LmStudioError::InvalidResponse(err.to_string())
    } else {
        LmStudioError::Request(err.to_string())
    }
}

pub(crate) fn error_body_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    let Ok(value) = serde_json::from_str::<Value>(trimmed) else {
        let summary: String = trimmed.chars().take(200).collect();
        return Some(summary);
    };
    let error = value.get("error")?;
    error
        .get("message")
        .and_then(|message| message.as_str())
        .or_else(|| error.as_str())
        .map(|message| message.to_string())
}

pub fn server_url(host: &str, port: u16) -> String {
    format!("http://{}:{}", host.trim(), port)
}

pub(crate) fn endpoint(base_url: &str, path: &str) -> Result<Url, LmStudioError> {
    let base = format!("{}/", base_url.trim().trim_end_matches('/'));
    Url::parse(&base)
        .and_then(|url| url.join(path))
        .map_err(|err| LmStudioError::Request(format!("Invalid server URL '{base_url}': {err}")))
}
