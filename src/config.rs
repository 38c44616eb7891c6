use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub lmstudio_host: String,
    pub lmstudio_port: u16,
    pub metadata_timeout_secs: f64,
    pub warmup_timeout_secs: f64,
    pub generation_timeout_secs: u64,
    pub system_prompts_dir: PathBuf,
    pub default_template: String,
}

pub static CONFIG: Lazy<Config> =
    Lazy::new(|| Config::load().expect("Failed to load configuration"));

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .map(|value| value.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(default)
}

fn env_string(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_f64(name: &str, default: f64) -> f64 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value > 0.0)
        .unwrap_or(default)
}

fn env_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(default)
}

fn normalize_host(value: String) -> String {
    let trimmed = value.trim();
    let without_scheme = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"))
        .unwrap_or(trimmed);
    let host = without_scheme.trim_end_matches('/');
    if host.is_empty() {
        warn!("LMSTUDIO_HOST is empty; defaulting to 127.0.0.1");
        return "127.0.0.1".to_string();
    }
    host.to_string()
}

impl Config {
    pub fn load() -> Result<Self> {
        let lmstudio_port = env_u16("LMSTUDIO_PORT", 1234);
        if lmstudio_port == 0 {
            return Err(anyhow!("LMSTUDIO_PORT must be between 1 and 65535"));
        }

        let verbose = env_bool("ZFORGE_VERBOSE", false);
        let default_level = if verbose { "debug" } else { "info" };

        Ok(Config {
            log_level: env_string("LOG_LEVEL", default_level).to_lowercase(),
            lmstudio_host: normalize_host(env_string("LMSTUDIO_HOST", "127.0.0.1")),
            lmstudio_port,
            metadata_timeout_secs: env_f64("LMSTUDIO_METADATA_TIMEOUT_SECS", 5.0),
            warmup_timeout_secs: env_f64("LMSTUDIO_WARMUP_TIMEOUT_SECS", 3.0),
            generation_timeout_secs: env_u64("LMSTUDIO_GENERATION_TIMEOUT_SECS", 300),
            system_prompts_dir: PathBuf::from(env_string(
                "ZFORGE_SYSTEM_PROMPTS_DIR",
                "system_prompts",
            )),
            default_template: env_string("ZFORGE_DEFAULT_TEMPLATE", "v3_system_prompt"),
        })
    }

    pub fn metadata_timeout(&self) -> Duration {
        Duration::from_secs_f64(self.metadata_timeout_secs)
    }

    pub fn warmup_timeout(&self) -> Duration {
        Duration::from_secs_f64(self.warmup_timeout_secs)
    }

    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_scheme_and_trailing_slash_are_stripped() {
        assert_eq!(normalize_host("http://localhost:1234/".to_string()), "localhost:1234");
        assert_eq!(normalize_host(" 10.0.0.5 ".to_string()), "10.0.0.5");
        assert_eq!(normalize_host("".to_string()), "127.0.0.1");
    }
}
