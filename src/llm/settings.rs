use serde::{Deserialize, Serialize};
use tracing::warn;

use super::models::{test_connection, ModelCache, CUSTOM_MODEL_OPTION};
use super::server_url;
use crate::config::CONFIG;
use crate::prompts::PromptLibrary;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub host: String,
    pub port: u16,
    pub server_url: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
    pub top_k: u32,
    pub repeat_penalty: f64,
    pub unload: bool,
    pub seed: i64,
    pub system_prompt: String,
    pub system_prompt_template: String,
    pub status: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        LlmConfig {
            host: CONFIG.lmstudio_host.clone(),
            port: CONFIG.lmstudio_port,
            server_url: server_url(&CONFIG.lmstudio_host, CONFIG.lmstudio_port),
            model: String::new(),
            temperature: 0.45,
            max_tokens: 512,
            top_p: 1.0,
            top_k: 0,
            repeat_penalty: 1.0,
            unload: true,
            seed: -1,
            system_prompt: String::new(),
            system_prompt_template: String::new(),
            status: String::new(),
        }
    }
}

impl LlmConfig {
    pub fn parse(raw: Option<&str>) -> LlmConfig {
        let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
            return LlmConfig::default();
        };
        match serde_json::from_str::<LlmConfig>(raw) {
            Ok(config) => config,
            Err(err) => {
                warn!("Ignoring unparsable LLM config: {}", err);
                LlmConfig::default()
            }
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LlmSettingsInput {
    pub system_prompt_template: String,
    pub host: String,
    pub port: u16,
    pub test_connection: bool,
    pub refresh_models: bool,
    pub model_selection: String,
    pub custom_model_name: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
    pub top_k: u32,
    pub repeat_penalty: f64,
    pub unload: bool,
    pub seed: i64,
}

impl Default for LlmSettingsInput {
    fn default() -> Self {
        let defaults = LlmConfig::default();
        LlmSettingsInput {
            system_prompt_template: CONFIG.default_template.clone(),
            host: defaults.host,
            port: defaults.port,
            test_connection: false,
            refresh_models: false,
            model_selection: CUSTOM_MODEL_OPTION.to_string(),
            custom_model_name: String::new(),
            temperature: defaults.temperature,
            max_tokens: defaults.max_tokens,
            top_p: defaults.top_p,
            top_k: defaults.top_k,
            repeat_penalty: defaults.repeat_penalty,
            unload: defaults.unload,
            seed: defaults.seed,
        }
    }
}

impl LlmSettingsInput {
    pub fn clamped(mut self) -> Self {
        self.port = self.port.max(1);
        self.temperature = self.temperature.clamp(0.0, 2.0);
        self.max_tokens = self.max_tokens.clamp(64, 4096);
        self.top_p = self.top_p.clamp(0.0, 1.0);
        self.top_k = self.top_k.min(500);
        self.repeat_penalty = self.repeat_penalty.clamp(0.0, 2.0);
        self.seed = self.seed.clamp(-1, i64::from(i32::MAX));
        self
    }

    fn resolved_model(&self) -> String {
        if self.model_selection == CUSTOM_MODEL_OPTION {
            self.custom_model_name.trim().to_string()
        } else {
            self.model_selection.clone()
        }
    }
}

pub fn model_choices(cache: &ModelCache) -> Vec<String> {
    cache.choices()
}

pub async fn build_llm_config(
    input: LlmSettingsInput,
    cache: &ModelCache,
    prompts: &PromptLibrary,
) -> LlmConfig {
    let input = input.clamped();
    let url = server_url(&input.host, input.port);
    let mut status_lines = Vec::new();

    let system_prompt = prompts.load_or_error_text(&input.system_prompt_template);
    status_lines.push(format!("Template: {}", input.system_prompt_template));

    if input.test_connection {
        let (_, message) = test_connection(&input.host, input.port, CONFIG.metadata_timeout()).await;
        status_lines.push(format!("Connection: {message}"));
    }

    if input.refresh_models {
        let (_, message) = cache.refresh(&url, CONFIG.metadata_timeout()).await;
        status_lines.push(format!("Models: {message}"));
    }

    let status = status_lines.join("\n");

    LlmConfig {
        host: input.host.clone(),
        port: input.port,
        server_url: url,
        model: input.resolved_model(),
        temperature: input.temperature,
        max_tokens: input.max_tokens,
        top_p: input.top_p,
        top_k: input.top_k,
        repeat_penalty: input.repeat_penalty,
        unload: input.unload,
        seed: input.seed,
        system_prompt,
        system_prompt_template: input.system_prompt_template,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::test_server::{CannedServer, Route};
    use std::fs;

    fn library_with(template: &str, body: &str) -> (tempfile::TempDir, PromptLibrary) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(format!("{template}.md")), body).unwrap();
        let library = PromptLibrary::new(dir.path(), template);
        (dir, library)
    }

    #[test]
    fn missing_keys_take_defaults() {
        let config = LlmConfig::parse(Some(r#"{"model":"mistral","temperature":0.8}"#));
        assert_eq!(config.model, "mistral");
        assert_eq!(config.temperature, 0.8);
        assert_eq!(config.max_tokens, 512);
        assert_eq!(config.seed, -1);
        assert!(config.unload);
    }

    #[test]
    fn unparsable_config_falls_back_to_defaults() {
        assert_eq!(LlmConfig::parse(Some("{not json")), LlmConfig::default());
        assert_eq!(LlmConfig::parse(None), LlmConfig::default());
        assert_eq!(LlmConfig::parse(Some("   ")), LlmConfig::default());
    }

    #[test]
    fn out_of_range_widgets_are_clamped() {
        let input = LlmSettingsInput {
            temperature: 3.5,
            max_tokens: 10,
            top_p: 1.7,
            top_k: 9000,
            repeat_penalty: -1.0,
            seed: -20,
            port: 0,
            ..LlmSettingsInput::default()
        }
        .clamped();
        assert_eq!(input.temperature, 2.0);
        assert_eq!(input.max_tokens, 64);
        assert_eq!(input.top_p, 1.0);
        assert_eq!(input.top_k, 500);
        assert_eq!(input.repeat_penalty, 0.0);
        assert_eq!(input.seed, -1);
        assert_eq!(input.port, 1);
    }

    #[tokio::test]
    async fn custom_model_option_uses_free_text_name() {
        let (_dir, library) = library_with("v3_system_prompt", "Expand the YAML.");
        let cache = ModelCache::new();
        let input = LlmSettingsInput {
            custom_model_name: "  my-finetune  ".to_string(),
            ..LlmSettingsInput::default()
        };
        let config = build_llm_config(input, &cache, &library).await;
        assert_eq!(config.model, "my-finetune");
        assert_eq!(config.system_prompt, "Expand the YAML.");
        assert_eq!(config.status, "Template: v3_system_prompt");

        let blank = build_llm_config(LlmSettingsInput::default(), &cache, &library).await;
        assert_eq!(blank.model, "");
    }

    #[tokio::test]
    async fn refresh_and_test_are_reported_and_fill_the_menu() {
        let server = CannedServer::start(vec![Route::new(
            "GET",
            "/v1/models",
            200,
            r#"{"data":[{"id":"gemma-2-9b"}]}"#,
        )])
        .await;
        let (_dir, library) = library_with("portrait", "Portrait prompt.");
        let cache = ModelCache::new();
        let input = LlmSettingsInput {
            system_prompt_template: "portrait".to_string(),
            host: server.host.clone(),
            port: server.port,
            test_connection: true,
            refresh_models: true,
            model_selection: "gemma-2-9b".to_string(),
            ..LlmSettingsInput::default()
        };
        let config = build_llm_config(input, &cache, &library).await;
        assert_eq!(
            config.status,
            "Template: portrait\nConnection: Connected! 1 model(s) available\nModels: Found 1 model(s)"
        );
        assert_eq!(config.model, "gemma-2-9b");
        assert_eq!(config.server_url, server.base_url());
        assert_eq!(model_choices(&cache), vec![CUSTOM_MODEL_OPTION, "gemma-2-9b"]);

        let round_trip = LlmConfig::parse(Some(&config.to_json()));
        assert_eq!(round_trip, config);
    }

    #[tokio::test]
    async fn missing_template_is_reported_in_the_prompt_text() {
        let (_dir, library) = library_with("v3_system_prompt", "x");
        let input = LlmSettingsInput {
            system_prompt_template: "missing".to_string(),
            ..LlmSettingsInput::default()
        };
        let config = build_llm_config(input, &ModelCache::new(), &library).await;
        assert_eq!(config.system_prompt, "[ERROR] Template not found: missing.md");
    }
}
