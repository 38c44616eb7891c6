use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use super::settings::LlmConfig;
use super::{classify, endpoint, error_body_message, server_url, LmStudioError};
use crate::config::CONFIG;
use crate::utils::http::get_http_client;
use crate::utils::timing::log_llm_timing;

/// Sampling parameters for one prediction. Optional knobs are only present when
/// they move away from their neutral value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionConfig {
    pub temperature: f64,
    pub max_tokens: u32,
    pub context_overflow_policy: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p_sampling: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k_sampling: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl From<&LlmConfig> for PredictionConfig {
    fn from(config: &LlmConfig) -> Self {
        PredictionConfig {
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            context_overflow_policy: "truncateMiddle",
            top_p_sampling: (config.top_p < 1.0).then_some(config.top_p),
            top_k_sampling: (config.top_k > 0).then_some(config.top_k),
            repeat_penalty: (config.repeat_penalty != 1.0).then_some(config.repeat_penalty),
            seed: u64::try_from(config.seed).ok(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    messages: [ChatMessage<'a>; 2],
    temperature: f64,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    repeat_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: Option<ChatChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub text: String,
    pub model: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LmStudioSession {
    base_url: String,
    model: Option<String>,
    timeout: Duration,
}

impl LmStudioSession {
    pub fn new(host: &str, port: u16, model: Option<&str>, timeout: Duration) -> Self {
        LmStudioSession {
            base_url: server_url(host, port),
            model: model
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string),
            timeout,
        }
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub async fn respond(
        &self,
        system_prompt: &str,
        user_message: &str,
        prediction: &PredictionConfig,
    ) -> Result<Completion, LmStudioError> {
        let payload = ChatRequest {
            model: self.model.as_deref(),
            messages: [
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_message,
                },
            ],
            temperature: prediction.temperature,
            max_tokens: prediction.max_tokens,
            top_p: prediction.top_p_sampling,
            top_k: prediction.top_k_sampling,
            repeat_penalty: prediction.repeat_penalty,
            seed: prediction.seed,
            stream: false,
        };
        let metadata = serde_json::to_value(prediction).ok();
        log_llm_timing(
            "lmstudio",
            self.model.as_deref().unwrap_or("loaded"),
            "respond",
            metadata,
            || async {
                let response = self.post("v1/chat/completions", &payload).await?;
                let body: ChatResponse = response
                    .json()
                    .await
                    .map_err(|err| classify(err, self.timeout))?;
                let model = body.model;
                let text = body
                    .choices
                    .into_iter()
                    .next()
                    .and_then(|choice| choice.message)
                    .and_then(|message| message.content)
                    .ok_or_else(|| {
                        LmStudioError::InvalidResponse("response contained no message".to_string())
                    })?;
                Ok::<_, LmStudioError>(Completion {
                    text: text.trim().to_string(),
                    model,
                })
            },
        )
        .await
    }

    pub async fn unload(&self, instance_id: &str) -> Result<(), LmStudioError> {
        let payload = json!({ "instance_id": instance_id });
        log_llm_timing("lmstudio", instance_id, "unload", None, || async {
            self.post("api/v1/models/unload", &payload).await.map(|_| ())
        })
        .await
    }

    async fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<reqwest::Response, LmStudioError> {
        let url = endpoint(&self.base_url, path)?;
        let response = get_http_client()
            .post(url)
            .timeout(self.timeout)
            .json(payload)
            .send()
            .await
            .map_err(|err| classify(err, self.timeout))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = error_body_message(&body);
            warn!(
                "LM Studio {} failed: status={}, detail={}",
                path,
                status,
                detail.as_deref().unwrap_or("")
            );
            return Err(LmStudioError::HttpStatus {
                status: status.as_u16(),
                detail,
            });
        }
        Ok(response)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Generation {
    pub text: String,
    pub status: Vec<String>,
}

fn failure_hint(err: &LmStudioError) -> Option<&'static str> {
    let text = err.to_string().to_lowercase();
    if text.contains("connection") || text.contains("refused") {
        Some("[HINT] Ensure LM Studio is running with server enabled")
    } else if text.contains("model") {
        Some("[HINT] Load a model in LM Studio first")
    } else {
        None
    }
}

/// Sends the system prompt and variables to LM Studio. Never fails: errors end
/// up in the status trail with an empty text.
pub async fn generate(system_prompt: &str, variables: &str, config: &LlmConfig) -> Generation {
    generate_with_timeout(system_prompt, variables, config, CONFIG.generation_timeout()).await
}

pub async fn generate_with_timeout(
    system_prompt: &str,
    variables: &str,
    config: &LlmConfig,
    timeout: Duration,
) -> Generation {
    let mut status = vec![format!("[LLM] Connecting to {}:{}", config.host, config.port)];
    let session = LmStudioSession::new(&config.host, config.port, Some(&config.model), timeout);
    match session.model() {
        Some(model) => status.push(format!("[LLM] Using model: {model}")),
        None => status.push("[LLM] Using currently loaded model".to_string()),
    }

    let prediction = PredictionConfig::from(config);
    if let Some(seed) = prediction.seed {
        status.push(format!("[LLM] Using seed: {seed}"));
    }
    status.push(format!(
        "[LLM] Generating: temp={:?}, max_tokens={}",
        config.temperature, config.max_tokens
    ));

    let completion = match session.respond(system_prompt, variables, &prediction).await {
        Ok(completion) => completion,
        Err(err) => {
            warn!("LM Studio generation failed: {}", err);
            status.push(format!("[ERROR] {}: {}", err.kind(), err));
            if let Some(hint) = failure_hint(&err) {
                status.push(hint.to_string());
            }
            return Generation {
                text: String::new(),
                status,
            };
        }
    };

    status.push(format!(
        "[LLM] Generated {} characters",
        completion.text.chars().count()
    ));
    info!("LM Studio generated {} characters", completion.text.chars().count());

    if config.unload {
        let instance = session
            .model()
            .map(str::to_string)
            .or_else(|| completion.model.clone());
        let outcome = match instance {
            Some(instance) => session.unload(&instance).await,
            None => Err(LmStudioError::InvalidResponse(
                "server did not report which model answered".to_string(),
            )),
        };
        match outcome {
            Ok(()) => status.push("[LLM] Model unloaded".to_string()),
            Err(err) => status.push(format!("[WARNING] Unload failed: {err}")),
        }
    }

    Generation {
        text: completion.text,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::test_server::{closed_port, CannedServer, Route};
    use serde_json::Value;

    const CHAT_BODY: &str = r#"{"id":"chatcmpl-1","model":"qwen2.5-7b-instruct","choices":[{"index":0,"message":{"role":"assistant","content":"  A weathered sailor squints into the spray.  "}}]}"#;

    fn config_for(server: &CannedServer) -> LlmConfig {
        LlmConfig {
            host: server.host.clone(),
            port: server.port,
            ..LlmConfig::default()
        }
    }

    #[test]
    fn neutral_sampling_values_are_omitted() {
        let prediction = PredictionConfig::from(&LlmConfig::default());
        let value = serde_json::to_value(&prediction).unwrap();
        assert_eq!(value["temperature"], 0.45);
        assert_eq!(value["maxTokens"], 512);
        assert_eq!(value["contextOverflowPolicy"], "truncateMiddle");
        for key in ["topPSampling", "topKSampling", "repeatPenalty", "seed"] {
            assert!(value.get(key).is_none(), "{key} should be omitted");
        }
    }

    #[test]
    fn deviating_sampling_values_are_forwarded() {
        let config = LlmConfig {
            top_p: 0.9,
            top_k: 40,
            repeat_penalty: 1.1,
            seed: 0,
            ..LlmConfig::default()
        };
        let prediction = PredictionConfig::from(&config);
        assert_eq!(prediction.top_p_sampling, Some(0.9));
        assert_eq!(prediction.top_k_sampling, Some(40));
        assert_eq!(prediction.repeat_penalty, Some(1.1));
        assert_eq!(prediction.seed, Some(0));
    }

    #[tokio::test]
    async fn generation_uses_loaded_model_and_unloads_it() {
        let server = CannedServer::start(vec![
            Route::new("POST", "/v1/chat/completions", 200, CHAT_BODY),
            Route::new("POST", "/api/v1/models/unload", 200, r#"{"instance_id":"qwen2.5-7b-instruct"}"#),
        ])
        .await;
        let config = LlmConfig {
            seed: 7,
            ..config_for(&server)
        };

        let generation = generate("system text", "age: NA", &config).await;
        assert_eq!(generation.text, "A weathered sailor squints into the spray.");
        assert_eq!(
            generation.status,
            vec![
                format!("[LLM] Connecting to 127.0.0.1:{}", server.port),
                "[LLM] Using currently loaded model".to_string(),
                "[LLM] Using seed: 7".to_string(),
                "[LLM] Generating: temp=0.45, max_tokens=512".to_string(),
                "[LLM] Generated 42 characters".to_string(),
                "[LLM] Model unloaded".to_string(),
            ]
        );

        let requests = server.requests();
        let chat: Value = serde_json::from_str(&requests[0].body).unwrap();
        assert!(chat.get("model").is_none());
        assert_eq!(chat["messages"][0]["role"], "system");
        assert_eq!(chat["messages"][0]["content"], "system text");
        assert_eq!(chat["messages"][1]["content"], "age: NA");
        assert_eq!(chat["seed"], 7);
        assert_eq!(chat["stream"], false);
        assert!(chat.get("top_p").is_none());

        let unload: Value = serde_json::from_str(&requests[1].body).unwrap();
        assert_eq!(unload["instance_id"], "qwen2.5-7b-instruct");
    }

    #[tokio::test]
    async fn unload_failure_is_only_a_warning() {
        let server = CannedServer::start(vec![Route::new(
            "POST",
            "/v1/chat/completions",
            200,
            CHAT_BODY,
        )])
        .await;
        let config = LlmConfig {
            model: "qwen2.5-7b-instruct".to_string(),
            ..config_for(&server)
        };

        let generation = generate("s", "v", &config).await;
        assert!(!generation.text.is_empty());
        assert!(generation
            .status
            .contains(&"[LLM] Using model: qwen2.5-7b-instruct".to_string()));
        let last = generation.status.last().unwrap();
        assert!(last.starts_with("[WARNING] Unload failed: HTTP error: 404"), "{last}");
    }

    #[tokio::test]
    async fn unload_can_be_disabled() {
        let server = CannedServer::start(vec![Route::new(
            "POST",
            "/v1/chat/completions",
            200,
            CHAT_BODY,
        )])
        .await;
        let config = LlmConfig {
            unload: false,
            ..config_for(&server)
        };
        let generation = generate("s", "v", &config).await;
        assert_eq!(generation.status.last().unwrap(), "[LLM] Generated 42 characters");
        assert_eq!(server.requests().len(), 1);
    }

    #[tokio::test]
    async fn unreachable_server_yields_hint_and_empty_text() {
        let config = LlmConfig {
            port: closed_port().await,
            ..LlmConfig::default()
        };
        let generation = generate("s", "v", &config).await;
        assert!(generation.text.is_empty());
        let n = generation.status.len();
        assert!(generation.status[n - 2].starts_with("[ERROR] ConnectionRefused: "));
        assert_eq!(
            generation.status[n - 1],
            "[HINT] Ensure LM Studio is running with server enabled"
        );
    }

    #[tokio::test]
    async fn missing_model_yields_load_hint() {
        let server = CannedServer::start(vec![Route::new(
            "POST",
            "/v1/chat/completions",
            404,
            r#"{"error":{"message":"No models loaded. Please load a model first."}}"#,
        )])
        .await;
        let generation = generate("s", "v", &config_for(&server)).await;
        assert!(generation.text.is_empty());
        assert_eq!(
            generation.status.last().unwrap(),
            "[HINT] Load a model in LM Studio first"
        );
        assert!(generation
            .status
            .iter()
            .any(|line| line.starts_with("[ERROR] HttpStatus: HTTP error: 404 - No models loaded")));
    }
}
