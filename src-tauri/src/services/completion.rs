//! Remote text generation
//!
//! A thin client for an OpenAI-compatible chat-completion endpoint
//! (OpenRouter by default). Exactly one request per call, no retries.

use crate::config::{
    COMPLETION_APP_TITLE, COMPLETION_REFERER, MAX_OUTPUT_TOKENS, TEMPERATURE, TOP_P,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a completion produced nothing usable
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("completion request failed with status {0}")]
    Status(u16),

    #[error("no content returned from completion endpoint")]
    EmptyContent,

    #[error("completion transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to parse completion response: {0}")]
    Decode(String),
}

/// Something that can turn a system instruction and a prompt into text
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Return the first choice's raw text content
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, CompletionError>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: Option<ChatMessageResponse>,
}

#[derive(Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

/// Chat-completion client authenticated with a bearer API key
pub struct OpenRouterClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl OpenRouterClient {
    pub fn new(api_key: String, endpoint: String, model: String) -> Self {
        // Transport defaults apply; no explicit timeout.
        let client = reqwest::Client::builder()
            .user_agent(concat!("Nopeify/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client, using defaults: {}", e);
                reqwest::Client::new()
            });

        Self::with_client(client, api_key, endpoint, model)
    }

    /// Use a preconfigured HTTP client
    pub fn with_client(
        client: reqwest::Client,
        api_key: String,
        endpoint: String,
        model: String,
    ) -> Self {
        Self {
            client,
            endpoint,
            model,
            api_key: api_key.trim().to_string(),
        }
    }
}

#[async_trait]
impl CompletionClient for OpenRouterClient {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, CompletionError> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: MAX_OUTPUT_TOKENS,
            temperature: TEMPERATURE,
            top_p: TOP_P,
        };

        tracing::debug!("Requesting completion from {} ({})", self.endpoint, self.model);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header("HTTP-Referer", COMPLETION_REFERER)
            .header("X-Title", COMPLETION_APP_TITLE)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CompletionError::Status(status.as_u16()));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::Decode(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .ok_or(CompletionError::EmptyContent)
    }
}
