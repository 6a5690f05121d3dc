//! Chat-completion provider client. One trait seam, one real client, and
//! mock implementations for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::DiagnosticConfig;
use crate::pipeline::DiagnosticError;

/// Per-call parameters for a chat completion.
#[derive(Debug, Clone, Copy)]
pub struct CompletionParams<'a> {
    pub model: &'a str,
    pub temperature: f32,
    pub max_output_tokens: u32,
    /// Ask the provider for strict machine-parseable JSON output.
    pub json_mode: bool,
}

/// Chat-completion provider abstraction (allows mocking).
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Perform one completion: system instruction + user prompt in, raw
    /// response text out. Exactly one upstream attempt, no internal retry.
    async fn complete(
        &self,
        system: &str,
        user: &str,
        params: CompletionParams<'_>,
    ) -> Result<String, DiagnosticError>;
}

/// OpenAI-compatible chat-completions client.
pub struct OpenAiClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
    timeout_secs: u64,
}

impl OpenAiClient {
    /// Build a client from configuration. Returns `Unconfigured` when no
    /// credential is present; callers are expected to check
    /// [`DiagnosticConfig::is_configured`] first and route to the fallback
    /// generator instead.
    pub fn from_config(config: &DiagnosticConfig) -> Result<Self, DiagnosticError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or(DiagnosticError::Unconfigured)?;

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DiagnosticError::Transport(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            client,
            timeout_secs: config.timeout_secs,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

/// Request body for POST /chat/completions
#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// Provider error body: {"error": {"message", "type", "code"}}
#[derive(Deserialize, Default)]
struct ProviderErrorBody {
    #[serde(default)]
    error: ProviderErrorDetail,
}

#[derive(Deserialize, Default)]
struct ProviderErrorDetail {
    #[serde(default)]
    message: String,
    #[serde(default)]
    code: Option<String>,
}

#[async_trait]
impl ChatProvider for OpenAiClient {
    async fn complete(
        &self,
        system: &str,
        user: &str,
        params: CompletionParams<'_>,
    ) -> Result<String, DiagnosticError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatCompletionRequest {
            model: params.model,
            messages: vec![
                ChatMessage { role: "system", content: system },
                ChatMessage { role: "user", content: user },
            ],
            temperature: params.temperature,
            max_tokens: params.max_output_tokens,
            response_format: params
                .json_mode
                .then_some(ResponseFormat { format_type: "json_object" }),
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DiagnosticError::Transport(format!(
                        "request timed out after {}s",
                        self.timeout_secs
                    ))
                } else {
                    DiagnosticError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body: ProviderErrorBody = response.json().await.unwrap_or_default();
            return Err(classify_http_failure(status.as_u16(), &body));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| DiagnosticError::Transport(e.to_string()))?;

        match parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
        {
            Some(content) if !content.trim().is_empty() => Ok(content),
            _ => Err(DiagnosticError::EmptyResponse),
        }
    }
}

/// Map an upstream HTTP failure onto the closed error taxonomy.
fn classify_http_failure(status: u16, body: &ProviderErrorBody) -> DiagnosticError {
    match status {
        401 | 403 => DiagnosticError::InvalidCredential,
        429 if body.error.code.as_deref() == Some("insufficient_quota") => {
            DiagnosticError::QuotaExceeded
        }
        429 => DiagnosticError::RateLimited,
        _ => DiagnosticError::Transport(format!(
            "provider returned status {status}: {}",
            body.error.message
        )),
    }
}

/// Mock provider for testing — returns a configurable response and counts
/// calls, so tests can assert the network seam was never touched.
pub struct MockChatProvider {
    response: Result<String, fn() -> DiagnosticError>,
    call_count: AtomicUsize,
}

impl MockChatProvider {
    pub fn returning(response: &str) -> Self {
        Self {
            response: Ok(response.to_string()),
            call_count: AtomicUsize::new(0),
        }
    }

    pub fn failing(make_error: fn() -> DiagnosticError) -> Self {
        Self {
            response: Err(make_error),
            call_count: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    async fn complete(
        &self,
        _system: &str,
        _user: &str,
        _params: CompletionParams<'_>,
    ) -> Result<String, DiagnosticError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(make_error) => Err(make_error()),
        }
    }
}
