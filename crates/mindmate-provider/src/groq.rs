use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{CompletionProvider, CompletionRequest, RemoteError};

/// Default Groq OpenAI-compatible endpoint.
/// https://console.groq.com/docs/api
pub const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Model the hosted app pins to.
pub const DEFAULT_MODEL: &str = "llama-3.1-70b-versatile";

/// Environment variable holding the Groq credential.
pub const GROQ_API_KEY_ENV: &str = "GROQ_API_KEY";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Chat-completions client for Groq (or any OpenAI-compatible base URL).
#[derive(Debug, Clone)]
pub struct GroqProvider {
    client: reqwest::Client,
    api_key: String,
    api_base: String,
    timeout_secs: u64,
}

impl GroqProvider {
    pub fn new(api_key: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self::with_timeout(api_key, api_base, DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(
        api_key: impl Into<String>,
        api_base: impl Into<String>,
        timeout_secs: u64,
    ) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            timeout_secs,
        }
    }

    /// Build a provider from the process environment (`GROQ_API_KEY`).
    pub fn from_env() -> Result<Self, RemoteError> {
        let api_key = std::env::var(GROQ_API_KEY_ENV)
            .map_err(|_| RemoteError::Connect(format!("{GROQ_API_KEY_ENV} is not set")))?;
        Ok(Self::new(api_key, GROQ_API_BASE))
    }

    pub(crate) fn to_api_request(request: &CompletionRequest) -> ApiRequest {
        let mut messages = Vec::new();
        if let Some(system) = &request.system {
            messages.push(ApiMessage {
                role: "system".to_string(),
                content: system.clone(),
            });
        }
        messages.push(ApiMessage {
            role: "user".to_string(),
            content: request.prompt.clone(),
        });
        ApiRequest {
            model: request.model.clone(),
            messages,
            max_tokens: Some(request.max_tokens),
        }
    }
}

#[async_trait]
impl CompletionProvider for GroqProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<String, RemoteError> {
        let url = format!("{}/chat/completions", self.api_base);
        let payload = Self::to_api_request(&request);
        tracing::debug!(model = %request.model, "sending completion request");

        let resp = match self
            .client
            .post(url)
            .header("authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(&payload)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) if e.is_timeout() => return Err(RemoteError::Timeout(self.timeout_secs)),
            Err(e) if e.is_connect() => return Err(RemoteError::Connect(e.to_string())),
            Err(e) => return Err(RemoteError::Connect(e.to_string())),
        };

        let status = resp.status();
        if status != StatusCode::OK {
            let text = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&text)
                .map(|env| env.error.message)
                .unwrap_or(text);
            return Err(RemoteError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: ApiResponse = resp
            .json()
            .await
            .map_err(|e| RemoteError::Malformed(e.to_string()))?;
        to_completion_text(body)
    }
}

fn to_completion_text(body: ApiResponse) -> Result<String, RemoteError> {
    let choice = body
        .choices
        .first()
        .ok_or_else(|| RemoteError::Malformed("empty choices".into()))?;
    let text = choice.message.content.clone().unwrap_or_default();
    if text.is_empty() {
        return Err(RemoteError::Malformed("empty completion content".into()));
    }
    Ok(text)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ApiRequest {
    pub model: String,
    pub messages: Vec<ApiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ApiMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiResponse {
    pub choices: Vec<ApiChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiChoice {
    pub message: ApiAssistantMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiAssistantMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub message: String,
}
