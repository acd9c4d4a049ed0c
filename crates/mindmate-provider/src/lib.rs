pub mod error;
pub mod groq;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use error::{RemoteError, RemoteErrorKind};
pub use groq::{GroqProvider, DEFAULT_MODEL, GROQ_API_BASE, GROQ_API_KEY_ENV};

/// One prompt, one answer. The hosted completion endpoint behind a
/// narrow seam so the core can be tested against a mock.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String, RemoteError>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub system: Option<String>,
    pub prompt: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_max_tokens() -> u32 {
    1024
}

impl CompletionRequest {
    pub fn new(model: impl Into<String>, system: Option<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            system,
            prompt: prompt.into(),
            max_tokens: default_max_tokens(),
        }
    }
}

/// Deterministic echo provider for tests and keyless local runs.
pub struct StubProvider;

#[async_trait]
impl CompletionProvider for StubProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<String, RemoteError> {
        Ok(format!("[stub:{}] {}", request.model, request.prompt))
    }
}
