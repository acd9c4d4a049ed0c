//! Chat decision sequence: greeting short-circuit, topic gate,
//! then a single completion call.
//!
//! Gating runs BEFORE the completion call: an off-topic message gets
//! the fixed redirect and never reaches the provider, so no quota is
//! spent on an answer that would be discarded.

use std::sync::Arc;

use mindmate_provider::{CompletionProvider, CompletionRequest, RemoteError};
use mindmate_schema::Context;

use crate::topic::TopicGate;

/// Messages answered with the canned greeting, compared against the
/// trimmed, lower-cased input.
pub const GREETINGS: &[&str] = &["hi", "hello", "hey"];

pub const GREETING_REPLY: &str =
    "Hi! How can I help you? I'm your assistant to give you healthy tips.";

pub const REDIRECT_REPLY: &str =
    "I'm your health assistant. Please ask me something related to health, and I'll do my best to help!";

pub const SYSTEM_PROMPT: &str = "You are MindMate, a healthcare assistance chatbot focused on mental health and well-being. \
Keep answers concise, under 300 words. \
If the user asks about something unrelated to health, politely redirect them back to health topics.";

pub struct ChatOrchestrator {
    provider: Arc<dyn CompletionProvider>,
    gate: TopicGate,
    model: String,
}

impl ChatOrchestrator {
    pub fn new(provider: Arc<dyn CompletionProvider>, model: impl Into<String>) -> Self {
        Self::with_gate(provider, TopicGate::default(), model)
    }

    pub fn with_gate(
        provider: Arc<dyn CompletionProvider>,
        gate: TopicGate,
        model: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            gate,
            model: model.into(),
        }
    }

    /// Produce one assistant reply for `message` under `ctx`. Fails
    /// only when the completion collaborator fails; the error is
    /// propagated unchanged and nothing is recorded here — the caller
    /// owns the conversation log.
    pub async fn respond(&self, message: &str, ctx: &Context) -> Result<String, RemoteError> {
        let trimmed = message.trim();

        if GREETINGS.contains(&trimmed.to_lowercase().as_str()) {
            tracing::debug!("greeting short-circuit");
            return Ok(GREETING_REPLY.to_string());
        }

        if !self.gate.is_in_domain(trimmed) {
            tracing::debug!("off-domain message, returning redirect without a completion call");
            return Ok(REDIRECT_REPLY.to_string());
        }

        let request = CompletionRequest::new(
            self.model.clone(),
            Some(SYSTEM_PROMPT.to_string()),
            compose_prompt(trimmed, ctx),
        );
        let reply = self.provider.complete(request).await?;
        tracing::info!(chars = reply.len(), "completion reply received");
        Ok(reply)
    }
}

/// Embed the tracked context alongside the question so the model can
/// tailor its answer. Blank context fields are omitted.
pub fn compose_prompt(message: &str, ctx: &Context) -> String {
    let mut prompt = String::new();
    if !ctx.is_empty() {
        prompt.push_str("The user is tracking the following:\n");
        for (label, value) in [
            ("Mood", &ctx.mood),
            ("Symptoms", &ctx.symptoms),
            ("Behaviors", &ctx.behaviors),
        ] {
            if !value.trim().is_empty() {
                prompt.push_str(&format!("- {label}: {}\n", value.trim()));
            }
        }
        prompt.push('\n');
    }
    prompt.push_str(message);
    prompt
}
