//! Single-user session state: the current context triple plus the
//! conversation log. Constructed at process start and handed to the
//! UI boundary by handle; there is no process-wide singleton.

use mindmate_schema::Context;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::conversation::ConversationLog;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    context: Context,
    log: ConversationLog,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    /// Replace the mood/symptoms/behaviors triple (the "Recommend"
    /// action refreshes it on every click).
    pub fn update_context(&mut self, context: Context) {
        self.context = context;
    }

    /// Record one completed chat exchange. Called only after the
    /// assistant reply is in hand, so a failed completion call never
    /// leaves a dangling user turn.
    pub fn record_exchange(
        &mut self,
        user_text: impl Into<String>,
        assistant_text: impl Into<String>,
    ) -> (Uuid, Uuid) {
        self.log.append(user_text, assistant_text)
    }
}
