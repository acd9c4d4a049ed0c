use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a turn in the transcript.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// One message in the conversation. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Turn {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    pub at: DateTime<Utc>,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            at: Utc::now(),
        }
    }
}

/// The user-supplied mood/symptoms/behaviors triple used to condition
/// both the recommendation and the chat prompt. Free-form text,
/// matched case-insensitively; held only for the current session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Context {
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub symptoms: String,
    #[serde(default)]
    pub behaviors: String,
}

impl Context {
    pub fn new(
        mood: impl Into<String>,
        symptoms: impl Into<String>,
        behaviors: impl Into<String>,
    ) -> Self {
        Self {
            mood: mood.into(),
            symptoms: symptoms.into(),
            behaviors: behaviors.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.mood.trim().is_empty()
            && self.symptoms.trim().is_empty()
            && self.behaviors.trim().is_empty()
    }
}
