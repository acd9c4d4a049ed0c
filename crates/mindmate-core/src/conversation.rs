//! Append-only conversation transcript.

use mindmate_schema::{Role, Turn};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ordered sequence of turns; insertion order is conversation order.
/// Grows by exactly one user/assistant pair per successful chat
/// submission. Both turns are created and stored before `append`
/// returns, so a reader holding the log never observes a half-pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ConversationLog {
    turns: Vec<Turn>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one user/assistant pair as a unit. Returns the ids of
    /// the two new turns.
    pub fn append(
        &mut self,
        user_text: impl Into<String>,
        assistant_text: impl Into<String>,
    ) -> (Uuid, Uuid) {
        let user = Turn::user(user_text);
        let assistant = Turn::assistant(assistant_text);
        let ids = (user.id, assistant.id);
        self.turns.push(user);
        self.turns.push(assistant);
        ids
    }

    /// Snapshot for the renderer.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Holds by construction; exposed so tests can assert it directly.
    pub fn is_well_formed(&self) -> bool {
        self.turns.len() % 2 == 0
            && self.turns.iter().enumerate().all(|(i, turn)| {
                let expected = if i % 2 == 0 { Role::User } else { Role::Assistant };
                turn.role == expected
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let log = ConversationLog::new();
        assert!(log.is_empty());
        assert!(log.is_well_formed());
    }

    #[test]
    fn n_appends_produce_2n_alternating_turns() {
        let mut log = ConversationLog::new();
        for i in 0..5 {
            log.append(format!("question {i}"), format!("answer {i}"));
        }
        assert_eq!(log.len(), 10);
        assert!(log.is_well_formed());
        // Submission order is preserved.
        assert_eq!(log.turns()[0].content, "question 0");
        assert_eq!(log.turns()[9].content, "answer 4");
    }

    #[test]
    fn append_returns_ids_of_the_new_pair() {
        let mut log = ConversationLog::new();
        let (user_id, assistant_id) = log.append("hi", "hello");
        assert_eq!(log.turns()[0].id, user_id);
        assert_eq!(log.turns()[1].id, assistant_id);
        assert_ne!(user_id, assistant_id);
    }

    #[test]
    fn serde_roundtrip_preserves_order_roles_content_ids() {
        let mut log = ConversationLog::new();
        log.append("How do I deal with stress?", "Try deep breathing.");
        log.append("And insomnia?", "Keep a regular sleep schedule.");

        let json = serde_json::to_string(&log).unwrap();
        let back: ConversationLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, log);
        assert!(back.is_well_formed());
    }
}
