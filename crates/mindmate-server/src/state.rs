use std::sync::{Arc, Mutex};

use mindmate_core::{ChatOrchestrator, RecommendationEngine, Session};

/// Shared application state accessible from all route handlers.
///
/// One session per process: this is a single-user tool. The session
/// mutex is never held across an await; handlers snapshot the context,
/// await the completion call, then lock once more to append the pair.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<Session>>,
    pub orchestrator: Arc<ChatOrchestrator>,
    pub engine: Arc<RecommendationEngine>,
}

impl AppState {
    pub fn new(orchestrator: ChatOrchestrator, engine: RecommendationEngine) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::new())),
            orchestrator: Arc::new(orchestrator),
            engine: Arc::new(engine),
        }
    }
}
