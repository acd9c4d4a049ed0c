use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub reply: String,
    /// Total turns in the conversation after this exchange.
    pub turns: usize,
}

#[derive(Serialize)]
pub struct ChatError {
    pub error: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(send_message))
}

/// "Send" click. On success the user/assistant pair is appended as a
/// unit; on a completion failure nothing is appended and the caller
/// may simply resubmit.
async fn send_message(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ChatError>)> {
    let message = req.message.trim().to_string();
    if message.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ChatError {
                error: "message is empty".into(),
            }),
        ));
    }

    // Snapshot the context; the session lock is not held across the
    // completion call.
    let context = {
        let session = state.session.lock().expect("session lock poisoned");
        session.context().clone()
    };

    let reply = match state.orchestrator.respond(&message, &context).await {
        Ok(reply) => reply,
        Err(err) => {
            tracing::warn!(error = %err, "completion call failed; conversation unchanged");
            return Err((
                StatusCode::BAD_GATEWAY,
                Json(ChatError {
                    error: err.to_string(),
                }),
            ));
        }
    };

    let turns = {
        let mut session = state.session.lock().expect("session lock poisoned");
        session.record_exchange(&message, &reply);
        session.log().len()
    };

    Ok(Json(ChatResponse { reply, turns }))
}
