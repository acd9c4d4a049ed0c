use axum::{extract::State, routing::get, Json, Router};

use mindmate_schema::Turn;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_conversation))
}

/// Full ordered transcript snapshot; the UI re-renders it wholesale.
async fn get_conversation(State(state): State<AppState>) -> Json<Vec<Turn>> {
    let session = state.session.lock().expect("session lock poisoned");
    Json(session.log().turns().to_vec())
}
