use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use mindmate_schema::Context;

use crate::state::AppState;

#[derive(Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub symptoms: String,
    #[serde(default)]
    pub behaviors: String,
}

#[derive(Serialize)]
pub struct RecommendResponse {
    pub recommendation: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(get_recommendation))
}

/// "Get Recommendation" click: refresh the tracked context, then run
/// the rule table. Pure lookup; the advisory is displayed, not logged.
async fn get_recommendation(
    State(state): State<AppState>,
    Json(req): Json<RecommendRequest>,
) -> Json<RecommendResponse> {
    let context = Context::new(req.mood, req.symptoms, req.behaviors);
    let recommendation = state.engine.recommend(&context).to_string();

    let mut session = state.session.lock().expect("session lock poisoned");
    session.update_context(context);

    Json(RecommendResponse { recommendation })
}
