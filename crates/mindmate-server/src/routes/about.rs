use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct AboutResponse {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(about))
}

/// Static sidebar content.
async fn about() -> Json<AboutResponse> {
    Json(AboutResponse {
        name: "MindMate",
        tagline: "Your Mental Health Companion",
        description: "MindMate helps you track your mood, symptoms, and behaviors. \
            Get personalized recommendations and chat with our mental health \
            chatbot for information and resources.",
    })
}
