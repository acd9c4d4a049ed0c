pub mod about;
pub mod chat;
pub mod conversation;
pub mod recommend;

use axum::Router;

use crate::state::AppState;

pub fn api_router() -> Router<AppState> {
    Router::new()
        .nest("/recommend", recommend::router())
        .nest("/chat", chat::router())
        .nest("/conversation", conversation::router())
        .nest("/about", about::router())
}
