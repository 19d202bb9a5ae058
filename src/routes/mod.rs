// src/routes/mod.rs
pub mod conversation;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use conversation::{interact_handler, start_handler};
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(start_handler))
        .route("/interact", post(interact_handler))
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
}
