pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::chat::handlers::handle_chat;
use crate::state::AppState;
use crate::uploads::handle_upload;
use crate::website::handlers::{handle_download_website, handle_generate_website};

/// Upper bound for a single resume/profile upload.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/chat", post(handle_chat))
        .route(
            "/api/v1/website",
            post(handle_generate_website).get(handle_download_website),
        )
        .route(
            "/api/v1/uploads",
            post(handle_upload).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .with_state(state)
}
