//! Axum route handlers for the Website API.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::state::AppState;
use crate::website::generator::generate_website;

#[derive(Debug, Deserialize)]
pub struct GenerateWebsiteRequest {
    #[serde(default)]
    pub history: Vec<Value>,
    pub upload_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateWebsiteResponse {
    pub path: String,
}

/// POST /api/v1/website
pub async fn handle_generate_website(
    State(state): State<AppState>,
    Json(request): Json<GenerateWebsiteRequest>,
) -> Result<Json<GenerateWebsiteResponse>, AppError> {
    let upload_path = request
        .upload_id
        .as_deref()
        .and_then(|id| state.uploads.resolve(id));

    let path = generate_website(
        state.llm.as_ref(),
        &state.website_path,
        &request.history,
        upload_path,
    )
    .await?;

    Ok(Json(GenerateWebsiteResponse {
        path: path.display().to_string(),
    }))
}

/// GET /api/v1/website
///
/// Serves the most recently generated site for download.
pub async fn handle_download_website(State(state): State<AppState>) -> Result<Response, AppError> {
    let html = match tokio::fs::read_to_string(&state.website_path).await {
        Ok(html) => html,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(AppError::NotFound(
                "No website has been generated yet".to_string(),
            ))
        }
        Err(e) => return Err(AppError::Io(e)),
    };

    Ok((
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"index.html\""),
        ],
        html,
    )
        .into_response())
}
