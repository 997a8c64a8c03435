use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionGateway;
use crate::uploads::UploadStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Completion provider. Default: `LlmClient`; tests inject a stub.
    pub llm: Arc<dyn CompletionGateway>,
    pub uploads: UploadStore,
    /// Fixed artifact path; every website generation overwrites it.
    pub website_path: PathBuf,
}

impl AppState {
    pub fn new(config: &Config, llm: Arc<dyn CompletionGateway>) -> Self {
        Self {
            llm,
            uploads: UploadStore::new(config.upload_dir.clone()),
            website_path: config.website_path(),
        }
    }
}
