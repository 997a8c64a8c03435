//! Upload store: keeps uploaded resume/profile files on disk under opaque ids.
//!
//! Clients never send filesystem paths. They send the `upload_id` returned by
//! `save`, and `resolve` maps it back to a path inside the upload directory.
//!
//! Files are only removed when a client replaces its upload by passing the
//! previous id. Uploads that are never replaced stay on disk until the upload
//! directory is cleaned out of band.

use std::path::{Path, PathBuf};

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StoredUpload {
    pub upload_id: String,
    pub filename: String,
}

#[derive(Debug, Clone)]
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Writes the upload under a fresh id, keeping the lower-cased extension so
    /// the extractor can pick a format.
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> std::io::Result<StoredUpload> {
        let upload_id = match sanitized_extension(original_name) {
            Some(ext) => format!("{}.{ext}", Uuid::new_v4()),
            None => Uuid::new_v4().to_string(),
        };

        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(self.root.join(&upload_id), bytes).await?;

        info!(
            "Stored upload '{}' as {} ({} bytes)",
            original_name,
            upload_id,
            bytes.len()
        );

        Ok(StoredUpload {
            upload_id,
            filename: original_name.to_string(),
        })
    }

    /// Maps an id produced by `save` to its path. Malformed ids resolve to `None`.
    pub fn resolve(&self, upload_id: &str) -> Option<PathBuf> {
        let (stem, ext) = match upload_id.split_once('.') {
            Some((stem, ext)) => (stem, Some(ext)),
            None => (upload_id, None),
        };

        Uuid::parse_str(stem).ok()?;
        if let Some(ext) = ext {
            if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
                return None;
            }
        }

        Some(self.root.join(upload_id))
    }

    /// Deletes a previously stored upload. Unknown or malformed ids are ignored.
    pub async fn remove(&self, upload_id: &str) {
        let Some(path) = self.resolve(upload_id) else {
            return;
        };

        match tokio::fs::remove_file(&path).await {
            Ok(()) => info!("Removed replaced upload {upload_id}"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to remove upload {}: {e}", path.display()),
        }
    }
}

/// Multipart text field carrying the upload id being replaced.
const REPLACES_FIELD: &str = "replaces";

/// POST /api/v1/uploads
///
/// Stores the multipart file field as the session's resume/profile document.
/// An optional `replaces` text field names the session's previous upload, which
/// is deleted once the new file is stored.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<StoredUpload>, AppError> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut replaces: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Multipart error: {e}")))?
    {
        if field.name() == Some(REPLACES_FIELD) {
            let previous = field
                .text()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read {REPLACES_FIELD}: {e}")))?;
            replaces = Some(previous.trim().to_string());
        } else if file.is_none() {
            let filename = field.file_name().unwrap_or("unnamed").to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read file: {e}")))?;
            file = Some((filename, bytes.to_vec()));
        }
    }

    let (filename, bytes) =
        file.ok_or_else(|| AppError::Validation("No file provided".to_string()))?;

    let stored = state.uploads.save(&filename, &bytes).await?;
    if let Some(previous) = replaces.filter(|id| *id != stored.upload_id) {
        state.uploads.remove(&previous).await;
    }
    Ok(Json(stored))
}

fn sanitized_extension(name: &str) -> Option<String> {
    let ext = Path::new(name).extension()?.to_str()?.to_ascii_lowercase();
    (!ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric())).then_some(ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitized_extension() {
        assert_eq!(sanitized_extension("Resume.PDF"), Some("pdf".to_string()));
        assert_eq!(sanitized_extension("notes"), None);
        assert_eq!(sanitized_extension("weird.p$f"), None);
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        let store = UploadStore::new(PathBuf::from("uploads"));
        assert!(store.resolve("../etc/passwd").is_none());
        assert!(store.resolve("not-a-uuid.pdf").is_none());
        assert!(store
            .resolve(&format!("{}./../x", Uuid::new_v4()))
            .is_none());
        assert!(store.resolve("").is_none());
    }

    #[test]
    fn test_resolve_accepts_bare_uuid() {
        let store = UploadStore::new(PathBuf::from("uploads"));
        let id = Uuid::new_v4().to_string();
        assert_eq!(store.resolve(&id), Some(PathBuf::from("uploads").join(&id)));
    }

    #[tokio::test]
    async fn test_save_then_resolve_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path().join("uploads"));

        let stored = store.save("Jane_CV.DOCX", b"bytes").await.unwrap();
        assert!(stored.upload_id.ends_with(".docx"));
        assert_eq!(stored.filename, "Jane_CV.DOCX");

        let path = store.resolve(&stored.upload_id).unwrap();
        assert_eq!(std::fs::read(path).unwrap(), b"bytes");
    }

    #[tokio::test]
    async fn test_remove_deletes_stored_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path().join("uploads"));

        let stored = store.save("cv.pdf", b"old").await.unwrap();
        let path = store.resolve(&stored.upload_id).unwrap();
        store.remove(&stored.upload_id).await;
        assert!(!path.exists());

        // already gone, unknown and malformed ids are no-ops
        store.remove(&stored.upload_id).await;
        store.remove("../escape.txt").await;
    }
}
