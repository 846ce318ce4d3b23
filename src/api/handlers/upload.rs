use axum::{extract::Multipart, extract::State, http::StatusCode, Json};
use serde::Serialize;
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::auth::JwtAuth;
use crate::state::AppState;

/// File extensions accepted by the upload endpoint
const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "svg", "pdf"];

/// Response from a successful upload
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Public URL the stored file is served from
    pub url: String,
    /// Generated file name on disk
    pub filename: String,
    /// Stored size in bytes
    pub size: usize,
}

/// Extracts a lowercase, whitelisted extension from the original file name
fn allowed_extension(filename: &str) -> Option<String> {
    let ext = filename.rsplit_once('.')?.1.to_ascii_lowercase();
    ALLOWED_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

/// Upload a file (image or document) for use in site content
///
/// POST /upload
///
/// Accepts a multipart form with a single `file` field. The file is stored
/// under a generated name in the configured upload directory and served
/// back by URL.
pub async fn upload(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let original_name = field
            .file_name()
            .map(|s| s.to_string())
            .ok_or_else(|| ApiError::bad_request("Missing file name"))?;

        let ext = allowed_extension(&original_name).ok_or_else(|| {
            ApiError::bad_request(format!(
                "Unsupported file type, allowed: {}",
                ALLOWED_EXTENSIONS.join(", ")
            ))
        })?;

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to read upload: {}", e)))?;

        if data.is_empty() {
            return Err(ApiError::bad_request("Uploaded file is empty"));
        }
        if data.len() > state.config.upload.max_bytes {
            return Err(ApiError::payload_too_large(format!(
                "File exceeds the {} byte limit",
                state.config.upload.max_bytes
            )));
        }

        let filename = format!("{}.{}", Uuid::new_v4(), ext);
        let dir = std::path::Path::new(&state.config.upload.dir);

        tokio::fs::create_dir_all(dir).await.map_err(|e| {
            ApiError::internal_server_error(format!("Failed to create upload dir: {}", e))
        })?;
        tokio::fs::write(dir.join(&filename), &data)
            .await
            .map_err(|e| {
                ApiError::internal_server_error(format!("Failed to store upload: {}", e))
            })?;

        tracing::info!(filename = %filename, size = data.len(), "File uploaded");

        return Ok((
            StatusCode::CREATED,
            Json(UploadResponse {
                url: format!("{}/uploads/{}", state.config.public_base_url, filename),
                filename,
                size: data.len(),
            }),
        ));
    }

    Err(ApiError::bad_request("Missing 'file' field"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_whitelisted_extensions() {
        assert_eq!(allowed_extension("logo.PNG"), Some("png".to_string()));
        assert_eq!(allowed_extension("report.pdf"), Some("pdf".to_string()));
        assert_eq!(allowed_extension("photo.jpeg"), Some("jpeg".to_string()));
    }

    #[test]
    fn rejects_unknown_extensions() {
        assert_eq!(allowed_extension("script.sh"), None);
        assert_eq!(allowed_extension("binary.exe"), None);
        assert_eq!(allowed_extension("noextension"), None);
    }

    #[test]
    fn uses_last_extension_segment() {
        // A double extension must be judged by its final segment
        assert_eq!(allowed_extension("archive.tar.gz"), None);
        assert_eq!(allowed_extension("photo.backup.jpg"), Some("jpg".to_string()));
    }
}
