//! Handler for editor media uploads.
//!
//! Files land in the configured uploads directory and are served back by
//! the static file route mounted at `/uploads`.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Accepted image content types and their stored file extensions.
const ACCEPTED_TYPES: &[(&str, &str)] = &[
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("image/webp", "webp"),
    ("image/gif", "gif"),
];

/// Response body for a stored upload.
#[derive(Debug, Serialize)]
pub struct UploadedFile {
    /// Public URL path of the stored file.
    pub url: String,
    pub content_type: String,
    pub size: usize,
}

/// POST /api/v1/admin/uploads (multipart)
///
/// Accepts a single `file` part. Only image types are stored, under a
/// generated name so client-supplied filenames never touch the
/// filesystem.
pub async fn upload(
    State(state): State<AppState>,
    _auth: AuthUser,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<UploadedFile>)> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {e}")))?
        .ok_or_else(|| AppError::BadRequest("Expected a 'file' part".into()))?;

    if field.name() != Some("file") {
        return Err(AppError::BadRequest("Expected a 'file' part".into()));
    }

    let content_type = field
        .content_type()
        .ok_or_else(|| AppError::BadRequest("Missing content type".into()))?
        .to_string();

    let extension = ACCEPTED_TYPES
        .iter()
        .find(|(mime, _)| *mime == content_type)
        .map(|(_, ext)| *ext)
        .ok_or_else(|| {
            AppError::BadRequest(format!("Unsupported content type: {content_type}"))
        })?;

    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {e}")))?;

    if data.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".into()));
    }
    if data.len() > state.config.max_upload_bytes {
        return Err(AppError::BadRequest(format!(
            "File exceeds the maximum size of {} bytes",
            state.config.max_upload_bytes
        )));
    }

    let filename = format!("{}.{extension}", Uuid::new_v4());
    let dir = &state.config.uploads_dir;

    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to create uploads dir: {e}")))?;
    tokio::fs::write(dir.join(&filename), &data)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;

    tracing::info!(%filename, size = data.len(), "stored upload");

    Ok((
        StatusCode::CREATED,
        Json(UploadedFile {
            url: format!("/uploads/{filename}"),
            content_type,
            size: data.len(),
        }),
    ))
}
