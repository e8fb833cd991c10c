//! Axum route handlers for the Resume API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::{Bytes, BytesMut};
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::resume::extractor::{is_extraction_failure, DocumentKind, SUPPORTED_CONTENT_TYPES};
use crate::resume::process_upload;
use crate::state::AppState;

/// Multipart field names accepted for the resume file.
const RESUME_FIELDS: &[&str] = &["resume", "file"];

const MIB: usize = 1024 * 1024;

struct Upload {
    filename: String,
    content_type: String,
    bytes: Bytes,
}

/// POST /api/v1/resumes
///
/// Accepts a multipart resume upload, extracts and parses it, and returns the
/// resume record. Nothing is stored.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ResumeRecord>), AppError> {
    let upload = read_resume_field(&mut multipart, state.config.max_upload_bytes).await?;
    let Upload {
        filename,
        content_type,
        bytes,
    } = upload;

    let size = bytes.len();
    let record = tokio::task::spawn_blocking(move || process_upload(filename, content_type, &bytes))
        .await
        .map_err(|e| AppError::Internal(e.into()))??;

    info!(
        resume_id = %record.id(),
        filename = record.filename(),
        content_type = record.content_type(),
        size,
        extraction_failed = is_extraction_failure(record.raw_text()),
        has_name = record.name().is_some(),
        has_email = record.email().is_some(),
        total_years = record.total_years(),
        qualifications = record.qualifications().len(),
        skills = record.skills().len(),
        "Resume processed"
    );

    Ok((StatusCode::CREATED, Json(record)))
}

/// Reads the first resume field, enforcing the content-type allow-list before
/// buffering and the size cap while buffering.
async fn read_resume_field(multipart: &mut Multipart, max_bytes: usize) -> Result<Upload, AppError> {
    while let Some(mut field) = multipart.next_field().await.map_err(multipart_error)? {
        if !matches!(field.name(), Some(name) if RESUME_FIELDS.contains(&name)) {
            continue;
        }

        let filename = field.file_name().unwrap_or("resume").to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        ensure_supported_type(&content_type)?;

        let mut buf = BytesMut::new();
        while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
            if buf.len() + chunk.len() > max_bytes {
                return Err(too_large(max_bytes));
            }
            buf.extend_from_slice(&chunk);
        }

        return Ok(Upload {
            filename,
            content_type,
            bytes: buf.freeze(),
        });
    }

    Err(AppError::Validation("No resume file provided".to_string()))
}

fn ensure_supported_type(content_type: &str) -> Result<(), AppError> {
    if DocumentKind::from_content_type(content_type).is_some() {
        return Ok(());
    }
    let shown = if content_type.is_empty() {
        "unknown"
    } else {
        content_type
    };
    Err(AppError::UnsupportedMediaType(format!(
        "Unsupported file type: {shown}. Allowed types: {}",
        SUPPORTED_CONTENT_TYPES.join(", ")
    )))
}

fn too_large(max_bytes: usize) -> AppError {
    let limit = if max_bytes % MIB == 0 {
        format!("{} MB", max_bytes / MIB)
    } else {
        format!("{max_bytes} bytes")
    };
    AppError::PayloadTooLarge(format!("File exceeds the maximum upload size of {limit}"))
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::Validation(format!("Malformed multipart upload: {}", err.body_text()))
    }
}
