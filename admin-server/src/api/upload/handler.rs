use std::io::Cursor;
use std::path::PathBuf;

use axum::extract::{Multipart, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::utils::{AppError, AppResponse, AppResult};

/// Maximum file size (5MB)
const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Supported image formats
const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// JPEG quality for re-encoded gallery images
const JPEG_QUALITY: u8 = 85;

#[derive(Debug, Deserialize)]
pub struct UploadParams {
    /// Bucket folder; defaults to the product gallery folder
    #[serde(default)]
    pub folder: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
    pub size: usize,
    pub format: String,
}

/// Validate image file
fn validate_image(data: &[u8], ext: &str) -> Result<(), AppError> {
    if data.len() > MAX_FILE_SIZE {
        return Err(AppError::validation(format!(
            "File too large. Maximum size is {}MB",
            MAX_FILE_SIZE / 1024 / 1024
        )));
    }

    let ext_lower = ext.to_lowercase();
    if !SUPPORTED_FORMATS.contains(&ext_lower.as_str()) {
        return Err(AppError::validation(format!(
            "Unsupported file format '{}'. Supported: {}",
            ext_lower,
            SUPPORTED_FORMATS.join(", ")
        )));
    }

    // Verify it's actually an image by trying to load it
    if let Err(e) = image::load_from_memory(data) {
        return Err(AppError::validation(format!(
            "Invalid image file ({}): {}",
            ext_lower, e
        )));
    }

    Ok(())
}

/// Re-encode to JPG with a fixed quality setting
fn compress_image(data: &[u8]) -> Result<Vec<u8>, AppError> {
    let img = image::load_from_memory(data)
        .map_err(|e| AppError::validation(format!("Invalid image: {}", e)))?;

    let mut buffer = Vec::new();
    {
        let mut cursor = Cursor::new(&mut buffer);
        let rgb_img = img.to_rgb8();
        let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut cursor, JPEG_QUALITY);
        rgb_img
            .write_with_encoder(encoder)
            .map_err(|e| AppError::internal(format!("Failed to compress image: {}", e)))?;
    }

    Ok(buffer)
}

fn sanitize_folder(folder: Option<String>) -> Result<String, AppError> {
    let folder = folder.unwrap_or_else(|| "products".to_string());
    if folder.is_empty()
        || !folder
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::validation(format!("Invalid folder: {}", folder)));
    }
    Ok(folder)
}

/// POST /api/upload?folder=
pub async fn upload(
    State(state): State<ServerState>,
    Query(params): Query<UploadParams>,
    mut multipart: Multipart,
) -> AppResult<Json<AppResponse<UploadResponse>>> {
    let folder = sanitize_folder(params.folder)?;

    // Find the file field
    let mut field_data: Option<Vec<u8>> = None;
    let mut original_filename = None;

    while let Some(f) = multipart.next_field().await? {
        let name = f.name().map(|s| s.to_string());
        if name.as_deref() == Some("file") || name.as_deref() == Some("") {
            original_filename = f.file_name().map(|s| s.to_string());
            field_data = Some(f.bytes().await?.to_vec());
            break;
        }
    }

    let data = field_data
        .ok_or_else(|| AppError::validation("No 'file' field found. Field name must be 'file'"))?;
    let filename = original_filename
        .ok_or_else(|| AppError::validation("No filename provided in file field"))?;

    if data.is_empty() {
        return Err(AppError::validation("Empty file provided"));
    }

    let ext = PathBuf::from(&filename)
        .extension()
        .and_then(|ext| ext.to_str().map(|s| s.to_string()))
        .ok_or_else(|| AppError::validation(format!("Invalid file extension for: {}", filename)))?;

    // Declared type must be an image before we even try decoding
    let declared = mime_guess::from_path(&filename).first_or_octet_stream();
    if declared.type_() != mime_guess::mime::IMAGE {
        return Err(AppError::validation(format!(
            "File {} does not look like an image",
            filename
        )));
    }

    validate_image(&data, &ext)?;
    let compressed = compress_image(&data)?;
    let size = compressed.len();

    let url = state
        .storage
        .upload(compressed, "image/jpeg", &folder, "jpg")
        .await
        .map_err(|e| AppError::storage(e.to_string()))?;

    tracing::info!(
        original_name = %filename,
        size = %size,
        folder = %folder,
        "Image uploaded successfully"
    );

    crate::ok!(UploadResponse {
        url,
        size,
        format: "jpg".to_string(),
    })
}

#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    pub url: String,
}

/// DELETE /api/upload
///
/// Removes the object behind a public URL. The caller is expected to
/// drop the URL from the owning record as well; a URL that is already
/// gone still deletes successfully.
pub async fn remove(
    State(state): State<ServerState>,
    Json(req): Json<DeleteRequest>,
) -> AppResult<Json<AppResponse<serde_json::Value>>> {
    state
        .storage
        .delete(&req.url)
        .await
        .map_err(|e| match e {
            crate::db::RepoError::Validation(msg) => AppError::validation(msg),
            other => AppError::storage(other.to_string()),
        })?;

    tracing::info!(url = %req.url, "Storage object deleted");
    crate::ok!(serde_json::json!({ "deleted": req.url }))
}
