//! HTTP handlers for pest identification

use axum::{
    extract::{Multipart, State},
    Json,
};
use shared::{ImageUpload, PestAnalysis, PestAnalysisError};

use crate::error::{AppError, AppResult};
use crate::services::PestService;
use crate::AppState;

/// Multipart field carrying the image
pub const IMAGE_FIELD: &str = "image";

fn read_failure(err: impl std::fmt::Display) -> AppError {
    tracing::warn!("Failed to read multipart upload: {}", err);
    PestAnalysisError::ReadImage.into()
}

/// Read the image part of a multipart upload, if present
async fn read_image(multipart: &mut Multipart) -> AppResult<Option<ImageUpload>> {
    while let Some(field) = multipart.next_field().await.map_err(read_failure)? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let mime_type = field.content_type().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let bytes = field.bytes().await.map_err(read_failure)?;

        let mut upload = ImageUpload::new(mime_type, bytes.to_vec());
        if let Some(file_name) = file_name {
            upload = upload.with_file_name(file_name);
        }
        return Ok(Some(upload));
    }
    Ok(None)
}

/// Identify the pest in an uploaded image
pub async fn analyze_pest_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<PestAnalysis>> {
    let upload = read_image(&mut multipart)
        .await?
        .ok_or_else(|| AppError::validation(IMAGE_FIELD, "Please select an image file"))?;

    let service = PestService::new(state.identifier.clone());
    let analysis = service.analyze(&upload).await?;
    Ok(Json(analysis))
}
