//! Pest identification service

use shared::{validate_image_upload, AnalysisStage, ImageUpload, PestAnalysis};
use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::external::PestIdentifier;

#[derive(Clone)]
pub struct PestService {
    identifier: Arc<dyn PestIdentifier>,
}

impl PestService {
    pub fn new(identifier: Arc<dyn PestIdentifier>) -> Self {
        Self { identifier }
    }

    /// Identify the pest in an uploaded image
    pub async fn analyze(&self, upload: &ImageUpload) -> AppResult<PestAnalysis> {
        validate_image_upload(upload).map_err(|msg| AppError::validation("image", msg))?;

        tracing::info!(
            mime_type = %upload.mime_type,
            bytes = upload.len(),
            "Starting pest analysis"
        );

        let log_progress = |stage: AnalysisStage| {
            tracing::debug!(progress = stage.percent(), "{}", stage.message());
        };

        let report = self
            .identifier
            .identify(upload, &log_progress)
            .await
            .map_err(|e| {
                tracing::warn!("Pest analysis failed: {}", e);
                e
            })?;

        tracing::info!(pest = %report.pest_name, threat = %report.threat_level, "Pest identified");

        Ok(PestAnalysis {
            report,
            progress: AnalysisStage::Complete.percent(),
        })
    }
}
