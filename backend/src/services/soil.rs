//! Soil analysis service

use shared::{analyze_soil, validate_soil_sample, SoilOptions, SoilReport, SoilSample};
use std::time::Duration;

use crate::error::{AppError, AppResult};
use crate::services::simulate_latency;

/// Field reported on soil form validation errors
pub const SAMPLE_FIELD: &str = "sample";

#[derive(Clone)]
pub struct SoilService {
    latency: Duration,
}

impl SoilService {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Option lists for the soil form
    pub fn options(&self) -> SoilOptions {
        SoilOptions::default()
    }

    /// Validate a soil test and produce its synthetic report
    pub async fn analyze(&self, sample: &SoilSample) -> AppResult<SoilReport> {
        let readings =
            validate_soil_sample(sample).map_err(|msg| AppError::validation(SAMPLE_FIELD, msg))?;

        simulate_latency(self.latency).await;

        let report = analyze_soil(&readings, &mut rand::thread_rng());
        tracing::info!(
            texture = %readings.texture,
            health_score = report.health_score,
            "Soil sample analyzed"
        );
        Ok(report)
    }
}
