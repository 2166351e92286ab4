//! HTTP handlers for the soil analyzer

use axum::{extract::State, Json};
use shared::{SoilOptions, SoilReport, SoilSample};

use crate::error::AppResult;
use crate::services::SoilService;
use crate::AppState;

/// Get the option lists for the soil form
pub async fn get_soil_options(State(state): State<AppState>) -> Json<SoilOptions> {
    let service = SoilService::new(state.config.simulation.latency());
    Json(service.options())
}

/// Analyze a soil test
pub async fn analyze_soil(
    State(state): State<AppState>,
    Json(sample): Json<SoilSample>,
) -> AppResult<Json<SoilReport>> {
    let service = SoilService::new(state.config.simulation.latency());
    let report = service.analyze(&sample).await?;
    Ok(Json(report))
}
