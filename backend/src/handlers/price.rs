//! HTTP handlers for the vegetable price forecaster

use axum::{extract::State, Json};
use shared::{FormOptions, PriceForecast, PriceQuery};

use crate::error::AppResult;
use crate::services::PriceService;
use crate::AppState;

/// Get the option lists for the forecast form
pub async fn get_price_options(State(state): State<AppState>) -> Json<FormOptions> {
    let service = PriceService::new(state.config.simulation.latency());
    Json(service.options())
}

/// Forecast prices for a vegetable
pub async fn forecast_prices(
    State(state): State<AppState>,
    Json(query): Json<PriceQuery>,
) -> AppResult<Json<PriceForecast>> {
    let service = PriceService::new(state.config.simulation.latency());
    let forecast = service.forecast(&query).await?;
    Ok(Json(forecast))
}
