//! Vegetable price forecast service

use chrono::Utc;
use shared::{forecast_prices, validate_price_query, FormOptions, PriceForecast, PriceQuery};
use std::time::Duration;

use crate::error::{AppError, AppResult};
use crate::services::simulate_latency;

/// Field reported on forecast form validation errors
pub const QUERY_FIELD: &str = "query";

#[derive(Clone)]
pub struct PriceService {
    latency: Duration,
}

impl PriceService {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Option lists for the forecast form
    pub fn options(&self) -> FormOptions {
        FormOptions::default()
    }

    /// Forecast prices starting from the current month (UTC)
    pub async fn forecast(&self, query: &PriceQuery) -> AppResult<PriceForecast> {
        validate_price_query(query).map_err(|msg| AppError::validation(QUERY_FIELD, msg))?;

        simulate_latency(self.latency).await;

        let start = Utc::now().date_naive();
        let forecast = forecast_prices(query, start, &mut rand::thread_rng());
        tracing::info!(
            vegetable = %query.vegetable,
            state = %query.state,
            duration = query.duration,
            current_price = forecast.current_price,
            "Price forecast generated"
        );
        Ok(forecast)
    }
}
