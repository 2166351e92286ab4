//! Route definitions for the Farm Advisory Platform

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Community forum
        .nest("/forum", forum_routes())
        // Soil analyzer
        .nest("/soil", soil_routes())
        // Vegetable price forecaster
        .nest("/prices", price_routes())
        // Pest identification
        .nest("/pests", pest_routes())
}

/// Forum routes
fn forum_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/threads",
            get(handlers::list_threads).post(handlers::ask_question),
        )
        .route("/threads/:thread_id/like", post(handlers::like_thread))
}

/// Soil analysis routes
fn soil_routes() -> Router<AppState> {
    Router::new()
        .route("/options", get(handlers::get_soil_options))
        .route("/analyze", post(handlers::analyze_soil))
}

/// Price forecast routes
fn price_routes() -> Router<AppState> {
    Router::new()
        .route("/options", get(handlers::get_price_options))
        .route("/forecast", post(handlers::forecast_prices))
}

/// Pest identification routes. Uploads are not size limited.
fn pest_routes() -> Router<AppState> {
    Router::new()
        .route("/analyze", post(handlers::analyze_pest_image))
        .layer(DefaultBodyLimit::disable())
}
