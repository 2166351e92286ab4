//! Business logic services for the Farm Advisory Platform

pub mod forum;
pub mod pest;
pub mod price;
pub mod soil;

pub use forum::{ForumBoard, ForumService};
pub use pest::PestService;
pub use price::PriceService;
pub use soil::SoilService;

use std::time::Duration;

/// Hold a request for the configured artificial processing delay
pub async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}
