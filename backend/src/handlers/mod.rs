//! HTTP request handlers

pub mod forum;
pub mod health;
pub mod pest;
pub mod price;
pub mod soil;

pub use forum::{ask_question, like_thread, list_threads};
pub use health::health_check;
pub use pest::analyze_pest_image;
pub use price::{forecast_prices, get_price_options};
pub use soil::{analyze_soil, get_soil_options};
