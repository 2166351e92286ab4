//! WebAssembly module for the Farm Advisory Platform
//!
//! Runs the advisory generators in the browser:
//! - Forum topic classification and simulated responses
//! - Soil report synthesis
//! - Vegetable price forecasts
//! - Pest reply parsing and upload checks
//!
//! Exported functions exchange JSON strings with JavaScript.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&JsValue::from_str("Farm advisory module loaded"));
}

/// Seed a generator from `Math.random`, avoiding the OS entropy source
fn browser_rng() -> StdRng {
    StdRng::seed_from_u64((js_sys::Math::random() * u64::MAX as f64) as u64)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Failed to serialize result: {}", e))
}

#[derive(Serialize)]
struct ForumReply {
    topic: Topic,
    responses: Vec<ForumResponse>,
}

fn forum_reply_json<R: Rng + ?Sized>(query: &str, rng: &mut R) -> Result<String, String> {
    validate_forum_query(query)?;
    let (topic, responses) = shared::respond_to_question(query, rng);
    to_json(&ForumReply { topic, responses })
}

fn soil_report_json<R: Rng + ?Sized>(sample_json: &str, rng: &mut R) -> Result<String, String> {
    let sample: SoilSample = serde_json::from_str(sample_json)
        .map_err(|e| format!("Invalid soil sample JSON: {}", e))?;
    let readings = validate_soil_sample(&sample)?;
    to_json(&shared::analyze_soil(&readings, rng))
}

fn price_forecast_json<R: Rng + ?Sized>(
    query_json: &str,
    year: i32,
    month: u32,
    rng: &mut R,
) -> Result<String, String> {
    let query: PriceQuery = serde_json::from_str(query_json)
        .map_err(|e| format!("Invalid price query JSON: {}", e))?;
    validate_price_query(&query)?;
    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| format!("Invalid start month: {}-{}", year, month))?;
    to_json(&shared::forecast_prices(&query, start, rng))
}

/// Classify a forum question into its topic
#[wasm_bindgen]
pub fn classify_forum_topic(query: &str) -> String {
    shared::classify_topic(query).to_string()
}

/// Generate two simulated farmer responses to a question
#[wasm_bindgen]
pub fn generate_forum_responses(query: &str) -> Result<String, JsValue> {
    forum_reply_json(query, &mut browser_rng()).map_err(|e| JsValue::from_str(&e))
}

/// Produce a soil report from the form values
#[wasm_bindgen]
pub fn analyze_soil_sample(sample_json: &str) -> Result<String, JsValue> {
    soil_report_json(sample_json, &mut browser_rng()).map_err(|e| JsValue::from_str(&e))
}

/// Forecast prices starting at the given month (1-12)
#[wasm_bindgen]
pub fn forecast_vegetable_prices(query_json: &str, year: i32, month: u32) -> Result<String, JsValue> {
    price_forecast_json(query_json, year, month, &mut browser_rng())
        .map_err(|e| JsValue::from_str(&e))
}

/// Option lists for the soil form
#[wasm_bindgen]
pub fn soil_form_options() -> String {
    to_json(&SoilOptions::default()).unwrap_or_default()
}

/// Option lists for the price forecast form
#[wasm_bindgen]
pub fn price_form_options() -> String {
    to_json(&FormOptions::default()).unwrap_or_default()
}

/// Extract the pest report from a raw AI reply
#[wasm_bindgen]
pub fn parse_pest_reply(reply: &str) -> Result<String, JsValue> {
    shared::parse_pest_report(reply)
        .map_err(|e| e.to_string())
        .and_then(|report| to_json(&report))
        .map_err(|e| JsValue::from_str(&e))
}

/// Whether a file's MIME type is accepted for pest analysis
#[wasm_bindgen]
pub fn is_valid_image_type(mime_type: &str) -> bool {
    is_image_mime(mime_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_classify_forum_topic() {
        assert_eq!(classify_forum_topic("aphid problem"), "pests");
        assert_eq!(classify_forum_topic("good morning"), "general");
    }

    #[test]
    fn test_forum_reply() {
        let json =
            forum_reply_json("how much water for paddy?", &mut StdRng::seed_from_u64(1)).unwrap();
        let reply: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(reply["topic"], "irrigation");
        assert_eq!(reply["responses"].as_array().unwrap().len(), 2);
        assert!(forum_reply_json("  ", &mut StdRng::seed_from_u64(1)).is_err());
    }

    #[test]
    fn test_soil_report() {
        let sample = r#"{"pH":"8.2","nitrogen":"210","phosphorus":"10","potassium":"300",
            "organicMatter":"2","texture":"Sandy","moisture":"15","conductivity":"0.5"}"#;
        let json = soil_report_json(sample, &mut StdRng::seed_from_u64(3)).unwrap();
        let report: Value = serde_json::from_str(&json).unwrap();
        assert!(report["summary"].as_str().unwrap().contains("alkaline"));
        assert_eq!(report["nutrients"][1]["status"], "Low");
    }

    #[test]
    fn test_price_forecast() {
        let query = r#"{"vegetable":"Onion","state":"Kerala","season":"Winter",
            "quality":"Premium","marketType":"Export","duration":6}"#;
        let json = price_forecast_json(query, 2025, 12, &mut StdRng::seed_from_u64(5)).unwrap();
        let forecast: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(forecast["predictions"].as_array().unwrap().len(), 7);
        assert_eq!(forecast["predictions"][1]["month"], "January 2026");
        assert!(price_forecast_json(query, 2025, 13, &mut StdRng::seed_from_u64(5)).is_err());
    }

    #[test]
    fn test_soil_form_options() {
        let options: Value = serde_json::from_str(&soil_form_options()).unwrap();
        assert_eq!(options["textures"].as_array().unwrap().len(), 6);
        assert_eq!(options["textures"][4], "Sandy Loam");
    }

    #[test]
    fn test_price_form_options() {
        let options: Value = serde_json::from_str(&price_form_options()).unwrap();
        assert_eq!(options["marketTypes"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn test_image_type() {
        assert!(is_valid_image_type("image/webp"));
        assert!(!is_valid_image_type("video/mp4"));
    }
}
