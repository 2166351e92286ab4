//! Validation utilities for the Farm Advisory Platform
//!
//! Every check runs before any synthesis so a rejected submission changes no
//! state.

use validator::Validate;

use crate::models::{PriceQuery, SoilReadings, SoilSample, DURATIONS};
use crate::types::{is_image_mime, ImageUpload};

// ============================================================================
// Forum
// ============================================================================

/// Validate a forum question, returning it trimmed
pub fn validate_forum_query(query: &str) -> Result<&str, &'static str> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err("Please enter a question");
    }
    Ok(trimmed)
}

// ============================================================================
// Soil
// ============================================================================

/// Parse a decimal form reading
pub fn parse_reading(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a reading and truncate it to its integer part
pub fn parse_whole_reading(value: &str) -> Option<f64> {
    parse_reading(value).map(f64::trunc)
}

/// Validate a soil sample and coerce it into numeric readings
pub fn validate_soil_sample(sample: &SoilSample) -> Result<SoilReadings, &'static str> {
    sample.validate().map_err(|_| "Please fill all fields")?;

    let fields = [
        &sample.ph,
        &sample.nitrogen,
        &sample.phosphorus,
        &sample.potassium,
        &sample.organic_matter,
        &sample.texture,
        &sample.moisture,
        &sample.conductivity,
    ];
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err("Please fill all fields");
    }

    let ph = parse_reading(&sample.ph).ok_or("pH must be a number")?;
    validate_ph(ph)?;

    let whole = |value: &str| parse_whole_reading(value).ok_or("Soil readings must be numeric");

    Ok(SoilReadings {
        ph,
        ph_whole: ph.trunc(),
        nitrogen: whole(&sample.nitrogen)?,
        phosphorus: whole(&sample.phosphorus)?,
        potassium: whole(&sample.potassium)?,
        organic_matter: whole(&sample.organic_matter)?,
        moisture: whole(&sample.moisture)?,
        conductivity: parse_reading(&sample.conductivity)
            .ok_or("Soil readings must be numeric")?,
        texture: sample.texture.trim().to_string(),
    })
}

/// Validate pH is on the 0-14 scale
pub fn validate_ph(ph: f64) -> Result<(), &'static str> {
    if !(0.0..=14.0).contains(&ph) {
        return Err("pH must be between 0 and 14");
    }
    Ok(())
}

// ============================================================================
// Price forecast
// ============================================================================

/// Validate a price query: every selector filled and a supported duration
pub fn validate_price_query(query: &PriceQuery) -> Result<(), &'static str> {
    query.validate().map_err(|_| "Please fill all fields")?;

    let selectors = [
        &query.vegetable,
        &query.state,
        &query.season,
        &query.quality,
        &query.market_type,
    ];
    if selectors.iter().any(|s| s.trim().is_empty()) {
        return Err("Please fill all fields");
    }

    if !DURATIONS.contains(&query.duration) {
        return Err("Duration must be 3, 6 or 9 months");
    }
    Ok(())
}

// ============================================================================
// Pest images
// ============================================================================

/// Validate an uploaded image. Only the type is checked, never the size.
pub fn validate_image_upload(upload: &ImageUpload) -> Result<(), &'static str> {
    if upload.is_empty() {
        return Err("Please select an image file");
    }
    if !is_image_mime(&upload.mime_type) {
        return Err("Please select a valid image file");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SoilSample {
        SoilSample {
            ph: "6.5".into(),
            nitrogen: "140".into(),
            phosphorus: "22".into(),
            potassium: "180".into(),
            organic_matter: "3.2".into(),
            texture: "Loamy".into(),
            moisture: "25".into(),
            conductivity: "1.2".into(),
        }
    }

    fn query() -> PriceQuery {
        PriceQuery {
            vegetable: "Tomato".into(),
            state: "Maharashtra".into(),
            season: "Summer".into(),
            quality: "Grade A".into(),
            market_type: "Retail".into(),
            duration: 3,
        }
    }

    #[test]
    fn test_forum_query_validation() {
        assert_eq!(validate_forum_query("  how to water?  "), Ok("how to water?"));
        assert_eq!(validate_forum_query(""), Err("Please enter a question"));
        assert_eq!(validate_forum_query("   \n"), Err("Please enter a question"));
    }

    #[test]
    fn test_soil_sample_valid() {
        let readings = validate_soil_sample(&sample()).unwrap();
        assert_eq!(readings.ph, 6.5);
        assert_eq!(readings.ph_whole, 6.0);
        assert_eq!(readings.organic_matter, 3.0);
        assert_eq!(readings.texture, "Loamy");
    }

    #[test]
    fn test_soil_sample_missing_field() {
        let mut s = sample();
        s.moisture = String::new();
        assert_eq!(validate_soil_sample(&s), Err("Please fill all fields"));

        let mut s = sample();
        s.texture = "   ".into();
        assert_eq!(validate_soil_sample(&s), Err("Please fill all fields"));
    }

    #[test]
    fn test_soil_sample_ph_range() {
        let mut s = sample();
        s.ph = "14.5".into();
        assert_eq!(validate_soil_sample(&s), Err("pH must be between 0 and 14"));
        s.ph = "-1".into();
        assert!(validate_soil_sample(&s).is_err());
        s.ph = "14".into();
        assert!(validate_soil_sample(&s).is_ok());
    }

    #[test]
    fn test_soil_sample_non_numeric() {
        let mut s = sample();
        s.nitrogen = "lots".into();
        assert_eq!(validate_soil_sample(&s), Err("Soil readings must be numeric"));
    }

    #[test]
    fn test_whole_reading_truncates() {
        assert_eq!(parse_whole_reading("5.9"), Some(5.0));
        assert_eq!(parse_whole_reading("-5.9"), Some(-5.0));
        assert_eq!(parse_whole_reading(" 99999 "), Some(99999.0));
        assert_eq!(parse_whole_reading("abc"), None);
    }

    #[test]
    fn test_price_query_valid() {
        assert!(validate_price_query(&query()).is_ok());
        for duration in [3, 6, 9] {
            let q = PriceQuery { duration, ..query() };
            assert!(validate_price_query(&q).is_ok());
        }
    }

    #[test]
    fn test_price_query_invalid() {
        let q = PriceQuery { vegetable: String::new(), ..query() };
        assert_eq!(validate_price_query(&q), Err("Please fill all fields"));

        let q = PriceQuery { duration: 12, ..query() };
        assert!(validate_price_query(&q).is_err());
    }

    #[test]
    fn test_image_upload_validation() {
        assert!(validate_image_upload(&ImageUpload::new("image/png", vec![1, 2, 3])).is_ok());
        assert_eq!(
            validate_image_upload(&ImageUpload::new("image/png", vec![])),
            Err("Please select an image file")
        );
        assert_eq!(
            validate_image_upload(&ImageUpload::new("application/pdf", vec![1])),
            Err("Please select a valid image file")
        );
    }
}
