//! Soil test models

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Texture options offered by the soil form
pub const SOIL_TEXTURES: &[&str] = &["Sandy", "Loamy", "Clay", "Silt", "Sandy Loam", "Clay Loam"];

/// Option lists for the soil form
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilOptions {
    pub textures: Vec<String>,
}

impl Default for SoilOptions {
    fn default() -> Self {
        Self {
            textures: SOIL_TEXTURES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Raw soil test input, as typed into the form
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SoilSample {
    #[serde(rename = "pH")]
    #[validate(length(min = 1, message = "Please fill all fields"))]
    pub ph: String,
    #[validate(length(min = 1, message = "Please fill all fields"))]
    pub nitrogen: String,
    #[validate(length(min = 1, message = "Please fill all fields"))]
    pub phosphorus: String,
    #[validate(length(min = 1, message = "Please fill all fields"))]
    pub potassium: String,
    #[validate(length(min = 1, message = "Please fill all fields"))]
    pub organic_matter: String,
    #[validate(length(min = 1, message = "Please fill all fields"))]
    pub texture: String,
    #[validate(length(min = 1, message = "Please fill all fields"))]
    pub moisture: String,
    #[validate(length(min = 1, message = "Please fill all fields"))]
    pub conductivity: String,
}

/// Numeric readings coerced from a validated [`SoilSample`].
///
/// `ph` keeps the decimal value; every other reading is truncated to its
/// integer part the way the form coerces it, so `ph_whole` exists for the
/// rules that compare on the truncated pH.
#[derive(Debug, Clone, PartialEq)]
pub struct SoilReadings {
    pub ph: f64,
    pub ph_whole: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub organic_matter: f64,
    pub moisture: f64,
    pub conductivity: f64,
    pub texture: String,
}

/// Nutrient status band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NutrientStatus {
    Low,
    Optimal,
    High,
}

impl std::fmt::Display for NutrientStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NutrientStatus::Low => write!(f, "Low"),
            NutrientStatus::Optimal => write!(f, "Optimal"),
            NutrientStatus::High => write!(f, "High"),
        }
    }
}

/// A single nutrient row of the report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutrientLevel {
    pub name: String,
    /// Scaled level, always within 0-100
    pub level: f64,
    pub status: NutrientStatus,
}

/// Synthetic soil health report
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilReport {
    pub health_score: u8,
    pub summary: String,
    pub nutrients: Vec<NutrientLevel>,
    pub recommendations: Vec<String>,
    pub suitable_crops: Vec<String>,
}
