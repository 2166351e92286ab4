//! Synthetic soil health report
//!
//! Templated heuristics, not an agronomic model.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{NutrientLevel, NutrientStatus, SoilReadings, SoilReport};

/// Maximum number of crops listed in a report
pub const MAX_SUITABLE_CROPS: usize = 6;

/// Per-nutrient scaling and status bands
struct NutrientRule {
    name: &'static str,
    scale: f64,
    low_below: f64,
    high_above: f64,
}

const NUTRIENT_RULES: [NutrientRule; 4] = [
    NutrientRule {
        name: "Nitrogen (N)",
        scale: 0.5,
        low_below: 140.0,
        high_above: 200.0,
    },
    NutrientRule {
        name: "Phosphorus (P)",
        scale: 2.0,
        low_below: 20.0,
        high_above: 50.0,
    },
    NutrientRule {
        name: "Potassium (K)",
        scale: 0.5,
        low_below: 150.0,
        high_above: 250.0,
    },
    NutrientRule {
        name: "Organic Matter",
        scale: 20.0,
        low_below: 3.0,
        high_above: 6.0,
    },
];

impl NutrientRule {
    fn evaluate(&self, raw: f64) -> NutrientLevel {
        let status = if raw < self.low_below {
            NutrientStatus::Low
        } else if raw > self.high_above {
            NutrientStatus::High
        } else {
            NutrientStatus::Optimal
        };

        NutrientLevel {
            name: self.name.to_string(),
            level: (raw * self.scale).clamp(0.0, 100.0),
            status,
        }
    }
}

/// Health score drawn from `[70, 90)`; it does not depend on the readings.
pub fn health_score<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.gen_range(70..90)
}

/// Nutrient table in fixed order: N, P, K, organic matter
pub fn nutrient_levels(readings: &SoilReadings) -> Vec<NutrientLevel> {
    let raw = [
        readings.nitrogen,
        readings.phosphorus,
        readings.potassium,
        readings.organic_matter,
    ];
    NUTRIENT_RULES
        .iter()
        .zip(raw)
        .map(|(rule, value)| rule.evaluate(value))
        .collect()
}

pub fn soil_summary(readings: &SoilReadings) -> String {
    let condition = if readings.ph < 6.0 {
        "acidic"
    } else if readings.ph > 7.5 {
        "alkaline"
    } else {
        "good"
    };
    let organic = if readings.organic_matter < 3.0 {
        "low"
    } else {
        "adequate"
    };
    let drainage = if readings.texture == "Loamy" {
        "excellent"
    } else {
        "reasonable"
    };

    format!(
        "Your soil is generally in {} condition with {} organic matter content. The {} texture provides {} drainage and nutrient retention.",
        condition, organic, readings.texture, drainage
    )
}

/// Five recommendations: pH, nitrogen, organic matter, moisture, texture.
///
/// The pH rule compares the truncated reading, unlike the summary.
pub fn soil_recommendations(readings: &SoilReadings) -> Vec<String> {
    let ph = if readings.ph_whole < 6.0 {
        "Apply lime to raise soil pH closer to neutral (6.5-7.0)."
    } else if readings.ph_whole > 7.5 {
        "Apply sulfur to lower soil pH gradually."
    } else {
        "Maintain current pH management practices."
    };

    let nitrogen = if readings.nitrogen < 140.0 {
        "Increase nitrogen with organic fertilizers or cover crops."
    } else if readings.nitrogen > 200.0 {
        "Reduce nitrogen applications and consider nitrogen-consuming cover crops."
    } else {
        "Maintain current nitrogen levels with seasonal amendments."
    };

    let organic = if readings.organic_matter < 3.0 {
        "Add compost or well-rotted manure to improve organic matter content."
    } else {
        "Continue adding organic matter to maintain soil structure and microbial activity."
    };

    let moisture = if readings.moisture < 20.0 {
        "Consider irrigation improvements to maintain adequate soil moisture."
    } else if readings.moisture > 35.0 {
        "Improve drainage to prevent waterlogging."
    } else {
        "Current moisture management is appropriate."
    };

    let texture = match readings.texture.as_str() {
        "Sandy" => "Add clay and organic matter to improve water retention.",
        "Clay" => "Add organic matter to improve drainage and aeration.",
        _ => "Current soil texture provides good balance of drainage and retention.",
    };

    [ph, nitrogen, organic, moisture, texture]
        .into_iter()
        .map(String::from)
        .collect()
}

fn crops_for_ph(ph: f64) -> &'static [&'static str] {
    if ph < 6.0 {
        &["Blueberries", "Potatoes", "Strawberries"]
    } else if ph < 7.0 {
        &["Tomatoes", "Peppers", "Carrots", "Beans"]
    } else {
        &["Asparagus", "Cabbage", "Spinach"]
    }
}

fn crops_for_texture(texture: &str) -> &'static [&'static str] {
    match texture {
        "Sandy" => &["Radishes", "Carrots", "Lettuce"],
        "Clay" => &["Broccoli", "Brussels Sprouts", "Pumpkins"],
        "Loamy" => &["Corn", "Wheat", "Soybeans"],
        "Silt" => &["Lettuce", "Root vegetables", "Berries"],
        _ => &[],
    }
}

/// Union of the pH and texture crop lists, deduplicated, shuffled, at most six
pub fn suitable_crops<R: Rng + ?Sized>(ph: f64, texture: &str, rng: &mut R) -> Vec<String> {
    let mut crops: Vec<String> = Vec::new();
    for crop in crops_for_ph(ph).iter().chain(crops_for_texture(texture)) {
        if !crops.iter().any(|c| c == crop) {
            crops.push(crop.to_string());
        }
    }

    crops.shuffle(rng);
    crops.truncate(MAX_SUITABLE_CROPS);
    crops
}

/// Build the full soil report from validated readings
pub fn analyze_soil<R: Rng + ?Sized>(readings: &SoilReadings, rng: &mut R) -> SoilReport {
    SoilReport {
        health_score: health_score(rng),
        summary: soil_summary(readings),
        nutrients: nutrient_levels(readings),
        recommendations: soil_recommendations(readings),
        suitable_crops: suitable_crops(readings.ph, &readings.texture, rng),
    }
}
