//! Vegetable price forecast models

use serde::{Deserialize, Serialize};
use validator::Validate;

pub const VEGETABLES: &[&str] = &[
    "Tomato",
    "Potato",
    "Onion",
    "Carrot",
    "Cauliflower",
    "Cabbage",
    "Brinjal",
    "Okra",
    "Peas",
    "Spinach",
    "Bitter Gourd",
    "Cucumber",
    "Beetroot",
    "Radish",
    "Green Chili",
];

pub const STATES: &[&str] = &[
    "Maharashtra",
    "Karnataka",
    "Uttar Pradesh",
    "West Bengal",
    "Punjab",
    "Gujarat",
    "Tamil Nadu",
    "Andhra Pradesh",
    "Madhya Pradesh",
    "Bihar",
    "Haryana",
    "Rajasthan",
    "Kerala",
];

pub const SEASONS: &[&str] = &["Summer", "Winter", "Monsoon", "Spring", "Autumn"];

pub const QUALITY_GRADES: &[&str] = &[
    "Grade A", "Grade B", "Grade C", "Premium", "Standard", "Economy",
];

pub const MARKET_TYPES: &[&str] = &[
    "Wholesale",
    "Retail",
    "Farmers Market",
    "Export",
    "Online",
    "Supermarket",
];

/// Forecast horizons in months
pub const DURATIONS: &[u32] = &[3, 6, 9];

/// Categorical query for a price forecast
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuery {
    #[validate(length(min = 1, message = "Please fill all fields"))]
    pub vegetable: String,
    #[validate(length(min = 1, message = "Please fill all fields"))]
    pub state: String,
    #[validate(length(min = 1, message = "Please fill all fields"))]
    pub season: String,
    #[validate(length(min = 1, message = "Please fill all fields"))]
    pub quality: String,
    #[validate(length(min = 1, message = "Please fill all fields"))]
    pub market_type: String,
    #[serde(default = "default_duration")]
    pub duration: u32,
}

fn default_duration() -> u32 {
    3
}

/// One month of the forecast curve
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPrediction {
    pub month: String,
    pub price: i64,
    /// Percent change from the current price, two decimals
    pub change: f64,
    pub supply_status: String,
    pub demand_trend: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarketFactor {
    pub factor: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceRecommendation {
    #[serde(rename = "type")]
    pub kind: String,
    pub suggestion: String,
}

/// Synthetic multi-month price forecast
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceForecast {
    pub current_price: i64,
    pub predictions: Vec<MonthlyPrediction>,
    pub market_factors: Vec<MarketFactor>,
    pub recommendations: Vec<PriceRecommendation>,
    pub quality_premium: String,
    pub market_insights: String,
    pub regional_trends: String,
}

/// Option lists shown by the forecast form
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormOptions {
    pub vegetables: Vec<String>,
    pub states: Vec<String>,
    pub seasons: Vec<String>,
    pub quality_grades: Vec<String>,
    pub market_types: Vec<String>,
    pub durations: Vec<u32>,
}

impl Default for FormOptions {
    fn default() -> Self {
        let owned = |list: &[&str]| list.iter().map(|s| s.to_string()).collect();
        Self {
            vegetables: owned(VEGETABLES),
            states: owned(STATES),
            seasons: owned(SEASONS),
            quality_grades: owned(QUALITY_GRADES),
            market_types: owned(MARKET_TYPES),
            durations: DURATIONS.to_vec(),
        }
    }
}
