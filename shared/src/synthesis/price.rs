//! Synthetic vegetable price forecast
//!
//! A base price from lookup tables, scaled by categorical factors, followed by
//! a random walk with a sinusoidal trend. Prices have a floor but no ceiling.

use chrono::{Datelike, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{MarketFactor, MonthlyPrediction, PriceForecast, PriceQuery, PriceRecommendation};

/// Base price and variance of a vegetable, per kg
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VegetablePrice {
    pub base: f64,
    pub variance: f64,
}

/// Price multiplier and month-to-month volatility of a season
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonProfile {
    pub factor: f64,
    pub volatility: f64,
}

const DEFAULT_VEGETABLE_PRICE: VegetablePrice = VegetablePrice {
    base: 40.0,
    variance: 15.0,
};

const DEFAULT_VOLATILITY: f64 = 0.12;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const SUPPLY_STATUSES: &[&str] = &["Low", "Moderate", "High", "Surplus", "Deficit", "Stable"];

const DEMAND_TRENDS: &[&str] = &[
    "Decreasing",
    "Stable",
    "Increasing",
    "Rapidly Increasing",
    "Rapidly Decreasing",
    "Fluctuating",
];

const REGIONS: &[&str] = &[
    "Northern",
    "Southern",
    "Eastern",
    "Western",
    "Central",
    "North-Eastern",
];

const REGIONAL_TRENDS: &[&str] = &[
    "showing stronger demand patterns",
    "experiencing supply constraints",
    "demonstrating price stability",
    "indicating higher profit margins",
    "reporting increased consumer preference",
    "showing favorable market conditions",
];

// ============================================================================
// Factor tables
// ============================================================================

pub fn vegetable_price(vegetable: &str) -> VegetablePrice {
    let (base, variance) = match vegetable {
        "Tomato" => (40.0, 15.0),
        "Potato" => (25.0, 10.0),
        "Onion" => (30.0, 20.0),
        "Carrot" => (35.0, 10.0),
        "Cauliflower" => (45.0, 15.0),
        "Cabbage" => (30.0, 10.0),
        "Brinjal" => (35.0, 12.0),
        "Okra" => (50.0, 15.0),
        "Peas" => (60.0, 20.0),
        "Spinach" => (40.0, 10.0),
        "Bitter Gourd" => (55.0, 15.0),
        "Cucumber" => (30.0, 8.0),
        "Beetroot" => (40.0, 12.0),
        "Radish" => (25.0, 8.0),
        "Green Chili" => (70.0, 25.0),
        _ => return DEFAULT_VEGETABLE_PRICE,
    };
    VegetablePrice { base, variance }
}

/// Season profile, `None` for an unknown season
pub fn season_profile(season: &str) -> Option<SeasonProfile> {
    let (factor, volatility) = match season {
        "Summer" => (1.1, 0.15),
        "Winter" => (0.9, 0.1),
        "Monsoon" => (1.2, 0.2),
        "Spring" => (0.95, 0.08),
        "Autumn" => (1.0, 0.12),
        _ => return None,
    };
    Some(SeasonProfile { factor, volatility })
}

pub fn quality_factor(quality: &str) -> f64 {
    match quality {
        "Grade A" => 1.2,
        "Grade B" => 1.0,
        "Grade C" => 0.8,
        "Premium" => 1.3,
        "Standard" => 1.0,
        "Economy" => 0.7,
        _ => 1.0,
    }
}

pub fn market_factor(market_type: &str) -> f64 {
    match market_type {
        "Wholesale" => 0.8,
        "Retail" => 1.2,
        "Farmers Market" => 1.0,
        "Export" => 1.4,
        "Online" => 1.3,
        "Supermarket" => 1.25,
        _ => 1.0,
    }
}

/// Relative cost of living and transport per state
pub fn state_factor(state: &str) -> f64 {
    match state {
        "Maharashtra" => 1.1,
        "Karnataka" => 1.05,
        "Uttar Pradesh" => 0.9,
        "West Bengal" => 0.95,
        "Punjab" => 1.0,
        "Gujarat" => 1.02,
        "Tamil Nadu" => 1.05,
        "Andhra Pradesh" => 0.98,
        "Madhya Pradesh" => 0.92,
        "Bihar" => 0.85,
        "Haryana" => 1.0,
        "Rajasthan" => 0.95,
        "Kerala" => 1.15,
        _ => 1.0,
    }
}

// ============================================================================
// Prices
// ============================================================================

/// Base price scaled by quality, market, state and season factors
pub fn adjusted_base_price(query: &PriceQuery) -> f64 {
    vegetable_price(&query.vegetable).base
        * quality_factor(&query.quality)
        * market_factor(&query.market_type)
        * state_factor(&query.state)
        * season_profile(&query.season).map_or(1.0, |s| s.factor)
}

pub fn current_price(query: &PriceQuery) -> i64 {
    adjusted_base_price(query).round() as i64
}

/// Lowest price the walk may reach: 60% of the vegetable's base price
pub fn price_floor(vegetable: &str) -> i64 {
    (vegetable_price(vegetable).base * 0.6).round() as i64
}

/// Label such as "March 2025" for `offset` months after `start`
pub fn month_label(start: NaiveDate, offset: u32) -> String {
    let months_from_origin = start.month0() + offset;
    let year = start.year() + (months_from_origin / 12) as i32;
    format!("{} {}", MONTHS[(months_from_origin % 12) as usize], year)
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn pick<R: Rng + ?Sized>(options: &[&'static str], rng: &mut R) -> &'static str {
    options.choose(rng).copied().unwrap_or(options[0])
}

/// Month-by-month series of `duration + 1` entries, entry 0 being the current price
pub fn price_series<R: Rng + ?Sized>(
    query: &PriceQuery,
    start: NaiveDate,
    rng: &mut R,
) -> Vec<MonthlyPrediction> {
    let current = current_price(query);
    let floor = price_floor(&query.vegetable);
    let volatility = season_profile(&query.season).map_or(DEFAULT_VOLATILITY, |s| s.volatility);
    let duration = query.duration;

    let mut predictions = Vec::with_capacity(duration as usize + 1);
    predictions.push(MonthlyPrediction {
        month: month_label(start, 0),
        price: current,
        change: 0.0,
        supply_status: "Current".to_string(),
        demand_trend: "Current".to_string(),
    });

    let mut last_price = current;
    for i in 1..=duration {
        // Longer horizons are more volatile
        let volatility_factor = volatility * (1.0 + f64::from(i) * 0.1);
        let random_factor = rng.gen_range(-1.0..1.0) * volatility_factor;
        let trend_factor =
            (std::f64::consts::PI * f64::from(i) / f64::from(duration)).sin() * 0.05;
        let percent_change = random_factor + trend_factor;

        let new_price = ((last_price as f64 * (1.0 + percent_change)).round() as i64).max(floor);
        let change = if current == 0 {
            0.0
        } else {
            round_to_cents((new_price - current) as f64 / current as f64 * 100.0)
        };

        predictions.push(MonthlyPrediction {
            month: month_label(start, i),
            price: new_price,
            change,
            supply_status: pick(SUPPLY_STATUSES, rng).to_string(),
            demand_trend: pick(DEMAND_TRENDS, rng).to_string(),
        });
        last_price = new_price;
    }

    predictions
}

// ============================================================================
// Narrative
// ============================================================================

pub fn market_factors<R: Rng + ?Sized>(query: &PriceQuery, rng: &mut R) -> Vec<MarketFactor> {
    let factor = |name: &str, description: String| MarketFactor {
        factor: name.to_string(),
        description,
    };

    let logistics = if rng.gen_bool(0.5) { "improved" } else { "strained" };
    let demand = if rng.gen_bool(0.5) { "increased" } else { "steady" };
    let acreage = if rng.gen_bool(0.5) { "expanding" } else { "contracting" };

    vec![
        factor(
            "Weather Impact",
            format!(
                "Expected {} weather patterns in {} affecting cultivation.",
                query.season.to_lowercase(),
                query.state
            ),
        ),
        factor(
            "Transportation Costs",
            "Fuel price fluctuations impacting distribution expenses.".to_string(),
        ),
        factor(
            "Supply Chain",
            format!(
                "{} markets showing {} logistics efficiency.",
                query.market_type, logistics
            ),
        ),
        factor(
            "Consumer Preference",
            format!(
                "{} quality produce experiencing {} consumer demand.",
                query.quality, demand
            ),
        ),
        factor(
            "Production Trends",
            format!(
                "{} cultivation area {} in major growing regions.",
                query.vegetable, acreage
            ),
        ),
    ]
}

/// Four recommendations keyed on the direction of the final month
pub fn price_recommendations<R: Rng + ?Sized>(
    query: &PriceQuery,
    predictions: &[MonthlyPrediction],
    rng: &mut R,
) -> Vec<PriceRecommendation> {
    let rising = predictions.last().map_or(false, |p| p.change > 0.0);
    let midpoint = predictions
        .get(predictions.len() / 2)
        .map(|p| p.month.as_str())
        .unwrap_or_default();
    let area = if rng.gen_bool(0.5) { "urban" } else { "rural" };

    let recommendation = |kind: &str, suggestion: String| PriceRecommendation {
        kind: kind.to_string(),
        suggestion,
    };

    vec![
        recommendation(
            "Storage",
            if rising {
                "Consider extending storage duration to capitalize on rising price trend."
            } else {
                "Minimize storage duration to reduce holding costs during price decline."
            }
            .to_string(),
        ),
        recommendation(
            "Market Selection",
            format!(
                "Focus on {} {} markets for optimal pricing.",
                area, query.market_type
            ),
        ),
        recommendation(
            "Quality Management",
            format!(
                "Maintain {} standards to ensure maximum returns in current market conditions.",
                query.quality
            ),
        ),
        recommendation(
            "Timing",
            format!(
                "Plan harvest cycles to align with {} price expectations.",
                midpoint
            ),
        ),
    ]
}

pub fn quality_premium(quality: &str) -> String {
    let premium = ((quality_factor(quality) - 0.7) * 100.0).round() as i64;
    format!("{}% premium for {} quality", premium, quality)
}

pub fn market_insight<R: Rng + ?Sized>(query: &PriceQuery, rng: &mut R) -> String {
    let insights = [
        format!(
            "Higher prices expected in {} markets due to increasing consumer preference.",
            query.market_type
        ),
        format!(
            "{} channels showing stable demand for {} {}.",
            query.market_type, query.quality, query.vegetable
        ),
        format!(
            "Market diversification recommended to optimize returns during {} season.",
            query.season
        ),
        format!(
            "Direct-to-consumer sales channels showing promise for {} produce.",
            query.quality
        ),
    ];
    let index = rng.gen_range(0..insights.len());
    insights[index].clone()
}

pub fn regional_trend<R: Rng + ?Sized>(rng: &mut R) -> String {
    let region = pick(REGIONS, rng);
    let trend = pick(REGIONAL_TRENDS, rng);
    format!("{} regions {}", region, trend)
}

/// Build the full forecast starting at the month of `start`
pub fn forecast_prices<R: Rng + ?Sized>(
    query: &PriceQuery,
    start: NaiveDate,
    rng: &mut R,
) -> PriceForecast {
    let predictions = price_series(query, start, rng);
    let market_factors = market_factors(query, rng);
    let recommendations = price_recommendations(query, &predictions, rng);

    PriceForecast {
        current_price: current_price(query),
        predictions,
        market_factors,
        recommendations,
        quality_premium: quality_premium(&query.quality),
        market_insights: market_insight(query, rng),
        regional_trends: regional_trend(rng),
    }
}
