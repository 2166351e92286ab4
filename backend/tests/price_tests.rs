//! Price forecast integration tests
//!
//! Tests for the vegetable price forecaster including:
//! - Current price from the factor tables
//! - Series length and first entry
//! - Price floor at 60% of the base price

use chrono::NaiveDate;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::{
    current_price, forecast_prices, price_floor, validate_price_query, PriceQuery, DURATIONS,
    MARKET_TYPES, QUALITY_GRADES, SEASONS, STATES, VEGETABLES,
};

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

fn tomato(duration: u32) -> PriceQuery {
    PriceQuery {
        vegetable: "Tomato".to_string(),
        state: "Maharashtra".to_string(),
        season: "Summer".to_string(),
        quality: "Grade A".to_string(),
        market_type: "Retail".to_string(),
        duration,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod forecast {
    use super::*;

    #[test]
    fn test_tomato_retail_forecast() {
        let forecast = forecast_prices(&tomato(3), start(), &mut StdRng::seed_from_u64(7));

        assert_eq!(forecast.current_price, 70);
        assert_eq!(forecast.predictions.len(), 4);
        assert_eq!(forecast.predictions[0].month, "June 2025");
        assert_eq!(forecast.predictions[3].month, "September 2025");
        assert_eq!(forecast.quality_premium, "50% premium for Grade A quality");
    }

    #[test]
    fn test_economy_wholesale_is_cheaper() {
        let cheap = PriceQuery {
            quality: "Economy".to_string(),
            market_type: "Wholesale".to_string(),
            ..tomato(3)
        };
        assert!(current_price(&cheap) < current_price(&tomato(3)));
    }

    #[test]
    fn test_query_validation() {
        assert!(validate_price_query(&tomato(6)).is_ok());
        let missing = PriceQuery {
            state: String::new(),
            ..tomato(3)
        };
        assert_eq!(validate_price_query(&missing), Err("Please fill all fields"));
    }
}

// ============================================================================
// Property Tests
// ============================================================================

fn pick(list: &'static [&'static str]) -> impl Strategy<Value = String> {
    prop::sample::select(list.to_vec()).prop_map(String::from)
}

fn query_strategy() -> impl Strategy<Value = PriceQuery> {
    (
        pick(VEGETABLES),
        pick(STATES),
        pick(SEASONS),
        pick(QUALITY_GRADES),
        pick(MARKET_TYPES),
        prop::sample::select(DURATIONS.to_vec()),
    )
        .prop_map(|(vegetable, state, season, quality, market_type, duration)| PriceQuery {
            vegetable,
            state,
            season,
            quality,
            market_type,
            duration,
        })
}

proptest! {
    /// The first entry is the current price with zero change, followed by one
    /// entry per month
    #[test]
    fn test_series_shape(query in query_strategy(), seed in any::<u64>()) {
        let forecast = forecast_prices(&query, start(), &mut StdRng::seed_from_u64(seed));

        prop_assert_eq!(forecast.predictions.len(), query.duration as usize + 1);
        prop_assert_eq!(forecast.predictions[0].price, forecast.current_price);
        prop_assert_eq!(forecast.predictions[0].change, 0.0);
        prop_assert_eq!(forecast.market_factors.len(), 5);
        prop_assert_eq!(forecast.recommendations.len(), 4);
    }

    /// No forecast month falls below 60% of the vegetable's base price
    #[test]
    fn test_price_floor(query in query_strategy(), seed in any::<u64>()) {
        let forecast = forecast_prices(&query, start(), &mut StdRng::seed_from_u64(seed));
        let floor = price_floor(&query.vegetable);

        for prediction in &forecast.predictions[1..] {
            prop_assert!(prediction.price >= floor);
        }
    }
}
