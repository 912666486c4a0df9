// src/domain/prediction.rs

use serde::{Deserialize, Serialize};

/// Lowest simulated price, in whole dollars.
pub const PRICE_FLOOR: f64 = 200_000.0;
/// Width of the simulated price band above `PRICE_FLOOR`.
pub const PRICE_SPAN: f64 = 500_000.0;
pub const CONFIDENCE_FLOOR: f64 = 85.0;
pub const CONFIDENCE_SPAN: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub predicted_price: i64,
    /// Percentage with one decimal place.
    pub confidence: f64,
    pub price_range: PriceRange,
}

impl PredictionResult {
    /// Maps two uniform samples in `[0, 1)` onto a result.
    ///
    /// `price_sample` picks the base price in `[200_000, 700_000)`; the range is
    /// ±10% of that unrounded base. `confidence_sample` picks a confidence in
    /// `[85.0, 100.0)` rounded to one decimal.
    pub fn from_samples(price_sample: f64, confidence_sample: f64) -> Self {
        let base_price = price_sample * PRICE_SPAN + PRICE_FLOOR;
        let confidence =
            ((confidence_sample * CONFIDENCE_SPAN + CONFIDENCE_FLOOR) * 10.0).round() / 10.0;

        // Samples at the very top of either band round up onto the excluded
        // upper bound.
        let ceiling = (PRICE_FLOOR + PRICE_SPAN) as i64 - 1;

        PredictionResult {
            predicted_price: (base_price.round() as i64).min(ceiling),
            confidence: confidence.min(99.9),
            price_range: PriceRange {
                min: (base_price * 0.9).round() as i64,
                max: (base_price * 1.1).round() as i64,
            },
        }
    }
}
