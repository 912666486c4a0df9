// src/simulation/predictor.rs
use crate::domain::{PredictionResult, PropertyFeatures};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Anything that can turn a complete set of features into a price estimate.
///
/// Callers only invoke this once `is_complete` has passed.
pub trait PricePredictor: Send + Sync {
    fn predict(&self, features: &PropertyFeatures) -> PredictionResult;
}

/// Stand-in estimator: ignores the features and draws two uniform samples.
pub struct RandomPricePredictor {
    rng: Mutex<StdRng>,
}

impl RandomPricePredictor {
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic sequence, for tests.
    #[cfg(test)]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomPricePredictor {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl PricePredictor for RandomPricePredictor {
    fn predict(&self, _features: &PropertyFeatures) -> PredictionResult {
        // A poisoned lock only means another thread panicked mid-draw; the
        // generator state is still usable.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        let price_sample: f64 = rng.gen();
        let confidence_sample: f64 = rng.gen();
        PredictionResult::from_samples(price_sample, confidence_sample)
    }
}
