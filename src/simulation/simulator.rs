// src/simulation/simulator.rs
use crate::domain::{PredictionResult, PropertyFeatures};
use crate::simulation::predictor::PricePredictor;
use crate::simulation::scheduler::Scheduler;
use std::sync::Arc;
use std::time::Duration;

/// Delays a prediction by a fixed amount before asking the predictor for it.
///
/// The delay does not depend on the input, and there are no retries: each
/// call produces exactly one callback.
#[derive(Clone)]
pub struct PredictionSimulator {
    predictor: Arc<dyn PricePredictor>,
    scheduler: Arc<dyn Scheduler>,
    delay: Duration,
}

impl PredictionSimulator {
    pub fn new(
        predictor: Arc<dyn PricePredictor>,
        scheduler: Arc<dyn Scheduler>,
        delay: Duration,
    ) -> Self {
        Self {
            predictor,
            scheduler,
            delay,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn request_prediction<F>(&self, features: PropertyFeatures, on_done: F)
    where
        F: FnOnce(PredictionResult) + Send + 'static,
    {
        let predictor = Arc::clone(&self.predictor);
        self.scheduler.schedule(
            self.delay,
            Box::new(move || on_done(predictor.predict(&features))),
        );
    }
}
