pub mod predictor;
pub mod scheduler;
pub mod simulator;

pub use predictor::RandomPricePredictor;
#[cfg(test)]
pub use scheduler::ManualScheduler;
pub use scheduler::ThreadScheduler;
pub use simulator::PredictionSimulator;
