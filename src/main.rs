use crate::config::AppConfig;
use crate::form::FormRegistry;
use crate::router::handle;
use crate::simulation::{PredictionSimulator, RandomPricePredictor, ThreadScheduler};
use crate::state::AppState;
use astra::Server;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod config;
mod domain;
mod errors;
mod form;
mod responses;
mod router;
mod simulation;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // 1️⃣ Load configuration
    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    // 2️⃣ Wire the simulated estimator
    let simulator = PredictionSimulator::new(
        Arc::new(RandomPricePredictor::from_entropy()),
        Arc::new(ThreadScheduler),
        cfg.prediction_delay,
    );
    let app = AppState {
        forms: FormRegistry::new(simulator, cfg.visitor_ttl),
        static_dir: cfg.static_dir.clone(),
    };

    // 3️⃣ Start the server
    tracing::info!(
        addr = %cfg.bind_addr,
        workers = cfg.max_workers,
        delay_ms = cfg.prediction_delay.as_millis() as u64,
        static_dir = %cfg.static_dir.display(),
        "starting server at http://{}",
        cfg.bind_addr
    );

    let server = Server::bind(&cfg.bind_addr).max_workers(cfg.max_workers);

    // 4️⃣ Serve requests, passing the app state into the closure
    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("server shut down cleanly");
}
