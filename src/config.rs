// src/config.rs
use crate::errors::ConfigError;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

pub const ADDR_VAR: &str = "HOUSEPRICE_ADDR";
pub const WORKERS_VAR: &str = "HOUSEPRICE_WORKERS";
pub const DELAY_VAR: &str = "HOUSEPRICE_DELAY_MS";
pub const VISITOR_TTL_VAR: &str = "HOUSEPRICE_VISITOR_TTL_SECS";
pub const STATIC_DIR_VAR: &str = "HOUSEPRICE_STATIC_DIR";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Upper bound on astra worker threads.
    pub max_workers: usize,
    /// How long a simulated prediction takes.
    pub prediction_delay: Duration,
    /// Visitor forms untouched for this long are dropped.
    pub visitor_ttl: Duration,
    pub static_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            prediction_delay: Duration::from_millis(2000),
            visitor_ttl: Duration::from_secs(30 * 60),
            static_dir: PathBuf::from("static"),
        }
    }
}

impl AppConfig {
    /// Defaults, overridden by whichever `HOUSEPRICE_*` variables are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = AppConfig::default();

        if let Some(value) = lookup(ADDR_VAR) {
            cfg.bind_addr = value.trim().parse().map_err(|_| ConfigError::BadAddr {
                var: ADDR_VAR,
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup(WORKERS_VAR) {
            cfg.max_workers = parse_positive(WORKERS_VAR, &value)? as usize;
        }

        if let Some(value) = lookup(DELAY_VAR) {
            cfg.prediction_delay = Duration::from_millis(parse_positive(DELAY_VAR, &value)?);
        }

        if let Some(value) = lookup(VISITOR_TTL_VAR) {
            cfg.visitor_ttl = Duration::from_secs(parse_positive(VISITOR_TTL_VAR, &value)?);
        }

        if let Some(value) = lookup(STATIC_DIR_VAR) {
            cfg.static_dir = PathBuf::from(value.trim());
        }

        Ok(cfg)
    }
}

fn parse_positive(var: &'static str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::BadNumber {
            var,
            value: value.to_string(),
        }),
    }
}
