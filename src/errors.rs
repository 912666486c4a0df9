// errors.rs
use thiserror::Error;

/// Errors surfaced by route handlers. Each maps onto one HTTP status.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Unprocessable: {0}")]
    Unprocessable(String),
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Unprocessable(_) => 422,
            ServerError::InternalError => 500,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    BadAddr { var: &'static str, value: String },
    #[error("{var} must be a positive integer, got {value:?}")]
    BadNumber { var: &'static str, value: String },
}
