// src/state.rs
use crate::form::FormRegistry;
use std::path::PathBuf;

/// Everything a request handler needs, shared by every astra worker.
pub struct AppState {
    pub forms: FormRegistry,
    pub static_dir: PathBuf,
}
