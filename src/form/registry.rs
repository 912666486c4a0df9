// src/form/registry.rs
use crate::form::controller::SubmissionController;
use crate::simulation::PredictionSimulator;
use base64::Engine;
use rand::{rngs::OsRng, RngCore};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

pub const VISITOR_COOKIE: &str = "visitor";

struct Visitor {
    form: Arc<SubmissionController>,
    last_seen: Instant,
}

/// One form per browser, keyed by the `visitor` cookie. Forms left alone for
/// longer than `idle_ttl` are dropped on the next checkout.
pub struct FormRegistry {
    simulator: PredictionSimulator,
    idle_ttl: Duration,
    forms: Mutex<HashMap<String, Visitor>>,
}

impl FormRegistry {
    pub fn new(simulator: PredictionSimulator, idle_ttl: Duration) -> Self {
        Self {
            simulator,
            idle_ttl,
            forms: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the visitor's form, creating it on first sight. A `None` or
    /// unknown id gets a freshly minted id; the bool reports whether that
    /// happened so the caller can set the cookie.
    pub fn checkout(&self, visitor_id: Option<&str>) -> (String, Arc<SubmissionController>, bool) {
        self.checkout_at(visitor_id, Instant::now())
    }

    fn checkout_at(
        &self,
        visitor_id: Option<&str>,
        now: Instant,
    ) -> (String, Arc<SubmissionController>, bool) {
        let mut forms = self.forms.lock().unwrap_or_else(|e| e.into_inner());

        let before = forms.len();
        forms.retain(|_, v| now.saturating_duration_since(v.last_seen) < self.idle_ttl);
        if forms.len() < before {
            tracing::debug!(evicted = before - forms.len(), "dropped idle visitor forms");
        }

        if let Some(id) = visitor_id {
            if let Some(visitor) = forms.get_mut(id) {
                visitor.last_seen = now;
                return (id.to_string(), Arc::clone(&visitor.form), false);
            }
        }

        let id = new_visitor_id();
        let form = Arc::new(SubmissionController::new(self.simulator.clone()));
        forms.insert(
            id.clone(),
            Visitor {
                form: Arc::clone(&form),
                last_seen: now,
            },
        );
        tracing::debug!(visitors = forms.len(), "new visitor form");

        (id, form, true)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.forms.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

fn new_visitor_id() -> String {
    let mut raw = [0u8; 32];
    OsRng.fill_bytes(&mut raw);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(raw)
}

/// Pulls the visitor id out of a `Cookie` header value.
pub fn visitor_from_cookie_header(header: &str) -> Option<&str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == VISITOR_COOKIE)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}
