// src/form/controller.rs
use crate::domain::{is_complete, missing_fields, FieldName, PredictionResult, PropertyFeatures};
use crate::simulation::PredictionSimulator;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Idle,
    Pending,
}

/// A submit was refused because some fields are blank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing information: {}", join_fields(.missing))]
pub struct IncompleteInput {
    pub missing: Vec<FieldName>,
}

impl IncompleteInput {
    pub fn reason(&self) -> &'static str {
        "incomplete"
    }
}

fn join_fields(fields: &[FieldName]) -> String {
    fields
        .iter()
        .map(|f| f.wire_name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected(IncompleteInput),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeVariant {
    Default,
    Destructive,
}

/// One-shot, toast-style message for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn missing_information() -> Self {
        Self {
            title: "Missing Information",
            description: "Please fill in all required fields to get a prediction.",
            variant: NoticeVariant::Destructive,
        }
    }

    pub fn prediction_complete() -> Self {
        Self {
            title: "Prediction Complete!",
            description: "Your house price prediction is ready.",
            variant: NoticeVariant::Default,
        }
    }
}

/// Read-only copy of the form, taken under the lock.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    pub status: Status,
    pub features: PropertyFeatures,
    pub result: Option<PredictionResult>,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug)]
struct FormState {
    features: PropertyFeatures,
    result: Option<PredictionResult>,
    completed_at: Option<DateTime<Utc>>,
    status: Status,
    /// Identifies the live request; completions carrying an older ticket are
    /// dropped.
    ticket: u64,
    notices: Vec<Notice>,
}

impl FormState {
    fn new() -> Self {
        Self {
            features: PropertyFeatures::default(),
            result: None,
            completed_at: None,
            status: Status::Idle,
            ticket: 0,
            notices: Vec::new(),
        }
    }
}

/// Owns one visitor's form and drives it through `Idle -> Pending -> Idle`.
///
/// A submit while a request is pending supersedes it: the older completion is
/// discarded without touching the result or raising a notice.
pub struct SubmissionController {
    state: Arc<Mutex<FormState>>,
    simulator: PredictionSimulator,
}

impl SubmissionController {
    pub fn new(simulator: PredictionSimulator) -> Self {
        Self {
            state: Arc::new(Mutex::new(FormState::new())),
            simulator,
        }
    }

    pub fn update_field(&self, field: FieldName, value: impl Into<String>) {
        self.lock().features.set(field, value);
    }

    pub fn submit(&self) -> SubmitOutcome {
        self.submit_inner(None)
    }

    /// Replaces the held features and submits them under one lock, so a
    /// concurrent field edit cannot land between the two.
    pub fn submit_with(&self, features: PropertyFeatures) -> SubmitOutcome {
        self.submit_inner(Some(features))
    }

    fn submit_inner(&self, replacement: Option<PropertyFeatures>) -> SubmitOutcome {
        let (features, ticket) = {
            let mut state = self.lock();
            if let Some(features) = replacement {
                state.features = features;
            }

            if !is_complete(&state.features) {
                let missing = missing_fields(&state.features);
                tracing::info!(missing = %join_fields(&missing), "prediction rejected");
                state.notices.push(Notice::missing_information());
                return SubmitOutcome::Rejected(IncompleteInput { missing });
            }

            if state.status == Status::Pending {
                tracing::debug!(ticket = state.ticket, "superseding pending prediction");
            }

            state.ticket += 1;
            state.status = Status::Pending;
            (state.features.clone(), state.ticket)
        };

        tracing::info!(ticket, delay_ms = self.simulator.delay().as_millis() as u64, "prediction accepted");

        let state = Arc::clone(&self.state);
        self.simulator.request_prediction(features, move |result| {
            let mut state = state.lock().unwrap_or_else(|e| e.into_inner());

            if state.ticket != ticket || state.status != Status::Pending {
                tracing::debug!(ticket, current = state.ticket, "dropping stale prediction");
                return;
            }

            state.result = Some(result);
            state.completed_at = Some(Utc::now());
            state.status = Status::Idle;
            state.notices.push(Notice::prediction_complete());

            tracing::info!(
                ticket,
                predicted_price = result.predicted_price,
                confidence = result.confidence,
                "prediction complete"
            );
        });

        SubmitOutcome::Accepted
    }

    /// Drops the pending request, if any. Its completion will not notify.
    pub fn cancel(&self) {
        let mut state = self.lock();
        if state.status == Status::Pending {
            state.ticket += 1;
            state.status = Status::Idle;
            tracing::info!("pending prediction cancelled");
        }
    }

    /// Back to a freshly opened form.
    pub fn reset(&self) {
        let mut state = self.lock();
        let ticket = state.ticket + 1;
        *state = FormState::new();
        state.ticket = ticket;
    }

    pub fn status(&self) -> Status {
        self.lock().status
    }

    pub fn features(&self) -> PropertyFeatures {
        self.lock().features.clone()
    }

    pub fn latest_result(&self) -> Option<PredictionResult> {
        self.lock().result
    }

    /// Hands over queued notices; each is returned once.
    pub fn take_notices(&self) -> Vec<Notice> {
        std::mem::take(&mut self.lock().notices)
    }

    pub fn snapshot(&self) -> FormSnapshot {
        let state = self.lock();
        FormSnapshot {
            status: state.status,
            features: state.features.clone(),
            result: state.result,
            completed_at: state.completed_at,
        }
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}
