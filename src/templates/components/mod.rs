use crate::domain::property::Choice;
use crate::domain::FieldName;
use maud::{html, Markup};

pub mod error;
pub mod features;
pub mod hero;
pub mod notices;

pub use error::html_error_response;
pub use features::features_section;
pub use hero::hero_section;
pub use notices::notices_stack;

pub fn card(title: &str, description: &str, body: Markup) -> Markup {
    html! {
        div class="card shadow-elegant" {
            div class="card-header" {
                h3 class="text-2xl text-primary" { (title) }
                p class="card-description" { (description) }
            }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Inputs report each edit to `/field` on change, so the held form tracks the
/// page even before the visitor submits.
pub fn select_field(field: FieldName, placeholder: &str, choices: &[Choice], current: &str) -> Markup {
    let name = field.form_name();
    html! {
        div class="space-y-2" {
            label for=(name) { (field.label()) }
            select id=(name) name=(name) hx-post="/field" hx-trigger="change" hx-swap="none" {
                option value="" selected[current.is_empty()] { (placeholder) }
                @for (value, label) in choices {
                    option value=(value) selected[*value == current] { (label) }
                }
            }
        }
    }
}

pub fn text_field(field: FieldName, input_type: &str, placeholder: &str, current: &str) -> Markup {
    let name = field.form_name();
    html! {
        div class="space-y-2" {
            label for=(name) { (field.label()) }
            input
                id=(name)
                name=(name)
                type=(input_type)
                placeholder=(placeholder)
                value=(current)
                hx-post="/field"
                hx-trigger="change"
                hx-swap="none";
        }
    }
}
