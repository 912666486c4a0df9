// templates/pages/prediction.rs

use crate::domain::property::{
    BATHROOM_CHOICES, BEDROOM_CHOICES, CONDITION_CHOICES, PROPERTY_TYPE_CHOICES,
};
use crate::domain::{format_confidence, format_price, FieldName, PredictionResult, PropertyFeatures};
use crate::form::{FormSnapshot, Notice, Status};
use crate::templates::components::{card, notices_stack, select_field, text_field};
use maud::{html, Markup};

/// The trigger button. Rendered in place inside the form and out-of-band from
/// the results partial, so it stays disabled for as long as the request is
/// pending.
pub fn predict_button(status: Status, oob: bool) -> Markup {
    let pending = status == Status::Pending;
    html! {
        button
            id="predict-button"
            type="submit"
            class="btn btn-primary w-full text-lg py-6"
            disabled[pending]
            hx-swap-oob=[oob.then_some("true")]
        {
            @if pending { "Analyzing Property..." } @else { "Get Price Prediction" }
        }
    }
}

pub fn prediction_form(features: &PropertyFeatures, status: Status) -> Markup {
    card(
        "Property Details",
        "Provide accurate information for the best prediction results",
        html! {
            form
                method="post"
                action="/predict"
                hx-post="/predict"
                hx-target="#prediction-results"
                hx-swap="outerHTML"
                class="space-y-6"
            {
                div class="grid grid-cols-2 gap-4" {
                    (select_field(FieldName::Bedrooms, "Select", &BEDROOM_CHOICES, &features.bedrooms))
                    (select_field(FieldName::Bathrooms, "Select", &BATHROOM_CHOICES, &features.bathrooms))
                }
                (text_field(FieldName::SquareFeet, "number", "e.g., 2000", &features.square_feet))
                (text_field(FieldName::YearBuilt, "number", "e.g., 2010", &features.year_built))
                (text_field(FieldName::Location, "text", "e.g., San Francisco, CA", &features.location))
                (select_field(FieldName::PropertyType, "Select property type", &PROPERTY_TYPE_CHOICES, &features.property_type))
                (select_field(FieldName::Condition, "Select condition", &CONDITION_CHOICES, &features.condition))

                (predict_button(status, false))
            }
        },
    )
}

fn result_body(result: &PredictionResult, snapshot: &FormSnapshot) -> Markup {
    html! {
        div class="space-y-6" {
            div class="estimate text-center p-8 rounded-lg" {
                div class="text-sm text-muted-foreground mb-2" { "Estimated Property Value" }
                div class="text-4xl font-bold text-primary mb-4" { (format_price(result.predicted_price)) }
                div class="text-sm text-muted-foreground" {
                    "Confidence: " (format_confidence(result.confidence)) "%"
                }
            }

            div class="border-t pt-6" {
                h4 class="font-semibold text-primary mb-4" { "Price Range" }
                div class="grid grid-cols-2 gap-4" {
                    div class="text-center p-4 rounded-lg" {
                        div class="text-sm text-muted-foreground" { "Minimum" }
                        div class="text-xl font-semibold text-primary" { (format_price(result.price_range.min)) }
                    }
                    div class="text-center p-4 rounded-lg" {
                        div class="text-sm text-muted-foreground" { "Maximum" }
                        div class="text-xl font-semibold text-primary" { (format_price(result.price_range.max)) }
                    }
                }
            }

            @if let Some(at) = snapshot.completed_at {
                p class="text-xs text-muted-foreground" {
                    "Estimated " (at.format("%b %-d, %Y at %H:%M UTC").to_string())
                }
            }

            div class="note p-4 rounded-lg" {
                p class="text-sm text-muted-foreground" {
                    strong { "Note:" }
                    " This prediction is based on machine learning algorithms analyzing similar properties. "
                    "Market conditions and unique property features may affect actual values."
                }
            }

            form hx-post="/reset" hx-target="#prediction-results" hx-swap="outerHTML" {
                button type="submit" class="btn btn-link text-sm" { "Start over" }
            }
        }
    }
}

fn empty_body() -> Markup {
    html! {
        div class="text-center py-12" {
            h3 class="text-lg font-semibold text-primary mb-2" { "Ready for Prediction" }
            p class="text-muted-foreground" {
                "Fill out the property details form to get your AI-powered price prediction"
            }
        }
    }
}

fn pending_body() -> Markup {
    html! {
        div class="text-center py-12" {
            span class="spinner" aria-hidden="true" {}
            h3 class="text-lg font-semibold text-primary mb-2" { "Analyzing Property..." }
            p class="text-muted-foreground" { "Crunching comparable sales in your area." }
            form hx-post="/cancel" hx-target="#prediction-results" hx-swap="outerHTML" {
                button type="submit" class="btn btn-link text-sm" { "Cancel" }
            }
        }
    }
}

/// The right-hand results card. While pending it polls `/prediction` and
/// replaces itself once the estimate lands.
pub fn results_panel(snapshot: &FormSnapshot) -> Markup {
    let pending = snapshot.status == Status::Pending;
    let body = match (&snapshot.result, pending) {
        (_, true) => pending_body(),
        (Some(result), false) => result_body(result, snapshot),
        (None, false) => empty_body(),
    };

    html! {
        div
            id="prediction-results"
            hx-get=[pending.then_some("/prediction")]
            hx-trigger=[pending.then_some("every 1s")]
            hx-swap=[pending.then_some("outerHTML")]
        {
            (card(
                "Prediction Results",
                "AI-powered price estimation based on your property details",
                body,
            ))
        }
    }
}

/// What htmx gets back from `/predict`, `/prediction` and `/reset`.
pub fn results_partial(snapshot: &FormSnapshot, notices: &[Notice]) -> Markup {
    html! {
        (results_panel(snapshot))
        (predict_button(snapshot.status, true))
        (notices_stack(notices, true))
    }
}

pub fn prediction_section(snapshot: &FormSnapshot) -> Markup {
    html! {
        section id="prediction-form" class="py-20 px-4" {
            div class="max-w-6xl mx-auto" {
                div class="text-center mb-12" {
                    h2 class="text-4xl font-bold text-primary mb-4" { "Get Your House Price Prediction" }
                    p class="text-xl text-muted-foreground" {
                        "Enter your property details below to receive an AI-powered price estimation"
                    }
                }

                div class="grid lg:grid-cols-2 gap-8" {
                    (prediction_form(&snapshot.features, snapshot.status))
                    (results_panel(snapshot))
                }
            }
        }
    }
}
