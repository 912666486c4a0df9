// templates/pages/home.rs

use crate::form::{FormSnapshot, Notice, Status};
use crate::templates::{
    components::{features_section, hero_section, notices_stack},
    desktop_layout,
    pages::prediction::prediction_section,
};
use maud::{html, Markup};

/// Without htmx nothing polls, so a pending page reloads itself until the
/// estimate lands.
const PENDING_REFRESH: &str = "2; url=/#prediction-form";

pub fn home_page(snapshot: &FormSnapshot, notices: &[Notice]) -> Markup {
    let refresh = (snapshot.status == Status::Pending).then_some(PENDING_REFRESH);

    desktop_layout(
        "Predict Your Dream Home's Value",
        refresh,
        html! {
            main {
                (hero_section())
                (features_section())
                (prediction_section(snapshot))
            }
            (notices_stack(notices, false))
        },
    )
}
