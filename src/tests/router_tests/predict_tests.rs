// src/tests/router_tests/predict_tests.rs
use crate::errors::ServerError;
use crate::form::Status;
use crate::router::handle;
use crate::state::AppState;
use crate::tests::utils::{body_string, test_app, visitor_cookie, AUSTIN_FORM, DELAY};
use astra::{Body, Response};
use http::{Method, Request};
use std::time::Duration;

fn post_form(app: &AppState, cookie: Option<&str>, form: &str) -> Response {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/predict")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .header("HX-Request", "true");
    if let Some(cookie) = cookie {
        builder = builder.header("Cookie", cookie);
    }
    let req = builder.body(Body::from(form.to_string())).unwrap();
    handle(req, app).expect("Handler failed")
}

fn get_with_cookie(app: &AppState, uri: &str, cookie: &str) -> Response {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("Cookie", cookie)
        .header("HX-Request", "true")
        .body(Body::empty())
        .unwrap();
    handle(req, app).expect("Handler failed")
}

#[test]
fn complete_form_goes_pending_then_shows_estimate() {
    let (app, scheduler) = test_app();

    let resp = post_form(&app, None, AUSTIN_FORM);
    assert_eq!(resp.status(), 200);
    let cookie = visitor_cookie(&resp);

    let body = body_string(resp);
    assert!(body.contains("Analyzing Property..."));
    assert!(body.contains(r#"hx-get="/prediction""#));
    assert!(body.contains("disabled"));

    // Still pending just before the delay elapses.
    scheduler.advance(DELAY - Duration::from_millis(1));
    let body = body_string(get_with_cookie(&app, "/prediction", &cookie));
    assert!(body.contains("Analyzing Property..."));
    assert!(!body.contains("Prediction Complete!"));

    scheduler.advance(Duration::from_millis(1));
    let body = body_string(get_with_cookie(&app, "/prediction", &cookie));
    assert!(body.contains("Estimated Property Value"));
    assert!(body.contains("Price Range"));
    assert!(body.contains("Confidence: "));
    assert!(body.contains("Prediction Complete!"));
    assert!(!body.contains(r#"hx-get="/prediction""#));

    // The notice is one-shot; the estimate stays.
    let body = body_string(get_with_cookie(&app, "/prediction", &cookie));
    assert!(body.contains("Estimated Property Value"));
    assert!(!body.contains("Prediction Complete!"));
}

#[test]
fn blank_location_is_rejected_with_notice() {
    let (app, scheduler) = test_app();
    let form = AUSTIN_FORM.replace("location=Austin%2C+TX", "location=");

    let resp = post_form(&app, None, &form);
    let cookie = visitor_cookie(&resp);
    let body = body_string(resp);

    assert!(body.contains("Missing Information"));
    assert!(body.contains("Please fill in all required fields to get a prediction."));
    assert!(!body.contains("Analyzing Property..."));
    assert_eq!(scheduler.pending(), 0);

    let (_, controller, _) = app.forms.checkout(cookie.strip_prefix("visitor="));
    assert_eq!(controller.status(), Status::Idle);
    assert!(controller.latest_result().is_none());
}

#[test]
fn reset_returns_to_empty_panel() {
    let (app, scheduler) = test_app();

    let cookie = visitor_cookie(&post_form(&app, None, AUSTIN_FORM));
    scheduler.advance(DELAY);

    let req = Request::builder()
        .method(Method::POST)
        .uri("/reset")
        .header("Cookie", cookie.as_str())
        .header("HX-Request", "true")
        .body(Body::empty())
        .unwrap();
    let body = body_string(handle(req, &app).unwrap());

    assert!(body.contains("Ready for Prediction"));
    assert!(!body.contains("Estimated Property Value"));
}

#[test]
fn plain_form_post_renders_the_full_page() {
    let (app, _) = test_app();

    let req = Request::builder()
        .method(Method::POST)
        .uri("/predict")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(AUSTIN_FORM.to_string()))
        .unwrap();
    let body = body_string(handle(req, &app).unwrap());

    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("Analyzing Property..."));
    assert!(body.contains(r#"value="Austin, TX""#));
    assert!(body.contains(r#"http-equiv="refresh""#));
}

#[test]
fn idle_page_does_not_reload_itself() {
    let (app, _) = test_app();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap();
    let body = body_string(handle(req, &app).unwrap());

    assert!(!body.contains("http-equiv"));
}

#[test]
fn oversized_form_body_is_refused() {
    let (app, scheduler) = test_app();
    let padding = "x".repeat(20 * 1024);
    let form = format!("{AUSTIN_FORM}&location={padding}");

    let req = Request::builder()
        .method(Method::POST)
        .uri("/predict")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form))
        .unwrap();

    assert!(matches!(handle(req, &app), Err(ServerError::BadRequest(_))));
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn unknown_form_field_is_a_bad_request() {
    let (app, _) = test_app();

    let req = Request::builder()
        .method(Method::POST)
        .uri("/predict")
        .body(Body::from(format!("{AUSTIN_FORM}&pool=yes")))
        .unwrap();

    assert!(matches!(handle(req, &app), Err(ServerError::BadRequest(_))));
}

#[test]
fn field_edits_update_the_held_form() {
    let (app, _) = test_app();
    let (visitor, controller, _) = app.forms.checkout(None);
    let cookie = format!("visitor={visitor}");

    let req = Request::builder()
        .method(Method::POST)
        .uri("/field")
        .header("Cookie", cookie.as_str())
        .body(Body::from("location=Austin%2C+TX".to_string()))
        .unwrap();
    let resp = handle(req, &app).unwrap();

    assert_eq!(resp.status(), 204);
    assert_eq!(controller.features().location, "Austin, TX");
    assert_eq!(controller.features().bedrooms, "");
}

#[test]
fn cancel_while_pending_never_shows_a_result() {
    let (app, scheduler) = test_app();
    let cookie = visitor_cookie(&post_form(&app, None, AUSTIN_FORM));

    let req = Request::builder()
        .method(Method::POST)
        .uri("/cancel")
        .header("Cookie", cookie.as_str())
        .header("HX-Request", "true")
        .body(Body::empty())
        .unwrap();
    let body = body_string(handle(req, &app).unwrap());
    assert!(body.contains("Ready for Prediction"));

    scheduler.advance(DELAY);
    let body = body_string(get_with_cookie(&app, "/prediction", &cookie));
    assert!(body.contains("Ready for Prediction"));
    assert!(!body.contains("Prediction Complete!"));
}
