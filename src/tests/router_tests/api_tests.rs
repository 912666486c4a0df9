// src/tests/router_tests/api_tests.rs
use crate::router::handle;
use crate::state::AppState;
use crate::tests::utils::{body_string, test_app, visitor_cookie, DELAY};
use astra::{Body, Response};
use http::{Method, Request};
use serde_json::{json, Value};

fn austin() -> Value {
    json!({
        "bedrooms": "3",
        "bathrooms": "2",
        "squareFeet": "2000",
        "yearBuilt": "2010",
        "location": "Austin, TX",
        "propertyType": "single-family",
        "condition": "good"
    })
}

fn post_json(app: &AppState, cookie: Option<&str>, body: String) -> Response {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/api/prediction")
        .header("Content-Type", "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header("Cookie", cookie);
    }
    handle(builder.body(Body::from(body)).unwrap(), app).expect("Handler failed")
}

fn json_body(resp: Response) -> Value {
    serde_json::from_str(&body_string(resp)).expect("json body")
}

#[test]
fn incomplete_features_are_rejected_with_422() {
    let (app, scheduler) = test_app();
    let mut features = austin();
    features["location"] = json!("");

    let resp = post_json(&app, None, features.to_string());
    assert_eq!(resp.status(), 422);

    let body = json_body(resp);
    assert_eq!(body["status"], "rejected");
    assert_eq!(body["reason"], "incomplete");
    assert_eq!(body["missingFields"], json!(["location"]));
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn null_and_non_string_values_count_as_missing() {
    let (app, scheduler) = test_app();
    let mut features = austin();
    features["location"] = Value::Null;
    features["bedrooms"] = json!(3);

    let resp = post_json(&app, None, features.to_string());
    assert_eq!(resp.status(), 422);

    let body = json_body(resp);
    assert_eq!(body["reason"], "incomplete");
    assert_eq!(body["missingFields"], json!(["bedrooms", "location"]));
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn complete_features_are_accepted_then_resolved() {
    let (app, scheduler) = test_app();

    let resp = post_json(&app, None, austin().to_string());
    assert_eq!(resp.status(), 202);
    let cookie = visitor_cookie(&resp);

    let body = json_body(resp);
    assert_eq!(body["status"], "accepted");
    assert_eq!(body["prediction"]["status"], "pending");
    assert!(body["prediction"]["result"].is_null());

    scheduler.advance(DELAY);

    let req = Request::builder()
        .method(Method::GET)
        .uri("/api/prediction")
        .header("Cookie", cookie)
        .body(Body::empty())
        .unwrap();
    let body = json_body(handle(req, &app).unwrap());

    assert_eq!(body["status"], "idle");
    assert_eq!(body["features"]["location"], "Austin, TX");
    assert_eq!(body["notices"][0]["title"], "Prediction Complete!");

    let price = body["result"]["predictedPrice"].as_i64().unwrap();
    let min = body["result"]["priceRange"]["min"].as_i64().unwrap();
    let max = body["result"]["priceRange"]["max"].as_i64().unwrap();
    let confidence = body["result"]["confidence"].as_f64().unwrap();

    assert!((200_000..700_000).contains(&price));
    assert!(min < price && price < max);
    assert!((85.0..100.0).contains(&confidence));
    assert!(body["completedAt"].is_string());
}

#[test]
fn malformed_json_is_a_400_json_error() {
    let (app, _) = test_app();

    let resp = post_json(&app, None, "{not json".to_string());
    assert_eq!(resp.status(), 400);
    assert!(json_body(resp)["error"]
        .as_str()
        .unwrap()
        .starts_with("Bad Request"));
}
