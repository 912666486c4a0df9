// src/tests/router_tests/landing_tests.rs
use crate::errors::ServerError;
use crate::router::handle;
use crate::templates::html_error_response;
use crate::tests::utils::{body_string, test_app, visitor_cookie};
use astra::Body;
use http::{Method, Request};

#[test]
fn landing_page_renders_every_section() {
    let (app, _) = test_app();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert!(visitor_cookie(&resp).starts_with("visitor="));

    let body = body_string(resp);
    assert!(body.contains("Predict Your"));
    assert!(body.contains("Why Choose Our AI Predictions?"));
    assert!(body.contains("Advanced ML Algorithms"));
    assert!(body.contains("Get Your House Price Prediction"));
    assert!(body.contains("Ready for Prediction"));
    assert!(body.contains(r#"name="square_feet""#));
    assert!(body.contains(r#"value="single-family""#));
    assert!(body.contains(r#"src="https://unpkg.com/htmx.org@2.0.4""#));
    assert!(body.contains(r#"href="/static/main.css""#));
}

#[test]
fn returning_visitor_keeps_their_form_and_gets_no_new_cookie() {
    let (app, _) = test_app();

    let first = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap();
    let resp = handle(first, &app).unwrap();
    let cookie = visitor_cookie(&resp);

    let second = Request::builder()
        .method(Method::GET)
        .uri("/")
        .header("Cookie", cookie)
        .body(Body::empty())
        .unwrap();
    let resp = handle(second, &app).unwrap();

    assert!(resp.headers().get("Set-Cookie").is_none());
    assert_eq!(app.forms.len(), 1);
}

#[test]
fn unknown_route_is_not_found() {
    let (app, _) = test_app();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/pricing")
        .body(Body::empty())
        .unwrap();

    let err = handle(req, &app).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
    assert_eq!(app.forms.len(), 0);

    let resp = html_error_response(err);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));
}

#[test]
fn stray_requests_do_not_create_visitors() {
    let (app, _) = test_app();

    for (method, uri) in [
        (Method::GET, "/favicon.ico"),
        (Method::GET, "/wp-login.php"),
        (Method::DELETE, "/"),
        (Method::GET, "/predict"),
        (Method::GET, "/static/missing.png"),
    ] {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        assert!(matches!(handle(req, &app), Err(ServerError::NotFound)));
    }

    assert_eq!(app.forms.len(), 0);
}
