// src/tests/router_tests/static_tests.rs
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, test_app};
use astra::Body;
use http::{Method, Request};

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[test]
fn stylesheet_is_served_as_css() {
    let (app, _) = test_app();

    let resp = handle(get("/static/main.css"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/css; charset=utf-8"
    );
    assert!(resp.headers().get("Set-Cookie").is_none());
    assert!(body_string(resp).contains(".toast-stack"));
    assert_eq!(app.forms.len(), 0);
}

#[test]
fn page_images_are_served_as_svg() {
    let (app, _) = test_app();

    for uri in ["/static/favicon/favicon.svg", "/static/hero-house.svg"] {
        let resp = handle(get(uri), &app).expect("Handler failed");
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers().get("Content-Type").unwrap(), "image/svg+xml");
    }
}

#[test]
fn paths_outside_the_static_dir_are_not_found() {
    let (app, _) = test_app();

    for uri in ["/static/../Cargo.toml", "/static/favicon/../../src/main.rs"] {
        assert!(matches!(handle(get(uri), &app), Err(ServerError::NotFound)));
    }
}
