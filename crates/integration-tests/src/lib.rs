//! Integration tests for Soundstage.
//!
//! The storefront keeps all state in memory, so the tests drive the real
//! router in-process with `tower::ServiceExt::oneshot` instead of spawning
//! a server. Each test builds its own [`test_app`], which seeds fresh
//! stores - tests never share state.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p soundstage-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog` - listing, filtering, sorting, flag toggles
//! - `bucket` - quantities, removal flow, totals, checkout stub
//! - `profile` - account page, preference switches, order history
//! - `pages` - home, categories, features, not-found states

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use soundstage_storefront::config::StorefrontConfig;
use soundstage_storefront::routes;
use soundstage_storefront::state::AppState;

/// Build the storefront router over freshly seeded stores.
#[must_use]
pub fn test_app() -> Router {
    routes::routes().with_state(AppState::new(StorefrontConfig::default()))
}

/// Perform a GET request and return status plus rendered body.
///
/// # Panics
///
/// Panics if the request cannot be built or the body cannot be read; in a
/// test that is a failure, not a condition to handle.
pub async fn get(app: &Router, path: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .uri(path)
        .body(Body::empty())
        .expect("request builds");
    send(app, request).await
}

/// Perform a form POST request and return status plus rendered body.
///
/// # Panics
///
/// Panics if the request cannot be built or the body cannot be read.
pub async fn post_form(app: &Router, path: &str, form: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body(Body::from(form.to_owned()))
        .expect("request builds");
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    let body = String::from_utf8(bytes.to_vec()).expect("responses are UTF-8");
    (status, body)
}

/// Assert that `needles` appear in `haystack` in the given order.
///
/// # Panics
///
/// Panics when a needle is missing or out of order.
pub fn assert_in_order(haystack: &str, needles: &[&str]) {
    let mut position = 0;
    for needle in needles {
        let found = haystack[position..]
            .find(needle)
            .unwrap_or_else(|| panic!("{needle:?} missing or out of order in page"));
        position += found + needle.len();
    }
}
