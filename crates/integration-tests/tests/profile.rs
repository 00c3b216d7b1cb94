//! Integration tests for the profile page: account card, preference
//! switches, and the order history fixture.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;

use soundstage_integration_tests::{get, post_form, test_app};

#[tokio::test]
async fn profile_shows_account_and_order_history() {
    let app = test_app();
    let (status, body) = get(&app, "/profile").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("John Doe"));
    assert!(body.contains("john.doe@example.com"));

    assert!(body.contains("Order ORD001"));
    assert!(body.contains("2024-03-15"));
    assert!(body.contains("$679.98"));
    assert!(body.contains("Delivered"));

    assert!(body.contains("Order ORD002"));
    assert!(body.contains("$349.99"));
    assert!(body.contains("Processing"));
}

#[tokio::test]
async fn preference_switches_start_at_defaults() {
    let app = test_app();
    let (_, body) = get(&app, "/profile").await;

    // notifications default on, dark mode default off
    assert!(body.contains("Turn notifications off"));
    assert!(body.contains("Turn dark mode on"));
}

#[tokio::test]
async fn toggling_a_preference_flips_its_switch() {
    let app = test_app();

    let (status, _) = post_form(&app, "/profile/preferences", "setting=dark-mode").await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let (_, body) = get(&app, "/profile").await;
    assert!(body.contains("Turn dark mode off"));
    // the other switch is untouched
    assert!(body.contains("Turn notifications off"));

    post_form(&app, "/profile/preferences", "setting=dark-mode").await;
    let (_, body) = get(&app, "/profile").await;
    assert!(body.contains("Turn dark mode on"));
}

#[tokio::test]
async fn unknown_setting_is_rejected() {
    let app = test_app();

    let (status, _) = post_form(&app, "/profile/preferences", "setting=telemetry").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
