//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                         - Home page
//! GET  /health                   - Health check
//!
//! # Products
//! GET  /products                 - Catalog listing (q, category, sort)
//! GET  /products/{id}            - Product detail (renders not-found state
//!                                  for unknown ids)
//! POST /products/{id}/favorite   - Toggle favorite flag, redirect back
//! POST /products/{id}/bucket     - Toggle in-bucket flag, redirect back
//! GET  /categories               - Category listing
//! GET  /categories/{name}        - Products of one category
//!
//! # Bucket
//! GET  /bucket                   - Bucket page with quantities and total
//! POST /bucket/update            - Adjust a line quantity (clamped >= 1)
//! GET  /bucket/{id}/remove       - Removal confirmation page
//! POST /bucket/{id}/remove       - Confirmed removal
//!
//! # Checkout (stub boundary)
//! GET  /checkout                 - Confirmation prompt
//! POST /checkout                 - Acknowledgment; mutates nothing
//!
//! # Profile
//! GET  /profile                  - Account, settings, order history
//! POST /profile/preferences      - Toggle a preference switch
//!
//! # Pages
//! GET  /features                 - Static features page
//! ```

pub mod bucket;
pub mod categories;
pub mod home;
pub mod pages;
pub mod products;
pub mod profile;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use crate::filters;
use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
        .route("/{id}/favorite", post(products::toggle_favorite))
        .route("/{id}/bucket", post(products::toggle_bucket))
}

/// Create the category routes router.
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::index))
        .route("/{name}", get(categories::show))
}

/// Create the bucket routes router.
pub fn bucket_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(bucket::show))
        .route("/update", post(bucket::update))
        .route("/{id}/remove", get(bucket::confirm_remove).post(bucket::remove))
}

/// Create the profile routes router.
pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(profile::show))
        .route("/preferences", post(profile::toggle_preference))
}

/// Global 404 page template.
#[derive(Template, WebTemplate)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;

/// Fallback handler for unmatched routes.
pub async fn fallback() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, NotFoundTemplate)
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Product routes
        .nest("/products", product_routes())
        // Category routes
        .nest("/categories", category_routes())
        // Bucket routes
        .nest("/bucket", bucket_routes())
        // Checkout stub
        .route("/checkout", get(bucket::checkout).post(bucket::place_order))
        // Profile routes
        .nest("/profile", profile_routes())
        // Static pages
        .route("/features", get(pages::features))
        .fallback(fallback)
}
