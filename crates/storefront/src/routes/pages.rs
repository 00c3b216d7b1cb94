//! Static page route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::filters;

/// Features page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/features.html")]
pub struct FeaturesTemplate;

/// Display the static features page.
pub async fn features() -> impl IntoResponse {
    FeaturesTemplate
}
