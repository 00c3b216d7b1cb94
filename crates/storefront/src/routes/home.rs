//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::state::AppState;
use crate::store::{Product, seed};

/// Featured product display data.
///
/// The "view on website" action hands `website_url` to the browser
/// verbatim; the storefront never parses it.
#[derive(Clone)]
pub struct FeaturedView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub image_url: String,
    pub website_url: String,
}

impl From<&Product> for FeaturedView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: product.price.display(),
            image_url: product.image_url.clone(),
            website_url: product.website_url.clone(),
        }
    }
}

/// A quick-access card linking into the app.
#[derive(Clone)]
pub struct QuickLinkView {
    pub title: &'static str,
    pub href: &'static str,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub quick_links: Vec<QuickLinkView>,
    pub featured: Vec<FeaturedView>,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let featured = seed::FEATURED_PRODUCT_IDS
        .into_iter()
        .filter_map(|id| state.catalog().product(&id.into()))
        .map(|product| FeaturedView::from(&product))
        .collect();

    HomeTemplate {
        quick_links: vec![
            QuickLinkView {
                title: "Browse Headphones",
                href: "/products",
            },
            QuickLinkView {
                title: "View Bucket",
                href: "/bucket",
            },
            QuickLinkView {
                title: "Check Features",
                href: "/features",
            },
        ],
        featured,
    }
}
