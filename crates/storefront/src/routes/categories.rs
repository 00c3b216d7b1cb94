//! Category route handlers.
//!
//! Categories are the labels carried by catalog entries; there is no
//! separate category entity. The index lists them, the detail page is the
//! catalog projection filtered to one label.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::instrument;

use crate::filters;
use crate::routes::products::ProductCardView;
use crate::state::AppState;
use crate::store::CatalogQuery;

/// Category display data for the index template.
#[derive(Clone)]
pub struct CategoryCardView {
    pub label: String,
    pub href: String,
    pub product_count: usize,
}

/// Category listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "categories/index.html")]
pub struct CategoriesIndexTemplate {
    pub categories: Vec<CategoryCardView>,
}

/// Category detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "categories/show.html")]
pub struct CategoryShowTemplate {
    pub category: String,
    pub products: Vec<ProductCardView>,
    pub return_to: String,
}

/// Not-found state for unknown category names.
#[derive(Template, WebTemplate)]
#[template(path = "categories/not_found.html")]
pub struct CategoryNotFoundTemplate {
    pub name: String,
}

/// Display the category listing.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let categories = state
        .catalog()
        .categories()
        .into_iter()
        .map(|label| {
            let products = state.catalog().select(&CatalogQuery {
                category: Some(label.clone()),
                ..CatalogQuery::default()
            });
            CategoryCardView {
                href: format!("/categories/{}", urlencoding::encode(&label)),
                product_count: products.len(),
                label,
            }
        })
        .collect();

    CategoriesIndexTemplate { categories }
}

/// Display the products of one category.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    if !state.catalog().categories().contains(&name) {
        return (
            StatusCode::NOT_FOUND,
            CategoryNotFoundTemplate { name },
        )
            .into_response();
    }

    let products: Vec<ProductCardView> = state
        .catalog()
        .select(&CatalogQuery {
            category: Some(name.clone()),
            ..CatalogQuery::default()
        })
        .iter()
        .map(ProductCardView::from)
        .collect();

    CategoryShowTemplate {
        return_to: format!("/categories/{}", urlencoding::encode(&name)),
        category: name,
        products,
    }
    .into_response()
}
