//! Product route handlers.
//!
//! The catalog listing is a pure projection of the catalog store: filter
//! (search AND category), then stable sort. The favorite / in-bucket
//! toggles are form posts that redirect back to the listing they came from,
//! preserving the active query.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use soundstage_core::ProductId;

use crate::filters;
use crate::state::AppState;
use crate::store::{CatalogQuery, Product, SortKey, Specification};

/// Product display data for listing templates.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price: String,
    pub rating: String,
    /// Five entries of span classes: "star lit" or "star".
    pub stars: Vec<&'static str>,
    pub description: String,
    pub features: Vec<String>,
    pub category: String,
    pub image_url: String,
    pub is_favorite: bool,
    pub in_bucket: bool,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        let filled = product.rating.filled_stars();
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            price: product.price.display(),
            rating: product.rating.to_string(),
            stars: star_classes(filled),
            description: product.description.clone(),
            features: product.features.clone(),
            category: product.category.clone(),
            image_url: product.image_url.clone(),
            is_favorite: product.is_favorite,
            in_bucket: product.in_bucket,
        }
    }
}

/// Product display data for the detail template.
#[derive(Clone)]
pub struct ProductDetailView {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price: String,
    pub rating: String,
    pub stars: Vec<&'static str>,
    pub description: String,
    pub features: Vec<String>,
    pub specifications: Vec<Specification>,
    pub category: String,
    pub image_url: String,
    pub website_url: String,
    pub is_favorite: bool,
    pub in_bucket: bool,
}

impl From<&Product> for ProductDetailView {
    fn from(product: &Product) -> Self {
        let filled = product.rating.filled_stars();
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            price: product.price.display(),
            rating: product.rating.to_string(),
            stars: star_classes(filled),
            description: product.description.clone(),
            features: product.features.clone(),
            specifications: product.specifications.clone(),
            category: product.category.clone(),
            image_url: product.image_url.clone(),
            website_url: product.website_url.clone(),
            is_favorite: product.is_favorite,
            in_bucket: product.in_bucket,
        }
    }
}

/// A category filter chip.
#[derive(Clone)]
pub struct CategoryChipView {
    pub label: String,
    pub href: String,
    pub selected: bool,
}

/// A sort menu entry.
#[derive(Clone)]
pub struct SortOptionView {
    pub label: &'static str,
    pub href: String,
    pub selected: bool,
}

/// Catalog listing query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogPageQuery {
    #[serde(default)]
    pub q: String,
    pub category: Option<String>,
    #[serde(default)]
    pub sort: String,
}

impl CatalogPageQuery {
    fn to_catalog_query(&self) -> CatalogQuery {
        CatalogQuery {
            search: self.q.trim().to_string(),
            category: self
                .category
                .as_deref()
                .filter(|c| !c.is_empty())
                .map(str::to_owned),
            sort: SortKey::parse(&self.sort),
        }
    }
}

/// Build a catalog listing URL for the given parameters.
fn listing_url(search: &str, category: Option<&str>, sort: SortKey) -> String {
    let mut params: Vec<String> = Vec::new();
    if !search.is_empty() {
        params.push(format!("q={}", urlencoding::encode(search)));
    }
    if let Some(category) = category {
        params.push(format!("category={}", urlencoding::encode(category)));
    }
    if sort != SortKey::default() {
        params.push(format!("sort={}", sort.as_str()));
    }
    if params.is_empty() {
        "/products".to_string()
    } else {
        format!("/products?{}", params.join("&"))
    }
}

/// Span classes for a five-star row with `filled` lit stars.
fn star_classes(filled: u8) -> Vec<&'static str> {
    (1..=5)
        .map(|star| if star <= filled { "star lit" } else { "star" })
        .collect()
}

/// Only allow redirect targets that are local absolute paths.
fn sanitize_return_to(return_to: Option<String>) -> String {
    match return_to {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path,
        _ => "/products".to_string(),
    }
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub products: Vec<ProductCardView>,
    pub categories: Vec<CategoryChipView>,
    pub sort_options: Vec<SortOptionView>,
    pub query: String,
    pub favorite_count: usize,
    pub in_bucket_count: usize,
    /// Current listing URL, embedded in toggle forms so the post redirects
    /// back to the same view.
    pub return_to: String,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: ProductDetailView,
    pub return_to: String,
}

/// Not-found state for unknown product ids.
#[derive(Template, WebTemplate)]
#[template(path = "products/not_found.html")]
pub struct ProductNotFoundTemplate {
    pub id: String,
}

/// Display the catalog listing.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(page_query): Query<CatalogPageQuery>,
) -> impl IntoResponse {
    let catalog_query = page_query.to_catalog_query();
    let products: Vec<ProductCardView> = state
        .catalog()
        .select(&catalog_query)
        .iter()
        .map(ProductCardView::from)
        .collect();

    let search = catalog_query.search.as_str();
    let selected_category = catalog_query.category.as_deref();
    let sort = catalog_query.sort;

    // "All" chip first, then every known category in first-seen order.
    let mut categories = vec![CategoryChipView {
        label: "All".to_string(),
        href: listing_url(search, None, sort),
        selected: selected_category.is_none(),
    }];
    categories.extend(state.catalog().categories().into_iter().map(|label| {
        CategoryChipView {
            href: listing_url(search, Some(&label), sort),
            selected: selected_category == Some(label.as_str()),
            label,
        }
    }));

    let sort_options = SortKey::ALL
        .into_iter()
        .map(|key| SortOptionView {
            label: key.label(),
            href: listing_url(search, selected_category, key),
            selected: key == sort,
        })
        .collect();

    ProductsIndexTemplate {
        products,
        categories,
        sort_options,
        query: search.to_string(),
        favorite_count: state.catalog().favorite_count(),
        in_bucket_count: state.catalog().in_bucket_count(),
        return_to: listing_url(search, selected_category, sort),
    }
}

/// Display the product detail page.
///
/// Unknown ids render the not-found state with a 404 status; this is a
/// normal outcome of following a stale link, not an error.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let product_id = ProductId::new(id.as_str());

    state.catalog().product(&product_id).map_or_else(
        || (StatusCode::NOT_FOUND, ProductNotFoundTemplate { id: id.clone() }).into_response(),
        |product| {
            ProductShowTemplate {
                product: ProductDetailView::from(&product),
                return_to: format!("/products/{}", urlencoding::encode(&id)),
            }
            .into_response()
        },
    )
}

/// Toggle form data carrying the listing to return to.
#[derive(Debug, Deserialize)]
pub struct ToggleForm {
    pub return_to: Option<String>,
}

/// Toggle the favorite flag on a product (form post).
#[instrument(skip(state))]
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<ToggleForm>,
) -> Redirect {
    let product_id = ProductId::new(id.as_str());
    if !state.catalog().toggle_favorite(&product_id) {
        tracing::debug!(%product_id, "favorite toggle on unknown product ignored");
    }
    Redirect::to(&sanitize_return_to(form.return_to))
}

/// Toggle the in-bucket flag on a product (form post).
///
/// Annotates the catalog entry only; bucket lines are managed on the bucket
/// page.
#[instrument(skip(state))]
pub async fn toggle_bucket(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<ToggleForm>,
) -> Redirect {
    let product_id = ProductId::new(id.as_str());
    if !state.catalog().toggle_in_bucket(&product_id) {
        tracing::debug!(%product_id, "bucket toggle on unknown product ignored");
    }
    Redirect::to(&sanitize_return_to(form.return_to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_url_omits_defaults() {
        assert_eq!(listing_url("", None, SortKey::Rating), "/products");
    }

    #[test]
    fn test_listing_url_encodes_params() {
        assert_eq!(
            listing_url("air pods", Some("Noise Cancelling"), SortKey::PriceAsc),
            "/products?q=air%20pods&category=Noise%20Cancelling&sort=price-asc"
        );
    }

    #[test]
    fn test_sanitize_return_to() {
        assert_eq!(
            sanitize_return_to(Some("/products?sort=name".to_string())),
            "/products?sort=name"
        );
        assert_eq!(sanitize_return_to(None), "/products");
        assert_eq!(
            sanitize_return_to(Some("https://evil.example".to_string())),
            "/products"
        );
        assert_eq!(
            sanitize_return_to(Some("//evil.example".to_string())),
            "/products"
        );
    }
}
