//! The product catalog and its derived views.
//!
//! The catalog is a fixed list of products seeded at startup; nothing is
//! added or removed at runtime. The only mutations are the two per-product
//! flags (`is_favorite`, `in_bucket`), flipped in place. Listing pages ask
//! for a [`CatalogQuery`] projection, recomputed from current state on
//! every request.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use soundstage_core::{Price, ProductId, Rating};

use super::seed;

/// One name/value row in a product's specification table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Specification {
    pub name: String,
    pub value: String,
}

impl Specification {
    pub(crate) fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_owned(),
            value: value.to_owned(),
        }
    }
}

/// A catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique within the catalog.
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub price: Price,
    /// Remote image URI; loading it is the renderer's business.
    pub image_url: String,
    pub rating: Rating,
    pub description: String,
    /// Short selling points, in display order.
    pub features: Vec<String>,
    /// Detail-page specification rows, in display order.
    pub specifications: Vec<Specification>,
    pub category: String,
    /// Manufacturer page for the "view on website" action. Handed to the
    /// browser verbatim, never parsed.
    pub website_url: String,
    pub is_favorite: bool,
    pub in_bucket: bool,
}

/// Sort order for catalog listings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    PriceAsc,
    PriceDesc,
    #[default]
    Rating,
    Name,
}

impl SortKey {
    /// All keys, in the order the sort menu lists them.
    pub const ALL: [Self; 4] = [Self::Rating, Self::PriceAsc, Self::PriceDesc, Self::Name];

    /// Parse from URL parameter value. Unknown values fall back to the
    /// default rating sort.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "price-asc" => Self::PriceAsc,
            "price-desc" => Self::PriceDesc,
            "name" => Self::Name,
            _ => Self::Rating,
        }
    }

    /// Convert to URL parameter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::Rating => "rating",
            Self::Name => "name",
        }
    }

    /// Label shown in the sort menu.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PriceAsc => "Price: Low to High",
            Self::PriceDesc => "Price: High to Low",
            Self::Rating => "Highest Rating",
            Self::Name => "Name",
        }
    }
}

/// Parameters for a catalog listing projection.
#[derive(Debug, Default, Clone)]
pub struct CatalogQuery {
    /// Free-text query matched against name or brand; empty matches all.
    pub search: String,
    /// Keep only this category when set.
    pub category: Option<String>,
    pub sort: SortKey,
}

/// The catalog store.
///
/// Cheaply cloneable handle over shared state; all access goes through the
/// lock so views observe every toggle.
#[derive(Clone)]
pub struct CatalogStore {
    inner: Arc<RwLock<Vec<Product>>>,
}

impl CatalogStore {
    /// Create a store holding the canonical seed catalog.
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_products(seed::products())
    }

    /// Create a store over an arbitrary product list (used by tests).
    #[must_use]
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(products)),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Product>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Product>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Filtered, sorted projection of the catalog.
    ///
    /// Filter first (search AND category), then sort. The sort is stable,
    /// so ties keep their seed order. The underlying catalog is untouched.
    #[must_use]
    pub fn select(&self, query: &CatalogQuery) -> Vec<Product> {
        let needle = query.search.to_lowercase();

        let mut products: Vec<Product> = self
            .read()
            .iter()
            .filter(|product| {
                let matches_search = product.name.to_lowercase().contains(&needle)
                    || product.brand.to_lowercase().contains(&needle);
                let matches_category = query
                    .category
                    .as_deref()
                    .is_none_or(|category| product.category == category);
                matches_search && matches_category
            })
            .cloned()
            .collect();

        products.sort_by(|a, b| match query.sort {
            SortKey::PriceAsc => a.price.cmp(&b.price),
            SortKey::PriceDesc => b.price.cmp(&a.price),
            SortKey::Rating => b.rating.total_cmp(a.rating),
            SortKey::Name => a.name.cmp(&b.name),
        });

        products
    }

    /// Look up a single product by id (the route-parameter boundary).
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<Product> {
        self.read().iter().find(|p| &p.id == id).cloned()
    }

    /// Flip the favorite flag on one product.
    ///
    /// Returns whether the id matched; an unknown id is a no-op.
    pub fn toggle_favorite(&self, id: &ProductId) -> bool {
        self.toggle(id, |product| {
            product.is_favorite = !product.is_favorite;
        })
    }

    /// Flip the in-bucket flag on one product.
    ///
    /// This annotates the catalog entry only; the bucket store is not
    /// consulted or modified.
    pub fn toggle_in_bucket(&self, id: &ProductId) -> bool {
        self.toggle(id, |product| {
            product.in_bucket = !product.in_bucket;
        })
    }

    fn toggle(&self, id: &ProductId, flip: impl FnOnce(&mut Product)) -> bool {
        let mut products = self.write();
        match products.iter_mut().find(|p| &p.id == id) {
            Some(product) => {
                flip(product);
                true
            }
            None => false,
        }
    }

    /// Category labels in first-seen order, deduplicated.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for product in self.read().iter() {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        categories
    }

    /// Number of products currently marked favorite.
    #[must_use]
    pub fn favorite_count(&self) -> usize {
        self.read().iter().filter(|p| p.is_favorite).count()
    }

    /// Number of products currently marked in-bucket.
    #[must_use]
    pub fn in_bucket_count(&self) -> usize {
        self.read().iter().filter(|p| p.in_bucket).count()
    }

    /// Total number of catalog entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, brand: &str, cents: i64, rating: f64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            brand: brand.to_owned(),
            price: Price::from_cents(cents),
            image_url: format!("https://img.example.com/{id}.jpg"),
            rating: Rating::new(rating),
            description: String::new(),
            features: Vec::new(),
            specifications: Vec::new(),
            category: "Noise Cancelling".to_owned(),
            website_url: String::new(),
            is_favorite: false,
            in_bucket: false,
        }
    }

    fn sample_store() -> CatalogStore {
        CatalogStore::with_products(vec![
            product("1", "Sony WH-1000XM4", "Sony", 34999, 4.8),
            product("2", "Bose QuietComfort 45", "Bose", 32999, 4.7),
            product("3", "Apple AirPods Max", "Apple", 54999, 4.6),
            product("4", "Sennheiser Momentum 4", "Sennheiser", 39999, 4.5),
        ])
    }

    #[test]
    fn test_empty_query_returns_full_catalog() {
        let store = sample_store();
        let all = store.select(&CatalogQuery::default());
        assert_eq!(all.len(), store.len());
    }

    #[test]
    fn test_search_matches_name_or_brand_case_insensitive() {
        let store = sample_store();

        let by_name = store.select(&CatalogQuery {
            search: "quietcomfort".to_owned(),
            ..CatalogQuery::default()
        });
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, ProductId::new("2"));

        let by_brand = store.select(&CatalogQuery {
            search: "SONY".to_owned(),
            ..CatalogQuery::default()
        });
        assert_eq!(by_brand.len(), 1);
        assert_eq!(by_brand[0].brand, "Sony");

        let none = store.select(&CatalogQuery {
            search: "turntable".to_owned(),
            ..CatalogQuery::default()
        });
        assert!(none.is_empty());
    }

    #[test]
    fn test_category_filter() {
        let mut products = vec![
            product("1", "Sony WH-1000XM4", "Sony", 34999, 4.8),
            product("3", "Apple AirPods Max", "Apple", 54999, 4.6),
        ];
        products[1].category = "Wireless".to_owned();
        let store = CatalogStore::with_products(products);

        let wireless = store.select(&CatalogQuery {
            category: Some("Wireless".to_owned()),
            ..CatalogQuery::default()
        });
        assert_eq!(wireless.len(), 1);
        assert_eq!(wireless[0].category, "Wireless");

        let unfiltered = store.select(&CatalogQuery::default());
        assert_eq!(unfiltered.len(), 2);
    }

    #[test]
    fn test_price_sorts_are_exact_reverses() {
        let store = sample_store();

        let asc = store.select(&CatalogQuery {
            sort: SortKey::PriceAsc,
            ..CatalogQuery::default()
        });
        let asc_cents: Vec<String> = asc.iter().map(|p| p.price.display()).collect();
        assert_eq!(asc_cents, ["$329.99", "$349.99", "$399.99", "$549.99"]);

        let desc = store.select(&CatalogQuery {
            sort: SortKey::PriceDesc,
            ..CatalogQuery::default()
        });
        let mut reversed: Vec<&Product> = desc.iter().collect();
        reversed.reverse();
        let reversed_ids: Vec<&ProductId> = reversed.iter().map(|p| &p.id).collect();
        let asc_ids: Vec<&ProductId> = asc.iter().map(|p| &p.id).collect();
        assert_eq!(asc_ids, reversed_ids);
    }

    #[test]
    fn test_default_sort_is_rating_descending() {
        let store = sample_store();
        let listed = store.select(&CatalogQuery::default());
        let ratings: Vec<f64> = listed.iter().map(|p| p.rating.value()).collect();
        let mut sorted = ratings.clone();
        sorted.sort_by(|a, b| b.total_cmp(a));
        assert_eq!(ratings, sorted);
    }

    #[test]
    fn test_name_sort_ascending() {
        let store = sample_store();
        let listed = store.select(&CatalogQuery {
            sort: SortKey::Name,
            ..CatalogQuery::default()
        });
        assert_eq!(listed[0].name, "Apple AirPods Max");
        assert_eq!(listed[3].name, "Sony WH-1000XM4");
    }

    #[test]
    fn test_rating_ties_keep_seed_order() {
        let store = CatalogStore::with_products(vec![
            product("1", "First", "A", 10000, 4.5),
            product("2", "Second", "B", 20000, 4.5),
            product("3", "Third", "C", 30000, 4.5),
        ]);
        let listed = store.select(&CatalogQuery::default());
        let ids: Vec<&str> = listed.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn test_toggle_favorite_twice_is_identity() {
        let store = sample_store();
        let id = ProductId::new("1");

        assert!(!store.product(&id).unwrap().is_favorite);
        assert!(store.toggle_favorite(&id));
        assert!(store.product(&id).unwrap().is_favorite);
        assert_eq!(store.favorite_count(), 1);
        assert!(store.toggle_favorite(&id));
        assert!(!store.product(&id).unwrap().is_favorite);
        assert_eq!(store.favorite_count(), 0);
    }

    #[test]
    fn test_toggle_in_bucket_twice_is_identity() {
        let store = sample_store();
        let id = ProductId::new("3");

        assert!(store.toggle_in_bucket(&id));
        assert!(store.product(&id).unwrap().in_bucket);
        assert_eq!(store.in_bucket_count(), 1);
        assert!(store.toggle_in_bucket(&id));
        assert!(!store.product(&id).unwrap().in_bucket);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let store = sample_store();
        assert!(!store.toggle_favorite(&ProductId::new("999")));
        assert!(!store.toggle_in_bucket(&ProductId::new("999")));
        assert_eq!(store.favorite_count(), 0);
        assert_eq!(store.in_bucket_count(), 0);
    }

    #[test]
    fn test_toggle_touches_only_the_target() {
        let store = sample_store();
        store.toggle_favorite(&ProductId::new("2"));

        for p in store.select(&CatalogQuery::default()) {
            assert_eq!(p.is_favorite, p.id == ProductId::new("2"));
        }
    }

    #[test]
    fn test_select_does_not_mutate() {
        let store = sample_store();
        let _ = store.select(&CatalogQuery {
            search: "sony".to_owned(),
            sort: SortKey::PriceDesc,
            ..CatalogQuery::default()
        });
        assert_eq!(store.len(), 4);
        let ids: Vec<String> = store
            .select(&CatalogQuery {
                sort: SortKey::PriceAsc,
                ..CatalogQuery::default()
            })
            .iter()
            .map(|p| p.id.to_string())
            .collect();
        assert_eq!(ids, ["2", "1", "4", "3"]);
    }

    #[test]
    fn test_categories_first_seen_order() {
        let mut products = vec![
            product("1", "A", "A", 100, 5.0),
            product("2", "B", "B", 100, 5.0),
            product("3", "C", "C", 100, 5.0),
        ];
        products[1].category = "Wireless".to_owned();
        let store = CatalogStore::with_products(products);
        assert_eq!(store.categories(), ["Noise Cancelling", "Wireless"]);
    }

    #[test]
    fn test_sort_key_parse_roundtrip() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::parse(key.as_str()), key);
        }
        assert_eq!(SortKey::parse("bogus"), SortKey::Rating);
        assert_eq!(SortKey::parse(""), SortKey::Rating);
    }
}
