//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::store::{BucketStore, CatalogStore, ProfileStore};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the in-memory stores. The stores live here for the
/// lifetime of the process, so every view reads and writes the same
/// catalog, bucket, and profile.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogStore,
    bucket: BucketStore,
    profile: ProfileStore,
}

impl AppState {
    /// Create a new application state with freshly seeded stores.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: CatalogStore::seeded(),
                bucket: BucketStore::seeded(),
                profile: ProfileStore::new(),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog store.
    #[must_use]
    pub fn catalog(&self) -> &CatalogStore {
        &self.inner.catalog
    }

    /// Get a reference to the bucket store.
    #[must_use]
    pub fn bucket(&self) -> &BucketStore {
        &self.inner.bucket
    }

    /// Get a reference to the profile store.
    #[must_use]
    pub fn profile(&self) -> &ProfileStore {
        &self.inner.profile
    }
}
