//! In-memory stores backing the storefront.
//!
//! There is no database: every store is seeded once at startup from the
//! fixtures in [`seed`] and lives in [`crate::state::AppState`] for the
//! lifetime of the process, so mutations are visible consistently across
//! views.
//!
//! The catalog's `in_bucket` flag and the bucket's line list are
//! deliberately independent: the flag is a browsing annotation on a catalog
//! entry, while the bucket holds its own seeded lines with quantities.
//! Toggling one never writes through to the other.

pub mod bucket;
pub mod catalog;
pub mod profile;
pub mod seed;

pub use bucket::{BucketStore, LineItem};
pub use catalog::{CatalogQuery, CatalogStore, Product, SortKey, Specification};
pub use profile::{Account, Order, Preferences, ProfileStore};
