//! The bucket (this shop's name for the cart).
//!
//! Holds line items with quantities. Quantities never drop below one: a
//! decrement on a quantity of one is clamped, and getting rid of a line
//! entirely goes through [`BucketStore::remove`], which the routes gate
//! behind an explicit confirmation step.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use soundstage_core::{LineItemId, Price};

use super::seed;

/// One line in the bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Unique within the bucket.
    pub id: LineItemId,
    pub name: String,
    pub brand: String,
    pub price: Price,
    pub image_url: String,
    /// Always >= 1.
    pub quantity: u32,
}

impl LineItem {
    /// The extended price of this line (price x quantity).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.line_total(self.quantity)
    }
}

/// The bucket store.
///
/// Cheaply cloneable handle over shared state, like
/// [`super::CatalogStore`]. Independent of the catalog's `in_bucket` flags;
/// see the module docs in [`super`].
#[derive(Clone)]
pub struct BucketStore {
    inner: Arc<RwLock<Vec<LineItem>>>,
}

impl BucketStore {
    /// Create a store holding the seed lines.
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_lines(seed::bucket_lines())
    }

    /// Create a store over an arbitrary line list (used by tests).
    #[must_use]
    pub fn with_lines(lines: Vec<LineItem>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(lines)),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<LineItem>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<LineItem>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the current lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> Vec<LineItem> {
        self.read().clone()
    }

    /// Look up a single line by id.
    #[must_use]
    pub fn line(&self, id: &LineItemId) -> Option<LineItem> {
        self.read().iter().find(|l| &l.id == id).cloned()
    }

    /// Adjust a line's quantity by `delta` (any integer), clamping the
    /// result to a minimum of one.
    ///
    /// Returns whether the id matched; an unknown id is a no-op.
    pub fn update_quantity(&self, id: &LineItemId, delta: i64) -> bool {
        let mut lines = self.write();
        match lines.iter_mut().find(|l| &l.id == id) {
            Some(line) => {
                let updated = i64::from(line.quantity).saturating_add(delta).max(1);
                line.quantity = u32::try_from(updated).unwrap_or(u32::MAX);
                true
            }
            None => false,
        }
    }

    /// Remove a line outright, returning it if the id matched.
    ///
    /// Callers are responsible for having confirmed the removal with the
    /// user first; cancelling simply never calls this.
    pub fn remove(&self, id: &LineItemId) -> Option<LineItem> {
        let mut lines = self.write();
        let index = lines.iter().position(|l| &l.id == id)?;
        Some(lines.remove(index))
    }

    /// Sum of price x quantity over all lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.read().iter().map(LineItem::line_total).sum()
    }

    /// Number of lines (not unit quantities), matching the "N items"
    /// header.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the bucket has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn line(id: &str, name: &str, cents: i64, quantity: u32) -> LineItem {
        LineItem {
            id: LineItemId::new(id),
            name: name.to_owned(),
            brand: "Test".to_owned(),
            price: Price::from_cents(cents),
            image_url: String::new(),
            quantity,
        }
    }

    fn sample_store() -> BucketStore {
        BucketStore::with_lines(vec![
            line("1", "Sony WH-1000XM4", 34999, 1),
            line("2", "Bose QuietComfort 45", 32999, 1),
        ])
    }

    #[test]
    fn test_total_sums_price_times_quantity() {
        let store = sample_store();
        assert_eq!(store.total().display(), "$679.98");

        store.update_quantity(&LineItemId::new("1"), 2);
        // 3 * 349.99 + 329.99
        assert_eq!(store.total().display(), "$1379.96");
    }

    #[test]
    fn test_quantity_never_drops_below_one() {
        let store = sample_store();
        let id = LineItemId::new("1");

        for delta in [-1_i64, -5, -1000, i64::MIN] {
            store.update_quantity(&id, delta);
            assert_eq!(store.line(&id).unwrap().quantity, 1);
        }
    }

    #[test]
    fn test_increment_then_decrement() {
        let store = sample_store();
        let id = LineItemId::new("2");

        assert!(store.update_quantity(&id, 1));
        assert_eq!(store.line(&id).unwrap().quantity, 2);
        assert!(store.update_quantity(&id, -1));
        assert_eq!(store.line(&id).unwrap().quantity, 1);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let store = sample_store();
        assert!(!store.update_quantity(&LineItemId::new("999"), 1));
        assert_eq!(store.total().display(), "$679.98");
    }

    #[test]
    fn test_remove_decreases_total_by_line_amount() {
        let store = sample_store();
        let removed = store.remove(&LineItemId::new("1")).unwrap();
        assert_eq!(removed.line_total().display(), "$349.99");
        assert_eq!(store.total().display(), "$329.99");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_unknown_id_leaves_state_unchanged() {
        let store = sample_store();
        assert!(store.remove(&LineItemId::new("999")).is_none());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_empty_bucket_total_is_zero() {
        let store = BucketStore::with_lines(Vec::new());
        assert!(store.is_empty());
        assert_eq!(store.total().display(), "$0.00");
    }
}
