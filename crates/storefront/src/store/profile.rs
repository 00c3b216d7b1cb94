//! Mock profile: account card, preference toggles, and order history.
//!
//! The account and order history are fixtures; only the two preference
//! switches mutate.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use soundstage_core::{OrderId, OrderStatus, Price};

/// The signed-in account shown on the profile page.
#[derive(Debug, Clone)]
pub struct Account {
    pub display_name: String,
    pub email: String,
    pub avatar_url: String,
}

/// Profile preference switches.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Preferences {
    pub notifications: bool,
    pub dark_mode: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            notifications: true,
            dark_mode: false,
        }
    }
}

/// A past order in the history list.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: OrderId,
    pub placed_on: NaiveDate,
    pub total: Price,
    pub status: OrderStatus,
    pub item_count: u32,
}

/// The profile store.
///
/// Cheaply cloneable handle; only [`Preferences`] sits behind the lock.
#[derive(Clone, Default)]
pub struct ProfileStore {
    preferences: Arc<RwLock<Preferences>>,
}

impl ProfileStore {
    /// Create a store with default preferences.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The account fixture.
    #[must_use]
    pub fn account(&self) -> Account {
        Account {
            display_name: "John Doe".to_owned(),
            email: "john.doe@example.com".to_owned(),
            avatar_url:
                "https://img.freepik.com/premium-vector/avatar-profile-icon-flat-style-male-user-profile-vector-illustration-isolated-background-man-profile-sign-business-concept_157943-38764.jpg"
                    .to_owned(),
        }
    }

    /// Current preference values.
    #[must_use]
    pub fn preferences(&self) -> Preferences {
        *self
            .preferences
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Flip the notifications switch, returning the new value.
    pub fn toggle_notifications(&self) -> bool {
        let mut prefs = self
            .preferences
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        prefs.notifications = !prefs.notifications;
        prefs.notifications
    }

    /// Flip the dark-mode switch, returning the new value.
    pub fn toggle_dark_mode(&self) -> bool {
        let mut prefs = self
            .preferences
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        prefs.dark_mode = !prefs.dark_mode;
        prefs.dark_mode
    }

    /// The order history fixture, newest first.
    #[must_use]
    pub fn orders(&self) -> Vec<Order> {
        vec![
            Order {
                id: OrderId::new("ORD001"),
                placed_on: NaiveDate::from_ymd_opt(2024, 3, 15).expect("fixture date is valid"),
                total: Price::from_cents(67998),
                status: OrderStatus::Delivered,
                item_count: 2,
            },
            Order {
                id: OrderId::new("ORD002"),
                placed_on: NaiveDate::from_ymd_opt(2024, 3, 10).expect("fixture date is valid"),
                total: Price::from_cents(34999),
                status: OrderStatus::Processing,
                item_count: 1,
            },
        ]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preferences() {
        let store = ProfileStore::new();
        let prefs = store.preferences();
        assert!(prefs.notifications);
        assert!(!prefs.dark_mode);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let store = ProfileStore::new();

        assert!(!store.toggle_notifications());
        assert!(store.toggle_notifications());
        assert!(store.preferences().notifications);

        assert!(store.toggle_dark_mode());
        assert!(!store.toggle_dark_mode());
        assert!(!store.preferences().dark_mode);
    }

    #[test]
    fn test_order_history_fixture() {
        let store = ProfileStore::new();
        let orders = store.orders();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].total.display(), "$679.98");
        assert_eq!(orders[0].status, OrderStatus::Delivered);
        assert_eq!(orders[1].status, OrderStatus::Processing);
        assert!(orders[0].placed_on > orders[1].placed_on);
    }
}
