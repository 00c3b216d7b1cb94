//! Status enums for various entities.

use serde::{Deserialize, Serialize};

/// Fulfillment status of a past order, as shown in the order history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Delivered,
    #[default]
    Processing,
    Cancelled,
}

impl OrderStatus {
    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Delivered => "Delivered",
            Self::Processing => "Processing",
            Self::Cancelled => "Cancelled",
        }
    }

    /// CSS class suffix used by the storefront templates.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Delivered => "delivered",
            Self::Processing => "processing",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = ParseOrderStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "delivered" | "Delivered" => Ok(Self::Delivered),
            "processing" | "Processing" => Ok(Self::Processing),
            "cancelled" | "Cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseOrderStatusError(s.to_owned())),
        }
    }
}

/// Error returned when parsing an unknown order status.
#[derive(Debug, thiserror::Error)]
#[error("invalid order status: {0}")]
pub struct ParseOrderStatusError(String);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_roundtrip() {
        for status in [
            OrderStatus::Delivered,
            OrderStatus::Processing,
            OrderStatus::Cancelled,
        ] {
            let parsed: OrderStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("shipped".parse::<OrderStatus>().is_err());
    }
}
