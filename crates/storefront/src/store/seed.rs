//! Canonical seed fixtures.
//!
//! One registry for the whole storefront: the catalog, the bucket seed
//! lines, and the home-page featured picks all draw from [`products`], so a
//! product has exactly one price and one image everywhere it appears.

use soundstage_core::{LineItemId, Price, ProductId, Rating};

use super::bucket::LineItem;
use super::catalog::{Product, Specification};

/// The product registry, in display order.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("1"),
            name: "Sony WH-1000XM4".to_owned(),
            brand: "Sony".to_owned(),
            price: Price::from_cents(34999),
            image_url:
                "https://cdn.thewirecutter.com/wp-content/media/2023/07/bluetoothheadphones-2048px-0876.jpg"
                    .to_owned(),
            rating: Rating::new(4.8),
            description:
                "Industry-leading noise canceling with Dual Noise Sensor technology".to_owned(),
            features: vec![
                "30-hour battery life".to_owned(),
                "Touch controls".to_owned(),
                "Hi-Res Audio".to_owned(),
            ],
            specifications: vec![
                Specification::new("Noise Cancellation", "Industry-leading ANC"),
                Specification::new("Battery Life", "30 hours"),
                Specification::new("Bluetooth Version", "5.0"),
                Specification::new("Weight", "254g"),
                Specification::new("Driver Size", "40mm"),
            ],
            category: "Noise Cancelling".to_owned(),
            website_url: "https://www.sony.com/headphones/wh-1000xm4".to_owned(),
            is_favorite: false,
            in_bucket: false,
        },
        Product {
            id: ProductId::new("2"),
            name: "Bose QuietComfort 45".to_owned(),
            brand: "Bose".to_owned(),
            price: Price::from_cents(32999),
            image_url: "https://i.pinimg.com/736x/4a/d8/ad/4ad8ad9edf0231341ee4bec3ff7cb414.jpg"
                .to_owned(),
            rating: Rating::new(4.7),
            description: "Next-level noise canceling headphones with premium comfort".to_owned(),
            features: vec![
                "24-hour battery life".to_owned(),
                "Triple-mic system".to_owned(),
                "Bluetooth 5.1".to_owned(),
            ],
            specifications: vec![
                Specification::new("Noise Cancellation", "Premium ANC"),
                Specification::new("Battery Life", "24 hours"),
                Specification::new("Bluetooth Version", "5.1"),
                Specification::new("Weight", "240g"),
                Specification::new("Driver Size", "40mm"),
            ],
            category: "Noise Cancelling".to_owned(),
            website_url: "https://www.bose.com/quietcomfort-45".to_owned(),
            is_favorite: false,
            in_bucket: false,
        },
        Product {
            id: ProductId::new("3"),
            name: "Apple AirPods Max".to_owned(),
            brand: "Apple".to_owned(),
            price: Price::from_cents(54999),
            image_url: "https://i.pinimg.com/736x/b3/21/b4/b321b4e34315dd56e4844ab9efa049ae.jpg"
                .to_owned(),
            rating: Rating::new(4.6),
            description:
                "A perfect balance of high-fidelity audio and the magic of AirPods".to_owned(),
            features: vec![
                "Active Noise Cancellation".to_owned(),
                "Spatial Audio".to_owned(),
                "20-hour battery".to_owned(),
            ],
            specifications: vec![
                Specification::new("Noise Cancellation", "Active ANC"),
                Specification::new("Battery Life", "20 hours"),
                Specification::new("Bluetooth Version", "5.0"),
                Specification::new("Weight", "385g"),
                Specification::new("Driver Size", "40mm"),
            ],
            category: "Wireless".to_owned(),
            website_url: "https://www.apple.com/airpods-max".to_owned(),
            is_favorite: false,
            in_bucket: false,
        },
        Product {
            id: ProductId::new("4"),
            name: "Sennheiser Momentum 4".to_owned(),
            brand: "Sennheiser".to_owned(),
            price: Price::from_cents(39999),
            image_url: "https://i.pinimg.com/736x/d2/6e/9d/d26e9d21c827a58e71d206ce55bd031c.jpg"
                .to_owned(),
            rating: Rating::new(4.5),
            description: "Premium wireless headphones with exceptional sound quality".to_owned(),
            features: vec![
                "60-hour battery life".to_owned(),
                "Smart Pause".to_owned(),
                "Bluetooth 5.2".to_owned(),
            ],
            specifications: vec![
                Specification::new("Noise Cancellation", "Adaptive ANC"),
                Specification::new("Battery Life", "60 hours"),
                Specification::new("Bluetooth Version", "5.2"),
                Specification::new("Weight", "290g"),
                Specification::new("Driver Size", "42mm"),
            ],
            category: "Wireless".to_owned(),
            website_url: "https://www.sennheiser.com/momentum-4".to_owned(),
            is_favorite: false,
            in_bucket: false,
        },
        Product {
            id: ProductId::new("5"),
            name: "Bang & Olufsen Beoplay H95".to_owned(),
            brand: "Bang & Olufsen".to_owned(),
            price: Price::from_cents(79900),
            image_url: "https://i.pinimg.com/736x/e6/a1/f6/e6a1f61cca59065ff9fc747dab2067e1.jpg"
                .to_owned(),
            rating: Rating::new(4.7),
            description: "Luxury headphones with exceptional sound and comfort".to_owned(),
            features: vec![
                "38-hour battery life".to_owned(),
                "Premium materials".to_owned(),
                "Advanced ANC".to_owned(),
            ],
            specifications: vec![
                Specification::new("Noise Cancellation", "Advanced ANC"),
                Specification::new("Battery Life", "38 hours"),
                Specification::new("Bluetooth Version", "5.1"),
                Specification::new("Weight", "325g"),
                Specification::new("Driver Size", "40mm"),
            ],
            category: "Audiophile".to_owned(),
            website_url: "https://www.bang-olufsen.com/beoplay-h95".to_owned(),
            is_favorite: false,
            in_bucket: false,
        },
        Product {
            id: ProductId::new("6"),
            name: "Focal Bathys".to_owned(),
            brand: "Focal".to_owned(),
            price: Price::from_cents(69900),
            image_url: "https://i.pinimg.com/736x/99/3b/c3/993bc33cf73a09b3a0224aab4ae743c6.jpg"
                .to_owned(),
            rating: Rating::new(4.6),
            description: "High-end wireless headphones with audiophile-grade sound".to_owned(),
            features: vec![
                "30-hour battery life".to_owned(),
                "USB-DAC mode".to_owned(),
                "Premium drivers".to_owned(),
            ],
            specifications: vec![
                Specification::new("Noise Cancellation", "Hybrid ANC"),
                Specification::new("Battery Life", "30 hours"),
                Specification::new("Bluetooth Version", "5.1"),
                Specification::new("Weight", "350g"),
                Specification::new("Driver Size", "40mm"),
            ],
            category: "Audiophile".to_owned(),
            website_url: "https://www.focal.com/bathys".to_owned(),
            is_favorite: false,
            in_bucket: false,
        },
    ]
}

/// Product ids featured on the home page, in display order.
pub const FEATURED_PRODUCT_IDS: [&str; 2] = ["1", "3"];

/// Seed lines for the bucket, in display order.
///
/// A separate fixture from the catalog flags on purpose (see the module
/// docs in [`super`]), but priced from the registry so the numbers agree
/// everywhere.
#[must_use]
pub fn bucket_lines() -> Vec<LineItem> {
    let registry = products();
    ["1", "4", "3", "2"]
        .into_iter()
        .filter_map(|id| {
            registry.iter().find(|p| p.id.as_str() == id).map(|p| LineItem {
                id: LineItemId::new(id),
                name: p.name.clone(),
                brand: p.brand.clone(),
                price: p.price,
                image_url: p.image_url.clone(),
                quantity: 1,
            })
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        let registry = products();
        for (i, a) in registry.iter().enumerate() {
            for b in registry.iter().skip(i + 1) {
                assert_ne!(a.id, b.id, "duplicate catalog id {}", a.id);
            }
        }
    }

    #[test]
    fn test_bucket_line_ids_are_unique() {
        let lines = bucket_lines();
        for (i, a) in lines.iter().enumerate() {
            for b in lines.iter().skip(i + 1) {
                assert_ne!(a.id, b.id, "duplicate line id {}", a.id);
            }
        }
    }

    #[test]
    fn test_bucket_lines_price_from_registry() {
        let registry = products();
        for line in bucket_lines() {
            let product = registry
                .iter()
                .find(|p| p.id.as_str() == line.id.as_str())
                .unwrap();
            assert_eq!(line.price, product.price);
            assert_eq!(line.name, product.name);
            assert_eq!(line.quantity, 1);
        }
    }

    #[test]
    fn test_featured_ids_exist() {
        let registry = products();
        for id in FEATURED_PRODUCT_IDS {
            assert!(registry.iter().any(|p| p.id.as_str() == id));
        }
    }

    #[test]
    fn test_seed_flags_start_clear() {
        for product in products() {
            assert!(!product.is_favorite);
            assert!(!product.in_bucket);
        }
    }
}
