use tracing::info;

use crate::catalog::Catalog;
use crate::models::{Product, StockStatus};

/// (id, name, category, price, quantity, stock_status, description)
type SeedRow = (&'static str, &'static str, &'static str, f64, u32, StockStatus, &'static str);

static PRODUCTS: &[SeedRow] = &[
    (
        "PROD-001",
        "Wireless Bluetooth Headphones",
        "electronics",
        79.99,
        150,
        StockStatus::InStock,
        "Premium wireless headphones with noise cancellation",
    ),
    (
        "PROD-002",
        "Organic Cotton T-Shirt",
        "clothing",
        29.99,
        8,
        StockStatus::LowStock,
        "Comfortable 100% organic cotton t-shirt",
    ),
    (
        "PROD-003",
        "Python Programming Guide",
        "books",
        49.99,
        45,
        StockStatus::InStock,
        "Comprehensive guide to Python programming",
    ),
    (
        "PROD-004",
        "Smart LED Desk Lamp",
        "home",
        39.99,
        0,
        StockStatus::OutOfStock,
        "Adjustable LED lamp with USB charging port",
    ),
    (
        "PROD-005",
        "Gourmet Coffee Beans",
        "food",
        24.99,
        200,
        StockStatus::InStock,
        "Premium arabica coffee beans, 1kg bag",
    ),
];

pub fn seed_products() -> Vec<Product> {
    PRODUCTS
        .iter()
        .map(
            |&(id, name, category, price, quantity, stock_status, description)| Product {
                id: id.to_string(),
                name: name.to_string(),
                category: category.to_string(),
                price,
                quantity,
                stock_status,
                description: Some(description.to_string()),
            },
        )
        .collect()
}

/// The catalog the service runs with.
pub fn seed_catalog() -> Catalog {
    let catalog = Catalog::new(seed_products());
    info!(count = catalog.len(), "Seeded product catalog");
    catalog
}
