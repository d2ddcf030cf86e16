use serde::{Deserialize, Serialize};

/// Stock label asserted on each record. It is never derived from `quantity`,
/// so a product may carry `quantity == 0` and still be `InStock`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in_stock",
            StockStatus::LowStock => "low_stock",
            StockStatus::OutOfStock => "out_of_stock",
        }
    }

    /// Low and out-of-stock products show up in the alerts feed.
    pub fn is_alert(&self) -> bool {
        matches!(self, StockStatus::LowStock | StockStatus::OutOfStock)
    }
}

/// Catalog entry. Records are seeded at startup and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
    pub stock_status: StockStatus,
    pub description: Option<String>,
}

impl Product {
    /// Value of the units on hand.
    pub fn stock_value(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

// ── Query parameters ──────────────────────────────────────────────────────────

/// Exact-match filters for `GET /products`. Kept as raw strings so an unknown
/// `stock_status` matches nothing instead of failing the request.
#[derive(Debug, Default)]
pub struct ProductFilters {
    pub category: Option<String>,
    pub stock_status: Option<String>,
}

impl ProductFilters {
    /// Folds raw query pairs into filters. A repeated parameter keeps its last
    /// value; unknown parameters are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        pairs
            .into_iter()
            .fold(Self::default(), |mut filters, (key, value)| {
                match key.as_str() {
                    "category" => filters.category = Some(value),
                    "stock_status" => filters.stock_status = Some(value),
                    _ => {}
                }
                filters
            })
    }

    pub fn matches(&self, product: &Product) -> bool {
        let category_ok = match non_empty(&self.category) {
            Some(category) => product.category == category,
            None => true,
        };
        let status_ok = match non_empty(&self.stock_status) {
            Some(status) => product.stock_status.as_str() == status,
            None => true,
        };
        category_ok && status_ok
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
