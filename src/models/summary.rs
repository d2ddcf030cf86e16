use indexmap::IndexMap;
use serde::Serialize;

/// Aggregate stock figures, recomputed on every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventorySummary {
    pub total_products: usize,
    pub total_value: f64,
    /// Category → product count, in first-seen order.
    pub by_category: IndexMap<String, usize>,
    pub low_stock_count: usize,
    pub out_of_stock_count: usize,
}
