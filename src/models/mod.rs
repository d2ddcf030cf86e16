mod product;
mod summary;

pub use product::{Product, ProductFilters, StockStatus};
pub use summary::InventorySummary;
