use indexmap::IndexMap;

use crate::error::{AppError, AppResult};
use crate::models::{InventorySummary, Product, ProductFilters, StockStatus};

/// Read-only product table keyed by id. `IndexMap` keeps insertion order, which
/// is the order every listing endpoint returns.
#[derive(Debug, Default)]
pub struct Catalog {
    products: IndexMap<String, Product>,
}

impl Catalog {
    /// Builds the table once. A later record with a repeated id replaces the
    /// earlier one but keeps its position.
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        let products = products
            .into_iter()
            .map(|p| (p.id.clone(), p))
            .collect();
        Self { products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn list(&self, filters: &ProductFilters) -> Vec<&Product> {
        self.products
            .values()
            .filter(|p| filters.matches(p))
            .collect()
    }

    pub fn get(&self, id: &str) -> AppResult<&Product> {
        self.products
            .get(id)
            .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))
    }

    pub fn summary(&self) -> InventorySummary {
        let mut by_category: IndexMap<String, usize> = IndexMap::new();
        let mut total_value = 0.0;
        let mut low_stock_count = 0;
        let mut out_of_stock_count = 0;

        for product in self.products.values() {
            *by_category.entry(product.category.clone()).or_default() += 1;
            total_value += product.stock_value();
            match product.stock_status {
                StockStatus::LowStock => low_stock_count += 1,
                StockStatus::OutOfStock => out_of_stock_count += 1,
                StockStatus::InStock => {}
            }
        }

        InventorySummary {
            total_products: self.products.len(),
            total_value,
            by_category,
            low_stock_count,
            out_of_stock_count,
        }
    }

    pub fn alerts(&self) -> Vec<&Product> {
        self.products
            .values()
            .filter(|p| p.stock_status.is_alert())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make(id: &str, category: &str, price: f64, quantity: u32, status: StockStatus) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Item {}", id),
            category: category.to_string(),
            price,
            quantity,
            stock_status: status,
            description: None,
        }
    }

    fn sample() -> Catalog {
        Catalog::new(vec![
            make("B", "tools", 2.5, 4, StockStatus::InStock),
            make("A", "toys", 1.0, 0, StockStatus::OutOfStock),
            make("C", "tools", 10.0, 1, StockStatus::LowStock),
            // Asserted status disagrees with quantity; accepted as-is.
            make("D", "toys", 3.0, 0, StockStatus::InStock),
        ])
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn list_without_filters_keeps_insertion_order() {
        let catalog = sample();
        assert_eq!(ids(&catalog.list(&ProductFilters::default())), vec!["B", "A", "C", "D"]);
    }

    #[test]
    fn list_by_category() {
        let filters = ProductFilters {
            category: Some("toys".to_string()),
            stock_status: None,
        };
        assert_eq!(ids(&sample().list(&filters)), vec!["A", "D"]);
    }

    #[test]
    fn list_by_category_and_status() {
        let filters = ProductFilters {
            category: Some("tools".to_string()),
            stock_status: Some("low_stock".to_string()),
        };
        assert_eq!(ids(&sample().list(&filters)), vec!["C"]);
    }

    #[test]
    fn get_known_and_unknown() {
        let catalog = sample();
        assert_eq!(catalog.get("C").unwrap().category, "tools");

        let err = catalog.get("Z").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.to_string(), "Product Z not found");
    }

    #[test]
    fn summary_aggregates() {
        let summary = sample().summary();
        assert_eq!(summary.total_products, 4);
        assert!((summary.total_value - 20.0).abs() < 1e-9);
        assert_eq!(summary.by_category.get("tools"), Some(&2));
        assert_eq!(summary.by_category.get("toys"), Some(&2));
        assert_eq!(summary.low_stock_count, 1);
        assert_eq!(summary.out_of_stock_count, 1);
    }

    #[test]
    fn summary_categories_in_first_seen_order() {
        let summary = sample().summary();
        let categories: Vec<&str> = summary.by_category.keys().map(String::as_str).collect();
        assert_eq!(categories, vec!["tools", "toys"]);
    }

    #[test]
    fn summary_of_empty_catalog() {
        let summary = Catalog::default().summary();
        assert_eq!(summary.total_products, 0);
        assert_eq!(summary.total_value, 0.0);
        assert!(summary.by_category.is_empty());
    }

    #[test]
    fn alerts_follow_status_not_quantity() {
        assert_eq!(ids(&sample().alerts()), vec!["A", "C"]);
    }

    #[test]
    fn duplicate_id_replaces_in_place() {
        let catalog = Catalog::new(vec![
            make("A", "toys", 1.0, 1, StockStatus::InStock),
            make("B", "toys", 1.0, 1, StockStatus::InStock),
            make("A", "tools", 1.0, 1, StockStatus::InStock),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(ids(&catalog.list(&ProductFilters::default())), vec!["A", "B"]);
        assert_eq!(catalog.get("A").unwrap().category, "tools");
    }
}
