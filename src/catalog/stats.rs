use std::collections::HashSet;

use crate::catalog::state::CatalogState;

/// Aggregates shown above the product list.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CatalogStats {
    pub total_products: usize,
    /// Σ price × stock over all records.
    pub total_value: f64,
    pub category_count: usize,
}

impl CatalogStats {
    pub fn from_state(state: &CatalogState) -> Self {
        let categories: HashSet<&str> = state
            .products
            .iter()
            .map(|product| product.category.as_str())
            .collect();
        Self {
            total_products: state.products.len(),
            total_value: state.products.iter().map(|p| p.stock_value()).sum(),
            category_count: categories.len(),
        }
    }
}
