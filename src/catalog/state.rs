use crate::catalog::product::{Product, ProductId};
use crate::ui::mvi::UiState;

/// Snapshot of the catalog store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogState {
    /// Records in insertion order.
    pub products: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
}

impl UiState for CatalogState {}

impl CatalogState {
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
