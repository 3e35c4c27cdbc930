use crate::catalog::product::{Product, ProductId};
use crate::ui::mvi::Intent;

/// Every mutation the catalog store accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogIntent {
    /// Append a stamped record. Ignored if its id is already present.
    Add(Product),
    /// Remove the record with this id, if any.
    Remove(ProductId),
    /// Replace the record with the same id in place. `created_at` is kept.
    Update(Product),
    SetLoading(bool),
    SetError(Option<String>),
    /// Drop every record and clear the error.
    Clear,
}

impl Intent for CatalogIntent {}

impl CatalogIntent {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            CatalogIntent::Add(_) => "add",
            CatalogIntent::Remove(_) => "remove",
            CatalogIntent::Update(_) => "update",
            CatalogIntent::SetLoading(_) => "set_loading",
            CatalogIntent::SetError(_) => "set_error",
            CatalogIntent::Clear => "clear",
        }
    }
}
