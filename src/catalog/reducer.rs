use crate::catalog::intent::CatalogIntent;
use crate::catalog::state::CatalogState;
use crate::ui::mvi::Reducer;

pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Intent = CatalogIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CatalogIntent::Add(product) => {
                if state.contains(&product.id) {
                    tracing::warn!(id = %product.id, "add ignored: duplicate product id");
                    return state;
                }
                state.products.push(product);
                state.error = None;
                state
            }
            CatalogIntent::Remove(id) => {
                state.products.retain(|product| product.id != id);
                state
            }
            CatalogIntent::Update(mut product) => {
                if let Some(slot) = state.products.iter_mut().find(|p| p.id == product.id) {
                    // Creation time is fixed once assigned.
                    product.created_at = slot.created_at;
                    *slot = product;
                }
                state
            }
            CatalogIntent::SetLoading(loading) => {
                state.loading = loading;
                state
            }
            CatalogIntent::SetError(error) => {
                state.error = error;
                state
            }
            CatalogIntent::Clear => {
                state.products.clear();
                state.error = None;
                state
            }
        }
    }
}
