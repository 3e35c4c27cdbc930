use crate::catalog::state::CatalogState;

/// Which of the mutually exclusive list screens to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Error(String),
    Empty,
    Products,
}

impl ListView {
    /// Loading wins over an error; an error replaces the list.
    pub fn from_state(state: &CatalogState) -> Self {
        if state.loading {
            ListView::Loading
        } else if let Some(error) = &state.error {
            ListView::Error(error.clone())
        } else if state.is_empty() {
            ListView::Empty
        } else {
            ListView::Products
        }
    }
}
