use crate::catalog::ProductId;
use crate::ui::mvi::UiState;

/// A deletion waiting for the user's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub id: ProductId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListPaneState {
    /// Index of the highlighted card.
    pub selected: usize,
    /// Set while the confirmation popup is open.
    pub pending_delete: Option<PendingDelete>,
}

impl UiState for ListPaneState {}

impl ListPaneState {
    pub fn is_confirming(&self) -> bool {
        self.pending_delete.is_some()
    }
}
