use crate::ui::list::state::PendingDelete;
use crate::ui::mvi::Intent;

/// List pane intents. Movement carries the current product count so the
/// reducer never needs the store.
#[derive(Debug, Clone)]
pub enum ListIntent {
    MoveUp { len: usize },
    MoveDown { len: usize },
    /// Keep the selection inside the list after it shrank.
    Clamp { len: usize },
    /// Open the confirmation popup.
    RequestDelete(PendingDelete),
    /// Close the popup; the caller dispatches the removal.
    ConfirmDelete,
    CancelDelete,
}

impl Intent for ListIntent {}
