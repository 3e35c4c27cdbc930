use crate::ui::list::intent::ListIntent;
use crate::ui::list::state::ListPaneState;
use crate::ui::mvi::Reducer;

pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ListPaneState;
    type Intent = ListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::MoveUp { len } => {
                let selected = if len == 0 {
                    0
                } else if state.selected == 0 {
                    len - 1
                } else {
                    state.selected.min(len) - 1
                };
                ListPaneState { selected, ..state }
            }
            ListIntent::MoveDown { len } => {
                let selected = if state.selected + 1 >= len {
                    0
                } else {
                    state.selected + 1
                };
                ListPaneState { selected, ..state }
            }
            ListIntent::Clamp { len } => ListPaneState {
                selected: state.selected.min(len.saturating_sub(1)),
                ..state
            },
            ListIntent::RequestDelete(pending) => ListPaneState {
                pending_delete: Some(pending),
                ..state
            },
            ListIntent::ConfirmDelete | ListIntent::CancelDelete => ListPaneState {
                pending_delete: None,
                ..state
            },
        }
    }
}
