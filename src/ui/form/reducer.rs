use crate::catalog::Category;
use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::{Field, FormState, Notice};
use crate::ui::mvi::Reducer;

pub const SUCCESS_MESSAGE: &str = "Product added!";

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::FocusNext => {
                state.focused = state.focused.next();
                state
            }
            FormIntent::FocusPrev => {
                state.focused = state.focused.prev();
                state
            }
            FormIntent::Focus(field) => {
                state.focused = field;
                state
            }
            FormIntent::Insert(ch) => {
                let field = state.focused;
                if !field.accepts(ch) {
                    return state;
                }
                if let Some(text) = state.text_mut(field) {
                    text.push(ch);
                }
                clear_invalid(&mut state);
                state
            }
            FormIntent::Backspace => {
                let field = state.focused;
                if let Some(text) = state.text_mut(field) {
                    text.pop();
                } else if field == Field::Category {
                    state.input.category = None;
                }
                clear_invalid(&mut state);
                state
            }
            FormIntent::CycleCategory { forward } => {
                state.input.category = cycle_category(state.input.category.take(), forward);
                clear_invalid(&mut state);
                state
            }
            FormIntent::Submitted { at, notice_for } => FormState {
                notice: Some(Notice::Success {
                    message: SUCCESS_MESSAGE.to_string(),
                    expires_at: at.checked_add(notice_for),
                }),
                ..FormState::default()
            },
            FormIntent::Rejected { message } => {
                state.notice = Some(Notice::Invalid { message });
                state
            }
            FormIntent::Tick { now } => {
                let expired = match &state.notice {
                    Some(Notice::Success {
                        expires_at: Some(expires_at),
                        ..
                    }) => now >= *expires_at,
                    _ => false,
                };
                if expired {
                    state.notice = None;
                }
                state
            }
        }
    }
}

fn clear_invalid(state: &mut FormState) {
    if matches!(state.notice, Some(Notice::Invalid { .. })) {
        state.notice = None;
    }
}

fn cycle_category(current: Option<Category>, forward: bool) -> Option<Category> {
    let options = Category::OPTIONS;
    let position = current
        .as_ref()
        .and_then(|category| options.iter().position(|option| option == category));
    let next = match (position, forward) {
        (None, true) => Some(0),
        (None, false) => Some(options.len() - 1),
        (Some(idx), true) if idx + 1 < options.len() => Some(idx + 1),
        (Some(idx), false) if idx > 0 => Some(idx - 1),
        (Some(_), _) => None,
    };
    next.map(|idx| options[idx].clone())
}
