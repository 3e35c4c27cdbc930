use std::time::{Duration, Instant};

use crate::ui::form::state::Field;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    FocusNext,
    FocusPrev,
    Focus(Field),
    /// Type a character into the focused field.
    Insert(char),
    Backspace,
    /// Step through the category options; `None` (unchosen) sits between
    /// the last and the first option.
    CycleCategory { forward: bool },
    /// The product was dispatched: reset fields and show the success notice
    /// until `at + notice_for`.
    Submitted { at: Instant, notice_for: Duration },
    /// Validation failed; fields are kept.
    Rejected { message: String },
    Tick { now: Instant },
}

impl Intent for FormIntent {}
