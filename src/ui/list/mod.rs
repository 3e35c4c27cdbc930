mod intent;
mod reducer;
mod state;
mod view;

pub use intent::ListIntent;
pub use reducer::ListReducer;
pub use state::{ListPaneState, PendingDelete};
pub use view::{
    card_lines, render_delete_confirm, render_list, ListPaneView, EMPTY_HINT, EMPTY_TITLE,
    LOADING_TEXT,
};
