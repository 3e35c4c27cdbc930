mod intent;
mod reducer;
mod state;
mod view;

pub use intent::FormIntent;
pub use reducer::{FormReducer, SUCCESS_MESSAGE};
pub use state::{Field, FormState, Notice};
pub use view::render_form;
