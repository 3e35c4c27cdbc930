//! Model-View-Intent (MVI) primitives.
//!
//! Every piece of mutable state in the application, the catalog store
//! included, changes only by running an intent through a reducer:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
