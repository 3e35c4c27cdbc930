//! In-memory product catalog.
//!
//! ```text
//! ProductDraft ──→ CatalogStore::dispatch ──→ CatalogReducer ──→ CatalogState
//!                                                                    │
//!                          CatalogStats / ListView ←── snapshot ─────┘
//! ```

mod id;
mod intent;
mod product;
mod reducer;
mod state;
mod stats;
mod store;
mod validation;
mod view;

pub use id::{IdGenerator, SequentialGenerator, UuidGenerator};
pub use intent::CatalogIntent;
pub use product::{Category, EmptyCategory, Product, ProductDraft, ProductId};
pub use reducer::CatalogReducer;
pub use state::CatalogState;
pub use stats::CatalogStats;
pub use store::{CatalogStore, SubscriptionId};
pub use validation::{validate, ProductInput, ValidationError, MIN_FORM_PRICE};
pub use view::ListView;
