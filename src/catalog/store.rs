//! The catalog store: single writer in front of [`CatalogReducer`].
//!
//! Producers submit [`CatalogIntent`]s through [`CatalogStore::dispatch`] (or
//! [`CatalogStore::add`] for new records); consumers read
//! [`CatalogStore::snapshot`] or register a listener with
//! [`CatalogStore::subscribe`]. Everything runs on the caller's thread, so a
//! read after a dispatch always sees the new state.

use chrono::Utc;

use crate::catalog::id::{IdGenerator, UuidGenerator};
use crate::catalog::intent::CatalogIntent;
use crate::catalog::product::{Product, ProductDraft, ProductId};
use crate::catalog::reducer::CatalogReducer;
use crate::catalog::state::CatalogState;
use crate::ui::mvi::Reducer;

/// Handle returned by [`CatalogStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&CatalogState)>;

pub struct CatalogStore {
    state: CatalogState,
    ids: Box<dyn IdGenerator>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::with_id_generator(UuidGenerator)
    }

    pub fn with_id_generator(ids: impl IdGenerator + 'static) -> Self {
        Self {
            state: CatalogState::default(),
            ids: Box::new(ids),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> &CatalogState {
        &self.state
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.state.get(id)
    }

    /// Stamp a draft with a fresh id and the current time, then append it.
    pub fn add(&mut self, draft: ProductDraft) -> ProductId {
        let state = &self.state;
        let id = self.ids.next_id(&|candidate| state.contains(candidate));
        let product = draft.into_product(id.clone(), Utc::now());
        tracing::info!(id = %id, name = %product.name, "adding product");
        self.dispatch(CatalogIntent::Add(product));
        id
    }

    /// Apply an intent. Returns true when the snapshot changed; listeners
    /// run only in that case.
    pub fn dispatch(&mut self, intent: CatalogIntent) -> bool {
        let name = intent.name();
        let previous = self.state.clone();
        self.state = CatalogReducer::reduce(std::mem::take(&mut self.state), intent);
        let changed = self.state != previous;
        tracing::debug!(
            intent = name,
            changed,
            products = self.state.len(),
            "dispatched catalog intent"
        );
        if changed {
            self.notify();
        }
        changed
    }

    /// Register a listener called with the new snapshot after every change.
    pub fn subscribe(&mut self, listener: impl FnMut(&CatalogState) + 'static) -> SubscriptionId {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn notify(&mut self) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::id::SequentialGenerator;
    use crate::catalog::product::Category;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn draft(name: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            price: 1.0,
            description: "d".to_string(),
            category: Category::Food,
            stock: 0,
            image_url: None,
        }
    }

    #[test]
    fn add_assigns_fresh_id_and_timestamp() {
        let mut store = CatalogStore::with_id_generator(SequentialGenerator::new("p"));
        let before = Utc::now();
        let id = store.add(draft("Rice"));
        assert_eq!(id.as_str(), "p-1");
        let product = store.get(&id).expect("added product");
        assert!(product.created_at >= before);
    }

    #[test]
    fn listeners_run_only_on_change() {
        let mut store = CatalogStore::new();
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.add(draft("Rice"));
        assert!(!store.dispatch(CatalogIntent::Remove(ProductId::new("missing"))));
        store.dispatch(CatalogIntent::SetLoading(true));

        assert_eq!(*calls.borrow(), 2);
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let mut store = CatalogStore::new();
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let sub = store.subscribe(move |_| *counter.borrow_mut() += 1);

        assert!(store.unsubscribe(sub));
        assert!(!store.unsubscribe(sub));
        store.add(draft("Rice"));
        assert_eq!(*calls.borrow(), 0);
    }
}
