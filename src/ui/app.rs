use crate::catalog::{
    validate, CatalogIntent, CatalogStats, CatalogStore, Product, ProductDraft, ProductId,
    ValidationError,
};
use crate::config::Config;
use crate::ui::form::{FormIntent, FormReducer, FormState};
use crate::ui::list::{ListIntent, ListPaneState, ListReducer, PendingDelete};
use crate::ui::mvi::Reducer;
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Form,
    List,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    config: Config,
    store: CatalogStore,
    /// Form pane state (MVI pattern).
    form: FormState,
    /// List pane state (MVI pattern).
    list: ListPaneState,
    /// Kept current by a store subscription.
    stats: Rc<Cell<CatalogStats>>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self::with_store(config, CatalogStore::new())
    }

    pub fn with_store(config: Config, mut store: CatalogStore) -> Self {
        let stats = Rc::new(Cell::new(CatalogStats::from_state(store.snapshot())));
        let sink = Rc::clone(&stats);
        store.subscribe(move |state| sink.set(CatalogStats::from_state(state)));

        Self {
            should_quit: false,
            focus: Focus::Form,
            config,
            store,
            form: FormState::default(),
            list: ListPaneState::default(),
            stats,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Form => Focus::List,
            Focus::List => Focus::Form,
        };
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn list(&self) -> &ListPaneState {
        &self.list
    }

    pub fn stats(&self) -> CatalogStats {
        self.stats.get()
    }

    pub fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    pub fn dispatch_list(&mut self, intent: ListIntent) {
        dispatch_mvi!(self, list, ListReducer, intent);
    }

    /// Apply a catalog intent and keep the list selection in range.
    pub fn dispatch_catalog(&mut self, intent: CatalogIntent) -> bool {
        let changed = self.store.dispatch(intent);
        let len = self.store.snapshot().len();
        self.dispatch_list(ListIntent::Clamp { len });
        changed
    }

    /// Validate the form and, if it passes, add the product.
    ///
    /// On failure nothing is dispatched to the store and the form keeps its
    /// values.
    pub fn submit_form(&mut self, now: Instant) -> Result<ProductId, ValidationError> {
        match validate(&self.form.input) {
            Ok(draft) => {
                let id = self.store.add(draft);
                self.dispatch_form(FormIntent::Submitted {
                    at: now,
                    notice_for: Duration::from_secs(self.config.ui.notice_seconds),
                });
                Ok(id)
            }
            Err(err) => {
                tracing::warn!(error = %err, "product form rejected");
                self.dispatch_form(FormIntent::Rejected {
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Submit from the Enter key. A rejection is already on screen as the
    /// form's notice.
    pub fn submit_form_from_keyboard(&mut self, now: Instant) {
        if let Ok(id) = self.submit_form(now) {
            tracing::debug!(id = %id, "product submitted from form");
        }
    }

    /// Add drafts straight to the store (startup seeding).
    pub fn seed(&mut self, drafts: Vec<ProductDraft>) {
        for draft in drafts {
            self.store.add(draft);
        }
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.store.snapshot().products.get(self.list.selected)
    }

    pub fn move_selection(&mut self, delta: i8) {
        let len = self.store.snapshot().len();
        if delta < 0 {
            self.dispatch_list(ListIntent::MoveUp { len });
        } else {
            self.dispatch_list(ListIntent::MoveDown { len });
        }
    }

    /// Ask to delete the highlighted product. With confirmations disabled
    /// the product is removed right away.
    pub fn request_delete_selected(&mut self) {
        let Some(product) = self.selected_product() else {
            return;
        };
        let pending = PendingDelete {
            id: product.id.clone(),
            name: product.name.clone(),
        };
        if self.config.ui.confirm_delete {
            self.dispatch_list(ListIntent::RequestDelete(pending));
        } else {
            self.remove(pending.id);
        }
    }

    pub fn pending_delete(&self) -> Option<&PendingDelete> {
        self.list.pending_delete.as_ref()
    }

    pub fn confirm_delete(&mut self) {
        let Some(pending) = self.list.pending_delete.clone() else {
            return;
        };
        self.dispatch_list(ListIntent::ConfirmDelete);
        self.remove(pending.id);
    }

    pub fn cancel_delete(&mut self) {
        self.dispatch_list(ListIntent::CancelDelete);
    }

    pub fn clear_catalog(&mut self) {
        tracing::info!(products = self.store.snapshot().len(), "clearing catalog");
        self.dispatch_catalog(CatalogIntent::Clear);
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.dispatch_form(FormIntent::Tick { now });
    }

    fn remove(&mut self, id: ProductId) {
        tracing::info!(id = %id, "removing product");
        self.dispatch_catalog(CatalogIntent::Remove(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, SequentialGenerator};

    fn app() -> App {
        App::with_store(
            Config::default(),
            CatalogStore::with_id_generator(SequentialGenerator::new("p")),
        )
    }

    fn draft(name: &str, price: f64, stock: u32) -> ProductDraft {
        ProductDraft {
            name: name.into(),
            price,
            description: "d".into(),
            category: Category::Books,
            stock,
            image_url: None,
        }
    }

    #[test]
    fn stats_follow_store_through_subscription() {
        let mut app = app();
        app.seed(vec![draft("A", 10.0, 2), draft("B", 5.0, 1)]);
        assert_eq!(app.stats().total_products, 2);
        assert_eq!(app.stats().total_value, 25.0);

        app.clear_catalog();
        assert_eq!(app.stats(), CatalogStats::default());
    }

    #[test]
    fn toggle_focus_switches_panes() {
        let mut app = app();
        assert_eq!(app.focus(), Focus::Form);
        app.toggle_focus();
        assert_eq!(app.focus(), Focus::List);
        app.toggle_focus();
        assert_eq!(app.focus(), Focus::Form);
    }

    #[test]
    fn deleting_last_item_clamps_selection() {
        let mut app = app();
        app.seed(vec![draft("A", 1.0, 1), draft("B", 1.0, 1)]);
        app.move_selection(1);
        assert_eq!(app.list().selected, 1);

        app.request_delete_selected();
        app.confirm_delete();
        assert_eq!(app.list().selected, 0);
        assert_eq!(app.store().snapshot().products[0].name, "A");
    }

    #[test]
    fn delete_without_confirmation_when_disabled() {
        let mut config = Config::default();
        config.ui.confirm_delete = false;
        let mut app = App::with_store(
            config,
            CatalogStore::with_id_generator(SequentialGenerator::new("p")),
        );
        app.seed(vec![draft("A", 1.0, 1)]);
        app.request_delete_selected();
        assert!(app.pending_delete().is_none());
        assert!(app.store().snapshot().is_empty());
    }
}
