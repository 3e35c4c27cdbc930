mod common;

use common::{draft, sequential_store};
use product_catalog::catalog::{
    CatalogIntent, CatalogState, CatalogStats, CatalogStore, Category, ListView, ProductId,
};

fn stats(store: &CatalogStore) -> CatalogStats {
    CatalogStats::from_state(store.snapshot())
}

#[test]
fn add_grows_list_by_one_with_unseen_id() {
    let mut store = CatalogStore::new();
    for i in 0..50 {
        let before = store.snapshot().clone();
        let id = store.add(draft(&format!("item {i}"), 10.0, Category::Books, 1));
        assert_eq!(store.snapshot().len(), before.len() + 1);
        assert!(!before.contains(&id));
        assert_eq!(store.snapshot().products.last().map(|p| &p.id), Some(&id));
    }
}

#[test]
fn pen_scenario_gives_aggregate_value_5000() {
    let mut store = sequential_store();
    store.add(draft("Pen", 1000.0, Category::Other, 5));

    assert_eq!(store.snapshot().len(), 1);
    assert_eq!(stats(&store).total_value, 5000.0);
}

#[test]
fn removing_first_of_two_leaves_second() {
    let mut store = sequential_store();
    let first = store.add(draft("First", 1.0, Category::Food, 1));
    let second = store.add(draft("Second", 2.0, Category::Food, 1));

    assert!(store.dispatch(CatalogIntent::Remove(first)));

    let products = &store.snapshot().products;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, second);
    assert_eq!(products[0].name, "Second");
}

#[test]
fn remove_missing_id_is_a_no_op() {
    let mut store = sequential_store();
    store.add(draft("Pen", 1000.0, Category::Other, 5));
    let before = store.snapshot().clone();

    assert!(!store.dispatch(CatalogIntent::Remove(ProductId::new("nope"))));
    assert!(!store.dispatch(CatalogIntent::Remove(ProductId::new("nope"))));
    assert_eq!(store.snapshot(), &before);
}

#[test]
fn update_unknown_id_leaves_state_unchanged() {
    let mut store = sequential_store();
    let id = store.add(draft("Pen", 1000.0, Category::Other, 5));
    let before = store.snapshot().clone();

    let mut stranger = store.get(&id).cloned().expect("product");
    stranger.id = ProductId::new("unknown");
    stranger.name = "Ghost".into();

    assert!(!store.dispatch(CatalogIntent::Update(stranger)));
    assert_eq!(store.snapshot(), &before);
}

#[test]
fn update_replaces_in_place_and_is_idempotent() {
    let mut store = sequential_store();
    let a = store.add(draft("A", 1.0, Category::Books, 1));
    let b = store.add(draft("B", 2.0, Category::Books, 2));
    let c = store.add(draft("C", 3.0, Category::Books, 3));

    let mut changed = store.get(&b).cloned().expect("product");
    changed.name = "B2".into();
    changed.stock = 10;

    assert!(store.dispatch(CatalogIntent::Update(changed.clone())));
    let after_first = store.snapshot().clone();
    assert!(!store.dispatch(CatalogIntent::Update(changed)));
    assert_eq!(store.snapshot(), &after_first);

    let ids: Vec<_> = after_first.products.iter().map(|p| p.id.clone()).collect();
    assert_eq!(ids, vec![a.clone(), b.clone(), c.clone()]);
    assert_eq!(after_first.get(&b).map(|p| p.name.as_str()), Some("B2"));
    assert_eq!(after_first.get(&a).map(|p| p.name.as_str()), Some("A"));
    assert_eq!(after_first.get(&c).map(|p| p.name.as_str()), Some("C"));
}

#[test]
fn aggregates_track_every_mutation() {
    let mut store = sequential_store();
    let a = store.add(draft("A", 100.0, Category::Books, 2));
    assert_eq!(stats(&store).total_value, 200.0);

    let b = store.add(draft("B", 50.0, Category::Sports, 3));
    assert_eq!(stats(&store).total_value, 350.0);
    assert_eq!(stats(&store).category_count, 2);

    let mut updated = store.get(&a).cloned().expect("product");
    updated.stock = 0;
    store.dispatch(CatalogIntent::Update(updated));
    assert_eq!(stats(&store).total_value, 150.0);

    store.dispatch(CatalogIntent::Remove(b));
    assert_eq!(stats(&store).total_value, 0.0);
    assert_eq!(stats(&store).category_count, 1);
    assert_eq!(stats(&store).total_products, 1);
}

#[test]
fn distinct_category_count_ignores_duplicates() {
    let mut store = sequential_store();
    store.add(draft("A", 1.0, Category::Books, 1));
    store.add(draft("B", 1.0, Category::Books, 1));
    store.add(draft("C", 1.0, Category::Custom("garden".into()), 1));
    assert_eq!(stats(&store).category_count, 2);
}

#[test]
fn add_clears_error_flag() {
    let mut store = sequential_store();
    store.dispatch(CatalogIntent::SetError(Some("sync failed".into())));
    assert_eq!(
        ListView::from_state(store.snapshot()),
        ListView::Error("sync failed".into())
    );

    store.add(draft("A", 1.0, Category::Books, 1));
    assert_eq!(store.snapshot().error, None);
    assert_eq!(ListView::from_state(store.snapshot()), ListView::Products);
}

#[test]
fn loading_flag_toggles_view() {
    let mut store = sequential_store();
    assert!(store.dispatch(CatalogIntent::SetLoading(true)));
    assert_eq!(ListView::from_state(store.snapshot()), ListView::Loading);
    assert!(!store.dispatch(CatalogIntent::SetLoading(true)));
    assert!(store.dispatch(CatalogIntent::SetLoading(false)));
    assert_eq!(ListView::from_state(store.snapshot()), ListView::Empty);
}

#[test]
fn created_at_survives_update() {
    let mut store = sequential_store();
    let id = store.add(draft("A", 1.0, Category::Books, 1));
    let original = store.get(&id).map(|p| p.created_at).expect("product");

    let mut changed = store.get(&id).cloned().expect("product");
    changed.created_at = original + chrono::Duration::days(30);
    changed.price = 9.0;
    store.dispatch(CatalogIntent::Update(changed));

    let stored = store.get(&id).expect("product");
    assert_eq!(stored.created_at, original);
    assert_eq!(stored.price, 9.0);
}

#[test]
fn fresh_store_is_empty() {
    let store = CatalogStore::default();
    assert_eq!(store.snapshot(), &CatalogState::default());
}
