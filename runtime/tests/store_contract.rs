//! Store-level contract tests: the mutation surface, synchronous
//! observation, session access, and invariants over generated operation
//! sequences.

use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;
use storefront_core::BookId;
use storefront_core::environment::Clock;
use storefront_runtime::{CartStore, Session, StoreError};
use storefront_testing::fixtures::{rated_book, unrated_book};
use storefront_testing::properties::{apply, cart_ops};
use storefront_testing::test_clock;

#[test]
fn browse_add_and_zero_out_through_the_store() {
    let store = CartStore::new();

    store.add(rated_book("1", "Suç ve Ceza", 4.5));
    store.add(rated_book("1", "Suç ve Ceza", 4.5));
    store.add(unrated_book("2", "1984"));

    let state = store.snapshot();
    let entries: Vec<(&str, u32)> = state
        .entries()
        .iter()
        .map(|entry| (entry.book.id.as_str(), entry.quantity))
        .collect();
    assert_eq!(entries, vec![("1", 2), ("2", 1)]);
    assert_eq!(store.total_item_count(), 3);
    assert_eq!(store.total_price(), 240.0);

    store.set_quantity(&BookId::new("1"), 0);
    let state = store.snapshot();
    let entries: Vec<(&str, u32)> = state
        .entries()
        .iter()
        .map(|entry| (entry.book.id.as_str(), entry.quantity))
        .collect();
    assert_eq!(entries, vec![("2", 1)]);
}

#[test]
fn observer_sees_each_complete_snapshot() {
    let store = CartStore::new();
    let mut rx = store.subscribe();
    assert!(!rx.has_changed().unwrap());

    store.add(rated_book("1", "Suç ve Ceza", 4.5));
    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().total_item_count(), 1);

    store.set_quantity(&BookId::new("1"), 4);
    let snapshot = rx.borrow_and_update().clone();
    assert_eq!(snapshot.quantity_of(&BookId::new("1")), 4);
    assert_eq!(snapshot.total_price(), 380.0);
}

#[test]
fn late_observer_reads_the_latest_snapshot() {
    let store = CartStore::new();
    store.add(rated_book("3", "Küçük Prens", 4.7));
    store.add(rated_book("3", "Küçük Prens", 4.7));

    // Subscribing after the fact still yields the current complete state.
    let rx = store.subscribe();
    assert_eq!(rx.borrow().quantity_of(&BookId::new("3")), 2);
}

#[tokio::test]
async fn async_observer_wakes_on_mutation() {
    let store = Arc::new(CartStore::new());
    let mut rx = store.subscribe();

    let writer = Arc::clone(&store);
    let task = tokio::spawn(async move {
        writer.add(rated_book("2", "1984", 4.3));
    });

    rx.changed().await.unwrap();
    assert_eq!(rx.borrow().quantity_of(&BookId::new("2")), 1);
    task.await.unwrap();
}

#[test]
fn session_without_cart_is_a_usage_error() {
    let session = Session::new();
    let clock = test_clock();

    assert_eq!(session.cart().unwrap_err(), StoreError::CartNotMounted);
    assert_eq!(
        session.checkout(&clock).unwrap_err(),
        StoreError::CartNotMounted
    );
}

#[test]
fn checkout_snapshots_the_cart_then_clears_it() {
    let store = Arc::new(CartStore::new());
    let session = Session::new().with_cart(Arc::clone(&store));
    let clock = test_clock();

    store.add(rated_book("1", "Suç ve Ceza", 4.5));
    store.add(rated_book("1", "Suç ve Ceza", 4.5));
    store.add(unrated_book("2", "1984"));

    let order = session.checkout(&clock).unwrap();
    assert_eq!(order.total_items, 3);
    assert_eq!(order.total_price, 240.0);
    assert_eq!(order.placed_at, clock.now());
    assert_eq!(order.lines.len(), 2);
    assert!(store.is_empty());

    // Emptied by the checkout above; a second attempt is refused.
    assert_eq!(session.checkout(&clock).unwrap_err(), StoreError::EmptyCart);
}

#[test]
fn session_cart_accessor_reaches_the_mounted_store() {
    let store = Arc::new(CartStore::new());
    let session = Session::new().with_cart(Arc::clone(&store));

    session.cart().unwrap().add(unrated_book("5", "Fareler ve İnsanlar"));
    assert_eq!(store.total_item_count(), 1);
}

proptest! {
    #[test]
    fn operation_sequences_preserve_invariants(ops in cart_ops(48)) {
        let store = CartStore::new();
        for op in &ops {
            apply(&store, op);
        }

        let state = store.snapshot();

        // No duplicate identifiers, ever.
        let distinct: HashSet<&str> = state
            .entries()
            .iter()
            .map(|entry| entry.book.id.as_str())
            .collect();
        prop_assert_eq!(distinct.len(), state.len());

        // No zero quantities survive.
        prop_assert!(state.entries().iter().all(|entry| entry.quantity >= 1));

        // Derived aggregates agree with a direct recomputation.
        let items: u64 = state
            .entries()
            .iter()
            .map(|entry| u64::from(entry.quantity))
            .sum();
        prop_assert_eq!(state.total_item_count(), items);
        prop_assert_eq!(store.total_item_count(), items);

        let price: f64 = state.entries().iter().map(|entry| entry.line_total()).sum();
        prop_assert!((state.total_price() - price).abs() < 1e-9);

        prop_assert_eq!(state.is_empty(), items == 0);
    }
}
