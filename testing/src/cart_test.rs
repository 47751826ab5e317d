//! Ergonomic testing harness for cart store scenarios
//!
//! This module provides a fluent API for exercising the cart store with
//! readable Given-When-Then syntax.

#![allow(clippy::module_name_repetitions)] // CartTest is the natural name

use storefront_core::CartState;
use storefront_runtime::CartStore;

/// Type alias for state assertion functions
type StateAssertion = Box<dyn FnOnce(&CartState)>;

/// Type alias for store operations
type StoreOp = Box<dyn FnOnce(&CartStore)>;

/// Fluent harness for cart store scenarios with Given-When-Then syntax
///
/// # Example
///
/// ```
/// use storefront_core::BookId;
/// use storefront_testing::{CartTest, fixtures};
///
/// CartTest::new()
///     .when(|cart| cart.add(fixtures::rated_book("1", "1984", 4.3)))
///     .when(|cart| cart.set_quantity(&BookId::new("1"), 3))
///     .then_state(|state| {
///         assert_eq!(state.total_item_count(), 3);
///     })
///     .run();
/// ```
#[derive(Default)]
pub struct CartTest {
    initial_state: CartState,
    operations: Vec<StoreOp>,
    state_assertions: Vec<StateAssertion>,
}

impl CartTest {
    /// Create a new harness starting from an empty cart
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting snapshot (Given)
    #[must_use]
    pub fn given_state(mut self, state: CartState) -> Self {
        self.initial_state = state;
        self
    }

    /// Queue an operation against the store (When); operations run in order
    #[must_use]
    pub fn when<F>(mut self, op: F) -> Self
    where
        F: FnOnce(&CartStore) + 'static,
    {
        self.operations.push(Box::new(op));
        self
    }

    /// Add an assertion about the final snapshot (Then)
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&CartState) + 'static,
    {
        self.state_assertions.push(Box::new(assertion));
        self
    }

    /// Run the scenario: build the store, apply the operations, assert.
    ///
    /// # Panics
    ///
    /// Panics if any assertion fails.
    pub fn run(self) {
        let store = CartStore::from_state(self.initial_state);

        for op in self.operations {
            op(&store);
        }

        let state = store.snapshot();
        for assertion in self.state_assertions {
            assertion(&state);
        }
    }
}

/// Helper assertions for cart snapshots
pub mod assertions {
    use std::collections::HashSet;
    use storefront_core::CartState;

    /// Assert that no two entries share a book identifier
    ///
    /// # Panics
    ///
    /// Panics if a duplicate identifier exists.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_unique_ids(state: &CartState) {
        let distinct: HashSet<&str> = state
            .entries()
            .iter()
            .map(|entry| entry.book.id.as_str())
            .collect();
        assert_eq!(
            distinct.len(),
            state.len(),
            "Expected unique book identifiers, found a duplicate in {} entries",
            state.len()
        );
    }

    /// Assert that every entry carries a positive quantity
    ///
    /// # Panics
    ///
    /// Panics if any entry has quantity zero.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_positive_quantities(state: &CartState) {
        assert!(
            state.entries().iter().all(|entry| entry.quantity >= 1),
            "Expected every quantity >= 1, got {:?}",
            state
                .entries()
                .iter()
                .map(|entry| entry.quantity)
                .collect::<Vec<_>>()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use storefront_core::BookId;

    #[test]
    fn harness_applies_operations_in_order() {
        CartTest::new()
            .when(|cart| cart.add(fixtures::rated_book("1", "Dönüşüm", 4.2)))
            .when(|cart| cart.add(fixtures::rated_book("1", "Dönüşüm", 4.2)))
            .when(|cart| cart.set_quantity(&BookId::new("1"), 5))
            .then_state(|state| {
                assert_eq!(state.quantity_of(&BookId::new("1")), 5);
            })
            .then_state(assertions::assert_unique_ids)
            .then_state(assertions::assert_positive_quantities)
            .run();
    }

    #[test]
    fn harness_seeds_the_given_state() {
        let seeded = CartState::new().with_added(fixtures::unrated_book("2", "1984"));

        CartTest::new()
            .given_state(seeded)
            .when(|cart| cart.remove(&BookId::new("2")))
            .then_state(|state| assert!(state.is_empty()))
            .run();
    }
}
