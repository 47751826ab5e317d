//! # Storefront Testing
//!
//! Testing utilities and helpers for the storefront crates.
//!
//! This crate provides:
//! - Mock implementations of environment traits (a fixed clock)
//! - Book fixtures
//! - A fluent Given-When-Then harness for cart store scenarios
//! - proptest strategies over cart operations
//!
//! ## Example
//!
//! ```
//! use storefront_testing::{CartTest, fixtures};
//!
//! CartTest::new()
//!     .when(|cart| cart.add(fixtures::rated_book("1", "Suç ve Ceza", 4.5)))
//!     .when(|cart| cart.add(fixtures::rated_book("1", "Suç ve Ceza", 4.5)))
//!     .then_state(|state| assert_eq!(state.total_price(), 190.0))
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use storefront_core::environment::Clock;

pub mod cart_test;

/// Mock implementations of environment traits
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making order timestamps reproducible.
    #[derive(Debug, Clone, Copy)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

/// Book fixtures for cart and catalog tests
pub mod fixtures {
    use std::sync::Arc;
    use storefront_core::Book;

    /// A book with an average rating set
    #[must_use]
    pub fn rated_book(id: &str, title: &str, rating: f64) -> Arc<Book> {
        Arc::new(Book::new(id, title).with_rating(rating))
    }

    /// A book the catalog never rated; prices at the base
    #[must_use]
    pub fn unrated_book(id: &str, title: &str) -> Arc<Book> {
        Arc::new(Book::new(id, title))
    }
}

/// proptest strategies over cart operations
///
/// Operations draw identifiers from a small universe so that collisions
/// (re-adds, removals of carted books) actually happen in generated
/// sequences.
pub mod properties {
    use proptest::prelude::*;
    use std::sync::Arc;
    use storefront_core::{Book, BookId};
    use storefront_runtime::CartStore;

    /// Size of the identifier universe generated operations draw from
    pub const ID_UNIVERSE: u8 = 8;

    /// One cart mutation
    #[derive(Clone, Debug)]
    pub enum CartOp {
        /// Add the book at this index
        Add(u8),
        /// Remove the identifier at this index
        Remove(u8),
        /// Set the quantity for the identifier at this index
        SetQuantity(u8, u32),
        /// Empty the cart
        Clear,
    }

    /// The identifier for a universe index
    #[must_use]
    pub fn indexed_id(index: u8) -> BookId {
        BookId::new(format!("vol-{index}"))
    }

    /// The book for a universe index; ratings vary with the index
    #[must_use]
    pub fn indexed_book(index: u8) -> Arc<Book> {
        Arc::new(Book::new(indexed_id(index), format!("Volume {index}")).with_rating(f64::from(index) * 0.5))
    }

    /// Strategy producing a single operation
    pub fn cart_op() -> impl Strategy<Value = CartOp> {
        prop_oneof![
            (0..ID_UNIVERSE).prop_map(CartOp::Add),
            (0..ID_UNIVERSE).prop_map(CartOp::Remove),
            ((0..ID_UNIVERSE), 0u32..5).prop_map(|(index, quantity)| {
                CartOp::SetQuantity(index, quantity)
            }),
            Just(CartOp::Clear),
        ]
    }

    /// Strategy producing an operation sequence of up to `max` steps
    pub fn cart_ops(max: usize) -> impl Strategy<Value = Vec<CartOp>> {
        proptest::collection::vec(cart_op(), 0..max)
    }

    /// Applies one operation to a store
    pub fn apply(store: &CartStore, op: &CartOp) {
        match op {
            CartOp::Add(index) => store.add(indexed_book(*index)),
            CartOp::Remove(index) => store.remove(&indexed_id(*index)),
            CartOp::SetQuantity(index, quantity) => {
                store.set_quantity(&indexed_id(*index), *quantity);
            }
            CartOp::Clear => store.clear(),
        }
    }
}

// Re-export commonly used items
pub use cart_test::CartTest;
pub use mocks::{FixedClock, test_clock};
