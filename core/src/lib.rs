//! # Storefront Core
//!
//! Domain types and pure state transitions for the storefront.
//!
//! This crate is the functional core of the storefront: plain values and
//! total functions, no I/O. The runtime crate wraps [`cart::CartState`] in a
//! store that owns the canonical snapshot; the catalog crate produces
//! [`book::Book`] records from the volumes API.
//!
//! ## Core Concepts
//!
//! - **Book**: an opaque, immutable catalog record. The cart only interprets
//!   its identifier and its average rating (for pricing).
//! - **CartState**: an ordered collection of cart entries, unique per book
//!   identifier. Every transition returns a *new* snapshot; prior snapshots
//!   are never touched, so observers can read them without locking.
//! - **Pricing**: unit prices are a deterministic mock formula over the
//!   book's rating; there is no pricing authority.
//! - **Order**: an immutable checkout snapshot of a non-empty cart.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use storefront_core::{Book, CartState};
//!
//! let crime = Arc::new(Book::new("1", "Suç ve Ceza").with_rating(4.5));
//!
//! let cart = CartState::new()
//!     .with_added(Arc::clone(&crime))
//!     .with_added(crime);
//!
//! assert_eq!(cart.total_item_count(), 2);
//! assert_eq!(cart.total_price(), 190.0);
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};

pub mod book;
pub mod cart;
pub mod environment;
pub mod order;
pub mod pricing;

pub use book::{Book, BookId};
pub use cart::{CartEntry, CartState};
pub use order::{Order, OrderId, OrderLine};
pub use pricing::{BASE_PRICE, RATING_MULTIPLIER, unit_price};
