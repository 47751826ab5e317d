//! # Storefront Runtime
//!
//! Runtime for the cart: [`store::CartStore`] owns the canonical
//! [`CartState`](storefront_core::CartState) and is the exclusive mutation
//! and query surface for it; [`session::Session`] is the access boundary
//! callers go through.
//!
//! ## Core Components
//!
//! - **`CartStore`**: holds the current snapshot inside a `watch` channel;
//!   mutations publish a complete new snapshot before they return.
//! - **`Session`**: explicitly owned context that mounts the store; asking
//!   an unmounted session for the cart is a usage error, not a panic.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use storefront_core::{Book, BookId};
//! use storefront_runtime::CartStore;
//!
//! let store = CartStore::new();
//! store.add(Arc::new(Book::new("1", "Suç ve Ceza").with_rating(4.5)));
//! store.add(Arc::new(Book::new("1", "Suç ve Ceza").with_rating(4.5)));
//!
//! assert_eq!(store.quantity_of(&BookId::new("1")), 2);
//! assert_eq!(store.total_price(), 190.0);
//! ```

pub mod session;
pub mod store;

/// Error types for the store access boundary
pub mod error {
    use thiserror::Error;

    /// Errors surfaced at the session access boundary.
    ///
    /// Cart mutations and queries are total functions over structurally
    /// valid state and cannot fail. The fallible points are using a session
    /// nothing was mounted into, and checking out an empty cart.
    #[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
    pub enum StoreError {
        /// The session was asked for a cart store before one was mounted
        ///
        /// Fatal to the calling code path; surfaced immediately rather than
        /// falling back to ambient state.
        #[error("cart store accessed before one was mounted in the session")]
        CartNotMounted,

        /// Checkout was requested on an empty cart
        #[error("cannot check out an empty cart")]
        EmptyCart,
    }
}

pub use error::StoreError;
pub use session::Session;
pub use store::CartStore;
