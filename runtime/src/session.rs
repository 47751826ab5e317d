//! Session-owned access to the cart store.
//!
//! A [`Session`] is constructed explicitly at startup and passed to every
//! caller that needs the cart — there is no ambient lookup. Asking a session
//! that never mounted a store for the cart fails with
//! [`StoreError::CartNotMounted`] at the access boundary instead of blowing
//! up somewhere deeper.

use crate::error::StoreError;
use crate::store::CartStore;
use std::sync::Arc;
use storefront_core::Order;
use storefront_core::environment::Clock;

/// An explicitly owned storefront session.
///
/// Lives from process start to process end; the cart state it owns is
/// discarded with it (nothing is persisted).
#[derive(Debug, Default)]
pub struct Session {
    cart: Option<Arc<CartStore>>,
}

impl Session {
    /// Creates a session with nothing mounted
    #[must_use]
    pub const fn new() -> Self {
        Self { cart: None }
    }

    /// Mounts a cart store into the session
    #[must_use]
    pub fn with_cart(mut self, cart: Arc<CartStore>) -> Self {
        self.cart = Some(cart);
        self
    }

    /// The mounted cart store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CartNotMounted`] when the session was built
    /// without a cart. Callers must treat this as fatal to their code path.
    pub fn cart(&self) -> Result<&Arc<CartStore>, StoreError> {
        self.cart.as_ref().ok_or(StoreError::CartNotMounted)
    }

    /// Places an order from the current cart contents and clears the cart.
    ///
    /// The order is a frozen snapshot: lines, totals, and the checkout
    /// time from `clock`. Payment is simulated; nothing leaves the process.
    ///
    /// # Errors
    ///
    /// - [`StoreError::CartNotMounted`] when no cart is mounted
    /// - [`StoreError::EmptyCart`] when the cart has no entries
    pub fn checkout(&self, clock: &dyn Clock) -> Result<Order, StoreError> {
        let cart = self.cart()?;
        let snapshot = cart.snapshot();
        let order = Order::from_cart(&snapshot, clock.now()).ok_or(StoreError::EmptyCart)?;
        cart.clear();

        tracing::info!(
            order_id = %order.id,
            total_items = order.total_items,
            total_price = order.total_price,
            "order placed"
        );
        Ok(order)
    }
}
