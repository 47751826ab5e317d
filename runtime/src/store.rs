//! The cart store: canonical state plus the mutation and query surface.

use std::sync::Arc;
use storefront_core::{Book, BookId, CartState};
use tokio::sync::watch;

/// The store owning the canonical cart state.
///
/// The current snapshot lives inside a `watch` channel. Each mutation
/// computes the next snapshot and replaces the value under the channel's
/// writer lock, publishing it in the same call — so an observer's next read
/// is always the complete new state, never a partial or stale one, and
/// writers are serialized if a multi-threaded host ever shares the store.
/// Snapshots themselves are immutable values; a reader can hold one for as
/// long as it likes without locking anything.
///
/// All operations are synchronous, non-blocking, and total: given a
/// structurally valid state there is no input that makes a mutation fail.
/// Derived aggregates are recomputed on demand, never cached.
pub struct CartStore {
    state: watch::Sender<CartState>,
}

impl CartStore {
    /// Creates a store with an empty cart
    #[must_use]
    pub fn new() -> Self {
        Self::from_state(CartState::new())
    }

    /// Creates a store seeded with `initial`
    #[must_use]
    pub fn from_state(initial: CartState) -> Self {
        let (state, _) = watch::channel(initial);
        Self { state }
    }

    // ========== Mutations ==========

    /// Adds `book` to the cart.
    ///
    /// An existing entry's quantity grows by exactly one per call; otherwise
    /// a new entry with quantity 1 is appended. Always succeeds; observers
    /// are notified of the new snapshot before this returns.
    #[tracing::instrument(skip(self, book), fields(book_id = %book.id))]
    pub fn add(&self, book: Arc<Book>) {
        self.state
            .send_modify(|state| *state = state.with_added(book));
        metrics::counter!("cart.mutations.total", "op" => "add").increment(1);
        tracing::debug!("book added to cart");
    }

    /// Removes the entry for `id`.
    ///
    /// Removing an absent identifier is a no-op, not an error. Observers are
    /// notified either way.
    #[tracing::instrument(skip(self))]
    pub fn remove(&self, id: &BookId) {
        self.state
            .send_modify(|state| *state = state.with_removed(id));
        metrics::counter!("cart.mutations.total", "op" => "remove").increment(1);
        tracing::debug!("book removed from cart");
    }

    /// Sets the quantity for `id` (absolute, not a delta).
    ///
    /// Zero removes the entry. An absent `id` is left alone — setting a
    /// quantity never creates entries, only [`CartStore::add`] does.
    /// Observers are notified either way.
    #[tracing::instrument(skip(self))]
    pub fn set_quantity(&self, id: &BookId, quantity: u32) {
        self.state
            .send_modify(|state| *state = state.with_quantity(id, quantity));
        metrics::counter!("cart.mutations.total", "op" => "set_quantity").increment(1);
        tracing::debug!("cart quantity updated");
    }

    /// Empties the cart unconditionally and notifies observers
    #[tracing::instrument(skip(self))]
    pub fn clear(&self) {
        self.state.send_modify(|state| *state = state.cleared());
        metrics::counter!("cart.mutations.total", "op" => "clear").increment(1);
        tracing::debug!("cart cleared");
    }

    // ========== Queries ==========

    /// Clone of the current snapshot
    #[must_use]
    pub fn snapshot(&self) -> CartState {
        self.state.borrow().clone()
    }

    /// Read the current snapshot via a closure
    ///
    /// Access state through a closure so the borrow is released promptly:
    ///
    /// ```ignore
    /// let distinct = store.state(|s| s.len());
    /// ```
    pub fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&CartState) -> T,
    {
        f(&self.state.borrow())
    }

    /// Sum of quantities across all entries
    #[must_use]
    pub fn total_item_count(&self) -> u64 {
        self.state.borrow().total_item_count()
    }

    /// Sum of line totals across all entries
    #[must_use]
    pub fn total_price(&self) -> f64 {
        self.state.borrow().total_price()
    }

    /// True when the cart holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.borrow().is_empty()
    }

    /// Quantity carted for `id`, zero when absent
    #[must_use]
    pub fn quantity_of(&self, id: &BookId) -> u32 {
        self.state.borrow().quantity_of(id)
    }

    // ========== Observation ==========

    /// Subscribes an observer to cart snapshots.
    ///
    /// The receiver sees every published snapshot as a complete value; a
    /// slow observer that skips intermediate snapshots still reads the
    /// latest complete one, never a partial state.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CartState> {
        self.state.subscribe()
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("CartStore")
            .field("entries", &state.len())
            .field("total_items", &state.total_item_count())
            .finish()
    }
}
