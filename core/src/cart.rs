//! Cart state and its pure transitions.
//!
//! [`CartState`] is an immutable snapshot. Every transition consumes nothing:
//! it reads `&self` and returns a fresh state, so a snapshot handed to an
//! observer stays valid while the store publishes newer ones. Entries keep
//! insertion order; adding an already-carted book bumps its quantity in
//! place, it never reorders.
//!
//! Invariants upheld by construction:
//!
//! - at most one entry per distinct [`BookId`]
//! - every entry quantity is at least 1 (a zero quantity becomes removal)

use crate::book::{Book, BookId};
use crate::pricing;
use std::sync::Arc;

/// A single cart line: a shared book record plus a quantity.
#[derive(Clone, Debug, PartialEq)]
pub struct CartEntry {
    /// The book this entry refers to (shared read-only with its producer)
    pub book: Arc<Book>,
    /// Units of this book in the cart, always >= 1
    pub quantity: u32,
}

impl CartEntry {
    const fn first(book: Arc<Book>) -> Self {
        Self { book, quantity: 1 }
    }

    /// Price of this line: unit price times quantity
    #[must_use]
    pub fn line_total(&self) -> f64 {
        pricing::unit_price(&self.book) * f64::from(self.quantity)
    }
}

/// The full ordered, unique-keyed collection of cart entries.
///
/// Created empty at session start, evolved only through the four transitions
/// below, and discarded with the session. Never persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartState {
    entries: Vec<CartEntry>,
}

impl CartState {
    /// Creates an empty cart
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    // ========== Transitions ==========

    /// Returns a new state with `book` added.
    ///
    /// If an entry for the book's identifier already exists, its quantity
    /// grows by exactly one; repeated calls accumulate. Otherwise a new
    /// entry with quantity 1 is appended at the end, so entries keep their
    /// position across later quantity updates.
    #[must_use]
    pub fn with_added(&self, book: Arc<Book>) -> Self {
        let mut entries = self.entries.clone();
        match entries.iter_mut().find(|entry| entry.book.id == book.id) {
            Some(entry) => entry.quantity += 1,
            None => entries.push(CartEntry::first(book)),
        }
        Self { entries }
    }

    /// Returns a new state without the entry for `id`.
    ///
    /// Removing an identifier that is not in the cart is not an error; the
    /// returned state is structurally equal to `self`.
    #[must_use]
    pub fn with_removed(&self, id: &BookId) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|entry| &entry.book.id != id)
                .cloned()
                .collect(),
        }
    }

    /// Returns a new state with the entry for `id` set to `quantity`.
    ///
    /// A quantity of zero behaves exactly like [`CartState::with_removed`].
    /// When no entry for `id` exists the state comes back unchanged: setting
    /// a quantity never creates an entry, only [`CartState::with_added`]
    /// does.
    #[must_use]
    pub fn with_quantity(&self, id: &BookId, quantity: u32) -> Self {
        if quantity == 0 {
            return self.with_removed(id);
        }
        let mut entries = self.entries.clone();
        if let Some(entry) = entries.iter_mut().find(|entry| &entry.book.id == id) {
            entry.quantity = quantity;
        }
        Self { entries }
    }

    /// Returns the empty state, whatever was carted before
    #[must_use]
    pub const fn cleared(&self) -> Self {
        Self::new()
    }

    // ========== Queries ==========

    /// Entries in insertion order
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Number of distinct books in the cart
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the cart holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of quantities across all entries (0 for an empty cart)
    #[must_use]
    pub fn total_item_count(&self) -> u64 {
        self.entries
            .iter()
            .map(|entry| u64::from(entry.quantity))
            .sum()
    }

    /// Sum of line totals across all entries, recomputed on every call
    #[must_use]
    pub fn total_price(&self) -> f64 {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    /// Quantity carted for `id`, zero when absent
    #[must_use]
    pub fn quantity_of(&self, id: &BookId) -> u32 {
        self.get(id).map_or(0, |entry| entry.quantity)
    }

    /// Entry for `id`, when present
    #[must_use]
    pub fn get(&self, id: &BookId) -> Option<&CartEntry> {
        self.entries.iter().find(|entry| &entry.book.id == id)
    }

    /// Whether an entry for `id` exists
    #[must_use]
    pub fn contains(&self, id: &BookId) -> bool {
        self.get(id).is_some()
    }
}
