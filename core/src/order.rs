//! Checkout order snapshots.
//!
//! An [`Order`] freezes a non-empty cart at checkout time: lines, totals,
//! and the moment it was placed. Payment and fulfilment are simulated
//! elsewhere; nothing here talks to a processor.

use crate::book::Book;
use crate::cart::CartState;
use crate::pricing;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

/// Unique identifier for a placed order
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Creates a new random `OrderId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an `OrderId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One priced line of an order
#[derive(Clone, Debug, PartialEq)]
pub struct OrderLine {
    /// The ordered book (shared with the cart entry it came from)
    pub book: Arc<Book>,
    /// Units ordered
    pub quantity: u32,
    /// Price per unit at checkout time
    pub unit_price: f64,
    /// `unit_price * quantity`
    pub line_total: f64,
}

/// Immutable snapshot of a completed checkout
#[derive(Clone, Debug, PartialEq)]
pub struct Order {
    /// Order identifier
    pub id: OrderId,
    /// Priced lines in cart order
    pub lines: Vec<OrderLine>,
    /// Sum of line quantities
    pub total_items: u64,
    /// Sum of line totals
    pub total_price: f64,
    /// When the order was placed
    pub placed_at: DateTime<Utc>,
}

impl Order {
    /// Snapshots a cart into an order.
    ///
    /// Returns `None` for an empty cart; checkout refuses empty carts
    /// upstream, this is the last line of defence.
    #[must_use]
    pub fn from_cart(cart: &CartState, placed_at: DateTime<Utc>) -> Option<Self> {
        if cart.is_empty() {
            return None;
        }

        let lines = cart
            .entries()
            .iter()
            .map(|entry| {
                let unit_price = pricing::unit_price(&entry.book);
                OrderLine {
                    book: Arc::clone(&entry.book),
                    quantity: entry.quantity,
                    unit_price,
                    line_total: unit_price * f64::from(entry.quantity),
                }
            })
            .collect();

        Some(Self {
            id: OrderId::new(),
            lines,
            total_items: cart.total_item_count(),
            total_price: cart.total_price(),
            placed_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: &str, rating: f64) -> Arc<Book> {
        Arc::new(Book::new(id, format!("Book {id}")).with_rating(rating))
    }

    #[test]
    fn empty_cart_yields_no_order() {
        assert_eq!(Order::from_cart(&CartState::new(), Utc::now()), None);
    }

    #[test]
    fn order_totals_match_the_cart() {
        let crime = book("1", 4.5);
        let cart = CartState::new()
            .with_added(Arc::clone(&crime))
            .with_added(crime)
            .with_added(book("2", 0.0));

        let placed_at = Utc::now();
        let order = Order::from_cart(&cart, placed_at).unwrap();

        assert_eq!(order.lines.len(), 2);
        assert_eq!(order.total_items, 3);
        assert_eq!(order.total_price, 240.0);
        assert_eq!(order.placed_at, placed_at);

        let first = &order.lines[0];
        assert_eq!(first.quantity, 2);
        assert_eq!(first.unit_price, 95.0);
        assert_eq!(first.line_total, 190.0);
    }

    #[test]
    fn order_ids_are_distinct() {
        assert_ne!(OrderId::new(), OrderId::new());
    }
}
