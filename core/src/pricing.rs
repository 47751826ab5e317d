//! Mock price derivation.
//!
//! The catalog carries no price data, so unit prices are a deterministic
//! function of the book's average rating. Amounts are currency-agnostic
//! units; formatting (the storefront renders Turkish lira) is a presentation
//! concern and stays out of this crate.

use crate::book::Book;

/// Flat price floor applied to every book
pub const BASE_PRICE: f64 = 50.0;

/// Price added per rating point
pub const RATING_MULTIPLIER: f64 = 10.0;

/// Unit price for a book.
///
/// `BASE_PRICE + RATING_MULTIPLIER * average_rating`; unrated books price at
/// the base alone.
#[must_use]
pub fn unit_price(book: &Book) -> f64 {
    BASE_PRICE + RATING_MULTIPLIER * book.average_rating.unwrap_or(0.0)
}
