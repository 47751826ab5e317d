//! Catalog book records.
//!
//! A [`Book`] is produced outside the cart (by the catalog client or a test
//! fixture) and flows through it untouched. The cart never validates or
//! mutates book content; malformed records are the producer's problem.

use serde::{Deserialize, Serialize};

/// Unique identifier for a book within a catalog session
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    /// Creates a `BookId` from any string-like value
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BookId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for BookId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An immutable catalog record.
///
/// All descriptive metadata is optional except the identifier and title;
/// the volumes API omits fields freely. The cart reads only `id` and
/// `average_rating`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Catalog identifier, unique within a session
    pub id: BookId,
    /// Title as listed by the catalog
    pub title: String,
    /// Author names, possibly empty
    pub authors: Vec<String>,
    /// Long-form description
    pub description: Option<String>,
    /// Cover image reference
    pub thumbnail: Option<String>,
    /// Publication date as the catalog reports it (often just a year)
    pub published_date: Option<String>,
    /// Page count
    pub page_count: Option<u32>,
    /// Subject categories
    pub categories: Vec<String>,
    /// Average reader rating, when the catalog has one
    pub average_rating: Option<f64>,
    /// Number of ratings behind the average
    pub ratings_count: Option<u64>,
    /// ISO language code
    pub language: Option<String>,
    /// Publisher name
    pub publisher: Option<String>,
}

impl Book {
    /// Creates a book with only an identifier and title set
    #[must_use]
    pub fn new(id: impl Into<BookId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            authors: Vec::new(),
            description: None,
            thumbnail: None,
            published_date: None,
            page_count: None,
            categories: Vec::new(),
            average_rating: None,
            ratings_count: None,
            language: None,
            publisher: None,
        }
    }

    /// Sets the author list
    #[must_use]
    pub fn with_authors(mut self, authors: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.authors = authors.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the average rating
    #[must_use]
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.average_rating = Some(rating);
        self
    }
}
