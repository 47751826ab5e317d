//! # Storefront Catalog
//!
//! Read-only client for the book catalog.
//!
//! The catalog is an external collaborator: it resolves search terms and
//! identifiers to [`Book`](storefront_core::Book) records over a
//! Google-Books-shaped volumes API. Lookups on the public surface never
//! fail — transport errors, bad statuses, malformed bodies, and timeouts
//! all degrade to a bundled fallback dataset so browsing and cart flows
//! keep working offline. The cart store never calls this crate; data flows
//! one way, from the catalog through the views into the cart.
//!
//! ## Example
//!
//! ```no_run
//! use storefront_catalog::{CatalogClient, CatalogConfig};
//!
//! # async fn example() -> Result<(), storefront_catalog::CatalogError> {
//! let client = CatalogClient::new(CatalogConfig::default())?;
//!
//! let hits = client.search("dostoyevski").await;
//! for book in &hits {
//!     println!("{} ({:?})", book.title, book.average_rating);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod fallback;
pub mod wire;

pub use client::{CatalogClient, CatalogConfig};
pub use error::CatalogError;
