//! Storefront demo binary
//!
//! Drives the whole storefront end to end: fetch a catalog listing (served
//! from the bundled fallback when offline), fill the cart, adjust
//! quantities, watch the cart from an observer, and check out. Currency
//! formatting lives here — amounts are plain units everywhere below the
//! presentation layer.

use std::sync::Arc;
use storefront_catalog::CatalogClient;
use storefront_core::environment::SystemClock;
use storefront_runtime::{CartStore, Session};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn lira(amount: f64) -> String {
    format!("{amount:.2} TL")
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront=info,storefront_catalog=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Storefront Demo ===\n");

    let catalog = CatalogClient::from_env()?;
    let cart = Arc::new(CartStore::new());
    let session = Session::new().with_cart(Arc::clone(&cart));
    let mut observer = cart.subscribe();

    // Browse the featured listing (fallback dataset when offline)
    let listing = catalog.fetch_featured().await;
    println!("Featured listing ({} books):", listing.len());
    for book in &listing {
        println!(
            "  [{}] {} — {} — {}",
            book.id,
            book.title,
            book.authors.join(", "),
            lira(storefront_core::unit_price(book)),
        );
    }

    // Fill the cart: two copies of the first book, one of the second
    let (Some(first), Some(second)) = (listing.first(), listing.get(1)) else {
        eprintln!("catalog returned fewer than two books, nothing to demo");
        return Ok(());
    };
    let first = Arc::new(first.clone());
    let second = Arc::new(second.clone());

    println!("\nAdding '{}' twice and '{}' once...", first.title, second.title);
    let store = session.cart()?;
    store.add(Arc::clone(&first));
    store.add(Arc::clone(&first));
    store.add(Arc::clone(&second));

    let snapshot = observer.borrow_and_update().clone();
    println!("Observer sees {} items:", snapshot.total_item_count());
    for entry in snapshot.entries() {
        println!(
            "  {} x{} = {}",
            entry.book.title,
            entry.quantity,
            lira(entry.line_total())
        );
    }
    println!("Cart total: {}", lira(snapshot.total_price()));

    // Adjust quantities: bump the second book, then drop the first
    println!("\nSetting '{}' to 3 copies...", second.title);
    store.set_quantity(&second.id, 3);
    println!("Removing '{}'...", first.title);
    store.remove(&first.id);

    println!(
        "Cart now: {} items, {}",
        store.total_item_count(),
        lira(store.total_price())
    );

    // Check out
    println!("\nChecking out...");
    let order = session.checkout(&SystemClock)?;
    println!("Order {} placed at {}:", order.id, order.placed_at);
    for line in &order.lines {
        println!(
            "  {} x{} @ {} = {}",
            line.book.title,
            line.quantity,
            lira(line.unit_price),
            lira(line.line_total)
        );
    }
    println!("Order total: {}", lira(order.total_price));
    println!("Cart empty again: {}", cart.is_empty());

    println!("\n=== Demo Complete ===");
    Ok(())
}
