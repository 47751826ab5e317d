//! Wire model for the volumes API
//!
//! The API nests descriptive metadata under `volumeInfo`; the storefront
//! flattens that into [`Book`] at the crate boundary so nothing downstream
//! knows about the nesting.

use serde::{Deserialize, Serialize};
use storefront_core::{Book, BookId};

/// Search response envelope
#[derive(Clone, Debug, Default, Deserialize)]
pub struct VolumeList {
    /// Matched volumes; the API omits the field entirely on zero matches
    #[serde(default)]
    pub items: Vec<Volume>,
}

/// A single volume record
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    /// Volume identifier
    pub id: String,
    /// Descriptive metadata
    pub volume_info: VolumeInfo,
}

/// Descriptive metadata for a volume; every field may be absent
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VolumeInfo {
    /// Title
    pub title: String,
    /// Author names
    pub authors: Vec<String>,
    /// Long-form description
    pub description: Option<String>,
    /// Cover image references
    pub image_links: Option<ImageLinks>,
    /// Publication date (often just a year)
    pub published_date: Option<String>,
    /// Page count
    pub page_count: Option<u32>,
    /// Subject categories
    pub categories: Vec<String>,
    /// Average reader rating
    pub average_rating: Option<f64>,
    /// Number of ratings behind the average
    pub ratings_count: Option<u64>,
    /// ISO language code
    pub language: Option<String>,
    /// Publisher name
    pub publisher: Option<String>,
}

/// Cover image references for a volume
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageLinks {
    /// Thumbnail-sized cover
    pub thumbnail: Option<String>,
    /// Smaller thumbnail variant
    pub small_thumbnail: Option<String>,
}

impl From<Volume> for Book {
    fn from(volume: Volume) -> Self {
        let info = volume.volume_info;
        Self {
            id: BookId::new(volume.id),
            title: info.title,
            authors: info.authors,
            description: info.description,
            thumbnail: info
                .image_links
                .and_then(|links| links.thumbnail.or(links.small_thumbnail)),
            published_date: info.published_date,
            page_count: info.page_count,
            categories: info.categories,
            average_rating: info.average_rating,
            ratings_count: info.ratings_count,
            language: info.language,
            publisher: info.publisher,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_volume_flattens_into_a_book() {
        let volume: Volume = serde_json::from_value(serde_json::json!({
            "id": "zyTCAlFPjgYC",
            "volumeInfo": { "title": "The Google Story" }
        }))
        .unwrap();

        let book = Book::from(volume);
        assert_eq!(book.id, BookId::new("zyTCAlFPjgYC"));
        assert_eq!(book.title, "The Google Story");
        assert!(book.authors.is_empty());
        assert_eq!(book.average_rating, None);
    }

    #[test]
    fn full_volume_keeps_every_field() {
        let volume: Volume = serde_json::from_value(serde_json::json!({
            "id": "1",
            "volumeInfo": {
                "title": "Suç ve Ceza",
                "authors": ["Fyodor Dostoyevski"],
                "description": "A classic.",
                "imageLinks": { "thumbnail": "https://example.com/cover.jpg" },
                "publishedDate": "1866",
                "pageCount": 671,
                "categories": ["Roman", "Klasik"],
                "averageRating": 4.5,
                "ratingsCount": 1250,
                "language": "tr",
                "publisher": "Can"
            }
        }))
        .unwrap();

        let book = Book::from(volume);
        assert_eq!(book.average_rating, Some(4.5));
        assert_eq!(book.ratings_count, Some(1250));
        assert_eq!(book.page_count, Some(671));
        assert_eq!(book.thumbnail.as_deref(), Some("https://example.com/cover.jpg"));
        assert_eq!(book.publisher.as_deref(), Some("Can"));
    }

    #[test]
    fn missing_items_field_means_no_matches() {
        let list: VolumeList = serde_json::from_value(serde_json::json!({
            "kind": "books#volumes",
            "totalItems": 0
        }))
        .unwrap();
        assert!(list.items.is_empty());
    }
}
