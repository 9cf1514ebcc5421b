//! Catalog item types
//!
//! A catalog item is one browsable film or series entry. Items are immutable
//! and come from the static mock collections in [`super::mock_data`].

use serde::{Deserialize, Serialize};

/// Synopsis shown when an item carries none of its own.
pub const PLACEHOLDER_SYNOPSIS: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.";

/// Stable identifier of a catalog item, unique within its source collection.
pub type ItemId = u32;

/// Top-level classification of a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Film,
    Series,
}

impl ItemKind {
    /// Label for the duration cell of the detail grid.
    pub fn duration_label(self) -> &'static str {
        match self {
            ItemKind::Film => "Duration",
            ItemKind::Series => "Episodes",
        }
    }
}

/// A single browsable movie or series entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: ItemId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// Comma-joined genre labels, e.g. `"Drama, Thriller"`.
    pub genre: String,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub new_eps: bool,
    /// Portrait poster path.
    pub image: String,
    #[serde(default)]
    pub image_landscape: Option<String>,
    #[serde(default)]
    pub top_ten_rank: Option<u8>,
    pub duration: String,
    /// Numeric rating kept as display text, e.g. `"7.8"`.
    pub rating: String,
    pub release_date: String,
    #[serde(default)]
    pub sinopsis: Option<String>,
}

impl CatalogItem {
    pub fn is_film(&self) -> bool {
        self.kind == ItemKind::Film
    }

    pub fn is_series(&self) -> bool {
        self.kind == ItemKind::Series
    }

    /// Synopsis text, falling back to the placeholder.
    pub fn synopsis(&self) -> &str {
        self.sinopsis.as_deref().unwrap_or(PLACEHOLDER_SYNOPSIS)
    }

    /// Top-10 rank, only when it falls in 1..=10.
    pub fn top_ten(&self) -> Option<u8> {
        self.top_ten_rank.filter(|rank| (1..=10).contains(rank))
    }

    /// Landscape image when available, else the portrait one.
    pub fn backdrop(&self) -> &str {
        self.image_landscape.as_deref().unwrap_or(&self.image)
    }

    /// Whether two items share exactly the same genre label.
    pub fn same_genre(&self, other: &CatalogItem) -> bool {
        self.genre == other.genre
    }
}

/// Split a comma-joined genre label into trimmed tokens.
pub fn genre_tokens(genre: &str) -> Vec<&str> {
    genre
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

#[cfg(test)]
pub(crate) fn test_item(id: ItemId, kind: ItemKind, genre: &str) -> CatalogItem {
    CatalogItem {
        id,
        title: format!("Item {id}"),
        kind,
        genre: genre.to_string(),
        is_premium: false,
        new_eps: false,
        image: format!("/images/poster-{id}.jpg"),
        image_landscape: Some(format!("/images/landscape-{id}.jpg")),
        top_ten_rank: None,
        duration: "1h 40m".to_string(),
        rating: "7.5".to_string(),
        release_date: "2021".to_string(),
        sinopsis: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_tokens_trim_and_skip_empty() {
        assert_eq!(genre_tokens("Drama, Thriller ,Crime"), vec!["Drama", "Thriller", "Crime"]);
        assert_eq!(genre_tokens("Drama,,"), vec!["Drama"]);
        assert!(genre_tokens("").is_empty());
    }

    #[test]
    fn test_synopsis_falls_back_to_placeholder() {
        let mut item = test_item(1, ItemKind::Film, "Drama");
        assert_eq!(item.synopsis(), PLACEHOLDER_SYNOPSIS);
        item.sinopsis = Some("A story.".to_string());
        assert_eq!(item.synopsis(), "A story.");
    }

    #[test]
    fn test_top_ten_rejects_out_of_range() {
        let mut item = test_item(1, ItemKind::Film, "Drama");
        item.top_ten_rank = Some(0);
        assert_eq!(item.top_ten(), None);
        item.top_ten_rank = Some(11);
        assert_eq!(item.top_ten(), None);
        item.top_ten_rank = Some(3);
        assert_eq!(item.top_ten(), Some(3));
    }

    #[test]
    fn test_item_deserializes_from_camel_case() {
        let json = r#"{
            "id": 7, "title": "X", "type": "film", "genre": "Drama",
            "isPremium": true, "image": "/a.jpg", "imageLandscape": "/b.jpg",
            "duration": "2h", "rating": "8.1", "releaseDate": "2020"
        }"#;
        let item: CatalogItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 7);
        assert!(item.is_film());
        assert!(item.is_premium);
        assert!(!item.new_eps);
        assert_eq!(item.backdrop(), "/b.jpg");
    }
}
