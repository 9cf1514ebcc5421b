//! Static mock catalog.
//!
//! `movies` and `series` own the items; the other named collections are
//! overlapping views that reference those same items by id.

use super::catalog::{CatalogItem, ItemId, ItemKind};

/// Named, read-only collections of catalog items.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub movies: Vec<CatalogItem>,
    pub series: Vec<CatalogItem>,
    pub top_rated: Vec<CatalogItem>,
    pub continue_watching: Vec<CatalogItem>,
    pub new_release: Vec<CatalogItem>,
}

impl Catalog {
    /// Build a catalog from owned items plus id lists for the derived views.
    /// Unknown ids in a view are skipped.
    pub fn from_parts(
        movies: Vec<CatalogItem>,
        series: Vec<CatalogItem>,
        top_rated: &[ItemId],
        continue_watching: &[ItemId],
        new_release: &[ItemId],
    ) -> Self {
        let mut catalog = Self {
            movies,
            series,
            top_rated: Vec::new(),
            continue_watching: Vec::new(),
            new_release: Vec::new(),
        };
        catalog.top_rated = catalog.view(top_rated);
        catalog.continue_watching = catalog.view(continue_watching);
        catalog.new_release = catalog.view(new_release);
        catalog
    }

    /// The demo dataset.
    pub fn mock() -> Self {
        Self::from_parts(
            mock_movies(),
            mock_series(),
            &[3, 101, 1, 104, 6, 102, 9, 107, 2, 110],
            &[1, 5, 103, 8, 105, 11],
            &[12, 108, 10, 109, 7, 106],
        )
    }

    /// The collection of the given kind: films recommend from films, series from series.
    pub fn collection(&self, kind: ItemKind) -> &[CatalogItem] {
        match kind {
            ItemKind::Film => &self.movies,
            ItemKind::Series => &self.series,
        }
    }

    pub fn find(&self, id: ItemId) -> Option<&CatalogItem> {
        self.movies.iter().chain(self.series.iter()).find(|item| item.id == id)
    }

    fn view(&self, ids: &[ItemId]) -> Vec<CatalogItem> {
        ids.iter().filter_map(|id| self.find(*id).cloned()).collect()
    }
}

struct Entry {
    id: ItemId,
    title: &'static str,
    genre: &'static str,
    slug: &'static str,
    duration: &'static str,
    rating: &'static str,
    release: &'static str,
    premium: bool,
    new_eps: bool,
    top_ten: Option<u8>,
    sinopsis: Option<&'static str>,
}

fn build(kind: ItemKind, entry: Entry) -> CatalogItem {
    CatalogItem {
        id: entry.id,
        title: entry.title.to_string(),
        kind,
        genre: entry.genre.to_string(),
        is_premium: entry.premium,
        new_eps: entry.new_eps,
        image: format!("/images/portrait/{}.jpg", entry.slug),
        image_landscape: Some(format!("/images/landscape/{}.jpg", entry.slug)),
        top_ten_rank: entry.top_ten,
        duration: entry.duration.to_string(),
        rating: entry.rating.to_string(),
        release_date: entry.release.to_string(),
        sinopsis: entry.sinopsis.map(str::to_string),
    }
}

fn mock_movies() -> Vec<CatalogItem> {
    let film = |entry| build(ItemKind::Film, entry);
    vec![
        film(Entry {
            id: 1, title: "Don't Look Up", genre: "Comedy, Sci-Fi", slug: "dont-look-up",
            duration: "2h 18m", rating: "7.2", release: "24 December 2021",
            premium: false, new_eps: false, top_ten: Some(3),
            sinopsis: Some("Two low-level astronomers go on a media tour to warn humanity of an approaching comet that will destroy planet Earth."),
        }),
        film(Entry {
            id: 2, title: "The Tomorrow War", genre: "Action, Sci-Fi", slug: "the-tomorrow-war",
            duration: "2h 20m", rating: "6.6", release: "2 July 2021",
            premium: true, new_eps: false, top_ten: None, sinopsis: None,
        }),
        film(Entry {
            id: 3, title: "Blue Beetle", genre: "Action, Adventure", slug: "blue-beetle",
            duration: "2h 7m", rating: "6.0", release: "18 August 2023",
            premium: false, new_eps: false, top_ten: Some(1), sinopsis: None,
        }),
        film(Entry {
            id: 4, title: "Suzume", genre: "Anime, Adventure", slug: "suzume",
            duration: "2h 2m", rating: "7.7", release: "11 November 2022",
            premium: true, new_eps: false, top_ten: None,
            sinopsis: Some("A seventeen-year-old girl helps a mysterious young man close doors that are releasing disasters across Japan."),
        }),
        film(Entry {
            id: 5, title: "Little Mermaid", genre: "Family, Fantasy", slug: "little-mermaid",
            duration: "2h 15m", rating: "7.2", release: "26 May 2023",
            premium: false, new_eps: false, top_ten: None, sinopsis: None,
        }),
        film(Entry {
            id: 6, title: "Duty After School", genre: "Action, Sci-Fi", slug: "duty-after-school",
            duration: "1h 58m", rating: "7.0", release: "31 March 2023",
            premium: false, new_eps: false, top_ten: Some(5), sinopsis: None,
        }),
        film(Entry {
            id: 7, title: "Missing", genre: "Thriller", slug: "missing",
            duration: "1h 51m", rating: "7.1", release: "20 January 2023",
            premium: false, new_eps: false, top_ten: None, sinopsis: None,
        }),
        film(Entry {
            id: 8, title: "Avatar", genre: "Action, Adventure", slug: "avatar",
            duration: "2h 42m", rating: "7.9", release: "18 December 2009",
            premium: true, new_eps: false, top_ten: None, sinopsis: None,
        }),
        film(Entry {
            id: 9, title: "Fast X", genre: "Action, Adventure", slug: "fast-x",
            duration: "2h 21m", rating: "5.8", release: "19 May 2023",
            premium: false, new_eps: false, top_ten: Some(7), sinopsis: None,
        }),
        film(Entry {
            id: 10, title: "Sonic 2", genre: "Family, Comedy", slug: "sonic-2",
            duration: "2h 2m", rating: "6.5", release: "8 April 2022",
            premium: false, new_eps: false, top_ten: None, sinopsis: None,
        }),
        film(Entry {
            id: 11, title: "Spider-Man: Across the Spider-Verse", genre: "Anime, Adventure", slug: "across-the-spider-verse",
            duration: "2h 20m", rating: "8.6", release: "2 June 2023",
            premium: true, new_eps: false, top_ten: None, sinopsis: None,
        }),
        film(Entry {
            id: 12, title: "Guardians of the Galaxy Vol. 3", genre: "Action, Sci-Fi", slug: "guardians-3",
            duration: "2h 30m", rating: "7.9", release: "5 May 2023",
            premium: false, new_eps: false, top_ten: None, sinopsis: None,
        }),
    ]
}

fn mock_series() -> Vec<CatalogItem> {
    let show = |entry| build(ItemKind::Series, entry);
    vec![
        show(Entry {
            id: 101, title: "All of Us Are Dead", genre: "Horror, Thriller", slug: "all-of-us-are-dead",
            duration: "12 Episodes", rating: "7.5", release: "28 January 2022",
            premium: false, new_eps: true, top_ten: Some(2),
            sinopsis: Some("A high school becomes ground zero for a zombie virus outbreak, and trapped students must fight their way out."),
        }),
        show(Entry {
            id: 102, title: "Ted Lasso", genre: "Comedy, Drama", slug: "ted-lasso",
            duration: "34 Episodes", rating: "8.8", release: "14 August 2020",
            premium: true, new_eps: false, top_ten: Some(6), sinopsis: None,
        }),
        show(Entry {
            id: 103, title: "Alice in Borderland", genre: "Thriller, Sci-Fi", slug: "alice-in-borderland",
            duration: "16 Episodes", rating: "7.7", release: "10 December 2020",
            premium: true, new_eps: true, top_ten: None, sinopsis: None,
        }),
        show(Entry {
            id: 104, title: "Wednesday", genre: "Comedy, Fantasy", slug: "wednesday",
            duration: "8 Episodes", rating: "8.1", release: "23 November 2022",
            premium: false, new_eps: false, top_ten: Some(4), sinopsis: None,
        }),
        show(Entry {
            id: 105, title: "The Big Bang Theory", genre: "Comedy", slug: "big-bang-theory",
            duration: "279 Episodes", rating: "8.2", release: "24 September 2007",
            premium: false, new_eps: false, top_ten: None, sinopsis: None,
        }),
        show(Entry {
            id: 106, title: "Suits", genre: "Drama", slug: "suits",
            duration: "134 Episodes", rating: "8.4", release: "23 June 2011",
            premium: true, new_eps: false, top_ten: None, sinopsis: None,
        }),
        show(Entry {
            id: 107, title: "Stranger Things", genre: "Horror, Sci-Fi", slug: "stranger-things",
            duration: "34 Episodes", rating: "8.7", release: "15 July 2016",
            premium: false, new_eps: true, top_ten: Some(8), sinopsis: None,
        }),
        show(Entry {
            id: 108, title: "Shadow and Bone", genre: "Fantasy, Adventure", slug: "shadow-and-bone",
            duration: "16 Episodes", rating: "7.5", release: "23 April 2021",
            premium: false, new_eps: false, top_ten: None, sinopsis: None,
        }),
        show(Entry {
            id: 109, title: "The Tinder Swindler", genre: "Crime", slug: "tinder-swindler",
            duration: "1 Episode", rating: "7.2", release: "2 February 2022",
            premium: false, new_eps: false, top_ten: None, sinopsis: None,
        }),
        show(Entry {
            id: 110, title: "Game of Thrones", genre: "Fantasy, Drama", slug: "game-of-thrones",
            duration: "73 Episodes", rating: "9.2", release: "17 April 2011",
            premium: true, new_eps: false, top_ten: Some(9), sinopsis: None,
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_unique_within_each_collection() {
        let catalog = Catalog::mock();
        for collection in [
            &catalog.movies,
            &catalog.series,
            &catalog.top_rated,
            &catalog.continue_watching,
            &catalog.new_release,
        ] {
            let ids: HashSet<_> = collection.iter().map(|item| item.id).collect();
            assert_eq!(ids.len(), collection.len());
        }
    }

    #[test]
    fn test_views_reference_owned_items() {
        let catalog = Catalog::mock();
        for item in &catalog.top_rated {
            let owned = catalog.find(item.id).unwrap();
            assert_eq!(owned, item);
        }
        assert!(catalog.top_rated.iter().any(|item| item.is_film()));
        assert!(catalog.top_rated.iter().any(|item| item.is_series()));
    }

    #[test]
    fn test_collection_by_kind() {
        let catalog = Catalog::mock();
        assert!(catalog.collection(ItemKind::Film).iter().all(CatalogItem::is_film));
        assert!(catalog.collection(ItemKind::Series).iter().all(CatalogItem::is_series));
    }

    #[test]
    fn test_from_parts_skips_unknown_ids() {
        let catalog = Catalog::from_parts(mock_movies(), Vec::new(), &[1, 999], &[], &[]);
        assert_eq!(catalog.top_rated.len(), 1);
    }
}
