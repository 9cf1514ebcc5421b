use dioxus::prelude::*;

use crate::components::{DetailModal, Hero, MovieRow};
use crate::config::AppConfig;
use crate::core::row_scroll::LayoutMode;
use crate::state::{Catalog, CatalogItem, ItemKind, Navigator, Route, SelectionState};

/// Series featured in the series page hero when it's in the catalog.
const SERIES_HERO_TITLE: &str = "All of Us Are Dead";

/// One titled row on a catalog page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRow {
    pub title: &'static str,
    pub items: Vec<CatalogItem>,
    pub layout: LayoutMode,
}

/// Heading shown above the hero.
pub fn page_heading(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Film => "Films",
        ItemKind::Series => "Series",
    }
}

/// Featured item for the page's hero banner.
pub fn hero_item(kind: ItemKind, catalog: &Catalog) -> Option<&CatalogItem> {
    match kind {
        ItemKind::Film => catalog.movies.first(),
        ItemKind::Series => catalog
            .series
            .iter()
            .find(|item| item.title == SERIES_HERO_TITLE)
            .or_else(|| catalog.series.first()),
    }
}

/// Rows for a catalog page, in display order.
pub fn page_rows(kind: ItemKind, catalog: &Catalog) -> Vec<PageRow> {
    let collection = catalog.collection(kind).to_vec();
    let mut trending = collection.clone();
    trending.reverse();
    let top_rated: Vec<CatalogItem> = catalog
        .top_rated
        .iter()
        .filter(|item| item.kind == kind)
        .cloned()
        .collect();

    let (popular, top, trend) = match kind {
        ItemKind::Film => ("Chill Picks", "Top Rated Films Today", "Trending Films"),
        ItemKind::Series => ("Popular Series Right Now", "Top Rated Series", "Trending Series"),
    };

    vec![
        PageRow {
            title: "Continue Watching",
            items: catalog.continue_watching.clone(),
            layout: LayoutMode::Landscape,
        },
        PageRow { title: popular, items: collection, layout: LayoutMode::Portrait },
        PageRow { title: top, items: top_rated, layout: LayoutMode::Portrait },
        PageRow { title: trend, items: trending, layout: LayoutMode::Portrait },
        PageRow {
            title: "New Releases",
            items: catalog.new_release.clone(),
            layout: LayoutMode::Portrait,
        },
    ]
}

/// Films or Series landing page: hero, rows and the detail overlay.
#[component]
pub fn CatalogPage(kind: ItemKind) -> Element {
    let catalog = use_context::<Catalog>();
    let config = use_context::<AppConfig>();
    let mut navigator = use_context::<Signal<Navigator>>();
    let mut selection = use_signal(SelectionState::default);

    let rows = page_rows(kind, &catalog);
    let hero = hero_item(kind, &catalog).cloned();

    let recommendation_count = config.recommendation_count;
    let open_catalog = catalog.clone();
    let open_detail = move |item: CatalogItem| {
        selection.write().open(item, &open_catalog, recommendation_count);
    };
    let play = move |item: CatalogItem| {
        navigator.write().navigate(Route::watch(&item));
    };

    let detail = selection.read().visible_item().cloned();
    let recommendations = selection.read().recommendations.clone();

    rsx! {
        div {
            style: "padding-bottom: 48px;",
            if let Some(hero) = hero {
                Hero {
                    item: hero,
                    heading: page_heading(kind).to_string(),
                    on_play: play,
                    on_more_info: open_detail.clone(),
                }
            }
            for row in rows {
                MovieRow {
                    key: "{row.title}",
                    title: row.title.to_string(),
                    items: row.items,
                    layout: row.layout,
                    on_open: open_detail.clone(),
                    on_play: play,
                }
            }
            DetailModal {
                item: detail,
                recommendations,
                on_close: move |_| {
                    selection.write().close();
                    tracing::debug!("detail closed");
                },
                on_play: play,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_film_rows_filter_top_rated_by_kind() {
        let catalog = Catalog::mock();
        let rows = page_rows(ItemKind::Film, &catalog);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].layout, LayoutMode::Landscape);
        assert!(rows[2].items.iter().all(CatalogItem::is_film));
        assert!(!rows[2].items.is_empty());
    }

    #[test]
    fn test_trending_is_reversed_collection() {
        let catalog = Catalog::mock();
        let rows = page_rows(ItemKind::Series, &catalog);
        let mut expected = catalog.series.clone();
        expected.reverse();
        assert_eq!(rows[3].items, expected);
        assert!(rows[2].items.iter().all(CatalogItem::is_series));
    }

    #[test]
    fn test_hero_selection() {
        let catalog = Catalog::mock();
        assert_eq!(hero_item(ItemKind::Film, &catalog), catalog.movies.first());
        let series_hero = hero_item(ItemKind::Series, &catalog).map(|item| item.title.as_str());
        assert_eq!(series_hero, Some(SERIES_HERO_TITLE));
    }

    #[test]
    fn test_series_hero_falls_back_to_first() {
        let mut catalog = Catalog::mock();
        catalog.series.retain(|item| item.title != SERIES_HERO_TITLE);
        assert_eq!(hero_item(ItemKind::Series, &catalog), catalog.series.first());
    }

    #[test]
    fn test_empty_catalog_has_no_hero() {
        let catalog = Catalog::from_parts(Vec::new(), Vec::new(), &[], &[], &[]);
        assert!(hero_item(ItemKind::Film, &catalog).is_none());
        assert!(page_rows(ItemKind::Film, &catalog).iter().all(|row| row.items.is_empty()));
    }
}
