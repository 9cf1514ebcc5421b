use dioxus::prelude::*;

use crate::components::{DetailModal, MovieCard};
use crate::config::AppConfig;
use crate::constants::*;
use crate::core::row_scroll::{LayoutMode, ViewportClass};
use crate::state::{Catalog, CatalogItem, Navigator, Route, SelectionState};

/// Saved titles: the head of each collection.
pub fn my_list_items(catalog: &Catalog) -> Vec<CatalogItem> {
    catalog
        .movies
        .iter()
        .take(MY_LIST_PER_COLLECTION)
        .chain(catalog.series.iter().take(MY_LIST_PER_COLLECTION))
        .cloned()
        .collect()
}

#[component]
pub fn MyListPage() -> Element {
    let catalog = use_context::<Catalog>();
    let config = use_context::<AppConfig>();
    let viewport_width = use_context::<Signal<f64>>();
    let mut navigator = use_context::<Signal<Navigator>>();
    let mut selection = use_signal(SelectionState::default);

    let items = my_list_items(&catalog);
    let viewport = ViewportClass::from_width(
        viewport_width(),
        config.mobile_breakpoint_px,
        config.wide_breakpoint_px,
    );
    let card_width = LayoutMode::Portrait.card_width_css(viewport);
    let gap = LayoutMode::Portrait.gap_px(viewport);

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
            style: "padding: 32px 32px 96px 32px;",
            h1 { style: "margin: 0 0 24px 0; font-size: 28px; font-weight: 800; color: {TEXT_PRIMARY};", "My List" }
            if items.is_empty() {
                p { style: "color: {TEXT_MUTED}; font-size: 14px;", "Your list is empty." }
            }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 32px {gap}px;",
                for item in items {
                    div {
                        key: "{item.id}",
                        style: "flex: 0 0 auto; width: {card_width};",
                        MovieCard {
                            item: item.clone(),
                            on_open: open_detail.clone(),
                            on_play: play,
                        }
                    }
                }
            }
            DetailModal {
                item: detail,
                recommendations,
                on_close: move |_| selection.write().close(),
                on_play: play,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_six_of_each_collection() {
        let catalog = Catalog::mock();
        let items = my_list_items(&catalog);
        assert_eq!(items.len(), 2 * MY_LIST_PER_COLLECTION);
        assert!(items[..MY_LIST_PER_COLLECTION].iter().all(CatalogItem::is_film));
        assert!(items[MY_LIST_PER_COLLECTION..].iter().all(CatalogItem::is_series));
    }

    #[test]
    fn test_short_collections_are_taken_whole() {
        let catalog = Catalog::from_parts(
            vec![crate::state::test_item(1, crate::state::ItemKind::Film, "Drama")],
            Vec::new(),
            &[],
            &[],
            &[],
        );
        assert_eq!(my_list_items(&catalog).len(), 1);
    }
}
