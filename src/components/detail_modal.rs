use dioxus::prelude::*;

use crate::components::{Modal, ModalSize, MovieRow};
use crate::config::AppConfig;
use crate::constants::*;
use crate::core::row_scroll::LayoutMode;
use crate::state::CatalogItem;
use crate::utils::asset_path;

/// Expanded view of one item: hero, metadata, synopsis and either the
/// episode list (series) or the recommendation strip (films).
///
/// Play closes the overlay before handing the item to `on_play`.
#[component]
pub fn DetailModal(
    item: Option<CatalogItem>,
    recommendations: Vec<CatalogItem>,
    on_close: EventHandler<()>,
    on_play: EventHandler<CatalogItem>,
) -> Element {
    let config = use_context::<AppConfig>();
    let Some(item) = item else {
        return rsx! {};
    };

    let base = config.asset_base_path.clone();
    let backdrop = asset_path(&base, item.backdrop());
    let duration_label = item.kind.duration_label();
    let item_for_play = item.clone();

    let dismiss_and_play = move |target: CatalogItem| {
        on_close.call(());
        on_play.call(target);
    };

    rsx! {
        Modal {
            is_open: true,
            on_close,
            size: ModalSize::Lg,

            div {
                style: "
                    position: relative; width: 100%; aspect-ratio: 16 / 9; max-height: 480px;
                    background-image: url('{backdrop}'); background-size: cover; background-position: center;
                ",
                div {
                    style: "position: absolute; inset: 0; background: linear-gradient(to top, {BG_SURFACE}, transparent 60%);",
                }
                div {
                    style: "position: absolute; left: 32px; bottom: 24px; right: 32px;",
                    if item.is_premium {
                        span {
                            style: "
                                display: inline-block; margin-bottom: 8px; padding: 2px 8px;
                                background-color: {ACCENT_PREMIUM}; color: #000;
                                font-size: 12px; font-weight: 700; border-radius: 4px;
                            ",
                            "★ Premium"
                        }
                    }
                    h2 { style: "margin: 0 0 16px 0; font-size: 32px; font-weight: 800; color: {TEXT_PRIMARY};", "{item.title}" }
                    div {
                        style: "display: flex; align-items: center; gap: 12px;",
                        button {
                            class: "hover-lift",
                            style: "
                                padding: 8px 28px; border: none; border-radius: 999px;
                                background-color: {ACCENT_PRIMARY}; color: {TEXT_PRIMARY};
                                font-size: 14px; font-weight: 700; cursor: pointer;
                            ",
                            onclick: move |_| dismiss_and_play(item_for_play.clone()),
                            "Start"
                        }
                        button {
                            title: "My List",
                            style: "
                                width: 36px; height: 36px; border-radius: 50%;
                                border: 2px solid rgba(255,255,255,0.5); background: transparent;
                                color: {TEXT_PRIMARY}; cursor: pointer;
                            ",
                            "✓"
                        }
                    }
                }
            }

            div {
                style: "padding: 24px 32px 32px 32px;",
                div {
                    style: "display: grid; grid-template-columns: repeat(2, 1fr); gap: 8px 32px; margin-bottom: 20px; font-size: 13px;",
                    MetaCell { label: "Release", value: item.release_date.clone() }
                    MetaCell { label: duration_label, value: item.duration.clone() }
                    MetaCell { label: "Genre", value: item.genre.clone() }
                    MetaCell { label: "Rating", value: item.rating.clone() }
                }
                p {
                    style: "margin: 0 0 28px 0; font-size: 14px; line-height: 1.6; color: {TEXT_SECONDARY};",
                    "{item.synopsis()}"
                }

                if item.is_series() {
                    h3 { style: "margin: 0 0 12px 0; font-size: 18px; color: {TEXT_PRIMARY};", "Episodes" }
                    for number in 1..=DETAIL_EPISODE_COUNT {
                        EpisodeRow {
                            key: "{number}",
                            number,
                            image: backdrop.clone(),
                            synopsis: item.synopsis().to_string(),
                            is_premium: item.is_premium,
                        }
                    }
                } else if !recommendations.is_empty() {
                    h3 { style: "margin: 0 0 12px 0; font-size: 18px; color: {TEXT_PRIMARY};", "Recommendations" }
                    div {
                        style: "margin: 0 -32px;",
                        MovieRow {
                            items: recommendations,
                            layout: LayoutMode::CompactGrid,
                            on_open: move |_| on_close.call(()),
                            on_play: move |target: CatalogItem| dismiss_and_play(target),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MetaCell(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            span { style: "color: {TEXT_MUTED};", "{label}: " }
            span { style: "color: {TEXT_PRIMARY};", "{value}" }
        }
    }
}

/// Placeholder episode entry; series carry no per-episode data.
#[component]
fn EpisodeRow(number: u32, image: String, synopsis: String, is_premium: bool) -> Element {
    rsx! {
        div {
            style: "
                display: flex; gap: 16px; align-items: center; padding: 12px;
                border-bottom: 1px solid {BORDER_SUBTLE}; border-radius: 6px;
            ",
            span { style: "width: 24px; font-size: 20px; color: {TEXT_MUTED}; text-align: center;", "{number}" }
            div {
                style: "position: relative; flex: 0 0 160px;",
                img {
                    src: "{image}",
                    draggable: "false",
                    style: "width: 160px; aspect-ratio: 16 / 9; object-fit: cover; border-radius: 4px; display: block;",
                }
                if is_premium {
                    span {
                        style: "
                            position: absolute; top: 4px; left: 4px; padding: 1px 6px;
                            background-color: {ACCENT_PREMIUM}; color: #000;
                            font-size: 10px; font-weight: 700; border-radius: 4px;
                        ",
                        "★ Premium"
                    }
                }
            }
            div {
                style: "flex: 1; min-width: 0;",
                p { style: "margin: 0 0 4px 0; font-size: 14px; font-weight: 600; color: {TEXT_PRIMARY};", "Episode {number}" }
                p {
                    class: "line-clamp-2",
                    style: "margin: 0; font-size: 12px; color: {TEXT_MUTED};",
                    "{synopsis}"
                }
            }
        }
    }
}
