use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::constants::*;
use crate::core::card_view::{genre_labels, CardViewState, CornerBadge, GENRE_SEPARATOR, HOVER_SCALE};
use crate::state::CatalogItem;
use crate::utils::asset_path;

/// One catalog item: click opens detail, the play control starts playback.
#[component]
pub fn MovieCard(
    item: CatalogItem,
    on_open: EventHandler<CatalogItem>,
    on_play: EventHandler<CatalogItem>,
    /// Show the landscape image at rest (landscape rows).
    #[props(default = false)]
    landscape: bool,
) -> Element {
    let config = use_context::<AppConfig>();
    let viewport_width = use_context::<Signal<f64>>();
    let breakpoint = config.mobile_breakpoint_px;
    let mut card = use_signal(|| CardViewState::new(viewport_width(), breakpoint));

    // Resize listener feeds this; crossing into mobile drops the hover.
    use_effect(move || {
        let width = viewport_width();
        card.write().set_viewport_width(width, breakpoint);
    });

    let state = card();
    let expanded = state.is_expanded(&item);
    let hovered = state.is_hovered();
    let badges = state.badges(&item);
    let compact_badge = state.is_mobile_viewport();

    let base = config.asset_base_path.clone();
    let image = if landscape && !hovered {
        asset_path(&base, item.backdrop())
    } else {
        asset_path(&base, state.image(&item))
    };
    let aspect = if expanded || landscape { "16 / 9" } else { "2 / 3" };
    let (scale, z_index) = if expanded { (HOVER_SCALE, 9999) } else { (1.0, 10) };
    let badge_opacity = if badges.visible { 1 } else { 0 };
    let overlay_opacity = if hovered { 1 } else { 0 };
    let (panel_opacity, panel_shift, panel_events) = if hovered {
        (1, 0, "auto")
    } else {
        (0, -8, "none")
    };
    let genres: Vec<(String, bool)> = genre_labels(&item.genre)
        .into_iter()
        .map(|label| (label.text.to_string(), label.separator))
        .collect();

    let item_for_open = item.clone();
    let item_for_play = item.clone();
    let item_for_info = item.clone();

    rsx! {
        div {
            style: "flex-shrink: 0; cursor: pointer; transition: all 0.3s ease;",
            onmouseenter: move |_| card.write().pointer_enter(),
            onmouseleave: move |_| card.write().pointer_leave(),
            onclick: move |_| on_open.call(item_for_open.clone()),

            div {
                style: "
                    position: relative; transition: all 0.3s ease;
                    transform: scale({scale}); transform-origin: center center;
                    z-index: {z_index}; will-change: transform;
                    box-shadow: 0 10px 25px rgba(0,0,0,0.5);
                ",
                div {
                    style: "position: relative; overflow: visible; border-radius: 8px 8px 0 0;",
                    img {
                        src: "{image}",
                        alt: "{item.title}",
                        draggable: "false",
                        style: "width: 100%; aspect-ratio: {aspect}; object-fit: cover; display: block; border-radius: 8px; transition: all 0.3s ease;",
                    }

                    if let Some(rank) = badges.top_ten {
                        div {
                            title: "Top 10 #{rank}",
                            style: "
                                position: absolute; top: 0; right: 8px;
                                background-color: {ACCENT_TOP_TEN}; color: {TEXT_PRIMARY};
                                font-size: 10px; font-weight: 700; padding: 2px 4px;
                                border-radius: 4px; text-align: center; line-height: 1.1;
                                opacity: {badge_opacity}; transition: opacity 0.3s ease;
                            ",
                            p { style: "margin: 0;", "Top" }
                            p { style: "margin: 0;", "10" }
                        }
                    }

                    match badges.corner {
                        Some(CornerBadge::Premium) => rsx! {
                            div {
                                style: "
                                    position: absolute; top: 6px; left: 6px;
                                    background-color: {ACCENT_PREMIUM}; color: #000;
                                    font-size: 11px; font-weight: 700; padding: 2px 6px;
                                    border-radius: 4px; opacity: {badge_opacity}; transition: opacity 0.3s ease;
                                ",
                                "★ {CornerBadge::Premium.label(compact_badge)}"
                            }
                        },
                        Some(CornerBadge::NewEpisode) => rsx! {
                            div {
                                style: "
                                    position: absolute; top: 6px; left: 6px;
                                    background-color: {ACCENT_NEW_EPISODE}; color: {TEXT_PRIMARY};
                                    font-size: 11px; font-weight: 700; padding: 2px 6px;
                                    border-radius: 4px; opacity: {badge_opacity}; transition: opacity 0.3s ease;
                                ",
                                "{CornerBadge::NewEpisode.label(compact_badge)}"
                            }
                        },
                        None => rsx! {},
                    }

                    div {
                        style: "
                            position: absolute; inset: 0; border-radius: 8px;
                            background: linear-gradient(to top, rgba(0,0,0,0.8), transparent);
                            opacity: {overlay_opacity}; transition: opacity 0.3s ease; pointer-events: none;
                        ",
                    }
                }

                // Action panel
                div {
                    style: "
                        position: absolute; top: 100%; left: 0; right: 0;
                        background-color: {BG_SURFACE}; border-radius: 0 0 8px 8px;
                        overflow: hidden; box-shadow: 0 20px 40px rgba(0,0,0,0.6);
                        opacity: {panel_opacity}; transform: translateY({panel_shift}px);
                        pointer-events: {panel_events}; transition: all 0.3s ease;
                    ",
                    div {
                        style: "padding: 12px; display: flex; flex-direction: column; gap: 8px;",
                        div {
                            style: "display: flex; align-items: center; justify-content: space-between;",
                            button {
                                class: "hover-lift",
                                title: "Play",
                                style: "width: 36px; height: 36px; border: none; border-radius: 50%; background: {TEXT_PRIMARY}; color: #000; cursor: pointer; font-size: 14px;",
                                onclick: move |e| {
                                    e.stop_propagation();
                                    on_play.call(item_for_play.clone());
                                },
                                "▶"
                            }
                            div {
                                style: "display: flex; gap: 8px;",
                                button {
                                    title: "My List",
                                    style: "width: 36px; height: 36px; border: 2px solid rgba(255,255,255,0.5); border-radius: 50%; background: transparent; color: {TEXT_PRIMARY}; cursor: pointer;",
                                    onclick: move |e| e.stop_propagation(),
                                    "✓"
                                }
                                button {
                                    title: "More info",
                                    style: "width: 36px; height: 36px; border: 2px solid rgba(255,255,255,0.5); border-radius: 50%; background: transparent; color: {TEXT_PRIMARY}; cursor: pointer;",
                                    onclick: move |e| {
                                        e.stop_propagation();
                                        on_open.call(item_for_info.clone());
                                    },
                                    "⌄"
                                }
                            }
                        }
                        if !item.duration.is_empty() {
                            p { style: "margin: 0; color: {TEXT_PRIMARY}; font-size: 12px; font-weight: 600;", "{item.duration}" }
                        }
                        div {
                            style: "display: flex; flex-wrap: wrap; gap: 4px;",
                            for (index, (genre, separator)) in genres.into_iter().enumerate() {
                                span {
                                    key: "{index}",
                                    style: "color: {TEXT_PRIMARY}; font-size: 12px;",
                                    "{genre}"
                                    if separator { "{GENRE_SEPARATOR}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
