use dioxus::prelude::*;

use crate::components::GenreDropdown;
use crate::config::AppConfig;
use crate::constants::*;
use crate::state::CatalogItem;
use crate::utils::asset_path;

/// Featured item banner at the top of a catalog page.
#[component]
pub fn Hero(
    item: CatalogItem,
    /// Page heading shown above the banner ("Films", "Series").
    heading: String,
    on_play: EventHandler<CatalogItem>,
    on_more_info: EventHandler<CatalogItem>,
) -> Element {
    let config = use_context::<AppConfig>();
    let viewport_width = use_context::<Signal<f64>>();
    let mut muted = use_signal(|| true);

    let is_desktop = viewport_width() >= config.mobile_breakpoint_px;
    let backdrop = asset_path(&config.asset_base_path, item.backdrop());
    let mute_icon = if muted() { "🔇" } else { "🔊" };
    let item_for_play = item.clone();
    let item_for_info = item.clone();

    rsx! {
        div {
            style: "
                position: relative; width: 100%; height: 70vh; min-height: 360px;
                background-image: url('{backdrop}'); background-size: cover; background-position: center;
                margin-bottom: 24px;
            ",
            div {
                style: "
                    position: absolute; inset: 0;
                    background: linear-gradient(to top, {BG_DEEPEST} 0%, rgba(0,0,0,0.4) 50%, rgba(0,0,0,0.2) 100%);
                ",
            }
            if is_desktop {
                div {
                    style: "position: absolute; top: 24px; left: 32px; display: flex; align-items: center; gap: 16px; z-index: 5;",
                    span { style: "font-size: 22px; font-weight: 700; color: {TEXT_PRIMARY};", "{heading}" }
                    GenreDropdown {
                        on_select: move |genre: &'static str| {
                            tracing::info!(genre, "genre selected");
                        },
                    }
                }
            }
            div {
                style: "position: absolute; left: 32px; right: 32px; bottom: 48px; max-width: 640px; z-index: 5;",
                h1 { style: "margin: 0 0 12px 0; font-size: 40px; font-weight: 800; color: {TEXT_PRIMARY};", "{item.title}" }
                div {
                    style: "display: flex; gap: 12px; align-items: center; font-size: 13px; color: {TEXT_SECONDARY}; margin-bottom: 12px;",
                    span { style: "color: {ACCENT_STAR};", "★ {item.rating}" }
                    span { "{item.genre}" }
                    span { "{item.duration}" }
                }
                if let Some(synopsis) = item.sinopsis.as_ref() {
                    p {
                        class: "line-clamp-3",
                        style: "margin: 0 0 20px 0; font-size: 14px; line-height: 1.5; color: {TEXT_SECONDARY};",
                        "{synopsis}"
                    }
                }
                div {
                    style: "display: flex; align-items: center; gap: 12px;",
                    button {
                        class: "hover-lift",
                        style: "
                            padding: 10px 28px; border: none; border-radius: 999px;
                            background-color: {ACCENT_PRIMARY}; color: {TEXT_PRIMARY};
                            font-size: 14px; font-weight: 700; cursor: pointer;
                        ",
                        onclick: move |_| on_play.call(item_for_play.clone()),
                        "Start"
                    }
                    button {
                        style: "
                            padding: 10px 24px; border: none; border-radius: 999px;
                            background-color: {BG_HOVER}; color: {TEXT_PRIMARY};
                            font-size: 14px; font-weight: 600; cursor: pointer;
                        ",
                        onclick: move |_| on_more_info.call(item_for_info.clone()),
                        "ⓘ More Info"
                    }
                    span {
                        style: "
                            padding: 4px 10px; border: 1px solid {BORDER_STRONG}; border-radius: 999px;
                            color: {TEXT_SECONDARY}; font-size: 12px;
                        ",
                        "18+"
                    }
                }
            }
            button {
                title: "Mute",
                style: "
                    position: absolute; right: 32px; bottom: 48px; z-index: 5;
                    width: 40px; height: 40px; border-radius: 50%;
                    border: 1px solid {BORDER_STRONG}; background: transparent;
                    color: {TEXT_PRIMARY}; cursor: pointer;
                ",
                onclick: move |_| muted.toggle(),
                "{mute_icon}"
            }
        }
    }
}
