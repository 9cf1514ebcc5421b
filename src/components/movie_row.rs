use dioxus::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::components::MovieCard;
use crate::config::AppConfig;
use crate::constants::*;
use crate::core::bridge::{read_scroll_metrics, scroll_row_by};
use crate::core::row_scroll::{
    LayoutMode, RowViewState, ScrollDirection, SettleGate, ViewportClass,
};
use crate::state::CatalogItem;

static NEXT_ROW_ID: AtomicU64 = AtomicU64::new(1);

/// Re-measure the row and update which scroll buttons show.
async fn refresh_visibility(row_id: &str, mode: LayoutMode, mut view: Signal<RowViewState>) {
    match read_scroll_metrics(row_id).await {
        Ok(Some(metrics)) => {
            let next = metrics.visibility().for_mode(mode);
            if *view.peek() != next {
                view.set(next);
            }
        }
        Ok(None) => {}
        Err(err) => tracing::debug!(row = row_id, error = %err, "scroll metrics unavailable"),
    }
}

/// Titled horizontal strip of cards with paged scrolling.
#[component]
pub fn MovieRow(
    #[props(default)] title: Option<String>,
    items: Vec<CatalogItem>,
    #[props(default)] layout: LayoutMode,
    on_open: EventHandler<CatalogItem>,
    on_play: EventHandler<CatalogItem>,
) -> Element {
    let config = use_context::<AppConfig>();
    let viewport_width = use_context::<Signal<f64>>();
    let row_id = use_hook(|| format!("row-{}", NEXT_ROW_ID.fetch_add(1, Ordering::Relaxed)));
    let view = use_signal(|| RowViewState::default().for_mode(layout));
    let mut gate = use_signal(SettleGate::default);

    // Re-measure on mount and whenever the window resizes.
    let effect_row_id = row_id.clone();
    use_effect(move || {
        let _ = viewport_width();
        let row_id = effect_row_id.clone();
        spawn(async move {
            refresh_visibility(&row_id, layout, view).await;
        });
    });

    let settle = Duration::from_millis(config.scroll_settle_ms);
    let page = move |direction: ScrollDirection, row_id: String| {
        spawn(async move {
            let metrics = match read_scroll_metrics(&row_id).await {
                Ok(Some(metrics)) => metrics,
                Ok(None) => return,
                Err(err) => {
                    tracing::warn!(row = %row_id, error = %err, "failed to read row metrics");
                    return;
                }
            };
            // Already at the edge: nothing to scroll, just re-measure below.
            let delta = metrics.paged_offset(direction) - metrics.scroll_left;
            if delta != 0.0 {
                if let Err(err) = scroll_row_by(&row_id, delta).await {
                    tracing::warn!(row = %row_id, error = %err, "row scroll failed");
                    return;
                }
            }
            // A newer click supersedes this one.
            let token = gate.write().schedule();
            tokio::time::sleep(settle).await;
            if gate.peek().is_current(token) {
                refresh_visibility(&row_id, layout, view).await;
            }
        });
    };

    let viewport = ViewportClass::from_width(
        viewport_width(),
        config.mobile_breakpoint_px,
        config.wide_breakpoint_px,
    );
    let card_width = layout.card_width_css(viewport);
    let gap = layout.gap_px(viewport);
    let (overflow, wrap) = if layout.scrolls() {
        ("overflow-x: auto; overflow-y: visible; scroll-behavior: smooth;", "nowrap")
    } else {
        ("overflow: visible;", "wrap")
    };
    let buttons = view();
    let landscape = layout == LayoutMode::Landscape;

    let scroll_row_id = row_id.clone();
    let left_row_id = row_id.clone();
    let right_row_id = row_id.clone();

    rsx! {
        div {
            style: "position: relative; margin-bottom: 32px;",
            if let Some(title) = title {
                h2 {
                    style: "margin: 0 0 12px 0; padding: 0 32px; font-size: 20px; font-weight: 700; color: {TEXT_PRIMARY};",
                    "{title}"
                }
            }
            div {
                class: "row-group",
                style: "position: relative;",
                if buttons.can_scroll_left {
                    button {
                        class: "row-button",
                        title: "Scroll left",
                        style: "
                            position: absolute; left: 0; top: 0; bottom: 0; z-index: 20; width: 32px;
                            background: linear-gradient(to right, rgba(0,0,0,0.8), transparent);
                            border: none; color: {TEXT_PRIMARY}; font-size: 24px; cursor: pointer;
                            transition: opacity 0.2s ease;
                        ",
                        onclick: move |_| page(ScrollDirection::Left, left_row_id.clone()),
                        "‹"
                    }
                }
                div {
                    id: "{row_id}",
                    class: "row-scroller",
                    style: "
                        display: flex; flex-wrap: {wrap}; gap: {gap}px; {overflow}
                        padding: 24px 32px 96px 32px; margin-bottom: -72px; scrollbar-width: none;
                    ",
                    onscroll: move |_| {
                        let row_id = scroll_row_id.clone();
                        spawn(async move {
                            refresh_visibility(&row_id, layout, view).await;
                        });
                    },
                    for item in items {
                        div {
                            key: "{item.id}",
                            style: "flex: 0 0 auto; width: {card_width};",
                            MovieCard {
                                item: item.clone(),
                                on_open,
                                on_play,
                                landscape,
                            }
                        }
                    }
                }
                if buttons.can_scroll_right {
                    button {
                        class: "row-button",
                        title: "Scroll right",
                        style: "
                            position: absolute; right: 0; top: 0; bottom: 0; z-index: 20; width: 32px;
                            background: linear-gradient(to left, rgba(0,0,0,0.8), transparent);
                            border: none; color: {TEXT_PRIMARY}; font-size: 24px; cursor: pointer;
                            transition: opacity 0.2s ease;
                        ",
                        onclick: move |_| page(ScrollDirection::Right, right_row_id.clone()),
                        "›"
                    }
                }
            }
        }
    }
}
