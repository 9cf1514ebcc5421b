use dioxus::prelude::*;

use crate::components::{PlayerShell, PremiumOverlay};
use crate::constants::*;
use crate::state::{CatalogItem, Navigator, Plan, Route};

/// Playback route. A missing payload renders a fallback with a way back.
#[component]
pub fn WatchPage(item: Option<CatalogItem>, is_premium: bool) -> Element {
    let mut navigator = use_context::<Signal<Navigator>>();
    let mut go_back = move |_: ()| {
        if !navigator.write().back() {
            navigator.write().navigate(Route::Films);
        }
    };

    let Some(item) = item else {
        return rsx! {
            div {
                style: "min-height: 100vh; display: flex; align-items: center; justify-content: center; background-color: {BG_DEEPEST};",
                div {
                    style: "text-align: center;",
                    p { style: "margin: 0 0 16px 0; font-size: 20px; color: {TEXT_PRIMARY};", "No movie data available" }
                    button {
                        style: "
                            padding: 12px 24px; border: none; border-radius: 6px;
                            background-color: {ACCENT_PRIMARY}; color: {TEXT_PRIMARY};
                            font-size: 14px; cursor: pointer;
                        ",
                        onclick: move |_| go_back(()),
                        "Go Back"
                    }
                }
            }
        };
    };

    rsx! {
        div {
            style: "position: relative;",
            PlayerShell { item, on_back: go_back }
            if is_premium {
                PremiumOverlay {
                    on_subscribe: move |_| {
                        navigator.write().navigate(Route::Payment { plan: Plan::default() });
                    },
                    on_close: go_back,
                }
            }
        }
    }
}
