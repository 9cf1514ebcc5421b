use dioxus::prelude::*;
use crate::constants::*;
use crate::state::{Navigator, Route};

/// Fixed top bar with the catalog tabs.
#[component]
pub fn NavBar() -> Element {
    let mut navigator = use_context::<Signal<Navigator>>();
    let current = navigator.read().current().clone();

    let tabs = [
        ("Series", Route::Series),
        ("Films", Route::Films),
        ("My List", Route::MyList),
    ];

    rsx! {
        div {
            style: "
                position: fixed; top: 0; left: 0; right: 0; z-index: 50;
                display: flex; align-items: center; justify-content: space-between;
                height: {NAV_HEIGHT}px; padding: 0 32px; box-sizing: border-box;
                background-color: {BG_BASE}; border-bottom: 1px solid {BORDER_SUBTLE};
                user-select: none;
            ",
            div {
                style: "display: flex; align-items: center; gap: 28px;",
                span {
                    style: "font-size: 20px; font-weight: 800; letter-spacing: 1px; color: {TEXT_PRIMARY}; cursor: pointer;",
                    onclick: move |_| navigator.write().navigate(Route::Films),
                    "CINEROW"
                }
                for (label, route) in tabs {
                    {
                        let active = current.name() == route.name();
                        let color = if active { TEXT_PRIMARY } else { TEXT_MUTED };
                        let weight = if active { 700 } else { 400 };
                        rsx! {
                            button {
                                key: "{label}",
                                style: "
                                    background: transparent; border: none; color: {color};
                                    font-size: 14px; font-weight: {weight}; cursor: pointer; padding: 4px 0;
                                ",
                                onclick: move |_| {
                                    if !active {
                                        navigator.write().navigate(route.clone());
                                    }
                                },
                                "{label}"
                            }
                        }
                    }
                }
            }
            div {
                style: "
                    width: 32px; height: 32px; border-radius: 50%;
                    background-color: {BG_HOVER}; border: 1px solid {BORDER_DEFAULT};
                ",
            }
        }
    }
}
