use dioxus::prelude::*;
use crate::constants::*;

/// Genre picker shown beside the page title. The catalog isn't filtered;
/// `on_select` only hears about the choice.
#[component]
pub fn GenreDropdown(on_select: EventHandler<&'static str>) -> Element {
    let mut open = use_signal(|| false);
    let mut selected = use_signal(|| None::<&'static str>);
    let label = selected().unwrap_or("Genre");

    rsx! {
        div {
            style: "position: relative; display: inline-block;",
            button {
                style: "
                    background: transparent; color: {TEXT_PRIMARY};
                    border: 1px solid {BORDER_STRONG}; border-radius: 4px;
                    padding: 6px 14px; font-size: 13px; cursor: pointer;
                ",
                onclick: move |_| open.toggle(),
                "{label} ▾"
            }
            if open() {
                div {
                    style: "
                        position: absolute; top: 110%; left: 0; z-index: 40;
                        display: grid; grid-template-columns: repeat(2, minmax(140px, 1fr));
                        background-color: {BG_ELEVATED}; border: 1px solid {BORDER_DEFAULT};
                        border-radius: 6px; padding: 6px; box-shadow: 0 10px 20px rgba(0,0,0,0.5);
                    ",
                    for genre in GENRES {
                        button {
                            key: "{genre}",
                            class: "menu-option",
                            style: "
                                background: transparent; border: none; text-align: left;
                                color: {TEXT_SECONDARY}; font-size: 13px; padding: 6px 10px;
                                cursor: pointer; border-radius: 4px;
                            ",
                            onclick: move |_| {
                                selected.set(Some(genre));
                                open.set(false);
                                on_select.call(genre);
                            },
                            "{genre}"
                        }
                    }
                }
            }
        }
    }
}
