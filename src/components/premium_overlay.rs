use dioxus::prelude::*;

use crate::components::{Modal, ModalSize};
use crate::constants::*;

/// Paywall shown over the player for premium titles. Dismissing it leaves the
/// watch route.
#[component]
pub fn PremiumOverlay(on_subscribe: EventHandler<()>, on_close: EventHandler<()>) -> Element {
    rsx! {
        Modal {
            is_open: true,
            on_close,
            size: ModalSize::Sm,
            div {
                style: "padding: 40px 32px 32px 32px; text-align: center;",
                span {
                    style: "
                        display: inline-block; margin-bottom: 16px; padding: 4px 12px;
                        background-color: {ACCENT_PREMIUM}; color: #000;
                        font-size: 12px; font-weight: 700; border-radius: 999px;
                    ",
                    "★ Premium"
                }
                h3 { style: "margin: 0 0 8px 0; font-size: 20px; color: {TEXT_PRIMARY};", "Premium content" }
                p {
                    style: "margin: 0 0 24px 0; font-size: 14px; line-height: 1.5; color: {TEXT_SECONDARY};",
                    "Subscribe to keep watching this title and the rest of the premium catalog."
                }
                div {
                    style: "display: flex; flex-direction: column; gap: 10px;",
                    button {
                        class: "hover-lift",
                        style: "
                            width: 100%; padding: 12px; border: none; border-radius: 999px;
                            background-color: {ACCENT_PRIMARY}; color: {TEXT_PRIMARY};
                            font-size: 14px; font-weight: 700; cursor: pointer;
                        ",
                        onclick: move |_| on_subscribe.call(()),
                        "Subscribe"
                    }
                    button {
                        style: "
                            width: 100%; padding: 12px; border: 1px solid {BORDER_STRONG}; border-radius: 999px;
                            background: transparent; color: {TEXT_PRIMARY}; font-size: 14px; cursor: pointer;
                        ",
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
            }
        }
    }
}
