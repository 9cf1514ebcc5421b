use dioxus::prelude::*;

use crate::constants::*;

/// Width preset for [`Modal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl ModalSize {
    pub fn max_width_px(self) -> u32 {
        match self {
            ModalSize::Sm => 448,
            ModalSize::Md => 672,
            ModalSize::Lg => 896,
            ModalSize::Xl => 1152,
        }
    }
}

/// Dimmed overlay with a centered panel. Clicking the backdrop or the close
/// button calls `on_close`; clicks inside the panel don't.
#[component]
pub fn Modal(
    is_open: bool,
    on_close: EventHandler<()>,
    #[props(default)] size: ModalSize,
    children: Element,
) -> Element {
    if !is_open {
        return rsx! {};
    }
    let max_width = size.max_width_px();

    rsx! {
        div {
            style: "
                position: fixed; top: 0; left: 0; right: 0; bottom: 0;
                background-color: rgba(0, 0, 0, 0.7);
                display: flex; align-items: flex-start; justify-content: center;
                overflow-y: auto; padding: 32px 16px; box-sizing: border-box;
                z-index: 2000;
            ",
            onclick: move |_| on_close.call(()),
            div {
                style: "
                    position: relative; width: 100%; max-width: {max_width}px;
                    background-color: {BG_SURFACE}; border-radius: 8px; overflow: hidden;
                    box-shadow: 0 10px 25px rgba(0,0,0,0.5);
                ",
                onclick: move |e| e.stop_propagation(),
                button {
                    title: "Close",
                    style: "
                        position: absolute; top: 12px; right: 12px; z-index: 10;
                        width: 32px; height: 32px; border-radius: 50%; border: none;
                        background-color: rgba(0,0,0,0.6); color: {TEXT_PRIMARY};
                        font-size: 16px; cursor: pointer;
                    ",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
                {children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes_grow() {
        let widths: Vec<u32> = [ModalSize::Sm, ModalSize::Md, ModalSize::Lg, ModalSize::Xl]
            .into_iter()
            .map(ModalSize::max_width_px)
            .collect();
        assert!(widths.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(ModalSize::default(), ModalSize::Md);
    }
}
