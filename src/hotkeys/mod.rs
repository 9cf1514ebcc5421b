//! Hotkey system
//!
//! Keyboard shortcuts for the player shell.
//!
//! # Architecture
//!
//! - **HotkeyAction**: Enum of all possible actions that can be triggered by hotkeys
//! - **HotkeyContext**: Determines which hotkeys are active based on app state
//! - **handle_hotkey()**: Main dispatch function that maps key events to actions
//!
//! # Adding New Hotkeys
//!
//! 1. Add a variant to `HotkeyAction`
//! 2. Add the key binding in `handle_hotkey()`
//! 3. Handle the action in the player shell's key handler

use dioxus::prelude::Key;

/// All possible actions that can be triggered by hotkeys.
///
/// Each variant represents a semantic action, not a key binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    /// Toggle play/pause.
    PlayPause,
    /// Enter or leave fullscreen.
    ToggleFullscreen,
    /// Mute or unmute.
    ToggleMute,
    /// Close whichever settings menu is open.
    CloseMenus,
}

/// Context information that affects which hotkeys are active.
#[derive(Debug, Clone, Default)]
pub struct HotkeyContext {
    /// Whether a settings menu is open (Escape closes it)
    pub menu_open: bool,
}

/// Result of processing a key event.
#[derive(Debug, Clone)]
pub enum HotkeyResult {
    /// A hotkey action was matched and should be executed
    Action(HotkeyAction),
    /// No matching hotkey for this key/context combination
    NoMatch,
}

/// Maps a key event to an action, considering the current context.
pub fn handle_hotkey(key: &Key, ctrl: bool, meta: bool, context: &HotkeyContext) -> HotkeyResult {
    // Leave browser/system chords alone.
    if ctrl || meta {
        return HotkeyResult::NoMatch;
    }

    match key {
        Key::Character(c) if c == " " => HotkeyResult::Action(HotkeyAction::PlayPause),
        Key::Character(c) if c.eq_ignore_ascii_case("f") => {
            HotkeyResult::Action(HotkeyAction::ToggleFullscreen)
        }
        Key::Character(c) if c.eq_ignore_ascii_case("m") => {
            HotkeyResult::Action(HotkeyAction::ToggleMute)
        }
        Key::Escape if context.menu_open => HotkeyResult::Action(HotkeyAction::CloseMenus),
        _ => HotkeyResult::NoMatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_toggles_playback() {
        let ctx = HotkeyContext::default();
        let result = handle_hotkey(&Key::Character(" ".to_string()), false, false, &ctx);
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::PlayPause)));
    }

    #[test]
    fn test_f_toggles_fullscreen_either_case() {
        let ctx = HotkeyContext::default();
        for key in ["f", "F"] {
            let result = handle_hotkey(&Key::Character(key.to_string()), false, false, &ctx);
            assert!(matches!(result, HotkeyResult::Action(HotkeyAction::ToggleFullscreen)));
        }
    }

    #[test]
    fn test_escape_only_with_open_menu() {
        let closed = HotkeyContext::default();
        assert!(matches!(handle_hotkey(&Key::Escape, false, false, &closed), HotkeyResult::NoMatch));
        let open = HotkeyContext { menu_open: true };
        let result = handle_hotkey(&Key::Escape, false, false, &open);
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::CloseMenus)));
    }

    #[test]
    fn test_ctrl_chords_ignored() {
        let ctx = HotkeyContext::default();
        let result = handle_hotkey(&Key::Character("m".to_string()), true, false, &ctx);
        assert!(matches!(result, HotkeyResult::NoMatch));
    }
}
