//! Player shell state.
//!
//! There is no media pipeline behind the player: every field here is a UI
//! toggle over a static poster.

use crate::error::ShellError;

pub const AUDIO_OPTIONS: [&str; 2] = ["English", "English - Audio Description"];
pub const SUBTITLE_OPTIONS: [&str; 2] = ["Indonesian", "English"];
pub const SPEED_OPTIONS: [&str; 5] = ["0.5x", "0.75x", "1x (Normal)", "1.25x", "1.5x"];

/// Synthetic episode shown by the player's episode menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Episode {
    pub number: u32,
    pub title: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
}

const DEFAULT_EPISODE_DESCRIPTION: &str =
    "A new season begins, and old rivalries resurface before anyone is ready for them.";

pub const PLAYER_EPISODES: [Episode; 4] = [
    Episode { number: 1, title: "Pilot", duration: "45m", description: DEFAULT_EPISODE_DESCRIPTION },
    Episode {
        number: 2,
        title: "First Day",
        duration: "42m",
        description: "The new coach's first day goes badly, but nothing seems to shake his optimism.",
    },
    Episode { number: 3, title: "The Interview", duration: "45m", description: DEFAULT_EPISODE_DESCRIPTION },
    Episode { number: 4, title: "For the Children", duration: "43m", description: DEFAULT_EPISODE_DESCRIPTION },
];

/// Menus in the settings group. At most one is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsMenu {
    Audio,
    Subtitle,
    Speed,
    Episode,
}

/// Full player UI state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    pub is_playing: bool,
    pub is_muted: bool,
    pub show_controls: bool,
    pub is_fullscreen: bool,
    pub open_menu: Option<SettingsMenu>,
    pub selected_audio: &'static str,
    pub selected_subtitle: &'static str,
    pub playback_speed: &'static str,
    pub current_episode: u32,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            is_playing: false,
            is_muted: false,
            show_controls: true,
            is_fullscreen: false,
            open_menu: None,
            selected_audio: AUDIO_OPTIONS[0],
            selected_subtitle: SUBTITLE_OPTIONS[0],
            playback_speed: SPEED_OPTIONS[2],
            current_episode: 1,
        }
    }
}

impl PlayerState {
    pub fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
    }

    pub fn toggle_mute(&mut self) {
        self.is_muted = !self.is_muted;
    }

    /// Toggle `menu`; opening it closes every sibling.
    pub fn toggle_menu(&mut self, menu: SettingsMenu) {
        self.open_menu = if self.open_menu == Some(menu) {
            None
        } else {
            Some(menu)
        };
    }

    pub fn close_menus(&mut self) {
        self.open_menu = None;
    }

    pub fn is_menu_open(&self, menu: SettingsMenu) -> bool {
        self.open_menu == Some(menu)
    }

    pub fn select_audio(&mut self, option: &'static str) {
        self.selected_audio = option;
    }

    pub fn select_subtitle(&mut self, option: &'static str) {
        self.selected_subtitle = option;
    }

    pub fn select_speed(&mut self, option: &'static str) {
        self.playback_speed = option;
    }

    /// Switch episode and close the episode menu. Unknown numbers are ignored.
    pub fn select_episode(&mut self, number: u32) {
        if episode(number).is_none() {
            return;
        }
        self.current_episode = number;
        if self.open_menu == Some(SettingsMenu::Episode) {
            self.open_menu = None;
        }
    }

    /// The episode after the current one, if any.
    pub fn next_episode(&self) -> Option<&'static Episode> {
        episode(self.current_episode + 1)
    }

    pub fn pointer_enter(&mut self) {
        self.show_controls = true;
    }

    /// Controls hide on pointer-leave only while playing.
    pub fn pointer_leave(&mut self) {
        self.show_controls = !self.is_playing;
    }

    /// Mirror the outcome of a fullscreen request. On failure the flag is left
    /// untouched; on success it follows the state the viewport reports.
    pub fn apply_fullscreen(&mut self, outcome: &Result<bool, ShellError>) {
        if let Ok(active) = outcome {
            self.is_fullscreen = *active;
        }
    }

    /// Title line, with the episode suffix for series.
    pub fn heading(&self, title: &str, is_series: bool) -> String {
        if !is_series {
            return title.to_string();
        }
        match episode(self.current_episode) {
            Some(ep) => format!("{title} Episode {}: {}", ep.number, ep.title),
            None => title.to_string(),
        }
    }
}

pub fn episode(number: u32) -> Option<&'static Episode> {
    PLAYER_EPISODES.iter().find(|ep| ep.number == number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_menu_closes_siblings() {
        let menus = [
            SettingsMenu::Audio,
            SettingsMenu::Subtitle,
            SettingsMenu::Speed,
            SettingsMenu::Episode,
        ];
        for first in menus {
            for second in menus {
                let mut player = PlayerState::default();
                player.toggle_menu(first);
                player.toggle_menu(second);
                if first == second {
                    assert_eq!(player.open_menu, None);
                } else {
                    assert!(player.is_menu_open(second));
                    assert!(!player.is_menu_open(first));
                }
            }
        }
    }

    #[test]
    fn test_play_pause_toggles() {
        let mut player = PlayerState::default();
        assert!(!player.is_playing);
        player.toggle_play();
        assert!(player.is_playing);
        player.toggle_play();
        assert!(!player.is_playing);
    }

    #[test]
    fn test_episode_selection_closes_menu() {
        let mut player = PlayerState::default();
        player.toggle_menu(SettingsMenu::Episode);
        player.select_episode(3);
        assert_eq!(player.current_episode, 3);
        assert_eq!(player.open_menu, None);
        assert_eq!(player.next_episode().map(|ep| ep.number), Some(4));
        player.select_episode(4);
        assert!(player.next_episode().is_none());
        player.select_episode(9);
        assert_eq!(player.current_episode, 4);
    }

    #[test]
    fn test_option_selection_keeps_menu_open() {
        let mut player = PlayerState::default();
        player.toggle_menu(SettingsMenu::Speed);
        player.select_speed(SPEED_OPTIONS[3]);
        assert_eq!(player.playback_speed, "1.25x");
        assert!(player.is_menu_open(SettingsMenu::Speed));
    }

    #[test]
    fn test_fullscreen_failure_leaves_state() {
        let mut player = PlayerState::default();
        player.apply_fullscreen(&Err(ShellError::Bridge("denied".to_string())));
        assert!(!player.is_fullscreen);
        player.apply_fullscreen(&Ok(true));
        assert!(player.is_fullscreen);
        player.apply_fullscreen(&Err(ShellError::Bridge("denied".to_string())));
        assert!(player.is_fullscreen);
        player.apply_fullscreen(&Ok(false));
        assert!(!player.is_fullscreen);
    }

    #[test]
    fn test_controls_hide_only_while_playing() {
        let mut player = PlayerState::default();
        player.pointer_leave();
        assert!(player.show_controls);
        player.toggle_play();
        player.pointer_leave();
        assert!(!player.show_controls);
        player.pointer_enter();
        assert!(player.show_controls);
    }

    #[test]
    fn test_heading_includes_episode_for_series() {
        let mut player = PlayerState::default();
        assert_eq!(player.heading("Show", false), "Show");
        player.select_episode(2);
        assert_eq!(player.heading("Show", true), "Show Episode 2: First Day");
    }
}
