use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::constants::*;
use crate::core::bridge::toggle_fullscreen;
use crate::hotkeys::{handle_hotkey, HotkeyAction, HotkeyContext, HotkeyResult};
use crate::state::{
    CatalogItem, PlayerState, SettingsMenu, AUDIO_OPTIONS, PLAYER_EPISODES, SPEED_OPTIONS,
    SUBTITLE_OPTIONS,
};
use crate::utils::asset_path;

/// Request a fullscreen toggle and mirror whatever state the webview reports.
fn request_fullscreen(mut player: Signal<PlayerState>) {
    spawn(async move {
        let outcome = toggle_fullscreen().await;
        if let Err(err) = &outcome {
            tracing::warn!(error = %err, "fullscreen toggle failed");
        }
        player.write().apply_fullscreen(&outcome);
    });
}

/// Mocked playback surface over a static poster.
#[component]
pub fn PlayerShell(item: CatalogItem, on_back: EventHandler<()>) -> Element {
    let config = use_context::<AppConfig>();
    let mut player = use_signal(PlayerState::default);

    let state = player();
    let is_series = item.is_series();
    let poster = asset_path(&config.asset_base_path, item.backdrop());
    let heading = state.heading(&item.title, is_series);
    let controls_opacity = if state.show_controls { 1 } else { 0 };
    let play_icon = if state.is_playing { "❚❚" } else { "▶" };
    let mute_icon = if state.is_muted { "🔇" } else { "🔊" };
    let fullscreen_icon = if state.is_fullscreen { "⤡" } else { "⤢" };
    let next_episode = if is_series { state.next_episode() } else { None };

    rsx! {
        div {
            id: "player-shell",
            tabindex: "0",
            style: "
                position: relative; width: 100vw; height: 100vh; overflow: hidden;
                background-color: {BG_DEEPEST}; outline: none;
            ",
            // Take focus so the hotkeys work without a click first.
            onmounted: move |e| async move {
                let _ = e.set_focus(true).await;
            },
            onmouseenter: move |_| player.write().pointer_enter(),
            onmousemove: move |_| {
                if !player.peek().show_controls {
                    player.write().pointer_enter();
                }
            },
            onmouseleave: move |_| player.write().pointer_leave(),
            onkeydown: move |e: KeyboardEvent| {
                let hotkey_context = HotkeyContext {
                    menu_open: player.peek().open_menu.is_some(),
                };
                let modifiers = e.modifiers();
                match handle_hotkey(&e.key(), modifiers.ctrl(), modifiers.meta(), &hotkey_context) {
                    HotkeyResult::Action(action) => {
                        e.prevent_default();
                        match action {
                            HotkeyAction::PlayPause => player.write().toggle_play(),
                            HotkeyAction::ToggleMute => player.write().toggle_mute(),
                            HotkeyAction::CloseMenus => player.write().close_menus(),
                            HotkeyAction::ToggleFullscreen => request_fullscreen(player),
                        }
                    }
                    HotkeyResult::NoMatch => {}
                }
            },

            img {
                src: "{poster}",
                alt: "{item.title}",
                draggable: "false",
                style: "position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; opacity: 0.85;",
            }

            div {
                style: "
                    position: absolute; inset: 0; display: flex; flex-direction: column; justify-content: space-between;
                    background: linear-gradient(to bottom, rgba(0,0,0,0.6), transparent 25%, transparent 70%, rgba(0,0,0,0.8));
                    opacity: {controls_opacity}; transition: opacity 0.3s ease;
                ",

                // Top bar
                div {
                    style: "display: flex; align-items: center; gap: 16px; padding: 20px 32px;",
                    button {
                        title: "Back",
                        style: "background: transparent; border: none; color: {TEXT_PRIMARY}; font-size: 24px; cursor: pointer;",
                        onclick: move |_| on_back.call(()),
                        "←"
                    }
                }

                // Center play toggle
                div {
                    style: "display: flex; justify-content: center;",
                    button {
                        class: "hover-lift",
                        style: "
                            width: 72px; height: 72px; border-radius: 50%; border: none;
                            background-color: rgba(255,255,255,0.15); color: {TEXT_PRIMARY};
                            font-size: 28px; cursor: pointer; transition: transform 0.2s ease;
                        ",
                        onclick: move |_| player.write().toggle_play(),
                        "{play_icon}"
                    }
                }

                // Bottom bar
                div {
                    style: "padding: 0 32px 24px 32px;",
                    div {
                        style: "height: 4px; background-color: rgba(255,255,255,0.25); border-radius: 2px; margin-bottom: 16px;",
                        div { style: "width: 0%; height: 100%; background-color: {ACCENT_PRIMARY}; border-radius: 2px;" }
                    }
                    div {
                        style: "display: flex; align-items: center; justify-content: space-between; gap: 16px;",
                        div {
                            style: "display: flex; align-items: center; gap: 16px; min-width: 0;",
                            ShellButton { title: "Play/Pause", label: play_icon, on_click: move |_| player.write().toggle_play() }
                            ShellButton { title: "Mute", label: mute_icon, on_click: move |_| player.write().toggle_mute() }
                            span {
                                style: "color: {TEXT_PRIMARY}; font-size: 15px; font-weight: 600; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                                "{heading}"
                            }
                        }
                        div {
                            style: "display: flex; align-items: center; gap: 12px; position: relative;",
                            if let Some(next) = next_episode {
                                ShellButton {
                                    title: "Next episode: {next.title}",
                                    label: "⏭",
                                    on_click: move |_| player.write().select_episode(next.number),
                                }
                            }
                            if is_series {
                                ShellButton { title: "Episodes", active: state.is_menu_open(SettingsMenu::Episode), label: "☰", on_click: move |_| player.write().toggle_menu(SettingsMenu::Episode) }
                            }
                            ShellButton { title: "Audio", active: state.is_menu_open(SettingsMenu::Audio), label: "🎧", on_click: move |_| player.write().toggle_menu(SettingsMenu::Audio) }
                            ShellButton { title: "Subtitles", active: state.is_menu_open(SettingsMenu::Subtitle), label: "CC", on_click: move |_| player.write().toggle_menu(SettingsMenu::Subtitle) }
                            ShellButton { title: "Speed", active: state.is_menu_open(SettingsMenu::Speed), label: "⏱", on_click: move |_| player.write().toggle_menu(SettingsMenu::Speed) }
                            ShellButton { title: "Fullscreen", label: fullscreen_icon, on_click: move |_| request_fullscreen(player) }

                            match state.open_menu {
                                Some(SettingsMenu::Audio) => rsx! {
                                    OptionMenu {
                                        title: "Audio",
                                        options: AUDIO_OPTIONS.to_vec(),
                                        selected: state.selected_audio,
                                        on_select: move |option| player.write().select_audio(option),
                                    }
                                },
                                Some(SettingsMenu::Subtitle) => rsx! {
                                    OptionMenu {
                                        title: "Subtitles",
                                        options: SUBTITLE_OPTIONS.to_vec(),
                                        selected: state.selected_subtitle,
                                        on_select: move |option| player.write().select_subtitle(option),
                                    }
                                },
                                Some(SettingsMenu::Speed) => rsx! {
                                    OptionMenu {
                                        title: "Playback speed",
                                        options: SPEED_OPTIONS.to_vec(),
                                        selected: state.playback_speed,
                                        on_select: move |option| player.write().select_speed(option),
                                    }
                                },
                                Some(SettingsMenu::Episode) => rsx! {
                                    div {
                                        style: "
                                            position: absolute; right: 0; bottom: 48px; width: 360px; z-index: 30;
                                            background-color: {BG_ELEVATED}; border: 1px solid {BORDER_DEFAULT};
                                            border-radius: 8px; padding: 8px; box-shadow: 0 10px 25px rgba(0,0,0,0.5);
                                        ",
                                        p { style: "margin: 4px 8px 8px 8px; font-size: 14px; font-weight: 700; color: {TEXT_PRIMARY};", "Episodes" }
                                        for episode in PLAYER_EPISODES {
                                            {
                                                let current = episode.number == state.current_episode;
                                                let background = if current { BG_HOVER } else { "transparent" };
                                                rsx! {
                                                    button {
                                                        key: "{episode.number}",
                                                        class: "menu-option",
                                                        style: "
                                                            display: block; width: 100%; text-align: left; border: none;
                                                            background-color: {background}; border-radius: 6px; padding: 8px; cursor: pointer;
                                                        ",
                                                        onclick: move |_| player.write().select_episode(episode.number),
                                                        div {
                                                            style: "display: flex; justify-content: space-between; color: {TEXT_PRIMARY}; font-size: 13px;",
                                                            span { "{episode.number}. {episode.title}" }
                                                            span { style: "color: {TEXT_MUTED};", "{episode.duration}" }
                                                        }
                                                        if current {
                                                            p {
                                                                class: "line-clamp-2",
                                                                style: "margin: 4px 0 0 0; font-size: 12px; color: {TEXT_MUTED};",
                                                                "{episode.description}"
                                                            }
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                },
                                None => rsx! {},
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ShellButton(
    #[props(into)] title: String,
    label: &'static str,
    #[props(default)] active: bool,
    on_click: EventHandler<MouseEvent>,
) -> Element {
    let background = if active { BG_HOVER } else { "transparent" };
    rsx! {
        button {
            title: "{title}",
            style: "
                min-width: 36px; height: 36px; padding: 0 8px; border: none; border-radius: 6px;
                background: {background}; color: {TEXT_PRIMARY}; font-size: 16px; cursor: pointer;
            ",
            onclick: move |e| {
                e.stop_propagation();
                on_click.call(e);
            },
            "{label}"
        }
    }
}

/// Option list for one settings menu. Picking an option keeps the menu open.
#[component]
fn OptionMenu(
    title: &'static str,
    options: Vec<&'static str>,
    selected: &'static str,
    on_select: EventHandler<&'static str>,
) -> Element {
    rsx! {
        div {
            style: "
                position: absolute; right: 0; bottom: 48px; min-width: 220px; z-index: 30;
                background-color: {BG_ELEVATED}; border: 1px solid {BORDER_DEFAULT};
                border-radius: 8px; padding: 8px; box-shadow: 0 10px 25px rgba(0,0,0,0.5);
            ",
            p { style: "margin: 4px 8px 8px 8px; font-size: 14px; font-weight: 700; color: {TEXT_PRIMARY};", "{title}" }
            for option in options {
                {
                    let marker = if option == selected { "✓" } else { "" };
                    rsx! {
                        button {
                            key: "{option}",
                            class: "menu-option",
                            style: "
                                display: flex; width: 100%; gap: 8px; border: none; background: transparent;
                                color: {TEXT_SECONDARY}; font-size: 13px; text-align: left;
                                padding: 6px 8px; border-radius: 4px; cursor: pointer;
                            ",
                            onclick: move |_| on_select.call(option),
                            span { style: "width: 14px; color: {TEXT_PRIMARY};", "{marker}" }
                            span { "{option}" }
                        }
                    }
                }
            }
        }
    }
}
