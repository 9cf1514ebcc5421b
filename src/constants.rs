//! Shared UI constants such as colors and webview scripts.

pub const BG_DEEPEST: &str = "#000000";
pub const BG_BASE: &str = "#0a0a0b";
pub const BG_ELEVATED: &str = "#111827";
pub const BG_SURFACE: &str = "#18181b";
pub const BG_HOVER: &str = "#27272a";

pub const BORDER_SUBTLE: &str = "#1f1f1f";
pub const BORDER_DEFAULT: &str = "#374151";
pub const BORDER_STRONG: &str = "#6b7280";

pub const TEXT_PRIMARY: &str = "#ffffff";
pub const TEXT_SECONDARY: &str = "#d1d5db";
pub const TEXT_MUTED: &str = "#9ca3af";

pub const ACCENT_PRIMARY: &str = "#2563eb";
pub const ACCENT_TOP_TEN: &str = "#dc2626";
pub const ACCENT_PREMIUM: &str = "#eab308";
pub const ACCENT_NEW_EPISODE: &str = "#1e3a8a";
pub const ACCENT_STAR: &str = "#facc15";

pub const NAV_HEIGHT: f64 = 64.0;
pub const DETAIL_EPISODE_COUNT: u32 = 4;
pub const MY_LIST_PER_COLLECTION: usize = 6;

pub const GENRES: [&str; 14] = [
    "Action",
    "Kids",
    "Anime",
    "British",
    "Drama",
    "Crime",
    "KDrama",
    "Comedy",
    "Adventure",
    "War",
    "Romance",
    "Science & Nature",
    "Sci-Fi",
    "Thriller",
];

/// Streams `window.innerWidth` on every resize until a detach message arrives.
pub const VIEWPORT_SCRIPT: &str = r#"
let lastWidth = null;

function sendWidth() {
    const width = window.innerWidth || 0;
    if (lastWidth !== null && Math.abs(lastWidth - width) < 0.5) {
        return;
    }
    lastWidth = width;
    dioxus.send(width);
}

window.addEventListener("resize", sendWidth, { passive: true });
sendWidth();
await dioxus.recv();
window.removeEventListener("resize", sendWidth);
"#;

/// Returns `{ scroll_left, scroll_width, client_width }` for `__ROW_ID__`, or null.
pub const ROW_METRICS_SCRIPT: &str = r#"
const el = document.getElementById(__ROW_ID__);
if (!el) {
    return null;
}
return {
    scroll_left: el.scrollLeft,
    scroll_width: el.scrollWidth,
    client_width: el.clientWidth
};
"#;

/// Smooth-scrolls `__ROW_ID__` by `__DELTA__` pixels.
pub const ROW_SCROLL_SCRIPT: &str = r#"
const el = document.getElementById(__ROW_ID__);
if (el) {
    el.scrollBy({ left: __DELTA__, behavior: "smooth" });
}
return el !== null;
"#;

/// Enters fullscreen when not fullscreen, else exits. Reports the resulting state.
pub const FULLSCREEN_TOGGLE_SCRIPT: &str = r#"
try {
    const host = document.getElementById("player-shell") || document.documentElement;
    if (!document.fullscreenElement) {
        await host.requestFullscreen();
    } else {
        await document.exitFullscreen();
    }
    return { ok: true, active: !!document.fullscreenElement, error: null };
} catch (err) {
    return { ok: false, active: !!document.fullscreenElement, error: String(err) };
}
"#;

/// Writes `__TEXT__` to the clipboard.
pub const CLIPBOARD_SCRIPT: &str = r#"
try {
    await navigator.clipboard.writeText(__TEXT__);
    return { ok: true, active: null, error: null };
} catch (err) {
    return { ok: false, active: null, error: String(err) };
}
"#;

pub const GLOBAL_STYLES: &str = r#"
body { margin: 0; background: #000000; font-family: 'Inter', 'Segoe UI', sans-serif; overflow-x: hidden; }
.row-scroller::-webkit-scrollbar { display: none; }
.row-group .row-button { opacity: 0; }
.row-group:hover .row-button { opacity: 1; }
.hover-lift:hover { transform: scale(1.05); }
.menu-option:hover { background-color: #1f2937; }
.line-clamp-2 { display: -webkit-box; -webkit-line-clamp: 2; -webkit-box-orient: vertical; overflow: hidden; }
.line-clamp-3 { display: -webkit-box; -webkit-line-clamp: 3; -webkit-box-orient: vertical; overflow: hidden; }
"#;
