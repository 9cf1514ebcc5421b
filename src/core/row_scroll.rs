//! Row scrolling rules: responsive sizing, button visibility and the
//! deferred recomputation that follows a programmatic scroll.

use serde::Deserialize;

/// Offset tolerance so the buttons don't flicker at rest.
pub const SCROLL_EDGE_EPSILON_PX: f64 = 10.0;

/// How a row lays out its cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    #[default]
    Portrait,
    Landscape,
    /// Non-scrolling wrapping grid used for recommendation strips.
    CompactGrid,
}

impl LayoutMode {
    /// Whether the row scrolls horizontally (and so may show scroll buttons).
    pub fn scrolls(self) -> bool {
        !matches!(self, LayoutMode::CompactGrid)
    }

    /// Cards visible per viewport-width of the row.
    pub fn cards_per_view(self, viewport: ViewportClass) -> usize {
        match (self, viewport) {
            (LayoutMode::CompactGrid, _) => 3,
            (LayoutMode::Portrait, ViewportClass::Narrow) => 3,
            (LayoutMode::Portrait, ViewportClass::Medium) => 4,
            (LayoutMode::Portrait, ViewportClass::Wide) => 5,
            (LayoutMode::Landscape, ViewportClass::Narrow) => 1,
            (LayoutMode::Landscape, ViewportClass::Medium) => 2,
            (LayoutMode::Landscape, ViewportClass::Wide) => 4,
        }
    }

    /// Gap between cards in pixels.
    pub fn gap_px(self, viewport: ViewportClass) -> f64 {
        match (self, viewport) {
            (LayoutMode::Landscape, _) => 8.0,
            (_, ViewportClass::Narrow) => 4.0,
            (LayoutMode::CompactGrid, _) | (_, ViewportClass::Medium) => 8.0,
            (_, ViewportClass::Wide) => 12.0,
        }
    }

    /// CSS width for one card slot, accounting for the gaps between cards.
    pub fn card_width_css(self, viewport: ViewportClass) -> String {
        let count = self.cards_per_view(viewport);
        let gaps = self.gap_px(viewport) * count.saturating_sub(1) as f64;
        format!("calc((100% - {gaps}px) / {count})")
    }
}

/// Coarse viewport width class driving responsive sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Narrow,
    Medium,
    Wide,
}

impl ViewportClass {
    pub fn from_width(width: f64, mobile_breakpoint: f64, wide_breakpoint: f64) -> Self {
        if width < mobile_breakpoint {
            ViewportClass::Narrow
        } else if width < wide_breakpoint {
            ViewportClass::Medium
        } else {
            ViewportClass::Wide
        }
    }
}

/// Scroll direction for the row buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

/// Geometry of a scroll container, as read from the DOM.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct ScrollMetrics {
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub client_width: f64,
}

impl ScrollMetrics {
    /// Signed pixel delta for one page in `direction`.
    pub fn page_delta(&self, direction: ScrollDirection) -> f64 {
        match direction {
            ScrollDirection::Left => -self.client_width,
            ScrollDirection::Right => self.client_width,
        }
    }

    /// Offset the container settles at after paging, clamped to the scroll range.
    pub fn paged_offset(&self, direction: ScrollDirection) -> f64 {
        let max = (self.scroll_width - self.client_width).max(0.0);
        (self.scroll_left + self.page_delta(direction)).clamp(0.0, max)
    }

    pub fn visibility(&self) -> RowViewState {
        RowViewState {
            can_scroll_left: self.scroll_left > SCROLL_EDGE_EPSILON_PX,
            can_scroll_right: self.scroll_left
                < self.scroll_width - self.client_width - SCROLL_EDGE_EPSILON_PX,
        }
    }
}

/// Scroll-button visibility for one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowViewState {
    pub can_scroll_left: bool,
    pub can_scroll_right: bool,
}

impl Default for RowViewState {
    /// State on mount, before the first measurement arrives.
    fn default() -> Self {
        Self {
            can_scroll_left: false,
            can_scroll_right: true,
        }
    }
}

impl RowViewState {
    /// Buttons that should actually render for `mode`.
    pub fn for_mode(self, mode: LayoutMode) -> Self {
        if mode.scrolls() {
            self
        } else {
            Self {
                can_scroll_left: false,
                can_scroll_right: false,
            }
        }
    }
}

/// Hands out tokens for deferred recomputations. Scheduling a new one
/// invalidates every token handed out before it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettleGate {
    generation: u64,
}

impl SettleGate {
    pub fn schedule(&mut self) -> SettleToken {
        self.generation = self.generation.wrapping_add(1);
        SettleToken(self.generation)
    }

    pub fn is_current(&self, token: SettleToken) -> bool {
        token.0 == self.generation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleToken(u64);

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scroll_left: f64, scroll_width: f64, client_width: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_left,
            scroll_width,
            client_width,
        }
    }

    #[test]
    fn test_no_right_button_when_content_fits() {
        for content in [0.0, 400.0, 999.0, 1000.0] {
            let state = metrics(0.0, content, 1000.0).visibility();
            assert!(!state.can_scroll_right, "content {content}");
            assert!(!state.can_scroll_left);
        }
    }

    #[test]
    fn test_left_at_origin_stays_hidden() {
        let at_rest = metrics(0.0, 3000.0, 1000.0);
        let offset = at_rest.paged_offset(ScrollDirection::Left);
        assert_eq!(offset, 0.0);
        let after = metrics(offset, 3000.0, 1000.0).visibility();
        assert!(!after.can_scroll_left);
        assert!(after.can_scroll_right);
    }

    #[test]
    fn test_epsilon_band_at_both_edges() {
        assert!(!metrics(10.0, 3000.0, 1000.0).visibility().can_scroll_left);
        assert!(metrics(10.5, 3000.0, 1000.0).visibility().can_scroll_left);
        assert!(!metrics(1990.0, 3000.0, 1000.0).visibility().can_scroll_right);
        assert!(metrics(1989.0, 3000.0, 1000.0).visibility().can_scroll_right);
    }

    #[test]
    fn test_paging_moves_one_viewport() {
        let m = metrics(0.0, 3000.0, 1000.0);
        assert_eq!(m.paged_offset(ScrollDirection::Right), 1000.0);
        let m = metrics(1800.0, 3000.0, 1000.0);
        assert_eq!(m.paged_offset(ScrollDirection::Right), 2000.0);
        assert_eq!(m.page_delta(ScrollDirection::Left), -1000.0);
    }

    #[test]
    fn test_cards_per_view_policy() {
        use ViewportClass::*;
        let portrait: Vec<_> = [Narrow, Medium, Wide]
            .iter()
            .map(|v| LayoutMode::Portrait.cards_per_view(*v))
            .collect();
        assert_eq!(portrait, vec![3, 4, 5]);
        let landscape: Vec<_> = [Narrow, Medium, Wide]
            .iter()
            .map(|v| LayoutMode::Landscape.cards_per_view(*v))
            .collect();
        assert_eq!(landscape, vec![1, 2, 4]);
        assert!([Narrow, Medium, Wide]
            .iter()
            .all(|v| LayoutMode::CompactGrid.cards_per_view(*v) == 3));
    }

    #[test]
    fn test_compact_grid_never_shows_buttons() {
        let state = metrics(500.0, 3000.0, 1000.0).visibility();
        assert!(state.can_scroll_left && state.can_scroll_right);
        let compact = state.for_mode(LayoutMode::CompactGrid);
        assert!(!compact.can_scroll_left && !compact.can_scroll_right);
        assert_eq!(state.for_mode(LayoutMode::Portrait), state);
    }

    #[test]
    fn test_viewport_class_breakpoints() {
        assert_eq!(ViewportClass::from_width(500.0, 768.0, 1024.0), ViewportClass::Narrow);
        assert_eq!(ViewportClass::from_width(768.0, 768.0, 1024.0), ViewportClass::Medium);
        assert_eq!(ViewportClass::from_width(1024.0, 768.0, 1024.0), ViewportClass::Wide);
    }

    #[test]
    fn test_card_width_css_subtracts_gaps() {
        let css = LayoutMode::Portrait.card_width_css(ViewportClass::Wide);
        assert_eq!(css, "calc((100% - 48px) / 5)");
        let css = LayoutMode::Landscape.card_width_css(ViewportClass::Narrow);
        assert_eq!(css, "calc((100% - 0px) / 1)");
    }

    #[test]
    fn test_new_schedule_supersedes_pending() {
        let mut gate = SettleGate::default();
        let first = gate.schedule();
        assert!(gate.is_current(first));
        let second = gate.schedule();
        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));
    }

    #[test]
    fn test_metrics_deserialize_from_bridge_json() {
        let json = r#"{"scroll_left": 12.5, "scroll_width": 2400, "client_width": 800}"#;
        let m: ScrollMetrics = serde_json::from_str(json).unwrap();
        assert_eq!(m.scroll_width, 2400.0);
    }
}
