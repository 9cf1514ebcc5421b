//! Card presentation rules: hover expansion gating, badge precedence and
//! the genre label strip.

use crate::state::{genre_tokens, CatalogItem};

/// Separator rendered between genre labels.
pub const GENRE_SEPARATOR: &str = " • ";

/// Scale applied to a hover-expanded card.
pub const HOVER_SCALE: f64 = 1.4;

/// Per-card ephemeral view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardViewState {
    is_hovered: bool,
    is_mobile_viewport: bool,
}

impl CardViewState {
    pub fn new(viewport_width: f64, mobile_breakpoint: f64) -> Self {
        Self {
            is_hovered: false,
            is_mobile_viewport: viewport_width < mobile_breakpoint,
        }
    }

    pub fn is_hovered(&self) -> bool {
        self.is_hovered
    }

    pub fn is_mobile_viewport(&self) -> bool {
        self.is_mobile_viewport
    }

    /// Hover only registers on desktop-width viewports.
    pub fn pointer_enter(&mut self) {
        if !self.is_mobile_viewport {
            self.is_hovered = true;
        }
    }

    pub fn pointer_leave(&mut self) {
        if !self.is_mobile_viewport {
            self.is_hovered = false;
        }
    }

    /// Re-derive the breakpoint flag. Crossing into mobile drops any hover.
    pub fn set_viewport_width(&mut self, viewport_width: f64, mobile_breakpoint: f64) {
        self.is_mobile_viewport = viewport_width < mobile_breakpoint;
        if self.is_mobile_viewport {
            self.is_hovered = false;
        }
    }

    /// Full expansion (image swap, scale, raised stacking) needs a landscape image.
    pub fn is_expanded(&self, item: &CatalogItem) -> bool {
        self.is_hovered && item.image_landscape.is_some()
    }

    /// Image the card should display right now.
    pub fn image<'a>(&self, item: &'a CatalogItem) -> &'a str {
        match (&item.image_landscape, self.is_hovered) {
            (Some(landscape), true) => landscape.as_str(),
            _ => item.image.as_str(),
        }
    }

    pub fn badges(&self, item: &CatalogItem) -> CardBadges {
        CardBadges {
            top_ten: item.top_ten(),
            corner: CornerBadge::for_item(item),
            visible: !self.is_expanded(item),
        }
    }
}

/// Badge shown in the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerBadge {
    Premium,
    NewEpisode,
}

impl CornerBadge {
    /// New-episode wins over premium; the two never render together.
    pub fn for_item(item: &CatalogItem) -> Option<Self> {
        if item.new_eps {
            Some(CornerBadge::NewEpisode)
        } else if item.is_premium {
            Some(CornerBadge::Premium)
        } else {
            None
        }
    }

    pub fn label(self, compact: bool) -> &'static str {
        match (self, compact) {
            (CornerBadge::Premium, false) => "Premium",
            (CornerBadge::Premium, true) => "Prem",
            (CornerBadge::NewEpisode, false) => "New Episode",
            (CornerBadge::NewEpisode, true) => "New Eps",
        }
    }
}

/// Badges for one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardBadges {
    pub top_ten: Option<u8>,
    pub corner: Option<CornerBadge>,
    /// False while the card is hover-expanded.
    pub visible: bool,
}

/// One genre label and whether a separator follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreLabel<'a> {
    pub text: &'a str,
    pub separator: bool,
}

pub fn genre_labels(genre: &str) -> Vec<GenreLabel<'_>> {
    let tokens = genre_tokens(genre);
    let last = tokens.len().saturating_sub(1);
    tokens
        .into_iter()
        .enumerate()
        .map(|(index, text)| GenreLabel {
            text,
            separator: index < last,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{test_item, ItemKind};

    #[test]
    fn test_hover_suppressed_on_mobile() {
        let mut card = CardViewState::new(500.0, 768.0);
        card.pointer_enter();
        assert!(!card.is_hovered());
        let item = test_item(1, ItemKind::Film, "Drama");
        assert!(!card.is_expanded(&item));
    }

    #[test]
    fn test_resize_to_mobile_clears_hover() {
        let item = test_item(1, ItemKind::Film, "Drama");
        let mut card = CardViewState::new(1024.0, 768.0);
        card.pointer_enter();
        assert!(card.is_expanded(&item));
        card.set_viewport_width(500.0, 768.0);
        assert!(!card.is_hovered());
        assert!(!card.is_expanded(&item));
        assert_eq!(card.image(&item), item.image);
    }

    #[test]
    fn test_hover_swaps_to_landscape_and_hides_badges() {
        let mut item = test_item(1, ItemKind::Film, "Drama");
        item.top_ten_rank = Some(2);
        let mut card = CardViewState::new(1280.0, 768.0);
        assert!(card.badges(&item).visible);
        card.pointer_enter();
        assert_eq!(card.image(&item), "/images/landscape-1.jpg");
        assert!(!card.badges(&item).visible);
        card.pointer_leave();
        assert_eq!(card.image(&item), "/images/poster-1.jpg");
        assert!(card.badges(&item).visible);
    }

    #[test]
    fn test_hover_without_landscape_only_darkens() {
        let mut item = test_item(1, ItemKind::Film, "Drama");
        item.image_landscape = None;
        let mut card = CardViewState::new(1280.0, 768.0);
        card.pointer_enter();
        assert!(card.is_hovered());
        assert!(!card.is_expanded(&item));
        assert_eq!(card.image(&item), item.image);
        assert!(card.badges(&item).visible);
    }

    #[test]
    fn test_new_episode_beats_premium() {
        let mut item = test_item(1, ItemKind::Series, "Drama");
        item.is_premium = true;
        item.new_eps = true;
        assert_eq!(CornerBadge::for_item(&item), Some(CornerBadge::NewEpisode));
        item.new_eps = false;
        assert_eq!(CornerBadge::for_item(&item), Some(CornerBadge::Premium));
        item.is_premium = false;
        assert_eq!(CornerBadge::for_item(&item), None);
    }

    #[test]
    fn test_top_ten_coexists_with_corner_badge() {
        let mut item = test_item(1, ItemKind::Film, "Drama");
        item.top_ten_rank = Some(1);
        item.is_premium = true;
        let badges = CardViewState::default().badges(&item);
        assert_eq!(badges.top_ten, Some(1));
        assert_eq!(badges.corner, Some(CornerBadge::Premium));
    }

    #[test]
    fn test_genre_separator_not_after_last() {
        let labels = genre_labels("Action, Sci-Fi, Drama");
        let separators: Vec<_> = labels.iter().map(|label| label.separator).collect();
        assert_eq!(separators, vec![true, true, false]);
        assert_eq!(labels[1].text, "Sci-Fi");
        assert!(genre_labels("").is_empty());
    }
}
