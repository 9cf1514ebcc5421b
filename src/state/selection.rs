//! Detail selection state owned by a catalog page.

use crate::core::recommend::recommend_for;

use super::catalog::CatalogItem;
use super::mock_data::Catalog;

/// Which item the detail overlay shows, and its recommendations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Item shown in the detail overlay.
    pub selected_item: Option<CatalogItem>,
    /// Whether the overlay is open.
    pub is_detail_open: bool,
    /// Recommendations drawn when the overlay opened.
    pub recommendations: Vec<CatalogItem>,
}

impl SelectionState {
    /// Open the overlay for `item`, drawing a fresh recommendation set.
    pub fn open(&mut self, item: CatalogItem, catalog: &Catalog, count: usize) {
        self.recommendations = recommend_for(&item, catalog.collection(item.kind), count);
        tracing::debug!(
            item = item.id,
            recommendations = self.recommendations.len(),
            "detail opened"
        );
        self.selected_item = Some(item);
        self.is_detail_open = true;
    }

    /// Close the overlay. The last item is kept so closing doesn't blank it mid-transition.
    pub fn close(&mut self) {
        self.is_detail_open = false;
    }

    /// The item to render, only while open.
    pub fn visible_item(&self) -> Option<&CatalogItem> {
        if self.is_detail_open {
            self.selected_item.as_ref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_film_draws_recommendations() {
        let catalog = Catalog::mock();
        let film = catalog.movies[0].clone();
        let mut selection = SelectionState::default();
        selection.open(film.clone(), &catalog, 3);
        assert!(selection.is_detail_open);
        assert_eq!(selection.visible_item(), Some(&film));
        assert_eq!(selection.recommendations.len(), 3);
        assert!(selection.recommendations.iter().all(|rec| rec.is_film() && rec.id != film.id));
    }

    #[test]
    fn test_open_series_has_no_recommendations() {
        let catalog = Catalog::mock();
        let mut selection = SelectionState::default();
        selection.open(catalog.series[0].clone(), &catalog, 3);
        assert!(selection.recommendations.is_empty());
    }

    #[test]
    fn test_close_hides_item() {
        let catalog = Catalog::mock();
        let mut selection = SelectionState::default();
        assert!(selection.visible_item().is_none());
        selection.open(catalog.movies[1].clone(), &catalog, 3);
        selection.close();
        assert!(selection.visible_item().is_none());
        assert!(selection.selected_item.is_some());
    }
}
