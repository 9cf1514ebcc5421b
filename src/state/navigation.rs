//! In-app routing with a back stack.

use super::catalog::CatalogItem;
use super::payment::Plan;

/// Screens the app can show.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Films,
    Series,
    MyList,
    /// Playback screen; `item` is `None` when the payload was lost.
    Watch {
        item: Option<CatalogItem>,
        is_premium: bool,
    },
    Payment {
        plan: Plan,
    },
}

impl Route {
    /// Watch route for an item, carrying its premium flag.
    pub fn watch(item: &CatalogItem) -> Self {
        Route::Watch {
            item: Some(item.clone()),
            is_premium: item.is_premium,
        }
    }

    /// Whether the top navigation bar is shown on this route.
    pub fn shows_nav(&self) -> bool {
        !matches!(self, Route::Watch { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Films => "films",
            Route::Series => "series",
            Route::MyList => "my-list",
            Route::Watch { .. } => "watch",
            Route::Payment { .. } => "payment",
        }
    }
}

/// History stack. Always holds at least one route.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigator {
    history: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Films)
    }
}

impl Navigator {
    pub fn new(start: Route) -> Self {
        Self {
            history: vec![start],
        }
    }

    pub fn current(&self) -> &Route {
        // history is never empty
        &self.history[self.history.len() - 1]
    }

    pub fn navigate(&mut self, route: Route) {
        tracing::info!(route = route.name(), depth = self.history.len() + 1, "navigate");
        self.history.push(route);
    }

    /// Go back one step. Returns false when already at the first entry.
    pub fn back(&mut self) -> bool {
        if self.history.len() <= 1 {
            return false;
        }
        self.history.pop();
        tracing::info!(route = self.current().name(), "navigate back");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{test_item, ItemKind};

    #[test]
    fn test_starts_on_films() {
        let nav = Navigator::default();
        assert_eq!(nav.current(), &Route::Films);
        let mut nav = nav;
        assert!(!nav.back());
    }

    #[test]
    fn test_back_pops_one_step() {
        let mut nav = Navigator::default();
        nav.navigate(Route::Series);
        let mut item = test_item(4, ItemKind::Series, "Drama");
        item.is_premium = true;
        nav.navigate(Route::watch(&item));
        assert!(matches!(nav.current(), Route::Watch { is_premium: true, .. }));
        assert!(nav.back());
        assert_eq!(nav.current(), &Route::Series);
        assert!(nav.back());
        assert!(!nav.back());
        assert_eq!(nav.current(), &Route::Films);
    }

    #[test]
    fn test_watch_hides_nav() {
        let item = test_item(1, ItemKind::Film, "Drama");
        assert!(!Route::watch(&item).shows_nav());
        assert!(Route::MyList.shows_nav());
    }
}
