//! Root component: shared context, viewport tracking and the route switch.

use dioxus::prelude::*;
use std::time::Duration;

use crate::components::NavBar;
use crate::constants::{BG_DEEPEST, GLOBAL_STYLES, NAV_HEIGHT, VIEWPORT_SCRIPT};
use crate::pages::{CatalogPage, MyListPage, PaymentPage, WatchPage};
use crate::state::{Catalog, ItemKind, Navigator, Route};

#[component]
pub fn App() -> Element {
    let catalog = use_context_provider(Catalog::mock);
    let navigator = use_context_provider(|| Signal::new(Navigator::default()));
    let viewport_width = use_context_provider(|| Signal::new(0.0_f64));
    let mut viewport_eval = use_signal(|| None::<document::Eval>);

    use_effect(move || {
        if viewport_eval.peek().is_some() {
            return;
        }
        let eval = document::eval(VIEWPORT_SCRIPT);
        viewport_eval.set(Some(eval));
    });

    use_future(move || {
        let mut viewport_width = viewport_width;
        async move {
            loop {
                let Some(mut eval) = viewport_eval() else {
                    tokio::time::sleep(Duration::from_millis(100)).await;
                    continue;
                };
                loop {
                    match eval.recv::<f64>().await {
                        Ok(width) => {
                            let width = width.max(0.0);
                            if *viewport_width.peek() != width {
                                viewport_width.set(width);
                            }
                        }
                        Err(_) => break,
                    }
                }
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
        }
    });

    // Detach the resize listener when the app unmounts.
    use_drop(move || {
        if let Some(eval) = viewport_eval.peek().as_ref() {
            let _ = eval.send(true);
        }
    });

    tracing::debug!(
        films = catalog.movies.len(),
        series = catalog.series.len(),
        "catalog ready"
    );

    let route = navigator.read().current().clone();
    let shows_nav = route.shows_nav();
    let top_pad = if shows_nav { NAV_HEIGHT } else { 0.0 };

    rsx! {
        style { "{GLOBAL_STYLES}" }
        div {
            style: "min-height: 100vh; background-color: {BG_DEEPEST}; padding-top: {top_pad}px;",
            if shows_nav {
                NavBar {}
            }
            match route {
                Route::Films => {
                    let key = "films";
                    rsx! { CatalogPage { key: "{key}", kind: ItemKind::Film } }
                }
                Route::Series => {
                    let key = "series";
                    rsx! { CatalogPage { key: "{key}", kind: ItemKind::Series } }
                }
                Route::MyList => rsx! { MyListPage {} },
                Route::Watch { item, is_premium } => rsx! { WatchPage { item, is_premium } },
                Route::Payment { plan } => rsx! { PaymentPage { plan } },
            }
        }
    }
}
