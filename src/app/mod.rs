pub mod components;
pub mod layouts;
pub mod navigation;
pub mod pages;
pub mod routes;

use std::any::Any;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_history::{MemoryHistory, provide_history_context};

use crate::app::navigation::AppRouter;
use crate::routing::{HistoryMode, build_router};
use crate::shared::errors::Result;

pub use routes::{Page, Route, app_routes};

/// Builds the view loader and starts the Dioxus app with it as root context.
pub fn launch(mode: HistoryMode) -> Result<()> {
    let table = app_routes()?;

    dioxus::LaunchBuilder::new()
        .with_context_provider(move || {
            Box::new(AppRouter::new(build_router(mode.clone(), table.clone()))) as Box<dyn Any>
        })
        .launch(App);

    Ok(())
}

#[component]
pub fn App() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let app_router = use_context::<AppRouter>();

    // Browser mode keeps the platform's history
    use_hook(move || {
        if let Some(initial) = app_router.router().mode().initial_location() {
            provide_history_context(Rc::new(MemoryHistory::with_initial_path(initial)));
        }
    });

    use_effect(|| {
        tracing::info!("Dioxus App initialized");
    });

    rsx! {
        document::Link { rel: "stylesheet", href: BUNDLE_CSS }
        Router::<Route> {}
    }
}
