use dioxus::prelude::*;

use crate::app::components::{ErrorMessage, LoadingText};
use crate::app::navigation::AppRouter;

/// Loads the view of route `name` on first mount and renders it.
///
/// Revisits resolve from the router's cache. A failed load renders the error
/// and is retried the next time the route mounts.
#[component]
pub fn LazyView(name: &'static str) -> Element {
    let app_router = use_context::<AppRouter>();

    let view = use_resource(move || {
        let app_router = app_router.clone();
        async move {
            app_router
                .router()
                .load_named(name)
                .await
                .map_err(|e| e.to_string())
        }
    });

    match &*view.read() {
        Some(Ok(page)) => page.render(),
        Some(Err(error)) => rsx! {
            ErrorMessage { message: error.clone() }
        },
        None => rsx! {
            LoadingText { message: "Loading…".to_string() }
        },
    }
}
