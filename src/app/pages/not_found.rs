use dioxus::prelude::*;

use crate::app::components::PageFrame;
use crate::app::routes::Route;

/// Fallback for locations no route declares.
#[component]
pub fn NotFoundPage(location: String) -> Element {
    rsx! {
        PageFrame { title: "Page not found".to_string(),
            p { "Nothing lives at " code { "{location}" } "." }
            Link { to: Route::Home {}, "Back to home" }
        }
    }
}
