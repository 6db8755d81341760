use dioxus::prelude::*;

use crate::app::routes::Route;

/// Global navbar with the app title and route links
#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav { class: "c-navbar",
            Link { to: Route::Home {}, class: "c-navbar__logo", "📚 RAG Chat" }
            div { class: "c-navbar__links",
                Link { to: Route::Chat {}, class: "c-link", active_class: "c-link--active", "Chat" }
                Link { to: Route::Upload {}, class: "c-link", active_class: "c-link--active", "Upload" }
                Link { to: Route::Login {}, class: "c-link", active_class: "c-link--active", "Sign in" }
            }
        }
    }
}
