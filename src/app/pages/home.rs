use dioxus::prelude::*;

use crate::app::components::PageFrame;
use crate::app::routes::Route;

#[component]
pub fn HomePage() -> Element {
    rsx! {
        PageFrame { title: "Ask your documents".to_string(),
            p { "Upload documents, then chat with an assistant that answers from them." }
            div { class: "c-home__actions",
                Link { to: Route::Upload {}, class: "c-button c-button--secondary", "Upload documents" }
                Link { to: Route::Chat {}, class: "c-button c-button--primary", "Start chatting" }
            }
        }
    }
}
