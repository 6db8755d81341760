use dioxus::prelude::*;

// Reusable Loading Component (BEM: c-loading)
#[component]
pub fn LoadingText(message: String) -> Element {
    rsx! {
        div { class: "c-loading",
            div { class: "c-loading__spinner" }
            p { class: "c-loading__text", "{message}" }
        }
    }
}

// Reusable Error Message Component (BEM: c-error)
#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div { class: "c-error",
            span { class: "c-error__icon", "❌" }
            p { class: "c-error__text", "{message}" }
        }
    }
}

// Page wrapper with a title (BEM: c-page)
#[component]
pub fn PageFrame(title: String, children: Element) -> Element {
    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "{title}" }
            div { class: "c-page__body", {children} }
        }
    }
}
