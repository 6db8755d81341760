use dioxus::prelude::*;

use crate::app::components::PageFrame;
use crate::app::navigation::push_route;
use crate::app::routes::Route;

/// Sign-in form. Credentials are checked by the backend, not here.
#[component]
pub fn LoginPage() -> Element {
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let navigator = use_navigator();
    let current = use_route::<Route>();

    let can_submit = !username.read().trim().is_empty() && !password.read().is_empty();

    rsx! {
        PageFrame { title: "Sign in".to_string(),
            form { class: "c-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    tracing::info!("Sign-in submitted");
                    push_route(navigator, &current, Route::Chat {});
                },
                label { class: "c-form__label", "Username" }
                input {
                    class: "c-form__input",
                    value: "{username}",
                    oninput: move |evt| username.set(evt.value()),
                }
                label { class: "c-form__label", "Password" }
                input {
                    class: "c-form__input",
                    r#type: "password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                button {
                    class: "c-button c-button--primary",
                    r#type: "submit",
                    disabled: !can_submit,
                    "Sign in"
                }
            }
        }
    }
}
