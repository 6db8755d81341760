use dioxus::prelude::*;

use crate::app::components::PageFrame;

#[component]
pub fn ChatPage() -> Element {
    let mut draft = use_signal(String::new);
    let mut sent = use_signal(Vec::<String>::new);

    rsx! {
        PageFrame { title: "Chat".to_string(),
            ul { class: "c-chat__messages",
                for (i, message) in sent.read().iter().enumerate() {
                    li { key: "{i}", class: "c-chat__message", "{message}" }
                }
            }
            form { class: "c-chat__input",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    let text = draft.read().trim().to_string();
                    if !text.is_empty() {
                        sent.write().push(text);
                        draft.set(String::new());
                    }
                },
                input {
                    class: "c-form__input",
                    placeholder: "Ask a question about your documents…",
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value()),
                }
                button { class: "c-button c-button--primary", r#type: "submit", "Send" }
            }
        }
    }
}
