use dioxus::prelude::*;

use crate::app::components::PageFrame;

#[component]
pub fn UploadPage() -> Element {
    let mut selected = use_signal(|| None::<String>);

    rsx! {
        PageFrame { title: "Upload documents".to_string(),
            input {
                class: "c-upload__input",
                r#type: "file",
                accept: ".pdf,.txt,.md,.docx",
                onchange: move |evt: FormEvent| {
                    let value = evt.value();
                    // Browsers report a fake directory in front of the file name
                    let name = value.rsplit(['/', '\\']).next().unwrap_or_default().to_string();
                    tracing::debug!(file = %name, "File selected");
                    selected.set((!name.is_empty()).then_some(name));
                },
            }
            if let Some(name) = selected() {
                p { class: "c-upload__selected", "Selected: " strong { "{name}" } }
            } else {
                p { class: "c-upload__hint", "PDF, text, Markdown or Word files." }
            }
        }
    }
}
