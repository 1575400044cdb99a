use dioxus::prelude::*;

use crate::t;

/// State picker for one tab. Choosing an option emits its value; the clear
/// button emits `on_clear`.
#[component]
pub fn StateDropdown(
    id: String,
    options: Vec<String>,
    selected: Option<String>,
    on_change: EventHandler<String>,
    on_clear: EventHandler<()>,
) -> Element {
    let current = selected.clone().unwrap_or_default();
    let has_selection = selected.is_some();

    rsx! {
        div { class: "state-dropdown",
            label { class: "visually-hidden", r#for: "{id}", {t!("dropdown-label")} }
            select {
                id: "{id}",
                class: "state-dropdown__select",
                value: "{current}",
                onchange: move |evt: FormEvent| on_change.call(evt.value()),
                option {
                    value: "",
                    disabled: true,
                    selected: !has_selection,
                    {t!("dropdown-placeholder")}
                }
                for key in options.iter() {
                    option {
                        key: "{key}",
                        value: "{key}",
                        selected: selected.as_deref() == Some(key.as_str()),
                        "{key}"
                    }
                }
            }
            button {
                r#type: "button",
                class: "button button--ghost state-dropdown__clear",
                disabled: !has_selection,
                aria_label: t!("dropdown-clear"),
                onclick: move |_| on_clear.call(()),
                "×"
            }
        }
    }
}
