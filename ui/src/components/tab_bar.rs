use dioxus::prelude::*;

use crate::core::view_model::Tab;
use crate::t;

pub fn tab_label(tab: Tab) -> String {
    match tab {
        Tab::Employment => t!("tab-employment"),
        Tab::Labour => t!("tab-labour"),
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "tabs__tab tabs__tab--active"
    } else {
        "tabs__tab"
    }
}

#[component]
pub fn TabBar(active: Tab, on_select: EventHandler<Tab>) -> Element {
    rsx! {
        nav { class: "tabs", role: "tablist",
            for tab in Tab::ALL {
                button {
                    key: "{tab.id()}",
                    id: "{tab.id()}",
                    r#type: "button",
                    role: "tab",
                    aria_selected: tab == active,
                    class: tab_class(tab == active),
                    onclick: move |_| on_select.call(tab),
                    {tab_label(tab)}
                }
            }
        }
    }
}
