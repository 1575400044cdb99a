use dioxus::prelude::*;

use crate::components::{LineChart, StateDropdown};
use crate::core::view_model::{Event, Tab, TabBody};
use crate::export::ChartExport;
use crate::t;

/// Overview chart on top, state picker and per-state chart below.
#[component]
pub fn TabPanel(body: TabBody, on_event: EventHandler<Event>) -> Element {
    let tab = body.tab;
    let (overview_heading, interactive_heading) = headings(tab);
    let dropdown_id = format!("dropdown-state-{}", tab_number(tab));

    rsx! {
        div { class: "tab-panel", role: "tabpanel", aria_labelledby: "{tab.id()}",
            div { class: "tab-panel__row",
                h3 { "{overview_heading}" }
                LineChart { chart: body.overview.clone() }
            }
            div { class: "tab-panel__row",
                h3 { "{interactive_heading}" }
                StateDropdown {
                    id: dropdown_id,
                    options: body.options.clone(),
                    selected: body.selected.clone(),
                    on_change: move |key| on_event.call(Event::DropdownChanged { tab, key }),
                    on_clear: move |_| on_event.call(Event::DropdownCleared { tab }),
                }
                LineChart { chart: body.dynamic.clone() }
                ChartExport { key: "{body.dynamic.title}", chart: body.dynamic.clone() }
            }
        }
    }
}

fn headings(tab: Tab) -> (String, String) {
    match tab {
        Tab::Employment => (
            t!("employment-overview-heading"),
            t!("employment-interactive-heading"),
        ),
        Tab::Labour => (
            t!("labour-overview-heading"),
            t!("labour-interactive-heading"),
        ),
    }
}

fn tab_number(tab: Tab) -> u8 {
    match tab {
        Tab::Employment => 1,
        Tab::Labour => 2,
    }
}
