use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::components::TabBar;
use crate::core::view_model::{Event, Outcome, ViewModel};

use super::{use_session, TabPanel};

/// One session's dashboard.
///
/// Reads the view model from [`use_session_provider`](super::use_session_provider),
/// so remounting this view keeps the tab and selections of the session.
#[component]
pub fn DashboardView() -> Element {
    let view_model = use_session();

    let output = view_model.read().render();

    rsx! {
        section { class: "page page-dashboard",
            TabBar {
                active: output.active_tab,
                on_select: move |tab| dispatch(view_model, Event::TabSelected(tab)),
            }
            div { class: "tabs__content",
                TabPanel {
                    key: "{output.active_tab.id()}",
                    body: output.body,
                    on_event: move |event| dispatch(view_model, event),
                }
            }
        }
    }
}

fn dispatch(mut view_model: Signal<ViewModel>, event: Event) {
    debug!(?event, "dashboard event");
    if view_model.write().apply(event) == Outcome::Ignored {
        debug!("event ignored");
    }
}
