//! The session view model lives above the locale-keyed subtree, so switching
//! language keeps the active tab and both selections.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::dioxus_core::VirtualDom;
use dioxus::prelude::*;

use ui::core::dashboard::Dashboard;
use ui::core::dataset::{Dataset, Row};
use ui::core::view_model::{Event, Tab, ViewModel};
use ui::views::{use_session, use_session_provider};

/// What the keyed subtree saw on its latest render.
#[derive(Debug, Clone, PartialEq)]
struct Seen {
    lang: String,
    active_tab: Tab,
    employment: Option<String>,
    labour: Option<String>,
}

#[derive(Clone, Default)]
struct Harness {
    signals: Rc<RefCell<Option<(Signal<ViewModel>, Signal<String>)>>>,
    seen: Rc<RefCell<Option<Seen>>>,
}

impl PartialEq for Harness {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.seen, &other.seen)
    }
}

impl Harness {
    fn signals(&self) -> (Signal<ViewModel>, Signal<String>) {
        (*self.signals.borrow()).expect("host rendered")
    }

    fn seen(&self) -> Seen {
        self.seen.borrow().clone().expect("session view rendered")
    }
}

#[component]
fn Host(harness: Harness) -> Element {
    let view_model = use_session_provider();
    let lang = use_signal(|| "en-US".to_string());
    let signals = harness.signals.clone();
    use_hook(move || *signals.borrow_mut() = Some((view_model, lang)));

    rsx! {
        div { key: "{lang()}",
            SessionView { harness: harness.clone(), lang: lang() }
        }
    }
}

#[component]
fn SessionView(harness: Harness, lang: String) -> Element {
    let view_model = use_session();
    let vm = view_model.read();
    *harness.seen.borrow_mut() = Some(Seen {
        lang: lang.clone(),
        active_tab: vm.active_tab(),
        employment: vm.selection(Tab::Employment).map(str::to_string),
        labour: vm.selection(Tab::Labour).map(str::to_string),
    });

    rsx! { p { "{lang}" } }
}

fn dashboard() -> Arc<Dashboard> {
    let employment = Dataset::new(
        "Employed",
        vec![
            Row::new("Malaysia", 2019, 15_000_000.0),
            Row::new("Selangor", 2019, 3_000_000.0),
        ],
    );
    let labour = Dataset::new(
        "Labour Force Participation Rate (Percentage)",
        vec![
            Row::new("Malaysia", 2019, 68.7),
            Row::new("Johor", 2019, 67.0),
        ],
    );
    Arc::new(Dashboard::new(&employment, &labour))
}

fn change(tab: Tab, key: &str) -> Event {
    Event::DropdownChanged {
        tab,
        key: key.to_string(),
    }
}

#[test]
fn language_switch_keeps_session_state() {
    let harness = Harness::default();
    let mut dom = VirtualDom::new_with_props(
        Host,
        HostProps {
            harness: harness.clone(),
        },
    )
    .with_root_context(dashboard());
    dom.rebuild_in_place();

    let first = harness.seen();
    assert_eq!(first.active_tab, Tab::Employment);
    assert_eq!(first.employment, None);

    let (mut view_model, mut lang) = harness.signals();
    dom.in_runtime(|| {
        let mut vm = view_model.write();
        vm.apply(change(Tab::Employment, "Selangor"));
        vm.apply(Event::TabSelected(Tab::Labour));
        vm.apply(change(Tab::Labour, "Johor"));
    });
    dom.in_runtime(|| lang.set("ms-MY".to_string()));
    dom.process_events();
    dom.render_immediate_to_vec();

    assert_eq!(
        harness.seen(),
        Seen {
            lang: "ms-MY".to_string(),
            active_tab: Tab::Labour,
            employment: Some("Selangor".to_string()),
            labour: Some("Johor".to_string()),
        }
    );
}
