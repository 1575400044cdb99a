use std::sync::Arc;

use dioxus::prelude::*;

use crate::core::dashboard::Dashboard;
use crate::core::view_model::ViewModel;

/// Create this session's view model and provide it to every descendant.
///
/// Call it from the host's root component, above the subtree keyed on the
/// locale: the state must outlive remounts caused by a language switch.
/// Expects an `Arc<Dashboard>` in context.
pub fn use_session_provider() -> Signal<ViewModel> {
    let dashboard = use_context::<Arc<Dashboard>>();
    use_context_provider(move || Signal::new(ViewModel::new(dashboard)))
}

/// The view model provided by [`use_session_provider`].
pub fn use_session() -> Signal<ViewModel> {
    use_context::<Signal<ViewModel>>()
}
