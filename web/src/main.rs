use std::sync::Arc;

use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::config::DashboardConfig;
use ui::views::{use_session_provider, DashboardView};

fn main() {
    dioxus::logger::initialize_default();

    let config = DashboardConfig::from_env();
    let dashboard = match ui::data::load(&config) {
        Ok(dashboard) => Arc::new(dashboard),
        Err(err) => {
            error!(%err, "failed to load dashboard data");
            panic!("failed to load dashboard data: {err}");
        }
    };
    info!(source = %config.data_source, "dashboard data ready");

    LaunchBuilder::new().with_context(dashboard).launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Session state sits above the keyed body so a locale switch keeps it.
    use_session_provider();

    // AppNavbar updates this on locale changes; keying the body on it remounts
    // the tree so every label is looked up again.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    let title = ui::i18n::app_title();

    rsx! {
        document::Title { "{title}" }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        div { key: "{lang_code()}",
            AppNavbar {}
            DashboardView {}
        }
    }
}
