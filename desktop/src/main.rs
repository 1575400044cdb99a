#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::sync::Arc;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::config::DashboardConfig;
use ui::core::dashboard::Dashboard;
use ui::views::{use_session_provider, DashboardView};

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    let dashboard = load_dashboard();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Labourscope – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .with_context(dashboard)
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    let dashboard = load_dashboard();
    LaunchBuilder::server().with_context(dashboard).launch(App);
}

/// Load the tables or exit: the dashboard cannot run without them.
fn load_dashboard() -> Arc<Dashboard> {
    dioxus::logger::initialize_default();

    let config = DashboardConfig::from_env();
    match ui::data::load(&config) {
        Ok(dashboard) => {
            info!(source = %config.data_source, "dashboard data ready");
            Arc::new(dashboard)
        }
        Err(err) => {
            error!(%err, "failed to load dashboard data");
            std::process::exit(1);
        }
    }
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

    // Runtime maximize fallback (in case initial builder maximize is ignored by WM)
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        div { key: "{lang_code()}",
            AppNavbar {}
            DashboardView {}
        }
    }
}
