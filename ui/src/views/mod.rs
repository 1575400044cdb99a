mod dashboard;
pub use dashboard::DashboardView;

mod session;
pub use session::{use_session, use_session_provider};

mod tab_panel;
pub use tab_panel::TabPanel;
