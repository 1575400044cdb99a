mod app_navbar;
pub use app_navbar::AppNavbar;

mod line_chart;
pub use line_chart::LineChart;

mod state_dropdown;
pub use state_dropdown::StateDropdown;

mod tab_bar;
pub use tab_bar::{tab_label, TabBar};
