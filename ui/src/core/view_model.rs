//! Per-session view state and its transition function.
//!
//! The presentation layer feeds [`Event`]s into [`ViewModel::apply`] and draws
//! whatever [`ViewModel::render`] returns. Nothing else mutates the state.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use dioxus::logger::tracing::debug;

use super::chart::ChartDescriptor;
use super::dashboard::Dashboard;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Employment,
    Labour,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Employment, Tab::Labour];

    /// Stable identifier used by the host (`tab-1`, `tab-2`).
    pub fn id(self) -> &'static str {
        match self {
            Tab::Employment => "tab-1",
            Tab::Labour => "tab-2",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tab id `{0}`")]
pub struct UnknownTab(pub String);

impl FromStr for Tab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.id() == s)
            .ok_or_else(|| UnknownTab(s.to_string()))
    }
}

/// Input delivered by the presentation host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    TabSelected(Tab),
    DropdownChanged { tab: Tab, key: String },
    DropdownCleared { tab: Tab },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// Malformed payload; state left as it was.
    Ignored,
}

/// What the host should display for one tab.
#[derive(Debug, Clone, PartialEq)]
pub struct TabBody {
    pub tab: Tab,
    pub overview: ChartDescriptor,
    pub dynamic: ChartDescriptor,
    pub options: Vec<String>,
    pub selected: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutput {
    pub active_tab: Tab,
    pub body: TabBody,
}

#[derive(Debug, Clone)]
pub struct ViewModel {
    dashboard: Arc<Dashboard>,
    active_tab: Tab,
    employment_selection: Option<String>,
    labour_selection: Option<String>,
}

impl ViewModel {
    pub fn new(dashboard: Arc<Dashboard>) -> Self {
        Self {
            dashboard,
            active_tab: Tab::default(),
            employment_selection: None,
            labour_selection: None,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn selection(&self, tab: Tab) -> Option<&str> {
        match tab {
            Tab::Employment => self.employment_selection.as_deref(),
            Tab::Labour => self.labour_selection.as_deref(),
        }
    }

    fn selection_mut(&mut self, tab: Tab) -> &mut Option<String> {
        match tab {
            Tab::Employment => &mut self.employment_selection,
            Tab::Labour => &mut self.labour_selection,
        }
    }

    pub fn apply(&mut self, event: Event) -> Outcome {
        match event {
            Event::TabSelected(tab) => {
                self.active_tab = tab;
            }
            Event::DropdownChanged { tab, key } => {
                let key = key.trim();
                if key.is_empty() {
                    debug!(%tab, "ignoring blank dropdown value");
                    return Outcome::Ignored;
                }
                *self.selection_mut(tab) = Some(key.to_string());
            }
            Event::DropdownCleared { tab } => {
                *self.selection_mut(tab) = None;
            }
        }
        Outcome::Applied
    }

    /// Body for `tab`, using that tab's own selection.
    pub fn render_tab(&self, tab: Tab) -> TabBody {
        let source = self.dashboard.source(tab);
        let selected = self.selection(tab);

        TabBody {
            tab,
            overview: source.overview().clone(),
            dynamic: source.chart_for(selected),
            options: source.options().to_vec(),
            selected: selected.map(str::to_string),
        }
    }

    pub fn render(&self) -> RenderOutput {
        RenderOutput {
            active_tab: self.active_tab,
            body: self.render_tab(self.active_tab),
        }
    }
}

impl PartialEq for ViewModel {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.dashboard, &other.dashboard)
            && self.active_tab == other.active_tab
            && self.employment_selection == other.employment_selection
            && self.labour_selection == other.labour_selection
    }
}
