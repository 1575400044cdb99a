//! Process-wide, read-only dashboard content shared by every session.

use super::chart::{self, AxisLabels, ChartDescriptor, TitleTemplate};
use super::dataset::{Dataset, NATIONAL_KEY};
use super::series::{self, Series};
use super::view_model::Tab;

pub const EMPLOYMENT_TITLE: TitleTemplate = TitleTemplate::new("Employment in {key} Over Time");
pub const EMPLOYMENT_AXIS: &str = "Employment";

pub const LABOUR_TITLE: TitleTemplate =
    TitleTemplate::new("Labour Force Participation Rate in {key} Over Time");
pub const LABOUR_AXIS: &str = "Labour Force Participation Rate";

/// Everything one tab needs besides the user's selection.
#[derive(Debug, Clone, PartialEq)]
pub struct TabSource {
    tab: Tab,
    states: Dataset,
    options: Vec<String>,
    overview: ChartDescriptor,
    title: TitleTemplate,
    axes: AxisLabels,
}

impl TabSource {
    /// Build the national overview from the full dataset, then keep only the
    /// per-state rows for interactive use.
    pub fn new(tab: Tab, dataset: &Dataset, title: TitleTemplate, y_axis: &str) -> Self {
        let axes = AxisLabels::for_metric(y_axis);
        let overview = chart::build(
            &series::select(dataset, Some(NATIONAL_KEY)),
            title,
            &axes,
        );
        let states = dataset.without_key(NATIONAL_KEY);
        let options = states.partition_keys();

        Self {
            tab,
            states,
            options,
            overview,
            title,
            axes,
        }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Rows with the national aggregate removed.
    pub fn states(&self) -> &Dataset {
        &self.states
    }

    /// Dropdown choices, drawn from this tab's own dataset.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn overview(&self) -> &ChartDescriptor {
        &self.overview
    }

    pub fn select(&self, key: Option<&str>) -> Series {
        series::select(&self.states, key)
    }

    pub fn chart_for(&self, key: Option<&str>) -> ChartDescriptor {
        chart::build(&self.select(key), self.title, &self.axes)
    }
}

/// Both tabs' sources. Built once at startup and shared behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    employment: TabSource,
    labour: TabSource,
}

impl Dashboard {
    pub fn new(employment: &Dataset, labour: &Dataset) -> Self {
        Self {
            employment: TabSource::new(Tab::Employment, employment, EMPLOYMENT_TITLE, EMPLOYMENT_AXIS),
            labour: TabSource::new(Tab::Labour, labour, LABOUR_TITLE, LABOUR_AXIS),
        }
    }

    pub fn source(&self, tab: Tab) -> &TabSource {
        match tab {
            Tab::Employment => &self.employment,
            Tab::Labour => &self.labour,
        }
    }
}
