//! Chart descriptors: what the presentation layer needs to draw one line chart.

use serde::Serialize;

use super::series::{Point, Series};

/// Fixed title of every x axis.
pub const YEAR_AXIS: &str = "Year";

/// Stand-in for the key when nothing has been selected.
pub const UNSELECTED_LABEL: &str = "—";

const KEY_PLACEHOLDER: &str = "{key}";

/// Title pattern containing a `{key}` placeholder, e.g. `"Employment in {key} Over Time"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleTemplate(&'static str);

impl TitleTemplate {
    pub const fn new(pattern: &'static str) -> Self {
        Self(pattern)
    }

    pub fn pattern(&self) -> &'static str {
        self.0
    }

    pub fn render(&self, key: &str) -> String {
        self.0.replace(KEY_PLACEHOLDER, key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisLabels {
    pub x: String,
    pub y: String,
}

impl AxisLabels {
    /// Year on x, `metric` on y.
    pub fn for_metric(metric: impl Into<String>) -> Self {
        Self {
            x: YEAR_AXIS.to_string(),
            y: metric.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceMode {
    Lines,
    Markers,
    LinesMarkers,
}

impl TraceMode {
    pub fn draws_line(self) -> bool {
        matches!(self, TraceMode::Lines | TraceMode::LinesMarkers)
    }

    pub fn draws_markers(self) -> bool {
        matches!(self, TraceMode::Markers | TraceMode::LinesMarkers)
    }
}

/// How hovering reports values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HoverMode {
    /// Only the point under the cursor.
    Closest,
    /// Every trace's value at the hovered x position, in one tooltip.
    XUnified,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub name: String,
    pub mode: TraceMode,
    pub points: Vec<Point>,
}

/// A single-trace line chart ready to be rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDescriptor {
    pub title: String,
    pub axes: AxisLabels,
    pub hover: HoverMode,
    pub trace: Trace,
}

impl ChartDescriptor {
    pub fn is_empty(&self) -> bool {
        self.trace.points.is_empty()
    }
}

/// Build a line+markers chart for `series`.
///
/// The series key is substituted into `title`; an empty series still produces a
/// valid chart whose trace has no points.
pub fn build(series: &Series, title: TitleTemplate, axes: &AxisLabels) -> ChartDescriptor {
    let key = series.key().unwrap_or(UNSELECTED_LABEL);

    ChartDescriptor {
        title: title.render(key),
        axes: axes.clone(),
        hover: HoverMode::XUnified,
        trace: Trace {
            name: series.key().unwrap_or_default().to_string(),
            mode: TraceMode::LinesMarkers,
            points: series.points().to_vec(),
        },
    }
}
