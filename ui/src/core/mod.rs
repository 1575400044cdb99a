//! Pure dashboard logic: datasets, series selection, chart descriptors and the
//! per-session view model. Nothing here renders; the components in
//! `crate::components` draw what these types describe.

pub mod chart;
pub mod dashboard;
pub mod dataset;
pub mod format;
pub mod plot;
pub mod series;
pub mod view_model;
