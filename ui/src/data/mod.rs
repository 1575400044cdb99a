//! Data provider: reads the employment and labour participation tables once at
//! startup and turns them into the shared [`Dashboard`].
//!
//! Tables come either from CSV files embedded at compile time (`ui/data/`) or,
//! on native builds, from a directory chosen through [`DashboardConfig`].

mod csv_table;
mod error;

pub use csv_table::{parse_dataset, MetricColumn};
pub use error::DataError;

use std::path::PathBuf;

use dioxus::logger::tracing::info;
use rust_embed::Embed;

use crate::config::{DashboardConfig, DataSource};
use crate::core::dashboard::Dashboard;
use crate::core::dataset::Dataset;

pub const EMPLOYMENT_FILE: &str = "employment.csv";
pub const LABOUR_FILE: &str = "labour.csv";

pub const EMPLOYMENT_COLUMN: MetricColumn = MetricColumn::new("Employed");
pub const LABOUR_COLUMN: MetricColumn =
    MetricColumn::new("Labour Force Participation Rate (Percentage)");

#[derive(Embed)]
#[folder = "data"]
struct EmbeddedTables;

/// Load both tables from the configured source and build the dashboard.
pub fn load(config: &DashboardConfig) -> Result<Dashboard, DataError> {
    let employment = load_table(&config.data_source, EMPLOYMENT_FILE, EMPLOYMENT_COLUMN)?;
    let labour = load_table(&config.data_source, LABOUR_FILE, LABOUR_COLUMN)?;
    Ok(Dashboard::new(&employment, &labour))
}

fn load_table(
    source: &DataSource,
    file: &str,
    column: MetricColumn,
) -> Result<Dataset, DataError> {
    let bytes = read_bytes(source, file)?;
    let dataset = parse_dataset(file, bytes.as_slice(), column)?;
    info!(file, rows = dataset.len(), source = %source, "loaded table");
    Ok(dataset)
}

fn read_bytes(source: &DataSource, file: &str) -> Result<Vec<u8>, DataError> {
    match source {
        DataSource::Embedded => EmbeddedTables::get(file)
            .map(|embedded| embedded.data.into_owned())
            .ok_or_else(|| DataError::Missing {
                file: file.to_string(),
            }),
        DataSource::Directory(dir) => {
            let path: PathBuf = dir.join(file);
            std::fs::read(&path).map_err(|source| DataError::Io { path, source })
        }
    }
}
