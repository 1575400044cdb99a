use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use dioxus::logger::tracing::warn;

use super::DataError;
use crate::core::dataset::{Dataset, Row};

pub const KEY_COLUMN: &str = "State/Country";
pub const YEAR_COLUMN: &str = "Year";

/// Name of the numeric column a table is read for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricColumn(&'static str);

impl MetricColumn {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

/// Parse a `State/Country, Year, <metric>` table.
///
/// Headers and cells are trimmed, so a header written as
/// `"  Labour Force Participation Rate (Percentage)  "` still matches. Rows with
/// a blank metric cell are skipped; anything else that fails to parse aborts
/// the load.
pub fn parse_dataset<R: Read>(
    file: &str,
    reader: R,
    column: MetricColumn,
) -> Result<Dataset, DataError> {
    let csv_err = |source| DataError::Csv {
        file: file.to_string(),
        source,
    };

    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let headers = reader.headers().map_err(csv_err)?.clone();

    let key_idx = column_index(&headers, file, KEY_COLUMN)?;
    let year_idx = column_index(&headers, file, YEAR_COLUMN)?;
    let value_idx = column_index(&headers, file, column.name())?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let key = record.get(key_idx).unwrap_or_default();
        let year_raw = record.get(year_idx).unwrap_or_default();
        let value_raw = record.get(value_idx).unwrap_or_default();

        if value_raw.is_empty() {
            warn!(file, line, key, "skipping row with blank {}", column.name());
            continue;
        }

        let year = parse_year(year_raw).ok_or_else(|| DataError::InvalidYear {
            file: file.to_string(),
            line,
            value: year_raw.to_string(),
        })?;
        let value = parse_value(value_raw).ok_or_else(|| DataError::InvalidValue {
            file: file.to_string(),
            line,
            column: column.name().to_string(),
            value: value_raw.to_string(),
        })?;

        rows.push(Row::new(key, year, value));
    }

    Ok(Dataset::new(column.name(), rows))
}

fn column_index(headers: &StringRecord, file: &str, name: &str) -> Result<usize, DataError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| DataError::MissingColumn {
            file: file.to_string(),
            column: name.to_string(),
        })
}

/// Accepts `2019` as well as spreadsheet exports such as `2019.0`.
fn parse_year(raw: &str) -> Option<i32> {
    raw.parse::<i32>().ok().or_else(|| {
        let float = raw.parse::<f64>().ok()?;
        (float.fract() == 0.0).then_some(float as i32)
    })
}

/// Accepts thousands separators (`15,073.4`).
fn parse_value(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
