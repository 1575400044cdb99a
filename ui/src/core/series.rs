//! Series selection: the per-key slice of a dataset handed to the chart builder.

use serde::Serialize;

use super::dataset::Dataset;

/// A single (year, value) sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub year: i32,
    pub value: f64,
}

/// Ordered samples for one partition key.
///
/// `key` is `None` when nothing has been selected yet; such a series is always empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Series {
    key: Option<String>,
    points: Vec<Point>,
}

impl Series {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Select every row of `dataset` whose partition key equals `key`.
///
/// Row order is preserved. An absent or unknown key yields an empty series.
pub fn select(dataset: &Dataset, key: Option<&str>) -> Series {
    let Some(key) = key else {
        return Series::empty();
    };

    let points = dataset
        .rows()
        .iter()
        .filter(|row| row.key == key)
        .map(|row| Point {
            year: row.year,
            value: row.value,
        })
        .collect();

    Series {
        key: Some(key.to_string()),
        points,
    }
}
