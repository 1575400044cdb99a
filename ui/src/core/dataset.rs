//! Immutable tabular datasets keyed by state or country.

use std::collections::HashSet;

/// Partition key of the national aggregate rows.
pub const NATIONAL_KEY: &str = "Malaysia";

/// One observation: a partition key, the year it applies to and the metric value.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub key: String,
    pub year: i32,
    pub value: f64,
}

impl Row {
    pub fn new(key: impl Into<String>, year: i32, value: f64) -> Self {
        Self {
            key: key.into(),
            year,
            value,
        }
    }
}

/// Rows of a single metric in their source order.
///
/// A dataset is built once by the data provider and never mutated afterwards;
/// filtering produces a new value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    metric: String,
    rows: Vec<Row>,
}

impl Dataset {
    pub fn new(metric: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            metric: metric.into(),
            rows,
        }
    }

    /// Name of the metric column the values were read from.
    pub fn metric(&self) -> &str {
        &self.metric
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct partition keys in order of first appearance.
    pub fn partition_keys(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.rows
            .iter()
            .filter(|row| seen.insert(row.key.as_str()))
            .map(|row| row.key.clone())
            .collect()
    }

    /// Copy of this dataset without the rows for `key`.
    pub fn without_key(&self, key: &str) -> Dataset {
        Dataset {
            metric: self.metric.clone(),
            rows: self
                .rows
                .iter()
                .filter(|row| row.key != key)
                .cloned()
                .collect(),
        }
    }
}
