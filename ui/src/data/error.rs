use std::path::PathBuf;

use thiserror::Error;

/// Failure to load a table at startup. Every variant is fatal.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("table `{file}` is not bundled with this build")]
    Missing { file: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in `{file}`: {source}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },

    #[error("`{file}` has no `{column}` column")]
    MissingColumn { file: String, column: String },

    #[error("`{file}` line {line}: invalid year `{value}`")]
    InvalidYear {
        file: String,
        line: u64,
        value: String,
    },

    #[error("`{file}` line {line}: invalid {column} value `{value}`")]
    InvalidValue {
        file: String,
        line: u64,
        column: String,
        value: String,
    },
}
