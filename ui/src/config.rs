//! Startup configuration for the dashboard.

use std::fmt;
use std::path::PathBuf;

/// Environment variable pointing native builds at a directory of CSV tables.
pub const DATA_DIR_ENV: &str = "LABOURSCOPE_DATA_DIR";

/// Where the data provider reads its tables from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DataSource {
    /// Tables compiled into the binary.
    #[default]
    Embedded,
    /// `employment.csv` and `labour.csv` inside this directory.
    Directory(PathBuf),
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Embedded => f.write_str("embedded"),
            DataSource::Directory(dir) => write!(f, "{}", dir.display()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardConfig {
    pub data_source: DataSource,
}

impl DashboardConfig {
    /// Embedded tables unless `LABOURSCOPE_DATA_DIR` is set (native builds only).
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::from_data_dir(std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
        }

        #[cfg(target_arch = "wasm32")]
        {
            Self::default()
        }
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    fn from_data_dir(dir: Option<PathBuf>) -> Self {
        let data_source = match dir {
            Some(dir) if !dir.as_os_str().is_empty() => DataSource::Directory(dir),
            _ => DataSource::Embedded,
        };
        Self { data_source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dir_falls_back_to_embedded() {
        assert_eq!(
            DashboardConfig::from_data_dir(Some(PathBuf::new())).data_source,
            DataSource::Embedded
        );
        assert_eq!(
            DashboardConfig::from_data_dir(None).data_source,
            DataSource::Embedded
        );
    }

    #[test]
    fn directory_override() {
        let config = DashboardConfig::from_data_dir(Some(PathBuf::from("/srv/data")));
        assert_eq!(
            config.data_source,
            DataSource::Directory(PathBuf::from("/srv/data"))
        );
        assert_eq!(config.data_source.to_string(), "/srv/data");
    }
}
