//! Process configuration read from the environment.

use std::path::PathBuf;

use crate::planner::SearchConfig;
use crate::report::ReportConfig;

/// Environment variable naming the dataset file.
pub const DATA_VAR: &str = "SHRINE_DATA";

/// Environment variable naming the output directory.
pub const OUT_DIR_VAR: &str = "SHRINE_OUT_DIR";

/// Environment variable overriding the route length.
pub const ROUTE_LENGTH_VAR: &str = "SHRINE_ROUTE_LENGTH";

/// Default dataset path.
const DEFAULT_DATA_PATH: &str = "data.json";

/// Error from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// Everything a run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Path of the dataset to load.
    pub data_path: PathBuf,
    pub search: SearchConfig,
    pub report: ReportConfig,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, using defaults for anything unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_path = lookup(DATA_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        let report = lookup(OUT_DIR_VAR)
            .map(ReportConfig::new)
            .unwrap_or_default();

        let search = match lookup(ROUTE_LENGTH_VAR) {
            Some(value) => {
                let route_length = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    var: ROUTE_LENGTH_VAR,
                    value: value.clone(),
                })?;
                SearchConfig::new(route_length)
            }
            None => SearchConfig::default(),
        };

        Ok(Self {
            data_path,
            search,
            report,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            search: SearchConfig::default(),
            report: ReportConfig::default(),
        }
    }
}
