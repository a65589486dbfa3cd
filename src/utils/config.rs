//! Configuration and constants for the CLI.

use super::error::ConfigError;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Current chart document schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Source workbook shipped with the dashboards
pub const DEFAULT_DATA_PATH: &str = "data/AIHW_INJCAT213_Machine_readable_21062024.xlsx";

/// Directory holding the pre-rendered deck documents
pub const DEFAULT_DOCUMENTS_ROOT: &str = ".";

/// Chart documents land here when no directory is given
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// Config file picked up from the working directory
pub const DEFAULT_CONFIG_FILE: &str = "injury-insights.toml";

// Column names as published by the upstream data provider
pub const TABLE_REFERENCE_COLUMN: &str = "TableReference";
pub const MEASURE_COLUMN: &str = "MeasureValueNumber";
pub const INJURY_TYPE_COLUMN: &str = "ReportingCategory2";
pub const CATEGORY_COLUMN: &str = "ReportingCategory4";

pub const REQUIRED_COLUMNS: &[&str] = &[
    TABLE_REFERENCE_COLUMN,
    MEASURE_COLUMN,
    INJURY_TYPE_COLUMN,
    CATEGORY_COLUMN,
];

// Table selectors
pub const AGE_TABLE: &str = "H1";
pub const YEAR_TABLE: &str = "D2";

// Sentinel rows carrying aggregate totals
pub const ALL_CAUSES_SENTINEL: &str = "All external causes";
pub const ALL_AGES_SENTINEL: &str = "All ages";

/// Values read from `injury-insights.toml`
///
/// Every field is optional; CLI flags override the file and the file
/// overrides the built-in defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub data_path: Option<PathBuf>,
    pub documents_root: Option<PathBuf>,
    pub artifacts_dir: Option<PathBuf>,
}

impl Settings {
    /// Parse settings from TOML text
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Resolve settings for the CLI
    ///
    /// An explicitly named file must exist. Without one, `DEFAULT_CONFIG_FILE`
    /// is read if present and the built-in defaults are used otherwise.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if !fallback.exists() {
            debug!("No config file at {}, using defaults", fallback.display());
            return Ok(Self::default());
        }

        Self::load(fallback)
    }

    /// Load settings from a file
    ///
    /// # Errors
    /// * `ConfigError::Io` - the file is missing or unreadable
    /// * `ConfigError::Parse` - the file is not valid settings TOML
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("Loaded config from {}", path.display());
        Self::from_toml(&text)
    }

    pub fn data_path(&self, cli: Option<PathBuf>) -> PathBuf {
        cli.or_else(|| self.data_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH))
    }

    pub fn documents_root(&self, cli: Option<PathBuf>) -> PathBuf {
        cli.or_else(|| self.documents_root.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOCUMENTS_ROOT))
    }

    pub fn artifacts_dir(&self) -> PathBuf {
        self.artifacts_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ARTIFACTS_DIR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_from_toml() {
        let settings = Settings::from_toml(
            r#"
            data_path = "data/injuries.csv"
            artifacts_dir = "out"
            "#,
        )
        .unwrap();

        assert_eq!(settings.data_path, Some(PathBuf::from("data/injuries.csv")));
        assert_eq!(settings.artifacts_dir(), PathBuf::from("out"));
        assert_eq!(settings.documents_root(None), PathBuf::from("."));
    }

    #[test]
    fn test_settings_unknown_key_rejected() {
        assert!(Settings::from_toml("colour = \"red\"").is_err());
    }

    #[test]
    fn test_cli_overrides_file() {
        let settings = Settings {
            data_path: Some(PathBuf::from("from-file.xlsx")),
            ..Default::default()
        };

        assert_eq!(
            settings.data_path(Some(PathBuf::from("from-cli.csv"))),
            PathBuf::from("from-cli.csv")
        );
        assert_eq!(settings.data_path(None), PathBuf::from("from-file.xlsx"));
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        assert!(matches!(Settings::load(&path), Err(ConfigError::Io { .. })));
        assert!(matches!(
            Settings::resolve(Some(path.as_path())),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_explicit_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("other.toml");
        std::fs::write(&path, "artifacts_dir = \"charts\"\n").unwrap();

        let settings = Settings::resolve(Some(path.as_path())).unwrap();
        assert_eq!(settings.artifacts_dir(), PathBuf::from("charts"));
        assert_eq!(settings.data_path(None), PathBuf::from(DEFAULT_DATA_PATH));
    }
}
