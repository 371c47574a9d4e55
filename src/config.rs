//! Catalog configuration
//!
//! The catalog has exactly one external setting: where to look for plugin
//! libraries. Unset means plugin discovery is skipped silently.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::traits::ModuleError;

/// Environment variable consulted when no config file sets a plugin
/// directory.
pub const PLUGIN_DIR_ENV: &str = "CYTOPIPE_PLUGIN_DIR";

/// Catalog configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Directory listed for plugin libraries at scan time.
    #[serde(default)]
    pub plugin_dir: Option<PathBuf>,
}

impl CatalogConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ModuleError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ModuleError::Config(format!("failed to read config file: {e}")))?;
        toml::from_str(&contents)
            .map_err(|e| ModuleError::Config(format!("failed to parse config TOML: {e}")))
    }

    /// Configuration from the environment alone.
    pub fn from_env() -> Self {
        Self {
            plugin_dir: std::env::var_os(PLUGIN_DIR_ENV).map(PathBuf::from),
        }
    }

    /// Fill an unset plugin directory from the environment.
    pub fn or_env(mut self) -> Self {
        if self.plugin_dir.is_none() {
            self.plugin_dir = std::env::var_os(PLUGIN_DIR_ENV).map(PathBuf::from);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_has_no_plugin_dir() {
        let config: CatalogConfig = toml::from_str("").unwrap();
        assert!(config.plugin_dir.is_none());
    }

    #[test]
    fn plugin_dir_round_trips_through_toml() {
        let config: CatalogConfig =
            toml::from_str("plugin_dir = \"/opt/cytopipe/plugins\"").unwrap();
        assert_eq!(
            config.plugin_dir.as_deref(),
            Some(Path::new("/opt/cytopipe/plugins"))
        );
    }

    #[test]
    fn load_reports_missing_file_as_config_error() {
        let err = CatalogConfig::load("/nonexistent/catalog.toml").unwrap_err();
        assert!(matches!(err, ModuleError::Config(_)));
    }
}
