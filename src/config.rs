//! Binder configuration, read from the `[bind]` table of a TOML file.
//!
//! ```toml
//! [bind]
//! max_params = 1024
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{BindError, BindResult};

/// Placeholder limit of the MySQL protocol (u16 parameter count).
pub const DEFAULT_MAX_PARAMS: u16 = u16::MAX;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BindConfig {
    /// Highest placeholder count a statement may declare.
    pub max_params: u16,
}

impl Default for BindConfig {
    fn default() -> Self {
        Self {
            max_params: DEFAULT_MAX_PARAMS,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    bind: BindConfig,
}

impl BindConfig {
    /// Parse from a TOML document. A missing `[bind]` table yields defaults.
    pub fn from_toml_str(content: &str) -> BindResult<Self> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| BindError::Config(e.to_string()))?;
        Ok(file.bind)
    }

    /// Load from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> BindResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(BindConfig::from_toml_str("").unwrap(), BindConfig::default());
        assert_eq!(BindConfig::default().max_params, 65535);
    }

    #[test]
    fn test_bind_table() {
        let config = BindConfig::from_toml_str("[bind]\nmax_params = 16\n").unwrap();
        assert_eq!(config.max_params, 16);
    }

    #[test]
    fn test_other_tables_ignored() {
        let config =
            BindConfig::from_toml_str("[postgres]\nurl = \"postgres://localhost\"\n").unwrap();
        assert_eq!(config, BindConfig::default());
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let err = BindConfig::from_toml_str("[bind]\nmax_param = 16\n").unwrap_err();
        assert!(matches!(err, BindError::Config(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = BindConfig::load("/nonexistent/qail.toml").unwrap_err();
        assert!(matches!(err, BindError::Io(_)));
    }
}
