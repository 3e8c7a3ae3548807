//! Optional TOML configuration for the session tool.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ToolsConfig {
    pub map_size: Option<usize>,
    pub seed_hint: Option<String>,
}

impl ToolsConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("invalid config file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn loads_both_fields_from_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("waylost.toml");
        fs::write(&path, "map_size = 25\nseed_hint = \"room-seed\"\n").unwrap();

        let config = ToolsConfig::load(&path).unwrap();
        assert_eq!(config.map_size, Some(25));
        assert_eq!(config.seed_hint.as_deref(), Some("room-seed"));
    }

    #[test]
    fn missing_fields_default_to_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("waylost.toml");
        fs::write(&path, "").unwrap();

        assert_eq!(ToolsConfig::load(&path).unwrap(), ToolsConfig::default());
    }

    #[test]
    fn unreadable_file_reports_the_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = ToolsConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("missing.toml"));
    }
}
