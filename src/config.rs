use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// User configuration, loaded from an optional YAML file.
///
/// Every field has a default, so a missing config file is not an error.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Browse root; defaults to the user's home directory
    pub start_dir: Option<PathBuf>,
    /// Prefilled output name in the compress prompt
    pub default_archive_name: String,
    /// Include dotfiles in directory listings
    pub show_hidden: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_dir: None,
            default_archive_name: "compressed_files.zip".to_string(),
            show_hidden: false,
        }
    }
}

impl Config {
    /// Load configuration with fallback logic.
    ///
    /// A path given on the command line must exist; otherwise
    /// `~/.config/arctui/config.yaml` is used when present, and defaults
    /// apply when it is not.
    pub fn load(cli_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = cli_path {
            if !path.exists() {
                anyhow::bail!("Config file not found at specified path: {}", path.display());
            }
            return Self::parse_file(path);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("arctui").join("config.yaml");
            if config_path.exists() {
                return Self::parse_file(&config_path);
            }
        }

        Ok(Self::default())
    }

    fn parse_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.default_archive_name, "compressed_files.zip");
        assert!(config.start_dir.is_none());
        assert!(!config.show_hidden);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: Config = serde_yaml::from_str("show_hidden: true").unwrap();
        assert!(config.show_hidden);
        assert_eq!(config.default_archive_name, "compressed_files.zip");
    }
}
