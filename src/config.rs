//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::{fs, path::Path};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Home directory could not be determined")]
    NoHomeDir,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// Connection flag shown by the status indicator. There is no real
    /// connectivity detection; this is an input, settable here or via CLI.
    #[serde(default = "default_connected")]
    pub connected: bool,
    /// Starting value of the net-flow metric, in POL.
    #[serde(default)]
    pub initial_net_flow_pol: f64,
}

fn default_connected() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            connected: true,
            initial_net_flow_pol: 0.0,
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns a `ConfigError` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)?;
        Ok(config)
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns a `ConfigError` if writing to file fails or serialization fails.
    #[allow(unused)]
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Path of the dashboard config file: `~/.pol-dashboard/config.json`.
pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let home = home::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(".pol-dashboard").join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config {
            connected: false,
            initial_net_flow_pol: 1_000_000.0,
        };
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let config = Config::default();
        let result = config.save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(
            path.parent().unwrap().exists(),
            "Parent directory does not exist"
        );
    }

    #[test]
    // Missing fields fall back to defaults when deserializing.
    fn test_load_applies_field_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "{{}}").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert!(config.connected);
        assert_eq!(config.initial_net_flow_pol, 0.0);
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let result = Config::load_from_file(&path);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }
}
