// Application settings.
// Loads the JSON config file; a missing file yields defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SnapError};

/// Which image picker gateway to use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PickerConfig {
    /// Browse media files inside the TUI.
    Browse {
        #[serde(default)]
        dir: Option<PathBuf>,
    },
    /// Run an external program that prints the picked path.
    Command {
        program: String,
        #[serde(default)]
        args: Vec<String>,
    },
}

impl Default for PickerConfig {
    fn default() -> Self {
        PickerConfig::Browse { dir: None }
    }
}

/// Top-level config file contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub picker: PickerConfig,
    /// Default tracing filter, e.g. "info" or "snaptodo=debug".
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            picker: PickerConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load config from `path`. Returns defaults if the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)
            .map_err(|e| SnapError::Config(format!("{}: {}", path.display(), e)))?;

        if let PickerConfig::Command { program, .. } = &config.picker {
            if program.trim().is_empty() {
                return Err(SnapError::Config(format!(
                    "{}: picker program must not be empty",
                    path.display()
                )));
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(&temp_dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.picker, PickerConfig::Browse { dir: None });
    }

    #[test]
    fn test_load_command_picker() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"picker": {"kind": "command", "program": "zenity", "args": ["--file-selection"]}}"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(
            config.picker,
            PickerConfig::Command {
                program: "zenity".to_string(),
                args: vec!["--file-selection".to_string()],
            }
        );
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_load_browse_dir_and_log_level() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"picker": {"kind": "browse", "dir": "/srv/photos"}, "log_level": "debug"}"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(
            config.picker,
            PickerConfig::Browse {
                dir: Some(PathBuf::from("/srv/photos"))
            }
        );
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_malformed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Config::load(&path), Err(SnapError::Config(_))));

        fs::write(&path, r#"{"picker": {"kind": "command", "program": " "}}"#).unwrap();
        assert!(matches!(Config::load(&path), Err(SnapError::Config(_))));
    }
}
