use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Global user configuration loaded from `~/.efftree/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output settings from `[output]` in global config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format used when no subcommand is given: "tree" or "list".
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "tree".to_string()
}

impl GlobalConfig {
    /// Load the global configuration from `~/.efftree/config.toml`, or return defaults if the file doesn't exist.
    pub fn load() -> miette::Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load the configuration from an explicit path (defaults if absent).
    pub fn load_from(path: &Path) -> miette::Result<Self> {
        if path.is_file() {
            let content = std::fs::read_to_string(path).map_err(|e| {
                efftree_util::errors::EfftreeError::Generic {
                    message: format!("Failed to read global config: {e}"),
                }
            })?;
            toml::from_str(&content).map_err(|e| {
                efftree_util::errors::EfftreeError::Generic {
                    message: format!("Failed to parse global config: {e}"),
                }
                .into()
            })
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }
}

/// Returns the path to the efftree data directory (`~/.efftree/`).
pub fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".efftree")
}
