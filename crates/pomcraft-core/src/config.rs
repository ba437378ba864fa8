use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Global user configuration loaded from `~/.pomcraft/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub publishing: PublishingDefaults,
}

/// Publication defaults from `[publishing]` in global config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishingDefaults {
    #[serde(default, rename = "with-javadoc-and-sources")]
    pub with_javadoc_and_sources: bool,
    #[serde(default = "default_output_dir", rename = "output-dir")]
    pub output_dir: String,
}

impl Default for PublishingDefaults {
    fn default() -> Self {
        Self {
            with_javadoc_and_sources: false,
            output_dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> String {
    "build/publications".to_string()
}

impl GlobalConfig {
    /// Load the global configuration from `~/.pomcraft/config.toml`, or return defaults if the file doesn't exist.
    pub fn load() -> miette::Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load the global configuration from an explicit path.
    pub fn load_from(path: &Path) -> miette::Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| {
            pomcraft_util::errors::PomcraftError::Generic {
                message: format!("Failed to read global config: {e}"),
            }
        })?;
        toml::from_str(&content).map_err(|e| {
            pomcraft_util::errors::PomcraftError::Generic {
                message: format!("Failed to parse global config: {e}"),
            }
            .into()
        })
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }
}

/// Returns the user's home directory, or `.` when it cannot be determined.
pub fn home_dir() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home)
}

/// Returns the path to the pomcraft data directory (`~/.pomcraft/`).
pub fn dirs_path() -> PathBuf {
    home_dir().join(".pomcraft")
}
