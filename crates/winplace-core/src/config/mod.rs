pub mod keybinding;
mod loader;
pub mod template;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;

pub use keybinding::{Keybinding, Modifier};
pub use loader::{config_dir, config_path, keybindings_path, load, load_keybindings};

/// Default SQLite file name inside the config directory.
pub const DEFAULT_DATABASE_NAME: &str = "WindowPositions.sqlite";

/// Top-level configuration for Winplace.
///
/// Loaded from `~/.config/winplace/config.toml`. Missing sections fall
/// back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File logging settings.
    pub logging: LogConfig,
    /// Where the last snapshot is kept between runs.
    pub persistence: PersistenceConfig,
}

/// Settings for the on-disk snapshot copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistenceConfig {
    /// Whether snapshots are written to disk. Defaults to `true`.
    pub enabled: bool,
    /// Database file. Defaults to `~/.config/winplace/WindowPositions.sqlite`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
        }
    }
}

impl PersistenceConfig {
    /// Resolves the database path, or `None` when persistence is off.
    pub fn database_path(&self) -> Option<PathBuf> {
        if !self.enabled {
            return None;
        }
        match &self.path {
            Some(path) => Some(path.clone()),
            None => config_dir().map(|d| d.join(DEFAULT_DATABASE_NAME)),
        }
    }
}

impl Config {
    /// Clamps values to safe ranges.
    pub fn validate(&mut self) {
        self.logging.max_file_mb = self.logging.max_file_mb.clamp(1, 1024);
        if self
            .persistence
            .path
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            self.persistence.path = None;
        }
    }
}

/// Wrapper for deserializing the keybindings file.
///
/// The file contains a top-level `[[keybinding]]` array of tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct KeybindingsFile {
    #[serde(default = "keybinding::defaults")]
    keybinding: Vec<Keybinding>,
}
