use std::path::{Path, PathBuf};

use super::keybinding;
use super::{Config, Keybinding, KeybindingsFile};

/// Returns the config directory: `~/.config/winplace/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("winplace"))
}

/// Returns the config file path: `~/.config/winplace/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Returns the keybindings file path: `~/.config/winplace/keybindings.toml`.
pub fn keybindings_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("keybindings.toml"))
}

/// Tries to load and parse `config.toml`.
///
/// Returns `Ok(None)` if the file does not exist, or an error string
/// describing what went wrong.
pub fn try_load() -> Result<Option<Config>, String> {
    let path = config_path().ok_or("could not determine config path")?;
    let Some(content) = read_optional(&path)? else {
        return Ok(None);
    };
    let mut config = parse_config(&content).map_err(|e| format!("{}: {e}", path.display()))?;
    config.validate();
    Ok(Some(config))
}

/// Loads the configuration from disk, falling back to defaults.
///
/// Values are clamped via [`Config::validate`]. A missing file silently
/// yields defaults; unreadable or malformed files print a warning.
pub fn load() -> Config {
    load_or_default(try_load, Config::default)
}

/// Tries to load and parse `keybindings.toml`.
pub fn try_load_keybindings() -> Result<Option<Vec<Keybinding>>, String> {
    let path = keybindings_path().ok_or("could not determine keybindings path")?;
    let Some(content) = read_optional(&path)? else {
        return Ok(None);
    };
    let bindings = parse_keybindings(&content).map_err(|e| format!("{}: {e}", path.display()))?;
    Ok(Some(bindings))
}

/// Loads keybindings from `~/.config/winplace/keybindings.toml`.
///
/// Falls back to the built-in defaults if the file is missing or invalid.
pub fn load_keybindings() -> Vec<Keybinding> {
    load_or_default(try_load_keybindings, keybinding::defaults)
}

pub(crate) fn parse_config(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
}

pub(crate) fn parse_keybindings(content: &str) -> Result<Vec<Keybinding>, toml::de::Error> {
    let file: KeybindingsFile = toml::from_str(content)?;
    Ok(file.keybinding)
}

/// Reads a file, mapping "not found" to `Ok(None)`.
fn read_optional(path: &Path) -> Result<Option<String>, String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(format!("{}: {e}", path.display())),
    }
}

/// Loads a config value from disk, falling back to defaults.
fn load_or_default<T>(
    try_load: impl FnOnce() -> Result<Option<T>, String>,
    default: impl Fn() -> T,
) -> T {
    match try_load() {
        Ok(Some(val)) => val,
        Ok(None) => default(),
        Err(e) => {
            eprintln!("Warning: {e}");
            default()
        }
    }
}
