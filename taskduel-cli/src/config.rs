/// Config file loading and creation for the taskduel CLI.
///
/// Config lives at ~/.config/taskduel/config.toml.
/// All fields are optional — CLI flags override config values.
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::bail;

#[derive(Deserialize, Default)]
pub struct TaskduelConfig {
    /// Where tasks and outcomes are stored.
    pub store_path: Option<String>,
    /// Default number of working days for `snooze` without --days.
    pub snooze_days: Option<u32>,
}

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# taskduel configuration
# All values here can be overridden by CLI flags.

# Where tasks and outcomes are stored
# store_path = \"/home/me/.local/share/taskduel/store.json\"

# Default number of working days for `snooze` without --days
# snooze_days = 1
";

/// Returns the default config path: ~/.config/taskduel/config.toml
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| bail("HOME environment variable not set"));
    PathBuf::from(home).join(".config").join("taskduel").join("config.toml")
}

/// Returns the default store path: ~/.local/share/taskduel/store.json
pub fn default_store_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| bail("HOME environment variable not set"));
    PathBuf::from(home).join(".local").join("share").join("taskduel").join("store.json")
}

/// Load config from a file path. Returns default (all None) if file doesn't exist.
pub fn load_config(path: &Path) -> TaskduelConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            toml::from_str(&content)
                .unwrap_or_else(|e| bail(format!("Failed to parse config at {}: {e}", path.display())))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => TaskduelConfig::default(),
        Err(e) => bail(format!("Failed to read config at {}: {e}", path.display())),
    }
}

/// Create the default config file. Errors if it already exists.
pub fn create_default_config() -> PathBuf {
    let path = config_path();

    if path.exists() {
        bail(format!("Config file already exists at {}", path.display()));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| bail(format!("Failed to create directory {}: {e}", parent.display())));
    }

    std::fs::write(&path, DEFAULT_CONFIG_TEMPLATE)
        .unwrap_or_else(|e| bail(format!("Failed to write config to {}: {e}", path.display())));

    path
}
