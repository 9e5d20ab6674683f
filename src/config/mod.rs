pub mod store;

pub use store::ConfigStore;

use std::path::PathBuf;

/// Resolve the per-user settings file location.
///
/// `FIRE_DETECTOR_CONFIG` overrides the path entirely; otherwise the file
/// lives under the XDG config directory (or `~/.config` when unset).
pub fn default_path() -> PathBuf {
    if let Some(path) = std::env::var_os("FIRE_DETECTOR_CONFIG") {
        return PathBuf::from(path);
    }

    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    base.join("fire-detector").join("settings.json")
}
