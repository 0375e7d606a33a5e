//! Preset and configuration file locations.
//!
//! - **User presets**: `~/.config/pulseeq/presets/` (Linux),
//!   `%APPDATA%\pulseeq\presets\` (Windows)
//! - **System presets**: `/usr/share/pulseeq/presets/` (Linux), read-only
//!   factory presets
//! - **Shared config file**: `~/.config/pulseeq/equalizerrc`, the single
//!   file exchanged with the external control script

use std::path::{Path, PathBuf};

/// Application name used for directory paths.
const APP_NAME: &str = "pulseeq";

/// Subdirectory name for presets.
const PRESETS_SUBDIR: &str = "presets";

/// File extension of preset files.
pub const PRESET_EXT: &str = "preset";

/// File name of the shared config file.
const CONFIG_FILE_NAME: &str = "equalizerrc";

/// The pair of preset directories a catalog is loaded from.
///
/// Kept as a value so tests (and alternative frontends) can point the store
/// at scratch directories instead of the real ones.
#[derive(Debug, Clone)]
pub struct PresetDirs {
    /// Read-only factory preset directory.
    pub system: PathBuf,
    /// User-writable preset directory.
    pub user: PathBuf,
}

impl Default for PresetDirs {
    fn default() -> Self {
        Self {
            system: system_presets_dir(),
            user: user_presets_dir(),
        }
    }
}

/// Returns the user-specific presets directory.
///
/// Falls back to a relative path if the platform config directory cannot be
/// determined.
pub fn user_presets_dir() -> PathBuf {
    user_config_dir().join(PRESETS_SUBDIR)
}

/// Returns the user-specific configuration directory.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Returns the system-wide presets directory holding factory presets.
pub fn system_presets_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        PathBuf::from("/usr/share").join(APP_NAME).join(PRESETS_SUBDIR)
    }
    #[cfg(not(target_os = "linux"))]
    {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_NAME)
            .join(PRESETS_SUBDIR)
    }
}

/// Returns the path of the shared config file exchanged with the external
/// control script.
pub fn config_file_path() -> PathBuf {
    user_config_dir().join(CONFIG_FILE_NAME)
}

/// List all `.preset` files in a directory.
///
/// An absent or unreadable directory yields zero presets, not an error.
pub fn list_presets_in(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut presets: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().map(|ext| ext == PRESET_EXT).unwrap_or(false)
        })
        .collect();
    presets.sort();
    presets
}

/// Get the preset name from a file path (the file stem).
pub fn preset_name_from_path(path: &Path) -> Option<String> {
    path.file_stem().and_then(|s| s.to_str()).map(|s| s.to_string())
}
