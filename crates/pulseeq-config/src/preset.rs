//! Preset type and file operations.

use std::path::{Path, PathBuf};

use crate::band::{Band, default_bands};
use crate::error::ConfigError;
use crate::format;
use crate::paths::{PRESET_EXT, PresetDirs};
use crate::settings::GlobalSettings;

/// A named, ordered collection of equalizer bands plus plugin identity.
///
/// Presets come from four places: the factory default ([`Preset::default`]),
/// a standalone `.preset` file ([`Preset::from_file`]), the shared config
/// file ([`Preset::from_config_file`]), or a copy of an existing preset made
/// when the user starts editing a catalog entry.
///
/// `filename` is set exactly when the preset has been persisted; a preset
/// derived by copy must have it cleared until saved under a new identity.
/// System presets are read-only: [`Preset::save`] and [`Preset::remove`]
/// are no-ops for them.
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    /// LADSPA effect identifier.
    pub plugin: String,
    /// Plugin display name.
    pub plugin_name: String,
    /// Plugin short label.
    pub plugin_label: String,
    /// User-visible name; the catalog key. Empty for unsaved derivatives.
    pub name: String,
    /// Bands in plugin channel order.
    pub bands: Vec<Band>,
    /// Owning storage location, if the preset has been persisted.
    pub filename: Option<PathBuf>,
    /// Factory preset loaded from the system directory; read-only.
    pub system: bool,
}

impl Default for Preset {
    /// The flat 15-band `mbeq_1197` preset with no name.
    fn default() -> Self {
        Self {
            plugin: "mbeq_1197".to_string(),
            plugin_name: "Multiband EQ".to_string(),
            plugin_label: "mbeq".to_string(),
            name: String::new(),
            bands: default_bands(),
            filename: None,
            system: false,
        }
    }
}

impl Preset {
    /// Load a preset from a `.preset` file.
    ///
    /// Records the source path on the preset and tags it with the given
    /// system flag.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if the file is missing and
    /// [`ConfigError::Malformed`] if the content does not match the layout.
    pub fn from_file(path: impl AsRef<Path>, system: bool) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::from_read(path, e))?;
        let mut preset =
            format::parse_preset(&content).map_err(|e| ConfigError::malformed(path, e))?;
        preset.filename = Some(path.to_path_buf());
        preset.system = system;
        Ok(preset)
    }

    /// Load the shared config file, yielding the active preset and the
    /// global settings.
    ///
    /// The returned preset has no filename: the shared file is not its
    /// owning storage, so it counts as unsaved until the coordinator either
    /// matches it to a catalog entry or the user saves it.
    pub fn from_config_file(
        path: impl AsRef<Path>,
    ) -> Result<(Self, GlobalSettings), ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::from_read(path, e))?;
        format::parse_config(&content).map_err(|e| ConfigError::malformed(path, e))
    }

    /// Persist the preset into the user preset directory, named after
    /// `self.name`.
    ///
    /// Storage is assigned once: presets that already have a filename, and
    /// system presets, are left untouched. The full text is built in memory
    /// before any write, and the path is recorded only after the write
    /// succeeds.
    pub fn save(&mut self, dirs: &PresetDirs) -> Result<(), ConfigError> {
        if self.system || self.filename.is_some() {
            return Ok(());
        }

        if !dirs.user.exists() {
            std::fs::create_dir_all(&dirs.user)
                .map_err(|e| ConfigError::create_dir(&dirs.user, e))?;
        }

        let path = dirs.user.join(format!("{}.{PRESET_EXT}", self.name));
        let content = format::render_preset(self);
        std::fs::write(&path, content).map_err(|e| ConfigError::write_file(&path, e))?;

        tracing::info!(path = %path.display(), "saved preset");
        self.filename = Some(path);
        Ok(())
    }

    /// Delete the backing file, if any.
    ///
    /// An already-absent file is not an error; only unexpected filesystem
    /// failures are. On success the filename is cleared.
    pub fn remove(&mut self) -> Result<(), ConfigError> {
        if self.system {
            return Ok(());
        }
        let Some(path) = self.filename.take() else {
            return Ok(());
        };

        match std::fs::remove_file(&path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "removed preset file");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                // Keep the path so the caller can retry.
                self.filename = Some(path.clone());
                Err(ConfigError::remove_file(path, e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_dirs(root: &TempDir) -> PresetDirs {
        PresetDirs {
            system: root.path().join("system"),
            user: root.path().join("user"),
        }
    }

    #[test]
    fn default_preset_is_flat_mbeq() {
        let preset = Preset::default();
        assert_eq!(preset.plugin, "mbeq_1197");
        assert_eq!(preset.plugin_name, "Multiband EQ");
        assert_eq!(preset.plugin_label, "mbeq");
        assert_eq!(preset.name, "");
        assert_eq!(preset.bands.len(), 15);
        assert!(preset.filename.is_none());
        assert!(!preset.system);
    }

    #[test]
    fn save_assigns_filename_once() {
        let root = TempDir::new().unwrap();
        let dirs = test_dirs(&root);

        let mut preset = Preset {
            name: "Loud".to_string(),
            ..Preset::default()
        };
        preset.save(&dirs).unwrap();

        let path = dirs.user.join("Loud.preset");
        assert_eq!(preset.filename.as_deref(), Some(path.as_path()));
        assert!(path.is_file());

        // A second save must not rewrite or relocate the preset.
        preset.name = "Louder".to_string();
        preset.save(&dirs).unwrap();
        assert_eq!(preset.filename.as_deref(), Some(path.as_path()));
        assert!(!dirs.user.join("Louder.preset").exists());
    }

    #[test]
    fn save_is_a_noop_for_system_presets() {
        let root = TempDir::new().unwrap();
        let dirs = test_dirs(&root);

        let mut preset = Preset {
            name: "Factory".to_string(),
            system: true,
            ..Preset::default()
        };
        preset.save(&dirs).unwrap();
        assert!(preset.filename.is_none());
        assert!(!dirs.user.exists());
    }

    #[test]
    fn load_records_path_and_system_flag() {
        let root = TempDir::new().unwrap();
        let dirs = test_dirs(&root);

        let mut preset = Preset {
            name: "Rock".to_string(),
            ..Preset::default()
        };
        preset.bands[0].control = 5.0;
        preset.save(&dirs).unwrap();

        let loaded = Preset::from_file(dirs.user.join("Rock.preset"), true).unwrap();
        assert_eq!(loaded.name, "Rock");
        assert_eq!(loaded.bands, preset.bands);
        assert!(loaded.system);
        assert_eq!(loaded.filename, preset.filename);
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let err = Preset::from_file("/nonexistent/path/x.preset", false).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn load_garbage_is_malformed() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("bad.preset");
        std::fs::write(&path, "mbeq_1197\nMultiband EQ\nmbeq\n\nBad\n4\n0.0\n").unwrap();
        let err = Preset::from_file(&path, false).unwrap_err();
        assert!(matches!(err, ConfigError::Malformed { .. }));
    }

    #[test]
    fn remove_deletes_file_and_clears_filename() {
        let root = TempDir::new().unwrap();
        let dirs = test_dirs(&root);

        let mut preset = Preset {
            name: "Gone".to_string(),
            ..Preset::default()
        };
        preset.save(&dirs).unwrap();
        let path = preset.filename.clone().unwrap();

        preset.remove().unwrap();
        assert!(!path.exists());
        assert!(preset.filename.is_none());
    }

    #[test]
    fn remove_tolerates_already_absent_file() {
        let mut preset = Preset {
            filename: Some(PathBuf::from("/nonexistent/path/x.preset")),
            ..Preset::default()
        };
        preset.remove().unwrap();
        assert!(preset.filename.is_none());
    }

    #[test]
    fn remove_without_filename_is_a_noop() {
        let mut preset = Preset::default();
        preset.remove().unwrap();
    }

    #[test]
    fn config_file_round_trip() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("equalizerrc");

        let mut preset = Preset {
            name: "Laptop".to_string(),
            ..Preset::default()
        };
        preset.bands[7].control = -6.5;
        let settings = GlobalSettings {
            enabled: false,
            ..GlobalSettings::default()
        };

        std::fs::write(&path, format::render_config(&preset, &settings)).unwrap();

        let (loaded, loaded_settings) = Preset::from_config_file(&path).unwrap();
        assert_eq!(loaded.name, "Laptop");
        assert_eq!(loaded.bands, preset.bands);
        assert!(loaded.filename.is_none());
        assert_eq!(loaded_settings, settings);
    }
}
