//! The preset catalog and settings coordinator.

use std::path::PathBuf;
use std::time::Instant;

use pulseeq_config::{ConfigError, GlobalSettings, Preset, PresetDirs, format};

use crate::catalog::Catalog;
use crate::control::ExternalControl;
use crate::debounce::FlushSlot;

/// Which preset-scoped actions are currently permitted.
///
/// Recomputed from the active preset and the catalog; frontends use this to
/// enable or disable their save/remove affordances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetActions {
    /// Saving is allowed: the name is non-empty and not already a catalog
    /// key.
    pub can_save: bool,
    /// Removal is allowed: the active preset is a catalog entry and not a
    /// system preset.
    pub can_remove: bool,
}

/// Coordinator owning the preset catalog, the active preset, and the global
/// equalizer settings.
///
/// All state lives here as explicit fields; every mutation rewrites the
/// shared config file and signals the external collaborator (either
/// immediately, or after a debounce quiet period for high-rate edits like
/// dragging a band control). The coordinator is single-threaded: it is meant
/// to be driven from one event loop, which also calls [`Equalizer::pump`]
/// periodically to fire pending debounced flushes.
#[derive(Debug)]
pub struct Equalizer<C: ExternalControl> {
    control: C,
    dirs: PresetDirs,
    config_path: PathBuf,
    catalog: Catalog,
    preset: Preset,
    settings: GlobalSettings,
    flush: FlushSlot,
}

impl<C: ExternalControl> Equalizer<C> {
    /// Bootstrap the coordinator: load the catalog, refresh and parse the
    /// shared config file, and resolve the active preset against the
    /// catalog.
    ///
    /// A missing config file at this point means the equalizer has never
    /// run; factory defaults are used. Any later read treats a missing file
    /// as a hard failure, since the collaborator must have written it.
    pub fn new(
        control: C,
        dirs: PresetDirs,
        config_path: impl Into<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let config_path = config_path.into();
        let catalog = Catalog::load(&dirs);

        let mut equalizer = Self {
            control,
            dirs,
            config_path,
            catalog,
            preset: Preset::default(),
            settings: GlobalSettings::default(),
            flush: FlushSlot::new(),
        };

        equalizer.control.get_settings();
        match Preset::from_config_file(&equalizer.config_path) {
            Ok((preset, settings)) => {
                equalizer.preset = preset;
                equalizer.settings = settings;
                equalizer.resolve_active_against_catalog();
            }
            Err(ConfigError::NotFound { path }) => {
                tracing::info!(path = %path.display(), "no config file yet, using defaults");
            }
            Err(e) => return Err(e),
        }

        Ok(equalizer)
    }

    /// The active preset.
    pub fn preset(&self) -> &Preset {
        &self.preset
    }

    /// The process-wide settings.
    pub fn settings(&self) -> &GlobalSettings {
        &self.settings
    }

    /// The loaded catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Which preset-scoped actions the active preset currently permits.
    pub fn actions(&self) -> PresetActions {
        let in_catalog = self.catalog.contains(&self.preset.name);
        PresetActions {
            can_save: !self.preset.name.is_empty() && !in_catalog,
            can_remove: in_catalog
                && self
                    .catalog
                    .get(&self.preset.name)
                    .is_some_and(|p| !p.system),
        }
    }

    /// Refresh the shared config file via the collaborator and reload the
    /// active preset and settings from it.
    ///
    /// If the parsed preset name matches a catalog entry, the catalog entry
    /// becomes the active preset (so later edits detach correctly); the
    /// freshly parsed settings are kept either way.
    pub fn load_active_state(&mut self) -> Result<(), ConfigError> {
        self.control.get_settings();
        let (preset, settings) = Preset::from_config_file(&self.config_path)?;
        self.preset = preset;
        self.settings = settings;
        self.resolve_active_against_catalog();
        Ok(())
    }

    /// Make `preset` the active preset and push the state out immediately.
    pub fn select_preset(&mut self, preset: Preset) -> Result<(), ConfigError> {
        tracing::info!(name = %preset.name, "selecting preset");
        self.preset = preset;
        self.apply()
    }

    /// Select a catalog entry by name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownPreset`] if no such entry exists.
    pub fn select_named(&mut self, name: &str) -> Result<(), ConfigError> {
        let preset = self
            .catalog
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))?;
        self.select_preset(preset)
    }

    /// Set one band's gain on the active preset.
    ///
    /// Detaches the active preset from the catalog first (copy-on-write),
    /// rounds the value to 0.1 dB, and schedules a debounced flush rather
    /// than writing immediately: dragging a control produces a burst of
    /// these.
    pub fn mutate_band(
        &mut self,
        index: usize,
        control: f32,
        now: Instant,
    ) -> Result<(), ConfigError> {
        let count = self.preset.bands.len();
        if index >= count {
            return Err(ConfigError::InvalidBand { index, count });
        }

        self.detach_if_shared();
        self.preset.bands[index].control = (control * 10.0).round() / 10.0;
        self.flush.schedule(now);
        Ok(())
    }

    /// Rename the active preset.
    ///
    /// A name that is already a catalog key selects that entry instead
    /// (applied immediately). Otherwise the active preset detaches if it was
    /// shared with the catalog, takes the new name as an unsaved user
    /// preset, and a debounced flush is scheduled.
    pub fn rename(&mut self, name: &str, now: Instant) -> Result<(), ConfigError> {
        if self.catalog.contains(name) {
            return self.select_named(name);
        }

        self.detach_if_shared();
        self.preset.name = name.to_string();
        self.preset.filename = None;
        self.preset.system = false;
        self.flush.schedule(now);
        Ok(())
    }

    /// Persist the active preset and insert it into the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidName`] when the name is empty or
    /// already a catalog key; nothing changes in that case.
    pub fn save_active_preset(&mut self) -> Result<(), ConfigError> {
        if self.preset.name.is_empty() || self.catalog.contains(&self.preset.name) {
            tracing::info!(name = %self.preset.name, "invalid preset name");
            return Err(ConfigError::InvalidName(self.preset.name.clone()));
        }

        self.preset.save(&self.dirs)?;
        self.catalog.insert(self.preset.clone());
        self.apply()
    }

    /// Remove the active preset: delete its backing file, evict the catalog
    /// entry, and re-select the now-nameless transient preset.
    ///
    /// A no-op when the active preset is not a catalog entry or is a system
    /// preset. On a filesystem failure the catalog entry stays in place so
    /// the user can retry.
    pub fn remove_active_preset(&mut self) -> Result<(), ConfigError> {
        let name = self.preset.name.clone();
        let Some(entry) = self.catalog.get(&name) else {
            tracing::debug!(name = %name, "not a catalog entry, nothing to remove");
            return Ok(());
        };
        if entry.system {
            tracing::debug!(name = %name, "system presets cannot be removed");
            return Ok(());
        }

        let mut entry = entry.clone();
        entry.remove()?;

        self.catalog.remove(&name);
        self.preset.name.clear();
        self.preset.filename = None;
        tracing::info!(name = %name, "removed preset");
        self.apply()
    }

    /// Enable or disable the equalizer; pushed out immediately.
    pub fn set_enabled(&mut self, enabled: bool) -> Result<(), ConfigError> {
        self.settings.enabled = enabled;
        self.apply()
    }

    /// Toggle persistence across sessions; pushed out immediately.
    pub fn set_persistent(&mut self, persistent: bool) -> Result<(), ConfigError> {
        self.settings.persistent = persistent;
        self.apply()
    }

    /// Set the preamp passthrough value; pushed out immediately.
    pub fn set_preamp(&mut self, preamp: impl Into<String>) -> Result<(), ConfigError> {
        self.settings.preamp = preamp.into();
        self.apply()
    }

    /// Ask the collaborator to restore its factory defaults, then reload and
    /// re-apply the resulting state.
    pub fn reset_to_defaults(&mut self) -> Result<(), ConfigError> {
        self.control.reset_settings();
        self.load_active_state()?;
        self.apply()
    }

    /// Fire a pending debounced flush if its quiet period has passed.
    ///
    /// Returns whether a flush happened. The driving event loop calls this
    /// periodically (or after its timer fires).
    pub fn pump(&mut self, now: Instant) -> Result<bool, ConfigError> {
        if self.flush.fire_if_due(now) {
            self.apply()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Push the in-memory state to the shared config file and signal the
    /// collaborator to re-apply it.
    ///
    /// The full text is rendered in memory before the write, so a failure
    /// cannot leave a truncated file. Any pending debounced flush is
    /// superseded by this one.
    pub fn apply(&mut self) -> Result<(), ConfigError> {
        self.flush.cancel();
        let content = format::render_config(&self.preset, &self.settings);
        std::fs::write(&self.config_path, content)
            .map_err(|e| ConfigError::write_file(&self.config_path, e))?;
        self.control.apply_settings();
        Ok(())
    }

    /// Copy-on-write barrier: if the active preset is shared with the
    /// catalog (its name is a catalog key), sever it before mutation.
    /// The detached preset is an unsaved, unnamed user derivative; the
    /// catalog entry stays untouched.
    fn detach_if_shared(&mut self) {
        if self.preset.name.is_empty() || !self.catalog.contains(&self.preset.name) {
            return;
        }
        tracing::debug!(name = %self.preset.name, "detaching active preset from catalog");
        self.preset.name.clear();
        self.preset.filename = None;
        self.preset.system = false;
    }

    fn resolve_active_against_catalog(&mut self) {
        if self.preset.name.is_empty() {
            return;
        }
        if let Some(entry) = self.catalog.get(&self.preset.name) {
            self.preset = entry.clone();
        }
    }
}
