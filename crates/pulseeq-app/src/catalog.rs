//! Preset catalog: discovery and name-keyed merge of system and user
//! presets.

use std::collections::BTreeMap;

use pulseeq_config::{Preset, PresetDirs, list_presets_in};

/// All known presets, keyed by display name, iterated in name order.
///
/// Loading is an explicit two-pass merge: the system directory first (tagged
/// read-only), then the user directory, with user presets overwriting system
/// presets of the same name. Precedence is load order, not a field-level
/// merge.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: BTreeMap<String, Preset>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load all presets from the given directories.
    ///
    /// An absent directory contributes zero presets. Files that fail to
    /// parse are skipped with a warning rather than aborting the whole
    /// catalog: one corrupt preset must not hide the rest.
    pub fn load(dirs: &PresetDirs) -> Self {
        let mut catalog = Self::new();
        catalog.load_pass(dirs, true);
        catalog.load_pass(dirs, false);
        tracing::debug!(count = catalog.len(), "catalog loaded");
        catalog
    }

    fn load_pass(&mut self, dirs: &PresetDirs, system: bool) {
        let dir = if system { &dirs.system } else { &dirs.user };
        for path in list_presets_in(dir) {
            match Preset::from_file(&path, system) {
                Ok(preset) => {
                    self.insert(preset);
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable preset");
                }
            }
        }
    }

    /// Insert a preset under its name, replacing any existing entry.
    pub fn insert(&mut self, preset: Preset) -> Option<Preset> {
        self.entries.insert(preset.name.clone(), preset)
    }

    /// Remove the entry with the given name.
    pub fn remove(&mut self, name: &str) -> Option<Preset> {
        self.entries.remove(name)
    }

    /// Look up a preset by name.
    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.entries.get(name)
    }

    /// Whether a preset with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of presets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over presets in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.entries.values()
    }

    /// Preset names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulseeq_config::format;
    use tempfile::TempDir;

    fn write_preset(dir: &std::path::Path, name: &str, first_control: f32) {
        std::fs::create_dir_all(dir).unwrap();
        let mut preset = Preset {
            name: name.to_string(),
            ..Preset::default()
        };
        preset.bands[0].control = first_control;
        std::fs::write(
            dir.join(format!("{name}.preset")),
            format::render_preset(&preset),
        )
        .unwrap();
    }

    fn dirs(root: &TempDir) -> PresetDirs {
        PresetDirs {
            system: root.path().join("system"),
            user: root.path().join("user"),
        }
    }

    #[test]
    fn loads_both_directories_with_flags() {
        let root = TempDir::new().unwrap();
        let dirs = dirs(&root);
        write_preset(&dirs.system, "Classical", 0.0);
        write_preset(&dirs.user, "Mine", 3.0);

        let catalog = Catalog::load(&dirs);
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get("Classical").unwrap().system);
        assert!(!catalog.get("Mine").unwrap().system);
    }

    #[test]
    fn user_preset_overrides_system_preset_of_same_name() {
        let root = TempDir::new().unwrap();
        let dirs = dirs(&root);
        write_preset(&dirs.system, "Flat", 0.0);
        write_preset(&dirs.user, "Flat", 2.5);

        let catalog = Catalog::load(&dirs);
        assert_eq!(catalog.len(), 1);
        let flat = catalog.get("Flat").unwrap();
        assert!(!flat.system);
        assert_eq!(flat.bands[0].control, 2.5);
    }

    #[test]
    fn absent_directories_yield_empty_catalog() {
        let root = TempDir::new().unwrap();
        let catalog = Catalog::load(&dirs(&root));
        assert!(catalog.is_empty());
    }

    #[test]
    fn corrupt_preset_is_skipped() {
        let root = TempDir::new().unwrap();
        let dirs = dirs(&root);
        write_preset(&dirs.user, "Good", 1.0);
        std::fs::write(dirs.user.join("Bad.preset"), "not a preset").unwrap();

        let catalog = Catalog::load(&dirs);
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("Good"));
    }

    #[test]
    fn names_iterate_in_sorted_order() {
        let root = TempDir::new().unwrap();
        let dirs = dirs(&root);
        write_preset(&dirs.user, "Rock", 0.0);
        write_preset(&dirs.user, "Ambient", 0.0);
        write_preset(&dirs.user, "Flat", 0.0);

        let catalog = Catalog::load(&dirs);
        let names: Vec<_> = catalog.names().collect();
        assert_eq!(names, vec!["Ambient", "Flat", "Rock"]);
    }
}
