//! Preset model and flat-file configuration format for the pulseeq
//! equalizer frontend.
//!
//! This crate is the storage leaf of the workspace: it defines the preset
//! data model ([`Band`], [`Preset`], [`GlobalSettings`]) and the positional
//! line format shared with the external `pulseaudio-equalizer` control
//! script. The format must round-trip byte for byte — the script reads
//! fields by line offset — so serialization is hand-rolled rather than
//! going through a generic format.
//!
//! # Example
//!
//! ```rust,no_run
//! use pulseeq_config::{Preset, PresetDirs};
//!
//! // Load a preset file
//! let preset = Preset::from_file("Classical.preset", false).unwrap();
//!
//! // Derive and save a user copy under a new name
//! let mut copy = Preset { name: "Mine".into(), filename: None, system: false, ..preset };
//! copy.save(&PresetDirs::default()).unwrap();
//! ```

mod band;
mod error;
mod preset;
mod settings;

/// The positional line format shared with the external control script.
pub mod format;

/// Preset and configuration file locations.
pub mod paths;

pub use band::{Band, DEFAULT_FREQUENCIES, default_bands};
pub use error::ConfigError;
pub use format::FormatError;
pub use preset::Preset;
pub use settings::GlobalSettings;
pub use paths::{
    PRESET_EXT, PresetDirs, config_file_path, list_presets_in, preset_name_from_path,
    system_presets_dir, user_config_dir, user_presets_dir,
};
