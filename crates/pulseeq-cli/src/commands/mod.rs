//! CLI command implementations.

pub mod presets;
pub mod state;

use anyhow::Result;
use pulseeq_app::{Equalizer, EqualizerCommand};
use pulseeq_config::{PresetDirs, config_file_path};

/// Build a coordinator wired to the real control script and the standard
/// directories.
pub fn equalizer() -> Result<Equalizer<EqualizerCommand>> {
    let eq = Equalizer::new(
        EqualizerCommand::new(),
        PresetDirs::default(),
        config_file_path(),
    )?;
    Ok(eq)
}
