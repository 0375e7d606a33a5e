//! Live-state commands: apply, band, enable, persist, status, reset.

use anyhow::Result;
use clap::{Args, ValueEnum};
use std::time::Instant;

use super::equalizer;

#[derive(Args)]
pub struct ApplyArgs {
    /// Preset name to apply
    pub name: String,
}

#[derive(Args)]
pub struct BandArgs {
    /// Band slot index (0-based)
    pub index: usize,

    /// Gain in dB
    pub gain: f32,
}

#[derive(Args)]
pub struct SwitchArgs {
    /// New state
    pub state: Switch,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Switch {
    On,
    Off,
}

impl From<Switch> for bool {
    fn from(switch: Switch) -> Self {
        matches!(switch, Switch::On)
    }
}

pub fn apply(args: ApplyArgs) -> Result<()> {
    let mut eq = equalizer()?;
    eq.select_named(&args.name)?;
    println!("Applied preset '{}'.", args.name);
    Ok(())
}

pub fn band(args: BandArgs) -> Result<()> {
    let mut eq = equalizer()?;
    eq.mutate_band(args.index, args.gain, Instant::now())?;
    // One-shot invocation: flush immediately instead of waiting out the
    // debounce quiet period.
    eq.apply()?;

    let band = &eq.preset().bands[args.index];
    println!("{}: {:.1} dB", band.frequency_label(), band.control);
    Ok(())
}

pub fn enable(args: SwitchArgs) -> Result<()> {
    let mut eq = equalizer()?;
    let enabled = bool::from(args.state);
    eq.set_enabled(enabled)?;
    println!("Equalizer {}.", if enabled { "enabled" } else { "disabled" });
    Ok(())
}

pub fn persist(args: SwitchArgs) -> Result<()> {
    let mut eq = equalizer()?;
    let persistent = bool::from(args.state);
    eq.set_persistent(persistent)?;
    println!(
        "Settings are {} persistent.",
        if persistent { "now" } else { "no longer" }
    );
    Ok(())
}

pub fn status() -> Result<()> {
    let eq = equalizer()?;
    let settings = eq.settings();
    let name = if eq.preset().name.is_empty() {
        "(unsaved)"
    } else {
        &eq.preset().name
    };

    println!("Preset:     {name}");
    println!("Enabled:    {}", if settings.enabled { "yes" } else { "no" });
    println!("Persistent: {}", if settings.persistent { "yes" } else { "no" });
    println!("Preamp:     {}", settings.preamp);
    println!(
        "Range:      {} to {} dB",
        settings.gain_range.0, settings.gain_range.1
    );
    Ok(())
}

pub fn reset() -> Result<()> {
    let mut eq = equalizer()?;
    eq.reset_to_defaults()?;
    println!("Reset to defaults.");
    Ok(())
}
