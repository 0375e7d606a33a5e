//! Preset management commands: list, show, save, remove, paths.

use anyhow::{Result, bail};
use clap::Args;
use pulseeq_config::{Preset, config_file_path, system_presets_dir, user_presets_dir};
use std::time::Instant;

use super::equalizer;

#[derive(Args)]
pub struct ListArgs {
    /// Show only system (factory) presets
    #[arg(long)]
    pub system: bool,

    /// Show only user presets
    #[arg(long)]
    pub user: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Preset name; defaults to the currently active preset
    pub name: Option<String>,
}

#[derive(Args)]
pub struct SaveArgs {
    /// Name for the new preset
    pub name: String,
}

#[derive(Args)]
pub struct RemoveArgs {
    /// Preset name to remove
    pub name: String,
}

pub fn list(args: ListArgs) -> Result<()> {
    let eq = equalizer()?;
    let show_system = !args.user;
    let show_user = !args.system;

    let mut shown = 0;
    for preset in eq.catalog().iter() {
        let visible = if preset.system { show_system } else { show_user };
        if !visible {
            continue;
        }
        let tag = if preset.system { "system" } else { "user" };
        let active = if preset.name == eq.preset().name { "*" } else { " " };
        println!("{active} {:<24} [{tag}]", preset.name);
        shown += 1;
    }

    if shown == 0 {
        println!("No presets found.");
    }
    Ok(())
}

pub fn show(args: ShowArgs) -> Result<()> {
    let eq = equalizer()?;
    let preset: &Preset = match args.name.as_deref() {
        Some(name) => eq
            .catalog()
            .get(name)
            .ok_or_else(|| anyhow::anyhow!("no preset named '{name}'"))?,
        None => eq.preset(),
    };

    if preset.name.is_empty() {
        println!("(unsaved preset)");
    } else {
        println!("{}", preset.name);
    }
    println!("Plugin: {} ({})", preset.plugin_name, preset.plugin);
    println!();
    for band in &preset.bands {
        println!("{:>10}  {:>6.1} dB", band.frequency_label(), band.control);
    }
    Ok(())
}

pub fn save(args: SaveArgs) -> Result<()> {
    let mut eq = equalizer()?;
    if eq.catalog().contains(&args.name) {
        bail!("a preset named '{}' already exists", args.name);
    }

    eq.rename(&args.name, Instant::now())?;
    eq.save_active_preset()?;
    println!("Saved preset '{}'.", args.name);
    Ok(())
}

pub fn remove(args: RemoveArgs) -> Result<()> {
    let mut eq = equalizer()?;
    eq.select_named(&args.name)?;
    if !eq.actions().can_remove {
        bail!("'{}' is a system preset and cannot be removed", args.name);
    }

    eq.remove_active_preset()?;
    println!("Removed preset '{}'.", args.name);
    Ok(())
}

pub fn paths() -> Result<()> {
    println!("User presets:   {}", user_presets_dir().display());
    println!("System presets: {}", system_presets_dir().display());
    println!("Config file:    {}", config_file_path().display());
    Ok(())
}
