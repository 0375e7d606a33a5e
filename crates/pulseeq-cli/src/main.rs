//! pulseeq CLI - command-line frontend for the pulseeq equalizer.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pulseeq")]
#[command(author, version, about = "PulseAudio LADSPA equalizer preset frontend", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available presets
    List(commands::presets::ListArgs),

    /// Show a preset's bands and gains
    Show(commands::presets::ShowArgs),

    /// Save the current state as a named user preset
    Save(commands::presets::SaveArgs),

    /// Remove a user preset
    Remove(commands::presets::RemoveArgs),

    /// Show preset and config file locations
    Paths,

    /// Apply a preset to the live equalizer
    Apply(commands::state::ApplyArgs),

    /// Set one band's gain on the current state
    Band(commands::state::BandArgs),

    /// Enable or disable the equalizer
    Enable(commands::state::SwitchArgs),

    /// Keep or drop settings across sessions
    Persist(commands::state::SwitchArgs),

    /// Show the current equalizer state
    Status,

    /// Reset the equalizer to factory defaults
    Reset,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List(args) => commands::presets::list(args),
        Commands::Show(args) => commands::presets::show(args),
        Commands::Save(args) => commands::presets::save(args),
        Commands::Remove(args) => commands::presets::remove(args),
        Commands::Paths => commands::presets::paths(),
        Commands::Apply(args) => commands::state::apply(args),
        Commands::Band(args) => commands::state::band(args),
        Commands::Enable(args) => commands::state::enable(args),
        Commands::Persist(args) => commands::state::persist(args),
        Commands::Status => commands::state::status(),
        Commands::Reset => commands::state::reset(),
    }
}
