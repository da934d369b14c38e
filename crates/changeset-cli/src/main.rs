//! Changeset CLI
//!
//! Command-line interface for Changeset

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "changeset")]
#[command(about = "Changeset - Edit scripts and structural update batches", long_about = None)]
struct Cli {
    /// Logging profile (logs go to stderr)
    #[arg(long, global = true, value_enum, default_value_t = commands::LogProfile::Production)]
    log_profile: commands::LogProfile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Diff two character sequences
    Diff(commands::diff::DiffArgs),
    /// Diff two lists of sections, reconciling rows inside changed sections
    Sections(commands::sections::SectionsArgs),
    /// Replay a series of snapshots from a file or the built-in fixtures
    Replay(commands::replay::ReplayArgs),
}

fn main() {
    let cli = Cli::parse();
    changeset_core::logging_facility::init(cli.log_profile.into());

    let result = match cli.command {
        Commands::Diff(args) => commands::diff::execute(args),
        Commands::Sections(args) => commands::sections::execute(args),
        Commands::Replay(args) => commands::replay::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
