//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use race_circuit_core::Gender;

#[derive(Parser)]
#[command(name = "race-circuit")]
#[command(about = "Race schedule and point-series standings", long_about = None)]
pub(crate) struct Cli {
    /// Directory containing races.yaml and roster.yaml (defaults to the saved
    /// setting, then the built-in season)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show the race schedule
    Races,

    /// Show point-series standings per age group
    Standings {
        /// Only show one gender (female, male)
        #[arg(short, long)]
        gender: Option<Gender>,

        /// Show at most this many participants per group
        #[arg(short, long)]
        top: Option<usize>,

        /// Include participants without any points
        #[arg(short, long)]
        all: bool,
    },

    /// Show a participant's results
    Participant {
        /// Participant name (case-insensitive)
        name: String,
    },

    /// Parse a result summary (e.g. "SE(2) CC10(2) MG15(1)") against the schedule
    Parse {
        /// Summary string; quote it to keep it one argument
        summary: String,
    },

    /// Format a race date (e.g. 2025-03-15/16 or 2025-06-14*)
    Date {
        /// Date or date range
        date: String,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show current settings and the resolved data source
    Show,

    /// Print the settings file path
    Path,

    /// Save a default data directory
    SetDataDir {
        /// Directory containing races.yaml and roster.yaml
        dir: PathBuf,
    },

    /// Remove the saved data directory (use the built-in season)
    ClearDataDir,
}
