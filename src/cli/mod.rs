//! Command-line surface for the `rounddraw` binary.
//!
//! Clap-based argument parsing with one subcommand per roster operation,
//! plus verbosity control for the tracing output.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

pub use commands::run;

/// Manage a competition roster and draw judging rounds.
#[derive(Parser, Debug)]
#[command(name = "rounddraw")]
#[command(about = "Competition roster management and round draws", long_about = None)]
pub struct Args {
    /// Roster file
    #[arg(long, default_value = "data.json", value_name = "PATH")]
    pub data_file: PathBuf,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the current roster
    Roster,

    /// Add a competitor
    AddCompetitor {
        /// Competitor name (any casing)
        name: String,
    },

    /// Remove a competitor
    RemoveCompetitor {
        /// Competitor name (any casing)
        name: String,
    },

    /// Add a judge with a room
    AddJudge {
        /// Judge name (any casing)
        name: String,
        /// Room label
        #[arg(short, long)]
        room: String,
    },

    /// Remove a judge
    RemoveJudge {
        /// Judge name (any casing)
        name: String,
    },

    /// Run a draw over the selected roster subset and record the round
    Draw {
        /// Competitors to include, comma-separated (default: all)
        #[arg(long, value_delimiter = ',', value_name = "NAMES")]
        competitors: Vec<String>,

        /// Judges to include, comma-separated (default: all)
        #[arg(long, value_delimiter = ',', value_name = "NAMES")]
        judges: Vec<String>,
    },

    /// List recorded rounds
    Rounds,

    /// Show one round's assignments
    ShowRound {
        /// Round id
        id: u32,
    },

    /// Delete the entire round history
    ClearRounds,
}
