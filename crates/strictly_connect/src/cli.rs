//! Command-line interface for strictly_connect.

use crate::config::Preset;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Connect - N-in-a-row games against a threat-scanning computer
#[derive(Parser, Debug)]
#[command(name = "strictly_connect")]
#[command(
    about = "Connect-N and tic-tac-toe with a single-ply computer opponent",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one game and print the final board
    Play {
        /// Path to an engine config file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Built-in board setup, used when no config file is given
        #[arg(short, long, value_enum)]
        preset: Option<Preset>,

        /// Seed for the computer's random fallback moves
        #[arg(long)]
        seed: Option<u64>,

        /// Comma-separated moves for player X, e.g. "3,3,4" or "1:1,0:2".
        /// Without a script the computer plays both sides.
        #[arg(short, long)]
        script: Option<String>,

        /// Print the game report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    Config {
        /// Built-in board setup
        #[arg(short, long, value_enum, default_value = "connect-four")]
        preset: Preset,
    },
}
