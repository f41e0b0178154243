//! Strictly Connect - playable N-in-a-row games on top of `strictly_grid`
//!
//! Wires the grid engine into something that runs end to end:
//!
//! - **EngineConfig**: board size, win length and scanner policies from TOML
//! - **Player**: computer and scripted move deciders
//! - **SelfPlay**: alternates players, confirms wins, reports the result

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod players;
pub mod selfplay;
pub mod types;

pub use config::{ConfigError, EngineConfig, Preset};
pub use players::{ComputerPlayer, Player, ScriptedPlayer};
pub use selfplay::{GameReport, MoveRecord, Outcome, SelfPlay, render};
pub use types::{Mark, Move};
