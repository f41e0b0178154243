//! Player trait and implementations.

mod computer;
mod scripted;

pub use computer::ComputerPlayer;
pub use scripted::ScriptedPlayer;

use crate::types::{Mark, Move};
use anyhow::Result;
use strictly_grid::{GameState, Grid};

/// Anything that can choose a move.
pub trait Player {
    /// Chooses the next move from the current grid and game snapshot.
    fn decide_move(&mut self, grid: &Grid<Mark>, state: &GameState<Mark>) -> Result<Move>;

    /// Marker this player places.
    fn mark(&self) -> Mark;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
