//! Computer player driven by the single-ply threat scanners.

use super::Player;
use crate::config::EngineConfig;
use crate::types::{Mark, Move};
use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_grid::{
    GameState, Grid, PlacementScanner, ThreatScanner, random_empty_cell, random_open_column,
};
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy)]
enum Strategy {
    Gravity(ThreatScanner),
    Placement(PlacementScanner),
}

/// Plays immediate wins and blocks, otherwise a uniformly random legal move.
#[derive(Debug)]
pub struct ComputerPlayer {
    name: String,
    mark: Mark,
    strategy: Strategy,
    rng: StdRng,
}

impl ComputerPlayer {
    /// Creates a computer player for the configured board.
    #[instrument(skip(name, config), fields(name = %name.as_ref()))]
    pub fn new(name: impl AsRef<str>, mark: Mark, config: &EngineConfig) -> Result<Self> {
        let strategy = if *config.gravity() {
            Strategy::Gravity(ThreatScanner::with_block_policy(
                *config.win_length(),
                *config.block_policy(),
            )?)
        } else {
            Strategy::Placement(PlacementScanner::new(*config.win_length())?)
        };
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(mark as u64)),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            name: name.as_ref().to_string(),
            mark,
            strategy,
            rng,
        })
    }
}

impl Player for ComputerPlayer {
    #[instrument(skip(self, grid, state), fields(ai = %self.name, mark = %self.mark))]
    fn decide_move(&mut self, grid: &Grid<Mark>, state: &GameState<Mark>) -> Result<Move> {
        let opponent = self.mark.opponent();
        match self.strategy {
            Strategy::Gravity(scanner) => {
                let heights = grid.heights();
                let col = match scanner.next_move(grid, &heights, &self.mark, &opponent) {
                    Some(col) => col,
                    None => {
                        debug!("No threats, falling back to random column");
                        random_open_column(&heights, &mut self.rng)
                            .context("No open columns left")?
                    }
                };
                debug!(col, "AI chose column");
                Ok(Move::Drop(col))
            }
            Strategy::Placement(scanner) => {
                let (row, col) = match scanner.next_placement(grid, state, &self.mark, &opponent)? {
                    Some(cell) => cell,
                    None => {
                        debug!("No heuristic applies, falling back to random cell");
                        random_empty_cell(grid, &mut self.rng).context("No empty cells left")?
                    }
                };
                debug!(row, col, "AI chose cell");
                Ok(Move::Place(row, col))
            }
        }
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }
}
