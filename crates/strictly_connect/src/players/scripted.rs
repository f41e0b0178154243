//! Player that replays a fixed list of moves.
//!
//! Stands in for interactive input: the CLI feeds it `--script` moves and
//! tests use it to drive exact positions.

use super::Player;
use crate::types::{Mark, Move};
use anyhow::Result;
use std::collections::VecDeque;
use strictly_grid::{GameState, Grid};
use tracing::debug;

/// Replays queued moves in order.
#[derive(Debug, Clone)]
pub struct ScriptedPlayer {
    name: String,
    mark: Mark,
    moves: VecDeque<Move>,
}

impl ScriptedPlayer {
    /// Creates a scripted player.
    pub fn new(name: impl Into<String>, mark: Mark, moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            name: name.into(),
            mark,
            moves: moves.into_iter().collect(),
        }
    }

    /// Parses a comma-separated script such as `"3,3,4"` or `"1:1,0:2"`.
    pub fn parse(name: impl Into<String>, mark: Mark, script: &str) -> Result<Self> {
        let moves = script
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(|part| {
                Move::parse(part)
                    .ok_or_else(|| anyhow::anyhow!("Invalid move in script: {:?}", part))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(name, mark, moves))
    }

    /// Moves not yet played.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl Player for ScriptedPlayer {
    fn decide_move(&mut self, _grid: &Grid<Mark>, _state: &GameState<Mark>) -> Result<Move> {
        let next = self
            .moves
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("{} ran out of scripted moves", self.name))?;
        debug!(player = %self.name, %next, "Scripted move");
        Ok(next)
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }
}
