//! Game driver that alternates two players until a win or a full board.

use crate::config::EngineConfig;
use crate::players::Player;
use crate::types::{Mark, Move};
use anyhow::{Result, bail};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strictly_grid::{Cell, GameState, Grid, Placement, WinDetector, WinResult, is_full};
use tracing::{debug, info, instrument, warn};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// A player completed a line.
    Winner(Mark),
    /// The board filled up with no line.
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "Player {} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// One applied move.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Name of the player who moved.
    player: String,
    /// Marker placed.
    mark: Mark,
    /// The move as chosen.
    chosen: Move,
    /// Row the marker landed on.
    row: usize,
    /// Column the marker landed on.
    col: usize,
}

/// Everything worth keeping from a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameReport {
    /// Final result.
    outcome: Outcome,
    /// Winning line, when there is one.
    win: Option<WinResult<Mark>>,
    /// Moves in play order.
    moves: Vec<MoveRecord>,
    /// Final board, one string per row.
    board: Vec<String>,
}

/// Plays a full game between two [`Player`]s under one [`EngineConfig`].
#[derive(Debug, Clone)]
pub struct SelfPlay {
    config: EngineConfig,
    detector: WinDetector,
}

impl SelfPlay {
    /// Creates a driver for `config`.
    #[instrument(skip(config))]
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let detector = WinDetector::with_policy(*config.win_length(), *config.scan_policy())?;
        Ok(Self { config, detector })
    }

    /// Runs the game to completion. `first` moves first.
    ///
    /// # Errors
    ///
    /// Fails when a player cannot decide, both players share a mark, or a
    /// move is illegal for the board (wrong kind, full column, taken cell).
    #[instrument(skip_all, fields(first = first.name(), second = second.name()))]
    pub fn run(&self, first: &mut dyn Player, second: &mut dyn Player) -> Result<GameReport> {
        if first.mark() == second.mark() {
            bail!("Both players use mark {}", first.mark());
        }

        let mut grid = Grid::new(*self.config.rows(), *self.config.cols())?;
        self.detector.validate(&grid)?;
        let mut state = GameState::new(first.mark());
        let mut moves = Vec::new();
        let mut turn = 0;

        info!(
            rows = grid.rows(),
            cols = grid.cols(),
            win_length = self.detector.win_length(),
            "Starting game"
        );

        let (outcome, win) = loop {
            let player: &mut dyn Player = if turn % 2 == 0 {
                &mut *first
            } else {
                &mut *second
            };
            let mark = player.mark();
            let chosen = player.decide_move(&grid, &state)?;
            let (row, col) = self.apply(&mut grid, chosen, mark)?;
            debug!(player = player.name(), %mark, %chosen, row, col, "Move applied");

            state = state.with_placement(Placement::new(mark, row, col));
            moves.push(MoveRecord {
                player: player.name().to_string(),
                mark,
                chosen,
                row,
                col,
            });

            if let Some(win) = self.detector.check(&grid)? {
                break (Outcome::Winner(*win.marker()), Some(win));
            }
            if is_full(&grid) {
                break (Outcome::Draw, None);
            }
            turn += 1;
        };

        info!(%outcome, moves = moves.len(), "Game finished");
        Ok(GameReport {
            outcome,
            win,
            moves,
            board: render(&grid),
        })
    }

    fn apply(&self, grid: &mut Grid<Mark>, chosen: Move, mark: Mark) -> Result<(usize, usize)> {
        match (chosen, *self.config.gravity()) {
            (Move::Drop(col), true) => match grid.drop_marker(col, mark) {
                Some(row) => Ok((row, col)),
                None => {
                    warn!(col, "Rejected drop");
                    bail!("Column {} is full or out of range", col)
                }
            },
            (Move::Place(row, col), false) => {
                if grid.place(row, col, mark) {
                    Ok((row, col))
                } else {
                    warn!(row, col, "Rejected placement");
                    bail!("Cell {}:{} is taken or out of range", row, col)
                }
            }
            (Move::Drop(_), false) => bail!("Drop moves need a gravity board"),
            (Move::Place(..), true) => bail!("Place moves are not allowed on a gravity board"),
        }
    }
}

/// Plain-text rows: `.` for empty cells, the mark otherwise.
pub fn render(grid: &Grid<Mark>) -> Vec<String> {
    (0..grid.rows())
        .map(|row| {
            (0..grid.cols())
                .map(|col| match grid.cell_at(row, col) {
                    Some(Cell::Occupied(mark)) => mark.to_string(),
                    _ => ".".to_string(),
                })
                .collect()
        })
        .collect()
}
