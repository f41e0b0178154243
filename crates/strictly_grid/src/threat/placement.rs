//! Free-placement move heuristics built on [`LineScanner`].
//!
//! Every row, column and diagonal long enough to hold a win is turned into
//! a cell sequence and scanned with win-length windows. Priority:
//!
//! 1. complete an own line (first found), else block the opponent (last found)
//! 2. opening move from the [`GameState`]
//! 3. create a fork, else block the opponent's fork
//! 4. build on a window holding own markers and two blanks

use crate::error::GridError;
use crate::grid::Grid;
use crate::line_scanner::{LineScanner, OtherSpec};
use crate::state::GameState;
use crate::types::Cell;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::{debug, instrument};

/// A line of coordinates with at least `win_length` cells.
type Line = Vec<(usize, usize)>;

/// Single-ply placement picker for boards without gravity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementScanner {
    win_length: usize,
}

impl PlacementScanner {
    /// Creates a scanner for lines of `win_length`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::WinLengthTooShort`] below 2.
    #[instrument]
    pub fn new(win_length: usize) -> Result<Self, GridError> {
        if win_length < 2 {
            return Err(GridError::WinLengthTooShort { win_length, min: 2 });
        }
        Ok(Self { win_length })
    }

    /// Configured win length.
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Picks a cell for `ai`, or `None` when no heuristic applies.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidWinLength`] if no line on `grid` can hold
    /// a win.
    #[instrument(skip(self, grid, state))]
    pub fn next_placement<M: Clone + Eq + Hash + Debug>(
        &self,
        grid: &Grid<M>,
        state: &GameState<M>,
        ai: &M,
        opponent: &M,
    ) -> Result<Option<(usize, usize)>, GridError> {
        if self.win_length > grid.rows().max(grid.cols()) {
            return Err(GridError::InvalidWinLength {
                win_length: self.win_length,
                rows: grid.rows(),
                cols: grid.cols(),
            });
        }

        let lines = self.lines(grid);

        if let Some(cell) = self.win_or_block(grid, &lines, ai, opponent)? {
            return Ok(Some(cell));
        }
        // With a win length of 2 a lone marker is already a threat.
        if let Some(cell) = self.opening(grid, state, ai) {
            debug!(?cell, "Opening move");
            return Ok(Some(cell));
        }
        if let Some(cell) = self.fork_cell(grid, &lines, ai)? {
            debug!(?cell, "Creating fork");
            return Ok(Some(cell));
        }
        if let Some(cell) = self.fork_cell(grid, &lines, opponent)? {
            debug!(?cell, "Blocking fork");
            return Ok(Some(cell));
        }
        let built = self.two_blanks(grid, &lines, ai)?;
        if let Some(cell) = built {
            debug!(?cell, "Building line");
        }
        Ok(built)
    }

    /// Centre on the computer's first move; a corner if the opponent already
    /// took the centre while moving first.
    fn opening<M: Clone + PartialEq>(
        &self,
        grid: &Grid<M>,
        state: &GameState<M>,
        ai: &M,
    ) -> Option<(usize, usize)> {
        if state.placements_by(ai).next().is_some() {
            return None;
        }
        let centre = (grid.rows() / 2, grid.cols() / 2);
        if !grid.is_occupied(centre.0, centre.1) {
            return Some(centre);
        }
        if state.moves_first(ai) {
            return None;
        }
        [
            (0, 0),
            (0, grid.cols() - 1),
            (grid.rows() - 1, 0),
            (grid.rows() - 1, grid.cols() - 1),
        ]
        .into_iter()
        .find(|&(r, c)| !grid.is_occupied(r, c))
    }

    /// First own completion, otherwise the last opponent completion.
    fn win_or_block<M: Clone + Eq + Hash>(
        &self,
        grid: &Grid<M>,
        lines: &[Line],
        ai: &M,
        opponent: &M,
    ) -> Result<Option<(usize, usize)>, GridError> {
        let scanner = LineScanner::new(
            Cell::Empty,
            1,
            OtherSpec::Any,
            self.win_length - 1,
            self.win_length,
        )?;
        let own = Cell::Occupied(ai.clone());
        let theirs = Cell::Occupied(opponent.clone());
        let mut block = None;

        for line in lines {
            let cells = cells_of(grid, line);
            for (marker, hit) in scanner.scan_ordered(&cells) {
                let Some(idx) = *hit.first_absolute_index() else {
                    continue;
                };
                if marker == own {
                    debug!(cell = ?line[idx], "Winning placement");
                    return Ok(Some(line[idx]));
                }
                if marker == theirs {
                    block = Some(line[idx]);
                }
            }
        }
        if let Some(cell) = block {
            debug!(?cell, "Blocking placement");
        }
        Ok(block)
    }

    /// First empty cell lying on two or more distinct lines that each hold
    /// `win_length - 2` of `marker` and two blanks.
    fn fork_cell<M: Clone + Eq + Hash>(
        &self,
        grid: &Grid<M>,
        lines: &[Line],
        marker: &M,
    ) -> Result<Option<(usize, usize)>, GridError> {
        let scanner = self.two_blank_scanner(marker)?;
        let mut line_counts: HashMap<(usize, usize), usize> = HashMap::new();
        let mut order = Vec::new();

        for line in lines {
            let cells = cells_of(grid, line);
            let mut on_this_line: Vec<(usize, usize)> = scanner
                .scan_ordered(&cells)
                .into_iter()
                .flat_map(|(_, hit)| hit.absolute_indices().clone())
                .map(|idx| line[idx])
                .collect();
            on_this_line.sort_unstable();
            on_this_line.dedup();
            for cell in on_this_line {
                let count = line_counts.entry(cell).or_insert(0);
                if *count == 0 {
                    order.push(cell);
                }
                *count += 1;
            }
        }
        Ok(order.into_iter().find(|cell| line_counts[cell] >= 2))
    }

    /// First blank of the first window holding own markers and two blanks.
    fn two_blanks<M: Clone + Eq + Hash>(
        &self,
        grid: &Grid<M>,
        lines: &[Line],
        ai: &M,
    ) -> Result<Option<(usize, usize)>, GridError> {
        let scanner = self.two_blank_scanner(ai)?;
        for line in lines {
            let cells = cells_of(grid, line);
            if let Some((_, hit)) = scanner.scan_ordered(&cells).into_iter().next()
                && let Some(idx) = *hit.first_absolute_index()
            {
                return Ok(Some(line[idx]));
            }
        }
        Ok(None)
    }

    fn two_blank_scanner<M: Clone + Eq + Hash>(
        &self,
        marker: &M,
    ) -> Result<LineScanner<Cell<M>>, GridError> {
        LineScanner::new(
            Cell::Empty,
            2,
            OtherSpec::Value(Cell::Occupied(marker.clone())),
            self.win_length - 2,
            self.win_length,
        )
    }

    /// Rows, columns, then down-right and down-left diagonals that are at
    /// least `win_length` long.
    fn lines<M: Clone>(&self, grid: &Grid<M>) -> Vec<Line> {
        let (rows, cols) = (grid.rows(), grid.cols());
        let mut lines: Vec<Line> = Vec::new();
        lines.extend((0..rows).map(|r| (0..cols).map(|c| (r, c)).collect()));
        lines.extend((0..cols).map(|c| (0..rows).map(|r| (r, c)).collect()));

        let starts_right = (0..cols).map(|c| (0, c)).chain((1..rows).map(|r| (r, 0)));
        for (r0, c0) in starts_right {
            lines.push(
                (0..)
                    .map(|k| (r0 + k, c0 + k))
                    .take_while(|&(r, c)| r < rows && c < cols)
                    .collect(),
            );
        }
        let starts_left = (0..cols).map(|c| (0, c)).chain((1..rows).map(|r| (r, cols - 1)));
        for (r0, c0) in starts_left {
            lines.push(
                (0..)
                    .map_while(|k| Some((r0 + k, c0.checked_sub(k)?)))
                    .take_while(|&(r, _)| r < rows)
                    .collect(),
            );
        }

        lines.retain(|line| line.len() >= self.win_length);
        lines
    }
}

fn cells_of<M: Clone>(grid: &Grid<M>, line: &[(usize, usize)]) -> Vec<Cell<M>> {
    line.iter()
        .filter_map(|&(r, c)| grid.cell_at(r, c))
        .collect()
}
