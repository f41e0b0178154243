//! Column-local threat probing for gravity-drop boards.
//!
//! For each playable column only the cells around the next open cell are
//! read. A dropped marker sits on top of its column, so nothing above it is
//! occupied and every line through it is covered by a handful of short
//! segment reads:
//!
//! - straight down and both down-diagonals, when the column has room below
//! - diagonal "star" splits: part of the line below the drop point on one
//!   side, the rest above on the other
//! - row extensions, row gaps and up-diagonals, only when a horizontal
//!   neighbour is occupied (an empty neighbour has nothing above it either)

use crate::error::GridError;
use crate::grid::{Grid, offset};
use crate::types::{Cell, Direction, Horizontal, Vertical};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use tracing::{debug, instrument, trace};

/// Outcome of a single probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Threat {
    /// The computer's marker would complete a line.
    Win,
    /// The opponent's marker would complete a line.
    Block,
}

/// Which block column [`ThreatScanner::next_move`] prefers when no win exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockPolicy {
    /// The most recently found block (rightmost blocking column).
    #[default]
    LastFound,
    /// Collect every block and take the first one found.
    CollectAll,
}

/// Every column classified by one scan, in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ThreatReport {
    /// Columns where the computer completes a line.
    wins: Vec<usize>,
    /// Columns where the opponent would complete a line.
    blocks: Vec<usize>,
}

impl ThreatReport {
    /// True when no column was classified.
    pub fn is_empty(&self) -> bool {
        self.wins.is_empty() && self.blocks.is_empty()
    }
}

/// Single-ply threat detector for gravity boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreatScanner {
    win_length: usize,
    block_policy: BlockPolicy,
}

impl ThreatScanner {
    /// Creates a scanner for lines of `win_length`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::WinLengthTooShort`] below 2.
    #[instrument]
    pub fn new(win_length: usize) -> Result<Self, GridError> {
        Self::with_block_policy(win_length, BlockPolicy::LastFound)
    }

    /// Creates a scanner with an explicit block preference.
    #[instrument]
    pub fn with_block_policy(
        win_length: usize,
        block_policy: BlockPolicy,
    ) -> Result<Self, GridError> {
        if win_length < 2 {
            return Err(GridError::WinLengthTooShort { win_length, min: 2 });
        }
        Ok(Self {
            win_length,
            block_policy,
        })
    }

    /// Configured win length.
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Picks the next column for `ai`.
    ///
    /// The first winning column wins outright. Otherwise a blocking column
    /// is chosen per the block policy; with the default policy that is the
    /// last one found. `None` means no threat exists and the caller should
    /// fall back to a random open column.
    #[instrument(skip(self, grid, heights))]
    pub fn next_move<M: Clone + PartialEq + Debug>(
        &self,
        grid: &Grid<M>,
        heights: &[usize],
        ai: &M,
        opponent: &M,
    ) -> Option<usize> {
        let mut block = None;
        for col in 0..grid.cols() {
            match self.classify_column(grid, heights, col, ai, opponent) {
                Some(Threat::Win) => {
                    debug!(col, "Winning column");
                    return Some(col);
                }
                Some(Threat::Block) => {
                    if self.block_policy == BlockPolicy::CollectAll && block.is_some() {
                        continue;
                    }
                    block = Some(col);
                }
                None => {}
            }
        }
        if let Some(col) = block {
            debug!(col, "Blocking column");
        }
        block
    }

    /// Classifies every playable column.
    #[instrument(skip(self, grid, heights))]
    pub fn scan<M: Clone + PartialEq + Debug>(
        &self,
        grid: &Grid<M>,
        heights: &[usize],
        ai: &M,
        opponent: &M,
    ) -> ThreatReport {
        let mut report = ThreatReport::default();
        for col in 0..grid.cols() {
            if self.column_completes(grid, heights, col, ai) {
                report.wins.push(col);
            }
            if self.column_completes(grid, heights, col, opponent) {
                report.blocks.push(col);
            }
        }
        report
    }

    /// Win beats block within a column.
    fn classify_column<M: Clone + PartialEq>(
        &self,
        grid: &Grid<M>,
        heights: &[usize],
        col: usize,
        ai: &M,
        opponent: &M,
    ) -> Option<Threat> {
        let row = open_row(grid, heights, col)?;
        let mut threat = None;
        for probe in self.probes(grid, row, col) {
            match Cell::run_marker(&probe) {
                Some(marker) if marker == ai => return Some(Threat::Win),
                Some(marker) if marker == opponent => threat = Some(Threat::Block),
                _ => {}
            }
        }
        threat
    }

    fn column_completes<M: Clone + PartialEq>(
        &self,
        grid: &Grid<M>,
        heights: &[usize],
        col: usize,
        marker: &M,
    ) -> bool {
        open_row(grid, heights, col).is_some_and(|row| {
            self.probes(grid, row, col)
                .iter()
                .any(|probe| Cell::run_marker(probe) == Some(marker))
        })
    }

    /// Every `win_length - 1` cell run that would join a marker dropped at
    /// `(row, col)`.
    fn probes<M: Clone>(&self, grid: &Grid<M>, row: usize, col: usize) -> Vec<Vec<Cell<M>>> {
        let reach = self.win_length - 1;
        let mut probes = Vec::new();
        let mut push = |probe: Option<Vec<Cell<M>>>| {
            if let Some(cells) = probe {
                probes.push(cells);
            }
        };

        // Lines running straight down from the drop point.
        if row + reach < grid.rows() {
            push(grid.column_segment(row + 1, col, reach, Direction::Forward));
            push(diagonal(grid, row, col, reach, Vertical::Down, Horizontal::Right));
            push(diagonal(grid, row, col, reach, Vertical::Down, Horizontal::Left));
        }

        // Diagonal stars: `below` cells down one side, the rest up the other.
        for horizontal in [Horizontal::Right, Horizontal::Left] {
            for below in 1..reach {
                let lower = diagonal(grid, row, col, below, Vertical::Down, horizontal);
                let upper =
                    diagonal(grid, row, col, reach - below, Vertical::Up, horizontal.flip());
                push(join(lower, upper));
            }
        }

        let left = col.checked_sub(1).is_some_and(|c| grid.is_occupied(row, c));
        let right = grid.is_occupied(row, col + 1);

        if right {
            push(grid.row_segment(row, col + 1, reach, Direction::Forward));
            push(diagonal(grid, row, col, reach, Vertical::Up, Horizontal::Right));
        }
        if left {
            push(
                col.checked_sub(1)
                    .and_then(|c| grid.row_segment(row, c, reach, Direction::Backward)),
            );
            push(diagonal(grid, row, col, reach, Vertical::Up, Horizontal::Left));
        }
        if left && right {
            // Gap: the drop point bridges runs on both sides.
            for on_left in 1..reach {
                let lhs = col
                    .checked_sub(1)
                    .and_then(|c| grid.row_segment(row, c, on_left, Direction::Backward));
                let rhs = grid.row_segment(row, col + 1, reach - on_left, Direction::Forward);
                push(join(lhs, rhs));
            }
        }

        trace!(row, col, probes = probes.len(), "Probed drop point");
        probes
    }
}

/// Next open row of `col`, if the column has room and the height agrees
/// with the grid.
fn open_row<M: Clone>(grid: &Grid<M>, heights: &[usize], col: usize) -> Option<usize> {
    let height = *heights.get(col)?;
    let row = height.checked_sub(1)?;
    (grid.in_bounds(row, col) && !grid.is_occupied(row, col)).then_some(row)
}

/// `len` cells along a diagonal starting one step away from `(row, col)`.
fn diagonal<M: Clone>(
    grid: &Grid<M>,
    row: usize,
    col: usize,
    len: usize,
    vertical: Vertical,
    horizontal: Horizontal,
) -> Option<Vec<Cell<M>>> {
    let start_row = offset(row, vertical.delta())?;
    let start_col = offset(col, horizontal.delta())?;
    grid.segment(start_row, start_col, len, vertical, horizontal)
}

fn join<M>(a: Option<Vec<Cell<M>>>, b: Option<Vec<Cell<M>>>) -> Option<Vec<Cell<M>>> {
    let mut a = a?;
    a.extend(b?);
    Some(a)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&str]) -> Grid<char> {
        let mut grid = Grid::new(rows.len(), rows[0].len()).unwrap();
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                if ch != '.' {
                    grid.force_set(r, c, Cell::Occupied(ch));
                }
            }
        }
        grid
    }

    #[test]
    fn test_short_win_length_rejected() {
        assert!(ThreatScanner::new(1).is_err());
    }

    #[test]
    fn test_gap_pattern_in_row() {
        let grid = board(&[
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "yy.y...",
        ]);
        let scanner = ThreatScanner::new(4).unwrap();
        assert_eq!(scanner.next_move(&grid, &grid.heights(), &'y', &'r'), Some(2));
    }

    #[test]
    fn test_star_split_diagonal() {
        // Drop at (2, 2) joins (3,3),(4,4) below-right and (1,1) above-left.
        let grid = board(&[
            ".......",
            ".x.....",
            ".o.....",
            ".ooxo..",
            ".oooxo.",
            "xoooooo",
        ]);
        let heights = grid.heights();
        assert_eq!(heights[2], 3);
        let scanner = ThreatScanner::new(4).unwrap();
        let report = scanner.scan(&grid, &heights, &'x', &'o');
        assert_eq!(report.wins(), &vec![2]);
        assert_eq!(scanner.next_move(&grid, &heights, &'x', &'o'), Some(2));
    }

    #[test]
    fn test_full_column_skipped() {
        let grid = board(&["x", "o", "x"]);
        let scanner = ThreatScanner::new(2).unwrap();
        assert!(scanner.scan(&grid, &grid.heights(), &'x', &'o').is_empty());
    }

    #[test]
    fn test_block_policy_choice() {
        let grid = board(&[
            ".......",
            ".......",
            ".......",
            "o.....o",
            "o.....o",
            "o.....o",
        ]);
        let heights = grid.heights();
        let last = ThreatScanner::new(4).unwrap();
        let first = ThreatScanner::with_block_policy(4, BlockPolicy::CollectAll).unwrap();
        assert_eq!(last.next_move(&grid, &heights, &'x', &'o'), Some(6));
        assert_eq!(first.next_move(&grid, &heights, &'x', &'o'), Some(0));
    }
}
