//! Core domain types for grid games.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::Display;

/// A cell on the grid.
///
/// `M` is an opaque marker token; the grid only ever compares markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell<M> {
    /// Unoccupied cell.
    Empty,
    /// Cell holding a player's marker.
    Occupied(M),
}

impl<M> Cell<M> {
    /// Returns true for [`Cell::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the marker, if any.
    pub fn marker(&self) -> Option<&M> {
        match self {
            Cell::Occupied(marker) => Some(marker),
            Cell::Empty => None,
        }
    }
}

impl<M: PartialEq> Cell<M> {
    /// Returns the shared marker when every cell holds the same marker.
    ///
    /// Empty slices and slices containing an empty cell yield `None`.
    pub fn run_marker(cells: &[Cell<M>]) -> Option<&M> {
        let (first, rest) = cells.split_first()?;
        let marker = first.marker()?;
        rest.iter()
            .all(|cell| cell.marker() == Some(marker))
            .then_some(marker)
    }
}

impl<M> Default for Cell<M> {
    fn default() -> Self {
        Cell::Empty
    }
}

/// Kind of line a win was found on, in detector scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LineKind {
    /// Left-to-right along a row.
    Row,
    /// Top-to-bottom along a column.
    Column,
    /// Down and to the right.
    RightDiagonal,
    /// Down and to the left.
    LeftDiagonal,
}

/// Diagonal orientation for exhaustive diagonal enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagonalOrientation {
    /// Each step moves one row down and one column right.
    DownRight,
    /// Each step moves one row down and one column left.
    DownLeft,
}

/// Vertical step of a diagonal walk. Row 0 is the top of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vertical {
    /// Towards row 0.
    Up,
    /// Away from row 0.
    Down,
}

impl Vertical {
    pub(crate) fn delta(self) -> isize {
        match self {
            Vertical::Up => -1,
            Vertical::Down => 1,
        }
    }
}

/// Horizontal step of a diagonal walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Horizontal {
    /// Towards column 0.
    Left,
    /// Away from column 0.
    Right,
}

impl Horizontal {
    pub(crate) fn delta(self) -> isize {
        match self {
            Horizontal::Left => -1,
            Horizontal::Right => 1,
        }
    }

    /// The opposite horizontal step.
    pub fn flip(self) -> Self {
        match self {
            Horizontal::Left => Horizontal::Right,
            Horizontal::Right => Horizontal::Left,
        }
    }
}

/// Walk direction for row and column segments.
///
/// `Forward` is increasing column (rows) or increasing row (columns).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Increasing index.
    Forward,
    /// Decreasing index.
    Backward,
}

impl Direction {
    pub(crate) fn delta(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// An N-in-a-row found by the win detector.
///
/// The anchor is the first cell of the line in scan direction: the leftmost
/// cell for rows, the topmost for columns and both diagonals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct WinResult<M> {
    /// Marker forming the line.
    marker: M,
    /// Orientation of the line.
    line_kind: LineKind,
    /// Row of the anchor cell.
    anchor_row: usize,
    /// Column of the anchor cell.
    anchor_col: usize,
}

impl<M> WinResult<M> {
    /// Creates a win result.
    pub fn new(marker: M, line_kind: LineKind, anchor_row: usize, anchor_col: usize) -> Self {
        Self {
            marker,
            line_kind,
            anchor_row,
            anchor_col,
        }
    }

    /// Cells covered by the winning line of length `win_length`.
    pub fn cells(&self, win_length: usize) -> Vec<(usize, usize)> {
        let (r, c) = (self.anchor_row, self.anchor_col);
        (0..win_length)
            .map(|k| match self.line_kind {
                LineKind::Row => (r, c + k),
                LineKind::Column => (r + k, c),
                LineKind::RightDiagonal => (r + k, c + k),
                LineKind::LeftDiagonal => (r + k, c - k),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_marker_uniform() {
        let cells = [Cell::Occupied('x'), Cell::Occupied('x'), Cell::Occupied('x')];
        assert_eq!(Cell::run_marker(&cells), Some(&'x'));
    }

    #[test]
    fn test_run_marker_mixed_or_empty() {
        let mixed = [Cell::Occupied('x'), Cell::Occupied('o')];
        let gap = [Cell::Occupied('x'), Cell::Empty];
        let blank: [Cell<char>; 2] = [Cell::Empty, Cell::Empty];
        assert_eq!(Cell::run_marker(&mixed), None);
        assert_eq!(Cell::run_marker(&gap), None);
        assert_eq!(Cell::run_marker(&blank), None);
        assert_eq!(Cell::<char>::run_marker(&[]), None);
    }

    #[test]
    fn test_line_kind_display() {
        assert_eq!(LineKind::RightDiagonal.to_string(), "right_diagonal");
        assert_eq!(LineKind::Row.to_string(), "row");
    }

    #[test]
    fn test_left_diagonal_cells_walk_down_left() {
        let win = WinResult::new('x', LineKind::LeftDiagonal, 0, 3);
        assert_eq!(win.cells(4), vec![(0, 3), (1, 2), (2, 1), (3, 0)]);
    }
}
