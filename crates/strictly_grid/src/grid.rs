//! Coordinate-addressed grid with bounds-safe line extraction.
//!
//! Row 0 is the top of the grid. Every read accessor returns an owned copy;
//! nothing hands out references into live storage. Reads outside the grid
//! resolve to `None`/`false` so probing code never has to pre-check bounds.

use super::error::GridError;
use super::types::{Cell, DiagonalOrientation, Direction, Horizontal, Vertical};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Fixed-size grid of cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid<M> {
    rows: usize,
    cols: usize,
    cells: Vec<Cell<M>>,
}

/// Offsets `base` by `delta`, staying within `usize`.
pub(crate) fn offset(base: usize, delta: isize) -> Option<usize> {
    base.checked_add_signed(delta)
}

impl<M: Clone> Grid<M> {
    /// Creates an empty grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] if either dimension is zero.
    #[instrument]
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns true if `(row, col)` addresses a cell.
    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        self.in_bounds(row, col).then(|| row * self.cols + col)
    }

    /// Returns true if the cell holds a marker. Out-of-range is `false`.
    #[inline]
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.index(row, col).is_some_and(|idx| !self.cells[idx].is_empty())
    }

    /// Copy of the cell at `(row, col)`, or `None` outside the grid.
    #[inline]
    pub fn cell_at(&self, row: usize, col: usize) -> Option<Cell<M>> {
        self.index(row, col).map(|idx| self.cells[idx].clone())
    }

    /// Places a marker on an empty cell.
    ///
    /// Returns false without touching the grid if the cell is occupied or
    /// out of range.
    #[instrument(skip(self, marker))]
    pub fn place(&mut self, row: usize, col: usize, marker: M) -> bool {
        match self.index(row, col) {
            Some(idx) if self.cells[idx].is_empty() => {
                self.cells[idx] = Cell::Occupied(marker);
                true
            }
            _ => {
                debug!("Rejected placement");
                false
            }
        }
    }

    /// Overwrites a cell unconditionally. Used for undo and test setup.
    ///
    /// Returns false only when the coordinate is out of range.
    #[instrument(skip(self, cell))]
    pub fn force_set(&mut self, row: usize, col: usize, cell: Cell<M>) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Clears every cell.
    #[instrument(skip(self), fields(rows = self.rows, cols = self.cols))]
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Walks `len` cells from `(row, col)` stepping by `(dr, dc)`.
    ///
    /// Yields `None` if any step leaves the grid. A zero-length walk is
    /// always an empty segment.
    fn walk(
        &self,
        row: usize,
        col: usize,
        len: usize,
        dr: isize,
        dc: isize,
    ) -> Option<Vec<Cell<M>>> {
        if len == 0 {
            return Some(Vec::new());
        }
        let span = isize::try_from(len - 1).ok()?;
        let end_row = offset(row, dr.checked_mul(span)?)?;
        let end_col = offset(col, dc.checked_mul(span)?)?;
        if !self.in_bounds(row, col) || !self.in_bounds(end_row, end_col) {
            return None;
        }
        let (mut r, mut c) = (row, col);
        let mut out = Vec::with_capacity(len);
        for step in 0..len {
            if step > 0 {
                r = offset(r, dr)?;
                c = offset(c, dc)?;
            }
            out.push(self.cells[r * self.cols + c].clone());
        }
        Some(out)
    }

    /// Copy of row `row`.
    pub fn whole_row(&self, row: usize) -> Option<Vec<Cell<M>>> {
        self.walk(row, 0, self.cols, 0, 1)
    }

    /// Copy of column `col`, top to bottom.
    pub fn whole_column(&self, col: usize) -> Option<Vec<Cell<M>>> {
        self.walk(0, col, self.rows, 1, 0)
    }

    /// `len` cells along row `row` starting at `col`.
    pub fn row_segment(
        &self,
        row: usize,
        col: usize,
        len: usize,
        direction: Direction,
    ) -> Option<Vec<Cell<M>>> {
        self.walk(row, col, len, 0, direction.delta())
    }

    /// `len` cells along column `col` starting at `row`. `Forward` walks down.
    pub fn column_segment(
        &self,
        row: usize,
        col: usize,
        len: usize,
        direction: Direction,
    ) -> Option<Vec<Cell<M>>> {
        self.walk(row, col, len, direction.delta(), 0)
    }

    /// `len` cells along a diagonal starting at `(row, col)`.
    pub fn segment(
        &self,
        row: usize,
        col: usize,
        len: usize,
        vertical: Vertical,
        horizontal: Horizontal,
    ) -> Option<Vec<Cell<M>>> {
        self.walk(row, col, len, vertical.delta(), horizontal.delta())
    }

    /// Every full diagonal of length `len` in the given orientation.
    ///
    /// Diagonals are ordered by linear anchor index `i` over a
    /// `(rows - len + 1) x (cols - len + 1)` anchor grid, so the anchor of
    /// diagonal `i` is row `i / (cols - len + 1)`, offset `i % (cols - len + 1)`.
    /// A down-right diagonal starts at that offset; a down-left diagonal
    /// starts `len - 1` columns further right. Lengths that cannot fit
    /// produce no diagonals.
    pub fn all_diagonals_of_length(
        &self,
        len: usize,
        orientation: DiagonalOrientation,
    ) -> Vec<Vec<Cell<M>>> {
        if len == 0 || len > self.rows || len > self.cols {
            return Vec::new();
        }
        let anchor_rows = self.rows - len + 1;
        let anchor_cols = self.cols - len + 1;
        (0..anchor_rows * anchor_cols)
            .filter_map(|i| {
                let row = i / anchor_cols;
                let col = i % anchor_cols;
                match orientation {
                    DiagonalOrientation::DownRight => {
                        self.segment(row, col, len, Vertical::Down, Horizontal::Right)
                    }
                    DiagonalOrientation::DownLeft => {
                        self.segment(row, col + len - 1, len, Vertical::Down, Horizontal::Left)
                    }
                }
            })
            .collect()
    }

    /// Copy of every row, for display.
    pub fn snapshot(&self) -> Vec<Vec<Cell<M>>> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.to_vec())
            .collect()
    }

    /// Horizontal mirror of this grid.
    pub fn mirrored(&self) -> Self {
        let cells = self
            .cells
            .chunks(self.cols)
            .flat_map(|row| row.iter().rev().cloned())
            .collect();
        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Coordinates of every empty cell in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(idx, _)| (idx / self.cols, idx % self.cols))
            .collect()
    }

    // ─────────────────────────────────────────────────────────────
    //  Gravity play
    // ─────────────────────────────────────────────────────────────

    /// Row index of the topmost occupied cell in `col`.
    ///
    /// `rows` for an empty column, 0 for a full one, `None` outside the grid.
    pub fn height(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        Some(
            (0..self.rows)
                .find(|&row| self.is_occupied(row, col))
                .unwrap_or(self.rows),
        )
    }

    /// Drop heights for every column. See [`Grid::height`].
    pub fn heights(&self) -> Vec<usize> {
        (0..self.cols).filter_map(|col| self.height(col)).collect()
    }

    /// Columns that can still take a dropped marker.
    pub fn open_columns(&self) -> Vec<usize> {
        (0..self.cols)
            .filter(|&col| self.height(col).is_some_and(|h| h > 0))
            .collect()
    }

    /// Drops a marker into `col`, returning the row it lands on.
    ///
    /// Returns `None` if the column is full or out of range.
    #[instrument(skip(self, marker))]
    pub fn drop_marker(&mut self, col: usize, marker: M) -> Option<usize> {
        let row = self.height(col)?.checked_sub(1)?;
        self.place(row, col, marker).then_some(row)
    }
}
