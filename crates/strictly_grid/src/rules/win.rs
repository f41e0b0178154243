//! Exhaustive N-in-a-row detection.

use crate::error::GridError;
use crate::grid::Grid;
use crate::types::{Cell, DiagonalOrientation, Direction, LineKind, WinResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How rows and columns are windowed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanPolicy {
    /// Slide a win-length window along every row and column.
    #[default]
    Sliding,
    /// Only a completely filled row or column counts.
    ///
    /// This is sliding with the window set to the line length.
    WholeLine,
}

/// Stateless N-in-a-row checker.
///
/// Scan order is fixed: rows top to bottom (leftmost window first), then
/// columns left to right (topmost window first), then right diagonals, then
/// left diagonals. The first match in that order is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinDetector {
    win_length: usize,
    policy: ScanPolicy,
}

impl WinDetector {
    /// Creates a sliding-window detector.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::WinLengthTooShort`] for a zero win length.
    #[instrument]
    pub fn new(win_length: usize) -> Result<Self, GridError> {
        Self::with_policy(win_length, ScanPolicy::Sliding)
    }

    /// Creates a detector with an explicit row/column policy.
    #[instrument]
    pub fn with_policy(win_length: usize, policy: ScanPolicy) -> Result<Self, GridError> {
        if win_length == 0 {
            return Err(GridError::WinLengthTooShort { win_length, min: 1 });
        }
        Ok(Self { win_length, policy })
    }

    /// Configured win length.
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Configured row/column policy.
    pub fn policy(&self) -> ScanPolicy {
        self.policy
    }

    /// Fails if the win length cannot fit on `grid` at all.
    pub fn validate<M: Clone>(&self, grid: &Grid<M>) -> Result<(), GridError> {
        if self.win_length > grid.rows().max(grid.cols()) {
            return Err(GridError::InvalidWinLength {
                win_length: self.win_length,
                rows: grid.rows(),
                cols: grid.cols(),
            });
        }
        Ok(())
    }

    /// Returns the first winning line on `grid`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidWinLength`] if the win length exceeds
    /// both grid dimensions.
    #[instrument(
        skip(self, grid),
        fields(win_length = self.win_length, rows = grid.rows(), cols = grid.cols())
    )]
    pub fn check<M: Clone + PartialEq>(
        &self,
        grid: &Grid<M>,
    ) -> Result<Option<WinResult<M>>, GridError> {
        self.validate(grid)?;

        let found = self
            .scan_rows(grid)
            .or_else(|| self.scan_columns(grid))
            .or_else(|| self.scan_diagonals(grid, DiagonalOrientation::DownRight))
            .or_else(|| self.scan_diagonals(grid, DiagonalOrientation::DownLeft));

        if let Some(win) = &found {
            debug!(
                line_kind = %win.line_kind(),
                anchor_row = win.anchor_row(),
                anchor_col = win.anchor_col(),
                "Winning line found"
            );
        }
        Ok(found)
    }

    /// True if `marker` owns a winning line. Scans past other markers' lines.
    pub fn has_won<M: Clone + PartialEq>(&self, grid: &Grid<M>, marker: &M) -> bool {
        self.validate(grid).is_ok() && self.all_wins(grid).iter().any(|win| win.marker() == marker)
    }

    /// Every winning window, in scan order.
    pub fn all_wins<M: Clone + PartialEq>(&self, grid: &Grid<M>) -> Vec<WinResult<M>> {
        let mut wins = Vec::new();
        let row_window = self.line_window(grid.cols());
        for row in 0..grid.rows() {
            for start in window_starts(grid.cols(), row_window) {
                if let Some(marker) = grid
                    .row_segment(row, start, row_window, Direction::Forward)
                    .as_deref()
                    .and_then(Cell::run_marker)
                {
                    wins.push(WinResult::new(marker.clone(), LineKind::Row, row, start));
                }
            }
        }
        let col_window = self.line_window(grid.rows());
        for col in 0..grid.cols() {
            for start in window_starts(grid.rows(), col_window) {
                if let Some(marker) = grid
                    .column_segment(start, col, col_window, Direction::Forward)
                    .as_deref()
                    .and_then(Cell::run_marker)
                {
                    wins.push(WinResult::new(marker.clone(), LineKind::Column, start, col));
                }
            }
        }
        for orientation in [DiagonalOrientation::DownRight, DiagonalOrientation::DownLeft] {
            wins.extend(self.diagonal_wins(grid, orientation));
        }
        wins
    }

    fn line_window(&self, line_len: usize) -> usize {
        match self.policy {
            ScanPolicy::Sliding => self.win_length,
            ScanPolicy::WholeLine => line_len,
        }
    }

    fn scan_rows<M: Clone + PartialEq>(&self, grid: &Grid<M>) -> Option<WinResult<M>> {
        let window = self.line_window(grid.cols());
        (0..grid.rows()).find_map(|row| {
            window_starts(grid.cols(), window).find_map(|start| {
                let segment = grid.row_segment(row, start, window, Direction::Forward)?;
                let marker = Cell::run_marker(&segment)?;
                Some(WinResult::new(marker.clone(), LineKind::Row, row, start))
            })
        })
    }

    fn scan_columns<M: Clone + PartialEq>(&self, grid: &Grid<M>) -> Option<WinResult<M>> {
        let window = self.line_window(grid.rows());
        (0..grid.cols()).find_map(|col| {
            window_starts(grid.rows(), window).find_map(|start| {
                let segment = grid.column_segment(start, col, window, Direction::Forward)?;
                let marker = Cell::run_marker(&segment)?;
                Some(WinResult::new(marker.clone(), LineKind::Column, start, col))
            })
        })
    }

    fn scan_diagonals<M: Clone + PartialEq>(
        &self,
        grid: &Grid<M>,
        orientation: DiagonalOrientation,
    ) -> Option<WinResult<M>> {
        self.diagonal_wins(grid, orientation).into_iter().next()
    }

    fn diagonal_wins<M: Clone + PartialEq>(
        &self,
        grid: &Grid<M>,
        orientation: DiagonalOrientation,
    ) -> Vec<WinResult<M>> {
        let n = self.win_length;
        if n > grid.cols() || n > grid.rows() {
            return Vec::new();
        }
        let anchor_cols = grid.cols() - n + 1;
        grid.all_diagonals_of_length(n, orientation)
            .iter()
            .enumerate()
            .filter_map(|(i, diagonal)| {
                let marker = Cell::run_marker(diagonal)?;
                let row = i / anchor_cols;
                let offset = i % anchor_cols;
                Some(match orientation {
                    DiagonalOrientation::DownRight => {
                        WinResult::new(marker.clone(), LineKind::RightDiagonal, row, offset)
                    }
                    DiagonalOrientation::DownLeft => {
                        WinResult::new(marker.clone(), LineKind::LeftDiagonal, row, offset + n - 1)
                    }
                })
            })
            .collect()
    }
}

/// Window start offsets along a line of `len` cells.
fn window_starts(len: usize, window: usize) -> std::ops::Range<usize> {
    if window == 0 || window > len {
        0..0
    } else {
        0..len - window + 1
    }
}
