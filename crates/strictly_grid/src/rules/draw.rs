//! Draw detection.

use super::win::WinDetector;
use crate::error::GridError;
use crate::grid::Grid;
use tracing::instrument;

/// Checks if every cell is occupied.
#[instrument(skip(grid))]
pub fn is_full<M: Clone>(grid: &Grid<M>) -> bool {
    grid.is_full()
}

/// A full grid with no winning line.
///
/// # Errors
///
/// Propagates [`GridError::InvalidWinLength`] from the detector.
#[instrument(skip(grid, detector))]
pub fn is_draw<M: Clone + PartialEq>(
    grid: &Grid<M>,
    detector: &WinDetector,
) -> Result<bool, GridError> {
    Ok(is_full(grid) && detector.check(grid)?.is_none())
}
