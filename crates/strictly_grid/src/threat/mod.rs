//! Single-ply threat detection for the computer opponent.
//!
//! Neither scanner searches deeper than one move. When they find nothing
//! the caller falls back to a uniformly random legal move.

pub mod gravity;
pub mod placement;

pub use gravity::{BlockPolicy, Threat, ThreatReport, ThreatScanner};
pub use placement::PlacementScanner;

use crate::grid::Grid;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Uniformly random column with room left, per `heights`.
pub fn random_open_column<R: Rng + ?Sized>(heights: &[usize], rng: &mut R) -> Option<usize> {
    let open: Vec<usize> = heights
        .iter()
        .enumerate()
        .filter(|&(_, &h)| h > 0)
        .map(|(col, _)| col)
        .collect();
    open.choose(rng).copied()
}

/// Uniformly random empty cell.
pub fn random_empty_cell<M: Clone, R: Rng + ?Sized>(
    grid: &Grid<M>,
    rng: &mut R,
) -> Option<(usize, usize)> {
    grid.empty_cells().choose(rng).copied()
}
