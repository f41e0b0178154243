//! Strictly Grid - pure logic for N-in-a-row grid games
//!
//! This crate holds the board-agnostic core shared by tic-tac-toe,
//! connect-four and their larger variants. It performs no I/O.
//!
//! # Architecture
//!
//! - **Grid**: cell storage with bounds-safe row, column and diagonal reads
//! - **LineScanner**: sliding-window pattern matcher over any sequence
//! - **WinDetector**: exhaustive N-in-a-row check in a fixed scan order
//! - **ThreatScanner**: column-local win/block probe for gravity boards
//! - **PlacementScanner**: win/block/fork heuristics for free placement
//!
//! # Example
//!
//! ```
//! use strictly_grid::{Grid, LineKind, ThreatScanner, WinDetector};
//!
//! # fn main() -> Result<(), strictly_grid::GridError> {
//! let mut grid = Grid::new(6, 7)?;
//! for _ in 0..3 {
//!     grid.drop_marker(3, 'y');
//! }
//!
//! let scanner = ThreatScanner::new(4)?;
//! let col = scanner.next_move(&grid, &grid.heights(), &'r', &'y');
//! assert_eq!(col, Some(3));
//!
//! grid.drop_marker(3, 'y');
//! let win = WinDetector::new(4)?.check(&grid)?.expect("four in a column");
//! assert_eq!(*win.line_kind(), LineKind::Column);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod grid;
mod line_scanner;
mod state;
mod types;

pub mod rules;
pub mod threat;

pub use error::GridError;
pub use grid::Grid;
pub use line_scanner::{LineScanner, OtherSpec, ScanMatches, WindowMatch};
pub use rules::{ScanPolicy, WinDetector, is_draw, is_full};
pub use state::{GameState, Placement};
pub use threat::{
    BlockPolicy, PlacementScanner, Threat, ThreatReport, ThreatScanner, random_empty_cell,
    random_open_column,
};
pub use types::{Cell, DiagonalOrientation, Direction, Horizontal, LineKind, Vertical, WinResult};
