//! Error types for grid configuration misuse.
//!
//! Only configuration-level mistakes are errors. Out-of-range reads on a
//! [`Grid`](crate::Grid) resolve to `None`/`false` instead.

use derive_more::{Display, Error};

/// Configuration error raised by grids and scanners.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GridError {
    /// A grid was requested with a zero dimension.
    #[display("Invalid grid dimensions {}x{}: both must be non-zero", rows, cols)]
    InvalidDimensions {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },

    /// A scanner was configured with a win length below its minimum.
    #[display("Win length {} is too short (minimum {})", win_length, min)]
    WinLengthTooShort {
        /// Configured win length.
        win_length: usize,
        /// Smallest win length the scanner supports.
        min: usize,
    },

    /// The win length cannot fit on the grid being checked.
    #[display(
        "Win length {} exceeds the largest dimension of a {}x{} grid",
        win_length,
        rows,
        cols
    )]
    InvalidWinLength {
        /// Configured win length.
        win_length: usize,
        /// Grid row count.
        rows: usize,
        /// Grid column count.
        cols: usize,
    },

    /// Target and other counts do not add up to the window size.
    #[display(
        "Invalid window spec: {} target + {} other != window {}",
        target_count,
        other_count,
        window
    )]
    InvalidWindowSpec {
        /// Required occurrences of the target value.
        target_count: usize,
        /// Required occurrences of the other value.
        other_count: usize,
        /// Window size.
        window: usize,
    },
}
