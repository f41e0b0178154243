//! Game rules for grid games.
//!
//! Rules are pure functions and stateless checkers over a [`Grid`](crate::Grid),
//! kept apart from cell storage.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{ScanPolicy, WinDetector};
