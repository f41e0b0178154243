//! Concrete markers and moves for the driver.

use serde::{Deserialize, Serialize};

/// Player marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Mark {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Mark {
    /// Returns the opponent mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A move chosen by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Move {
    /// Drop into a column (gravity boards).
    #[display("drop {}", _0)]
    Drop(usize),
    /// Place on a cell (free-placement boards).
    #[display("place {}:{}", _0, _1)]
    Place(usize, usize),
}

impl Move {
    /// Parses `"3"` as a drop and `"1:2"` as a placement.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        match text.split_once(':') {
            Some((row, col)) => Some(Move::Place(
                row.trim().parse().ok()?,
                col.trim().parse().ok()?,
            )),
            None => text.parse().ok().map(Move::Drop),
        }
    }
}
