//! Immutable game snapshots handed to move deciders.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A marker placed at a cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, new)]
pub struct Placement<M> {
    /// Marker that was placed.
    marker: M,
    /// Row it landed on.
    row: usize,
    /// Column it landed on.
    col: usize,
}

/// Snapshot of everything a move decider may consult besides the grid.
///
/// Snapshots are values: [`GameState::with_placement`] returns a new one and
/// leaves the original untouched.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameState<M> {
    /// Placements in play order.
    history: Vec<Placement<M>>,
    /// Completed-or-started rounds. A round begins with the first player's move.
    round: usize,
    /// Marker that opened the game.
    first_player: M,
}

impl<M: Clone + PartialEq> GameState<M> {
    /// Fresh game where `first_player` moves first.
    pub fn new(first_player: M) -> Self {
        Self {
            history: Vec::new(),
            round: 0,
            first_player,
        }
    }

    /// Snapshot with one more placement appended.
    #[instrument(skip_all)]
    pub fn with_placement(&self, placement: Placement<M>) -> Self {
        let mut next = self.clone();
        if placement.marker == next.first_player {
            next.round += 1;
        }
        next.history.push(placement);
        next
    }

    /// True if `marker` opened the game.
    pub fn moves_first(&self, marker: &M) -> bool {
        self.first_player == *marker
    }

    /// Placements made by `marker`.
    pub fn placements_by<'a>(
        &'a self,
        marker: &'a M,
    ) -> impl Iterator<Item = &'a Placement<M>> + 'a {
        self.history.iter().filter(move |p| p.marker == *marker)
    }
}
