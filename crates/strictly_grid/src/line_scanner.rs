//! Sliding-window pattern matcher over arbitrary sequences.
//!
//! A [`LineScanner`] looks for windows holding an exact number of a target
//! value alongside an exact number of one "other" value. Varying the counts
//! expresses both "one empty cell completing N-1 same-marker cells" and
//! "two empty cells next to N-2 own markers".

use super::error::GridError;
use derive_getters::Getters;
use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;
use tracing::{instrument, trace};

/// Which non-target value a window must contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OtherSpec<T> {
    /// Exactly this value.
    Value(T),
    /// Whatever non-target value appears first in the window.
    Any,
}

/// One matching window.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct WindowMatch {
    /// Start index of the window in the scanned sequence.
    window_index: usize,
    /// Positions of the target value inside the window.
    relative_indices: Vec<usize>,
    /// Positions of the target value in the scanned sequence.
    absolute_indices: Vec<usize>,
    /// First target position inside the window.
    first_index: Option<usize>,
    /// First target position in the scanned sequence.
    first_absolute_index: Option<usize>,
}

impl WindowMatch {
    fn new(window_index: usize, relative_indices: Vec<usize>) -> Self {
        let absolute_indices: Vec<usize> = relative_indices
            .iter()
            .map(|rel| window_index + rel)
            .collect();
        Self {
            window_index,
            first_index: relative_indices.first().copied(),
            first_absolute_index: absolute_indices.first().copied(),
            relative_indices,
            absolute_indices,
        }
    }
}

/// Matches grouped by the "other" value each window contained.
///
/// Windows made entirely of the target value are keyed under the target.
pub type ScanMatches<T> = HashMap<T, Vec<WindowMatch>>;

/// Configured window pattern.
#[derive(Debug, Clone, Getters)]
pub struct LineScanner<T> {
    /// Value being counted.
    target: T,
    /// Required occurrences of the target per window.
    target_count: usize,
    /// The single non-target value allowed in a window.
    other: OtherSpec<T>,
    /// Required occurrences of the other value per window.
    other_count: usize,
    /// Window size.
    window: usize,
}

impl<T: Clone + Eq + Hash> LineScanner<T> {
    /// Creates a scanner for windows of `window` cells holding
    /// `target_count` targets and `other_count` others.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidWindowSpec`] unless
    /// `target_count + other_count == window` and `window > 0`.
    #[instrument(skip(target, other))]
    pub fn new(
        target: T,
        target_count: usize,
        other: OtherSpec<T>,
        other_count: usize,
        window: usize,
    ) -> Result<Self, GridError> {
        if window == 0 || target_count + other_count != window {
            return Err(GridError::InvalidWindowSpec {
                target_count,
                other_count,
                window,
            });
        }
        Ok(Self {
            target,
            target_count,
            other,
            other_count,
            window,
        })
    }

    /// Scans every window left to right.
    ///
    /// Match lists preserve window order. Sequences shorter than the window
    /// produce no matches.
    #[instrument(skip_all, fields(len = sequence.len(), window = self.window))]
    pub fn scan(&self, sequence: &[T]) -> ScanMatches<T> {
        let mut matches: ScanMatches<T> = HashMap::new();
        for (window_index, window) in sequence.windows(self.window).enumerate() {
            if let Some((key, relative)) = self.match_window(window) {
                trace!(window_index, "Window matched");
                matches
                    .entry(key)
                    .or_default()
                    .push(WindowMatch::new(window_index, relative));
            }
        }
        matches
    }

    /// Scans and flattens the matches back into window order.
    pub fn scan_ordered(&self, sequence: &[T]) -> Vec<(T, WindowMatch)> {
        let mut flat: Vec<(T, WindowMatch)> = self
            .scan(sequence)
            .into_iter()
            .flat_map(|(key, list)| list.into_iter().map(move |m| (key.clone(), m)))
            .collect();
        flat.sort_by_key(|(_, m)| m.window_index);
        flat
    }

    fn match_window(&self, window: &[T]) -> Option<(T, Vec<usize>)> {
        let mut reference = match &self.other {
            OtherSpec::Value(value) => Some(value),
            OtherSpec::Any => None,
        };
        let mut relative = Vec::with_capacity(self.target_count);
        let mut others = 0;

        for (idx, value) in window.iter().enumerate() {
            if *value == self.target {
                relative.push(idx);
                continue;
            }
            match reference {
                Some(seen) if seen == value => others += 1,
                // A third distinct value spoils the whole window.
                Some(_) => return None,
                None => {
                    reference = Some(value);
                    others = 1;
                }
            }
        }

        if relative.len() != self.target_count || others != self.other_count {
            return None;
        }
        let key = reference.unwrap_or(&self.target).clone();
        Some((key, relative))
    }
}
