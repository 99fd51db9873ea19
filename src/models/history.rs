//! Linear undo/redo history over grid snapshots.
//!
//! The history is an append-biased sequence of full [`Grid`] snapshots
//! plus a cursor. Pushing while the cursor sits before the end truncates
//! the abandoned redo branch; exceeding the capacity evicts the oldest
//! snapshot. The grid at the cursor is always the single source of truth
//! for "current grid".

use crate::models::grid::Grid;
use thiserror::Error;

/// Maximum number of snapshots retained before the oldest is evicted.
pub const HISTORY_LIMIT: usize = 50;

/// Non-fatal reports from the undo/redo cursor.
///
/// These mark the ends of the history rather than failures; callers use
/// them to disable the corresponding affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// The cursor is already at the oldest retained snapshot.
    #[error("already at the oldest state")]
    AtOldestState,
    /// The cursor is already at the newest snapshot.
    #[error("already at the newest state")]
    AtNewestState,
}

/// Bounded undo/redo log over grid snapshots.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<Grid>,
    index: usize,
    limit: usize,
}

impl History {
    /// Creates a history holding `initial` as its only snapshot.
    #[must_use]
    pub fn new(initial: Grid) -> Self {
        Self::with_limit(initial, HISTORY_LIMIT)
    }

    /// Creates a history with an explicit capacity (minimum 1).
    #[must_use]
    pub fn with_limit(initial: Grid, limit: usize) -> Self {
        Self {
            snapshots: vec![initial],
            index: 0,
            limit: limit.max(1),
        }
    }

    /// The grid at the cursor.
    #[must_use]
    pub fn current(&self) -> &Grid {
        &self.snapshots[self.index]
    }

    /// Number of retained snapshots.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// A history always holds at least the initial snapshot.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Cursor position (0 = oldest retained snapshot).
    #[must_use]
    pub const fn position(&self) -> usize {
        self.index
    }

    /// True when at least one older snapshot is retained.
    #[must_use]
    pub const fn can_undo(&self) -> bool {
        self.index > 0
    }

    /// True when the cursor sits before the newest snapshot.
    #[must_use]
    pub const fn can_redo(&self) -> bool {
        self.index + 1 < self.snapshots.len()
    }

    /// Records a new snapshot after the cursor.
    ///
    /// Any redo entries beyond the cursor are discarded first. When the
    /// capacity is exceeded the oldest snapshot is evicted and the cursor
    /// adjusted so it still points at the just-pushed entry.
    pub fn push(&mut self, grid: Grid) {
        self.snapshots.truncate(self.index + 1);
        self.snapshots.push(grid);
        if self.snapshots.len() > self.limit {
            self.snapshots.remove(0);
        }
        self.index = self.snapshots.len() - 1;
    }

    /// Moves the cursor one snapshot back and returns the grid there.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::AtOldestState`] when no older snapshot is
    /// retained; the history is left untouched.
    pub fn undo(&mut self) -> Result<&Grid, HistoryError> {
        if !self.can_undo() {
            return Err(HistoryError::AtOldestState);
        }
        self.index -= 1;
        Ok(&self.snapshots[self.index])
    }

    /// Moves the cursor one snapshot forward and returns the grid there.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::AtNewestState`] when the cursor is already
    /// at the newest snapshot; the history is left untouched.
    pub fn redo(&mut self) -> Result<&Grid, HistoryError> {
        if !self.can_redo() {
            return Err(HistoryError::AtNewestState);
        }
        self.index += 1;
        Ok(&self.snapshots[self.index])
    }

    /// Replaces the entire history with a single snapshot.
    ///
    /// Used when the board template changes or the workspace is reset;
    /// the capacity is kept.
    pub fn reset(&mut self, grid: Grid) {
        self.snapshots = vec![grid];
        self.index = 0;
    }
}
