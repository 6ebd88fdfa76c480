//! Bounded undo stack of encoded grid snapshots.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::codec;
use crate::core::Grid;
use crate::error::{CodecError, HistoryError};

/// Snapshots kept before the oldest is dropped.
pub const DEFAULT_CAPACITY: usize = 100;

/// One encoded full-grid snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryEntry(String);

impl HistoryEntry {
    /// Encode `grid`.
    pub fn capture(grid: &Grid) -> Result<Self, CodecError> {
        codec::encode(grid).map(Self)
    }

    /// Decode back into a grid.
    pub fn restore(&self) -> Result<Grid, CodecError> {
        codec::decode(&self.0)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// LIFO of snapshots with oldest-drop on overflow.
///
/// Undo consumes the entry it restores; there is no redo.
///
/// ## Usage
///
/// ```
/// use ropas::core::{CellState, Grid};
/// use ropas::history::HistoryManager;
///
/// let mut grid = Grid::new(4, 4).unwrap();
/// let mut history = HistoryManager::new();
///
/// history.snapshot(&grid).unwrap();
/// grid.set(1, 1, CellState::Rock).unwrap();
///
/// history.undo(&mut grid).unwrap();
/// assert_eq!(grid.get(1, 1).unwrap(), CellState::Empty);
/// assert!(history.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryManager {
    entries: Vector<HistoryEntry>,
    capacity: usize,
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl HistoryManager {
    /// Create an empty history holding [`DEFAULT_CAPACITY`] snapshots.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vector::new(),
            capacity,
        }
    }

    /// Encode `grid` and push it, dropping the oldest entry if over capacity.
    pub fn snapshot(&mut self, grid: &Grid) -> Result<(), CodecError> {
        self.push(HistoryEntry::capture(grid)?);
        Ok(())
    }

    /// Push an already-encoded entry.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
        if self.entries.len() > self.capacity {
            self.entries.pop_front();
            tracing::trace!(capacity = self.capacity, "history full, dropped oldest snapshot");
        }
    }

    /// Pop the most recent snapshot and write it over `grid`.
    ///
    /// The grid takes the snapshot's dimensions. On a decode failure the
    /// entry is still consumed and `grid` is left unchanged.
    pub fn undo(&mut self, grid: &mut Grid) -> Result<(), HistoryError> {
        let entry = self.entries.pop_back().ok_or(HistoryError::EmptyHistory)?;
        *grid = entry.restore()?;
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recent snapshot.
    #[must_use]
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Snapshots oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
