//! Undo history.
//!
//! Each snapshot is the codec string of the whole grid, so a 50x50 grid
//! costs about a kilobyte per entry. The stack holds at most
//! `capacity` entries and drops the oldest first.

mod manager;

pub use manager::{HistoryEntry, HistoryManager, DEFAULT_CAPACITY};
