//! # ropas
//!
//! Core of a Rock-Paper-Scissors cellular-automaton sandbox.
//!
//! ## Design Principles
//!
//! 1. **Host-Agnostic**: No windowing, colors, input devices or frame
//!    pacing. A host harness turns device events into calls on
//!    [`Sandbox`] and paints [`Sandbox::grid`] each frame.
//!
//! 2. **Configuration Over Globals**: Every mode (topology, stability,
//!    placement, paint) lives in [`SandboxConfig`], so `step` and paint
//!    are pure functions of the grid and that struct.
//!
//! 3. **One Wire Format**: Undo snapshots, clipboard shapes and exported
//!    grids all use the same compact string from [`codec`].
//!
//! ## Rules
//!
//! Each cell is Empty, Wall, Rock, Paper or Scissors. Every tick, cells
//! count their non-wall neighbors (4 or 8 of them):
//! - Empty becomes a species with a strict majority
//! - A species with only its predator nearby is converted to the predator
//! - A species with both predator and prey nearby survives (stable) or
//!   dies (unstable)
//! - Walls never change
//!
//! ## Modules
//!
//! - `core`: Cell states, the grid, geometry, RNG, configuration
//! - `rules`: The synchronous update step
//! - `codec`: Grid <-> string encoding
//! - `selection`: Highlighted region and its anchor/resize gesture
//! - `history`: Bounded undo stack
//! - `clipboard`: Saved shape for copy/paste/import
//! - `session`: The `Sandbox` façade

pub mod core;
pub mod error;
pub mod rules;
pub mod codec;
pub mod selection;
pub mod history;
pub mod clipboard;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    CellState, Grid, MAX_DIMENSION,
    Point, Rect,
    SimRng, SimRngState,
    PaintMode, PlacementMode, SandboxConfig, Stability, Topology,
};

pub use crate::error::{
    ClipboardError, CodecError, GridError, HistoryError, MalformedInput, SandboxError,
};

pub use crate::rules::{step, step_n, NeighborCounts, RpsRule, TransitionRule};

pub use crate::codec::{decode, encode};

pub use crate::selection::{Region, RegionSelector, SelectionPhase};

pub use crate::history::{HistoryEntry, HistoryManager};

pub use crate::clipboard::{ClipboardStore, SavedShape};

pub use crate::session::{ClickOutcome, Sandbox};
