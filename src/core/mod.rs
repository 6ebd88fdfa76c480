//! Core types: cell states, the grid, geometry, RNG, configuration.
//!
//! Everything else in the crate reads and writes cells through these.

pub mod cell;
pub mod geometry;
pub mod grid;
pub mod rng;
pub mod config;

pub use cell::CellState;
pub use geometry::{Point, Rect};
pub use grid::{Grid, MAX_DIMENSION};
pub use rng::{SimRng, SimRngState};
pub use config::{PaintMode, PlacementMode, SandboxConfig, Stability, Topology};
