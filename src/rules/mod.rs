//! The grid update rule.
//!
//! `step` is a pure function of the previous grid and the two mode
//! switches. Games of other rules can plug in through `TransitionRule`
//! and `step_with`; the sandbox only ever uses `RpsRule`.

pub mod engine;
pub mod neighborhood;

pub use engine::{step, step_n, step_with, RpsRule, TransitionRule};
pub use neighborhood::{neighbors, NeighborCounts};
