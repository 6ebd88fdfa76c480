//! The Rock-Paper-Scissors transition rule and the synchronous step.
//!
//! ## Transition
//!
//! - Wall stays Wall
//! - Empty becomes the strict-majority species, otherwise stays Empty
//! - A species facing its predator and its prey survives when stable and
//!   dies to Empty when unstable
//! - A species facing only its predator becomes the predator
//! - Anything else is unchanged

use crate::core::{CellState, Grid, Stability, Topology};

use super::neighborhood::{neighbors, NeighborCounts};

/// Per-cell transition rule.
///
/// `step` calls this once per cell with the tallies taken from the
/// previous generation. Implementations must be pure.
pub trait TransitionRule {
    /// Neighborhood to tally.
    fn topology(&self) -> Topology;

    /// Next state of a cell currently in `current`.
    fn next_state(&self, current: CellState, counts: NeighborCounts) -> CellState;
}

/// The standard RPS rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RpsRule {
    pub topology: Topology,
    pub stability: Stability,
}

impl RpsRule {
    #[must_use]
    pub fn new(topology: Topology, stability: Stability) -> Self {
        Self { topology, stability }
    }
}

impl TransitionRule for RpsRule {
    fn topology(&self) -> Topology {
        self.topology
    }

    fn next_state(&self, current: CellState, counts: NeighborCounts) -> CellState {
        let (Some(predator), Some(prey)) = (current.predator(), current.prey()) else {
            return match current {
                CellState::Empty => counts.majority().unwrap_or(CellState::Empty),
                other => other,
            };
        };

        let hunted = counts.of(predator) > 0;
        let hunting = counts.of(prey) > 0;
        match (hunted, hunting) {
            (true, true) if self.stability.is_stable() => current,
            (true, true) => CellState::Empty,
            (true, false) => predator,
            (false, _) => current,
        }
    }
}

/// Compute the next generation under any [`TransitionRule`].
///
/// Reads only from `grid`; the result is built in full before it is
/// returned.
#[must_use]
pub fn step_with<R: TransitionRule + ?Sized>(grid: &Grid, rule: &R) -> Grid {
    let topology = rule.topology();
    grid.map(|x, y, current| {
        let counts = NeighborCounts::tally(&neighbors(grid, x, y, topology));
        rule.next_state(current, counts)
    })
}

/// Compute the next generation under the RPS rule.
#[must_use]
pub fn step(grid: &Grid, topology: Topology, stability: Stability) -> Grid {
    step_with(grid, &RpsRule::new(topology, stability))
}

/// Apply [`step`] `n` times.
#[must_use]
pub fn step_n(grid: &Grid, topology: Topology, stability: Stability, n: usize) -> Grid {
    let rule = RpsRule::new(topology, stability);
    let mut current = grid.clone();
    for _ in 0..n {
        current = step_with(&current, &rule);
    }
    current
}
