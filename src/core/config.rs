//! Sandbox configuration and mode types.
//!
//! Every mode the host can toggle lives in [`SandboxConfig`], held by the
//! session rather than in process-wide state:
//! - `Topology`: which neighbors count
//! - `Stability`: fate of a cell facing both predator and prey
//! - `PlacementMode`: what generated cells receive
//! - `PaintMode`: what a click paints

use serde::{Deserialize, Serialize};

use super::cell::CellState;
use super::rng::SimRng;

/// Neighborhood used when counting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topology {
    /// N, S, E, W.
    #[default]
    Orthogonal,
    /// All eight surrounding cells.
    Full,
}

impl Topology {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Topology::Orthogonal => Topology::Full,
            Topology::Full => Topology::Orthogonal,
        }
    }
}

/// Fate of a species cell with both its predator and its prey nearby.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stability {
    /// It survives.
    #[default]
    Stable,
    /// It dies to Empty.
    Unstable,
}

impl Stability {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Stability::Stable => Stability::Unstable,
            Stability::Unstable => Stability::Stable,
        }
    }

    #[must_use]
    pub fn is_stable(self) -> bool {
        self == Stability::Stable
    }
}

impl From<bool> for Stability {
    fn from(stable: bool) -> Self {
        if stable {
            Stability::Stable
        } else {
            Stability::Unstable
        }
    }
}

/// What newly generated cells receive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementMode {
    /// Uniform over Rock, Paper, Scissors.
    #[default]
    Random,
    /// Uniform over all five states.
    RealRandom,
    /// Always this state.
    Fixed(CellState),
}

impl PlacementMode {
    /// Next mode in the cycle
    /// `Fixed(Scissors) -> Random -> RealRandom -> Fixed(Empty) -> ... -> Fixed(Scissors)`.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            PlacementMode::Random => PlacementMode::RealRandom,
            PlacementMode::RealRandom => PlacementMode::Fixed(CellState::Empty),
            PlacementMode::Fixed(CellState::Scissors) => PlacementMode::Random,
            PlacementMode::Fixed(state) => {
                let next = CellState::from_digit(state.digit() + 1).unwrap_or(CellState::Empty);
                PlacementMode::Fixed(next)
            }
        }
    }

    /// Draw one cell for this mode.
    pub fn sample(self, rng: &mut SimRng) -> CellState {
        match self {
            PlacementMode::Random => rng.choose(&CellState::SPECIES).copied().unwrap_or_default(),
            PlacementMode::RealRandom => rng.choose(&CellState::ALL).copied().unwrap_or_default(),
            PlacementMode::Fixed(state) => state,
        }
    }
}

/// What a click on an unselected grid paints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaintMode {
    /// Cycle Rock -> Paper -> Scissors.
    #[default]
    Species,
    /// Toggle Wall and Empty.
    Walls,
}

impl PaintMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            PaintMode::Species => PaintMode::Walls,
            PaintMode::Walls => PaintMode::Species,
        }
    }

    /// State a click turns `current` into.
    #[must_use]
    pub fn paint(self, current: CellState) -> CellState {
        match self {
            PaintMode::Species => current.next_species(),
            PaintMode::Walls => current.toggle_wall(),
        }
    }
}

/// Complete sandbox configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SandboxConfig {
    /// Grid width in cells (default 50).
    pub width: usize,

    /// Grid height in cells (default 50).
    pub height: usize,

    pub topology: Topology,

    pub stability: Stability,

    pub placement: PlacementMode,

    pub paint: PaintMode,

    /// Extent a fresh selection anchor starts from, `(xjump, yjump)`.
    pub default_extent: (usize, usize),

    /// Maximum undo snapshots kept (default 100).
    pub history_capacity: usize,

    /// Seed for generated cells.
    pub seed: u64,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
            topology: Topology::default(),
            stability: Stability::default(),
            placement: PlacementMode::default(),
            paint: PaintMode::default(),
            default_extent: (10, 10),
            history_capacity: crate::history::DEFAULT_CAPACITY,
            seed: 42,
        }
    }
}

impl SandboxConfig {
    /// Set the grid dimensions.
    #[must_use]
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_topology(mut self, topology: Topology) -> Self {
        self.topology = topology;
        self
    }

    #[must_use]
    pub fn with_stability(mut self, stability: Stability) -> Self {
        self.stability = stability;
        self
    }

    #[must_use]
    pub fn with_placement(mut self, placement: PlacementMode) -> Self {
        self.placement = placement;
        self
    }

    #[must_use]
    pub fn with_paint(mut self, paint: PaintMode) -> Self {
        self.paint = paint;
        self
    }

    #[must_use]
    pub fn with_default_extent(mut self, xjump: usize, yjump: usize) -> Self {
        self.default_extent = (xjump, yjump);
        self
    }

    #[must_use]
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
