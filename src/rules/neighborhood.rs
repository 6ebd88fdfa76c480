//! Neighbor gathering and species tallies.

use smallvec::SmallVec;

use crate::core::{CellState, Grid, Topology};

const ORTHOGONAL: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

const FULL: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

impl Topology {
    /// Neighbor offsets `(dx, dy)` for this topology.
    #[must_use]
    pub fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            Topology::Orthogonal => &ORTHOGONAL,
            Topology::Full => &FULL,
        }
    }
}

/// Non-wall neighbor states of `(x, y)`.
///
/// Off-grid positions are skipped (no wraparound). Walls are dropped
/// entirely, so they count as nothing rather than as a species or Empty.
pub fn neighbors(grid: &Grid, x: usize, y: usize, topology: Topology) -> SmallVec<[CellState; 8]> {
    let cells = grid.cells();
    let (width, height) = grid.dimensions();
    topology
        .offsets()
        .iter()
        .filter_map(|&(dx, dy)| {
            let nx = x.checked_add_signed(dx)?;
            let ny = y.checked_add_signed(dy)?;
            (nx < width && ny < height).then(|| cells[ny * width + nx])
        })
        .filter(|&state| state != CellState::Wall)
        .collect()
}

/// Rock, Paper and Scissors counts among a cell's neighbors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NeighborCounts {
    pub rock: u8,
    pub paper: u8,
    pub scissors: u8,
}

impl NeighborCounts {
    /// Tally a neighbor list. Empty neighbors contribute nothing.
    pub fn tally<'a>(states: impl IntoIterator<Item = &'a CellState>) -> Self {
        let mut counts = Self::default();
        for state in states {
            match state {
                CellState::Rock => counts.rock += 1,
                CellState::Paper => counts.paper += 1,
                CellState::Scissors => counts.scissors += 1,
                CellState::Empty | CellState::Wall => {}
            }
        }
        counts
    }

    /// Count for one species; zero for Empty and Wall.
    #[must_use]
    pub fn of(&self, state: CellState) -> u8 {
        match state {
            CellState::Rock => self.rock,
            CellState::Paper => self.paper,
            CellState::Scissors => self.scissors,
            CellState::Empty | CellState::Wall => 0,
        }
    }

    /// The species strictly outnumbering both others, if any.
    #[must_use]
    pub fn majority(&self) -> Option<CellState> {
        let Self { rock, paper, scissors } = *self;
        if rock > paper && rock > scissors {
            Some(CellState::Rock)
        } else if paper > rock && paper > scissors {
            Some(CellState::Paper)
        } else if scissors > rock && scissors > paper {
            Some(CellState::Scissors)
        } else {
            None
        }
    }
}
