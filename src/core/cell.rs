//! Cell states and the Rock-Paper-Scissors beats-relation.
//!
//! ## Digit Order
//!
//! The discriminants are load-bearing:
//! - `0..5` is the base-5 digit the codec writes for each cell
//! - the same order drives the paint cycle and the placement cycle
//!
//! ```
//! use ropas::core::CellState;
//!
//! assert_eq!(CellState::Rock.predator(), Some(CellState::Paper));
//! assert_eq!(CellState::Rock.prey(), Some(CellState::Scissors));
//! assert_eq!(CellState::from_digit(4), Some(CellState::Scissors));
//! ```

use serde::{Deserialize, Serialize};

/// State of a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellState {
    /// Unoccupied; adopts a strict-majority neighbor species.
    #[default]
    Empty = 0,
    /// Obstacle. Never changes and is invisible to neighbor counting.
    Wall = 1,
    Rock = 2,
    Paper = 3,
    Scissors = 4,
}

impl CellState {
    /// All states in digit order.
    pub const ALL: [CellState; 5] = [
        CellState::Empty,
        CellState::Wall,
        CellState::Rock,
        CellState::Paper,
        CellState::Scissors,
    ];

    /// The three species, in digit order.
    pub const SPECIES: [CellState; 3] = [CellState::Rock, CellState::Paper, CellState::Scissors];

    /// Codec digit (0..5).
    #[must_use]
    pub const fn digit(self) -> u8 {
        self as u8
    }

    /// Inverse of [`digit`](Self::digit).
    #[must_use]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(CellState::Empty),
            1 => Some(CellState::Wall),
            2 => Some(CellState::Rock),
            3 => Some(CellState::Paper),
            4 => Some(CellState::Scissors),
            _ => None,
        }
    }

    /// Is this Rock, Paper or Scissors?
    #[must_use]
    pub const fn is_species(self) -> bool {
        matches!(self, CellState::Rock | CellState::Paper | CellState::Scissors)
    }

    /// The species that converts this one, if this is a species.
    #[must_use]
    pub const fn predator(self) -> Option<Self> {
        match self {
            CellState::Rock => Some(CellState::Paper),
            CellState::Paper => Some(CellState::Scissors),
            CellState::Scissors => Some(CellState::Rock),
            CellState::Empty | CellState::Wall => None,
        }
    }

    /// The species this one converts, if this is a species.
    #[must_use]
    pub const fn prey(self) -> Option<Self> {
        match self {
            CellState::Rock => Some(CellState::Scissors),
            CellState::Paper => Some(CellState::Rock),
            CellState::Scissors => Some(CellState::Paper),
            CellState::Empty | CellState::Wall => None,
        }
    }

    /// Next state when painting species.
    ///
    /// Rock -> Paper -> Scissors -> Rock. Empty lands on Scissors and Wall
    /// on Rock, since the cycle steps through the digit order.
    #[must_use]
    pub const fn next_species(self) -> Self {
        match self {
            CellState::Empty | CellState::Paper => CellState::Scissors,
            CellState::Wall | CellState::Scissors => CellState::Rock,
            CellState::Rock => CellState::Paper,
        }
    }

    /// Wall becomes Empty; everything else becomes Wall.
    #[must_use]
    pub const fn toggle_wall(self) -> Self {
        match self {
            CellState::Wall => CellState::Empty,
            _ => CellState::Wall,
        }
    }

    /// Single-character symbol used by [`Grid`](super::Grid)'s text form.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Wall => '#',
            CellState::Rock => 'R',
            CellState::Paper => 'P',
            CellState::Scissors => 'S',
        }
    }

    /// Inverse of [`symbol`](Self::symbol).
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(CellState::Empty),
            '#' => Some(CellState::Wall),
            'R' => Some(CellState::Rock),
            'P' => Some(CellState::Paper),
            'S' => Some(CellState::Scissors),
            _ => None,
        }
    }
}

impl std::fmt::Display for CellState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CellState::Empty => "Empty",
            CellState::Wall => "Wall",
            CellState::Rock => "Rock",
            CellState::Paper => "Paper",
            CellState::Scissors => "Scissors",
        };
        f.write_str(name)
    }
}
