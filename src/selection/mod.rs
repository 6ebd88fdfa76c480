//! Rectangular selection used for scoped regenerate, copy and paste.
//!
//! ## Interior Offset
//!
//! A region is stored as an anchor corner plus an extent. The cells it
//! selects (its *interior*) start one cell right of and below the corner:
//!
//! ```
//! use ropas::core::{Point, Rect};
//! use ropas::selection::RegionSelector;
//!
//! let mut selector = RegionSelector::new();
//! selector.anchor(Point::new(10, 10), (10, 10), 50, 50);
//! assert_eq!(selector.interior(), Rect::new(10, 10, 9, 9));
//! ```
//!
//! Copied shapes are exactly the interior, and pastes land at the
//! interior's top-left cell.

mod region;

pub use region::{Region, RegionSelector, SelectionPhase};
