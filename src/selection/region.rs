//! Highlighted region and its anchor/resize gesture.

use serde::{Deserialize, Serialize};

use crate::core::{Point, Rect};

/// Where the selection gesture is.
///
/// `Idle -> Anchoring -> Sizing -> Idle`, driven by the host. While not
/// `Idle` the region is highlighted and clicks go to the selector instead
/// of painting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionPhase {
    #[default]
    Idle,
    /// Next click moves the anchor.
    Anchoring,
    /// Next click moves the far corner.
    Sizing,
}

impl SelectionPhase {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            SelectionPhase::Idle => SelectionPhase::Anchoring,
            SelectionPhase::Anchoring => SelectionPhase::Sizing,
            SelectionPhase::Sizing => SelectionPhase::Idle,
        }
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        self != SelectionPhase::Idle
    }
}

/// Anchor corner and extent of the highlighted rectangle.
///
/// The corner sits one cell up and left of the first selected cell, so
/// `x0`/`y0` are `-1` for a selection starting on the grid's edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub x0: i64,
    pub y0: i64,
    pub xjump: i64,
    pub yjump: i64,
}

impl Default for Region {
    fn default() -> Self {
        Self {
            x0: 3,
            y0: 0,
            xjump: 10,
            yjump: 10,
        }
    }
}

impl Region {
    /// Cells used by regenerate, copy and paste:
    /// `[x0 + 1, x0 + xjump) x [y0 + 1, y0 + yjump)`.
    #[must_use]
    pub fn interior(&self) -> Rect {
        let x = self.x0.saturating_add(1).max(0);
        let y = self.y0.saturating_add(1).max(0);
        let right = self.x0.saturating_add(self.xjump).max(x);
        let bottom = self.y0.saturating_add(self.yjump).max(y);
        Rect::new(x as usize, y as usize, (right - x) as usize, (bottom - y) as usize)
    }
}

/// Tracks the highlighted region across gestures.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSelector {
    region: Region,
    phase: SelectionPhase,
}

impl RegionSelector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a specific region.
    #[must_use]
    pub fn with_region(region: Region) -> Self {
        Self {
            region,
            phase: SelectionPhase::Idle,
        }
    }

    #[must_use]
    pub fn region(&self) -> Region {
        self.region
    }

    #[must_use]
    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    /// Advance `Idle -> Anchoring -> Sizing -> Idle`.
    pub fn cycle(&mut self) -> SelectionPhase {
        self.phase = self.phase.next();
        self.phase
    }

    pub fn set_phase(&mut self, phase: SelectionPhase) {
        self.phase = phase;
    }

    /// Place the anchor corner just above-left of `point`.
    ///
    /// The extent starts from `default_extent` and is cut back until the
    /// region fits inside `width x height`.
    pub fn anchor(&mut self, point: Point, default_extent: (usize, usize), width: usize, height: usize) {
        let x0 = signed(point.x).saturating_sub(1);
        let y0 = signed(point.y).saturating_sub(1);
        self.region = Region {
            x0,
            y0,
            xjump: signed(default_extent.0).min(signed(width).saturating_sub(x0)),
            yjump: signed(default_extent.1).min(signed(height).saturating_sub(y0)),
        };
    }

    /// Move the far corner to `point`, inclusive.
    ///
    /// Ignored unless `point` lies strictly right of and below the anchor
    /// corner. Returns whether the region changed.
    pub fn resize(&mut self, point: Point) -> bool {
        let (x, y) = (signed(point.x), signed(point.y));
        if x <= self.region.x0 || y <= self.region.y0 {
            return false;
        }
        self.region.xjump = x.saturating_sub(self.region.x0).saturating_add(1);
        self.region.yjump = y.saturating_sub(self.region.y0).saturating_add(1);
        true
    }

    /// The region's interior rectangle.
    #[must_use]
    pub fn interior(&self) -> Rect {
        self.region.interior()
    }

    /// Is `point` highlighted?
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.phase.is_active() && self.interior().contains(point)
    }
}

fn signed(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
