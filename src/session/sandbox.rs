//! The interactive sandbox session.

use crate::clipboard::ClipboardStore;
use crate::codec::{self, MAX_ENCODED_DIMENSION};
use crate::core::{
    CellState, Grid, PaintMode, PlacementMode, Point, Rect, SandboxConfig, SimRng, SimRngState,
    Stability, Topology,
};
use crate::error::{CodecError, SandboxError};
use crate::history::HistoryManager;
use crate::rules;
use crate::selection::{Region, RegionSelector, SelectionPhase};

/// What a [`Sandbox::click`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The cell was repainted to this state.
    Painted(CellState),
    /// The selection anchor moved; this is the new interior.
    Anchored(Rect),
    /// The selection was resized; this is the new interior.
    Resized(Rect),
    /// A resize click at or before the anchor corner.
    Ignored,
}

/// One running sandbox: the grid plus every mode, the selection, undo
/// history and clipboard.
///
/// All mutation goes through `&mut self`, one operation at a time.
///
/// ## Usage
///
/// ```
/// use ropas::core::{Point, SandboxConfig};
/// use ropas::session::Sandbox;
///
/// let mut sandbox = Sandbox::new(SandboxConfig::default().with_size(20, 20)).unwrap();
/// assert!(sandbox.is_paused());
///
/// sandbox.step_once().unwrap();
/// sandbox.click(Point::new(3, 4)).unwrap();
/// assert_eq!(sandbox.history().len(), 2);
///
/// sandbox.undo().unwrap();
/// sandbox.undo().unwrap();
/// assert!(sandbox.history().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Sandbox {
    config: SandboxConfig,
    grid: Grid,
    selector: RegionSelector,
    history: HistoryManager,
    clipboard: ClipboardStore,
    rng: SimRng,
    paused: bool,
}

impl Sandbox {
    /// Create a paused sandbox whose grid is filled from the placement mode.
    ///
    /// Both dimensions must fit the codec header so every state can be
    /// snapshotted.
    pub fn new(config: SandboxConfig) -> Result<Self, SandboxError> {
        for dimension in [config.width, config.height] {
            if dimension > MAX_ENCODED_DIMENSION {
                return Err(CodecError::DimensionOverflow(dimension).into());
            }
        }

        let mut rng = SimRng::new(config.seed);
        let placement = config.placement;
        let grid = Grid::from_fn(config.width, config.height, |_, _| placement.sample(&mut rng))?;

        tracing::debug!(
            width = config.width,
            height = config.height,
            seed = config.seed,
            "sandbox created"
        );

        Ok(Self {
            history: HistoryManager::with_capacity(config.history_capacity),
            selector: RegionSelector::new(),
            clipboard: ClipboardStore::new(),
            config,
            grid,
            rng,
            paused: true,
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn config(&self) -> &SandboxConfig {
        &self.config
    }

    #[must_use]
    pub fn selector(&self) -> &RegionSelector {
        &self.selector
    }

    #[must_use]
    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    #[must_use]
    pub fn clipboard(&self) -> &ClipboardStore {
        &self.clipboard
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Position of the placement RNG.
    #[must_use]
    pub fn rng_state(&self) -> SimRngState {
        self.rng.state()
    }

    /// Is `point` inside the highlighted selection?
    #[must_use]
    pub fn is_highlighted(&self, point: Point) -> bool {
        self.selector.contains(point)
    }

    // === Simulation ===

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        tracing::debug!(paused = self.paused, "pause toggled");
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Per-frame tick: while running, advance one generation and snapshot
    /// the result. Returns whether the grid advanced.
    pub fn tick(&mut self) -> Result<bool, SandboxError> {
        if self.paused {
            return Ok(false);
        }
        self.advance();
        self.history.snapshot(&self.grid)?;
        Ok(true)
    }

    /// Manual single step while paused: snapshot the current grid, then
    /// advance one generation. Ignored while running.
    pub fn step_once(&mut self) -> Result<bool, SandboxError> {
        if !self.paused {
            return Ok(false);
        }
        self.history.snapshot(&self.grid)?;
        self.advance();
        tracing::debug!("took one step");
        Ok(true)
    }

    /// Restore the most recent snapshot. Ignored while running.
    pub fn undo(&mut self) -> Result<bool, SandboxError> {
        if !self.paused {
            return Ok(false);
        }
        self.history.undo(&mut self.grid)?;
        tracing::debug!(remaining = self.history.len(), "restored previous state");
        Ok(true)
    }

    fn advance(&mut self) {
        self.grid = rules::step(&self.grid, self.config.topology, self.config.stability);
    }

    // === Modes ===

    pub fn toggle_topology(&mut self) -> Topology {
        self.config.topology = self.config.topology.toggled();
        tracing::debug!(topology = ?self.config.topology, "topology toggled");
        self.config.topology
    }

    pub fn toggle_stability(&mut self) -> Stability {
        self.config.stability = self.config.stability.toggled();
        tracing::debug!(stability = ?self.config.stability, "stability toggled");
        self.config.stability
    }

    pub fn toggle_paint_mode(&mut self) -> PaintMode {
        self.config.paint = self.config.paint.toggled();
        tracing::debug!(paint = ?self.config.paint, "paint mode toggled");
        self.config.paint
    }

    pub fn cycle_placement(&mut self) -> PlacementMode {
        self.config.placement = self.config.placement.next();
        tracing::debug!(placement = ?self.config.placement, "placement mode changed");
        self.config.placement
    }

    /// Advance the selection gesture `Idle -> Anchoring -> Sizing -> Idle`.
    pub fn cycle_selection(&mut self) -> SelectionPhase {
        self.selector.cycle()
    }

    // === Editing ===

    /// Handle a click on a grid cell.
    ///
    /// With no active selection the cell is repainted and snapshotted.
    /// Otherwise the click anchors or resizes the selection. Off-grid
    /// points are rejected in every phase.
    pub fn click(&mut self, point: Point) -> Result<ClickOutcome, SandboxError> {
        let (width, height) = self.grid.dimensions();
        match self.selector.phase() {
            SelectionPhase::Idle => {
                let painted = self.config.paint.paint(self.grid.get_at(point)?);
                self.grid.set(point.x, point.y, painted)?;
                self.history.snapshot(&self.grid)?;
                Ok(ClickOutcome::Painted(painted))
            }
            SelectionPhase::Anchoring => {
                self.grid.get_at(point)?;
                self.selector.anchor(point, self.config.default_extent, width, height);
                Ok(ClickOutcome::Anchored(self.selector.interior()))
            }
            SelectionPhase::Sizing => {
                self.grid.get_at(point)?;
                if self.selector.resize(point) {
                    Ok(ClickOutcome::Resized(self.selector.interior()))
                } else {
                    Ok(ClickOutcome::Ignored)
                }
            }
        }
    }

    /// Refill from the placement mode: the selection interior when a
    /// selection is active, otherwise the whole grid. Snapshots afterwards.
    ///
    /// Returns the rectangle that was refilled.
    pub fn regenerate(&mut self) -> Result<Rect, SandboxError> {
        let target = if self.selector.phase().is_active() {
            self.selector.interior()
        } else {
            Rect::new(0, 0, self.grid.width(), self.grid.height())
        };

        let placement = self.config.placement;
        let rng = &mut self.rng;
        let filled = self.grid.fill_region(target, |_, _| placement.sample(rng));
        self.history.snapshot(&self.grid)?;

        tracing::debug!(?filled, ?placement, "regenerated");
        Ok(filled)
    }

    /// Copy the selection interior to the clipboard.
    ///
    /// Returns the encoded shape, or `None` when no selection is active.
    pub fn copy_selection(&mut self) -> Result<Option<String>, SandboxError> {
        if !self.selector.phase().is_active() {
            return Ok(None);
        }
        let encoded = self.clipboard.copy(&self.grid, self.selector.interior())?;
        tracing::debug!(shape = %encoded, "highlighted area saved");
        Ok(Some(encoded))
    }

    /// Paste the saved shape at the selection interior's top-left, clipped
    /// to the grid, then snapshot.
    ///
    /// Returns the rectangle written, or `None` when there is no active
    /// selection or nothing saved.
    pub fn paste_selection(&mut self) -> Result<Option<Rect>, SandboxError> {
        if !self.selector.phase().is_active() || self.clipboard.shape().is_none() {
            return Ok(None);
        }
        let interior = self.selector.interior();
        let written = self.clipboard.paste(&mut self.grid, Point::new(interior.x, interior.y))?;
        self.history.snapshot(&self.grid)?;
        tracing::debug!(?written, "saved shape pasted");
        Ok(Some(written))
    }

    /// Load a shape string from outside into the clipboard.
    pub fn import_shape(&mut self, input: &str) -> Result<(), SandboxError> {
        self.clipboard.import_external(input).map_err(|err| {
            tracing::warn!(%err, "rejected imported shape");
            SandboxError::from(err)
        })
    }

    /// Encode the whole grid.
    pub fn export(&self) -> Result<String, SandboxError> {
        Ok(codec::encode(&self.grid)?)
    }

    /// Replace the grid with a decoded string of the same dimensions and
    /// snapshot it. On failure the grid is unchanged.
    pub fn load(&mut self, encoded: &str) -> Result<(), SandboxError> {
        let grid = codec::decode(encoded)?;
        self.grid.replace(grid)?;
        self.history.snapshot(&self.grid)?;
        Ok(())
    }

    /// Replace the selection region outright.
    pub fn set_region(&mut self, region: Region) {
        let phase = self.selector.phase();
        self.selector = RegionSelector::with_region(region);
        self.selector.set_phase(phase);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank(width: usize, height: usize) -> Sandbox {
        let config = SandboxConfig::default()
            .with_size(width, height)
            .with_placement(PlacementMode::Fixed(CellState::Empty));
        Sandbox::new(config).unwrap()
    }

    #[test]
    fn test_mode_toggles() {
        let mut sandbox = blank(3, 3);
        assert_eq!(sandbox.toggle_topology(), Topology::Full);
        assert_eq!(sandbox.toggle_stability(), Stability::Unstable);
        assert_eq!(sandbox.toggle_paint_mode(), PaintMode::Walls);
        assert_eq!(sandbox.cycle_placement(), PlacementMode::Fixed(CellState::Wall));

        let config = sandbox.config();
        assert_eq!(config.topology, Topology::Full);
        assert_eq!(config.stability, Stability::Unstable);
    }

    #[test]
    fn test_set_region_keeps_phase() {
        let mut sandbox = blank(20, 20);
        sandbox.cycle_selection();
        sandbox.set_region(Region { x0: -1, y0: -1, xjump: 4, yjump: 4 });

        assert_eq!(sandbox.selector().phase(), SelectionPhase::Anchoring);
        assert_eq!(sandbox.selector().interior(), Rect::new(0, 0, 3, 3));
        assert!(sandbox.is_highlighted(Point::new(0, 0)));
    }

    #[test]
    fn test_regenerate_advances_rng() {
        let mut sandbox = blank(5, 5);
        sandbox.cycle_placement();
        sandbox.cycle_placement();
        sandbox.cycle_placement();
        sandbox.cycle_placement();
        sandbox.cycle_placement();
        assert_eq!(sandbox.config().placement, PlacementMode::Random);

        let before = sandbox.rng_state();
        sandbox.regenerate().unwrap();
        assert_ne!(sandbox.rng_state(), before);
    }

    #[test]
    fn test_export_matches_codec() {
        let mut sandbox = blank(4, 2);
        sandbox.click(Point::new(3, 1)).unwrap();
        let exported = sandbox.export().unwrap();
        assert_eq!(codec::decode(&exported).unwrap(), *sandbox.grid());
    }
}
