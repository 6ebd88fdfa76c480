//! Sandbox session integration tests.
//!
//! These drive the same calls a host harness would make from its input
//! handlers.

use ropas::codec;
use ropas::core::{CellState, Grid, PaintMode, PlacementMode, Point, Rect, SandboxConfig};
use ropas::error::{ClipboardError, CodecError, GridError, HistoryError, SandboxError};
use ropas::selection::{Region, SelectionPhase};
use ropas::session::{ClickOutcome, Sandbox};

/// An all-empty sandbox so tests control every cell.
fn blank(width: usize, height: usize) -> Sandbox {
    let config = SandboxConfig::default()
        .with_size(width, height)
        .with_placement(PlacementMode::Fixed(CellState::Empty));
    Sandbox::new(config).unwrap()
}

// =============================================================================
// Construction
// =============================================================================

/// Test the default session: 50x50, random species, paused.
#[test]
fn test_default_session() {
    let sandbox = Sandbox::new(SandboxConfig::default()).unwrap();
    assert_eq!(sandbox.grid().dimensions(), (50, 50));
    assert!(sandbox.is_paused());
    assert!(sandbox.history().is_empty());
    assert_eq!(sandbox.selector().phase(), SelectionPhase::Idle);
    assert!(sandbox.grid().cells().iter().all(|cell| cell.is_species()));
}

/// Test the seed fixes the starting grid.
#[test]
fn test_seed_determinism() {
    let a = Sandbox::new(SandboxConfig::default().with_seed(7)).unwrap();
    let b = Sandbox::new(SandboxConfig::default().with_seed(7)).unwrap();
    let c = Sandbox::new(SandboxConfig::default().with_seed(8)).unwrap();
    assert_eq!(a.grid(), b.grid());
    assert_eq!(a.rng_state(), b.rng_state());
    assert_ne!(a.grid(), c.grid());
}

/// Test grids the codec cannot snapshot are refused up front.
#[test]
fn test_oversized_grid_rejected() {
    let result = Sandbox::new(SandboxConfig::default().with_size(125, 10));
    assert_eq!(result.unwrap_err(), SandboxError::Codec(CodecError::DimensionOverflow(125)));

    assert!(Sandbox::new(SandboxConfig::default().with_size(124, 124)).is_ok());
}

// =============================================================================
// Simulation and Undo
// =============================================================================

/// Test tick does nothing while paused.
#[test]
fn test_tick_while_paused() {
    let mut sandbox = Sandbox::new(SandboxConfig::default()).unwrap();
    let before = sandbox.grid().clone();
    assert!(!sandbox.tick().unwrap());
    assert_eq!(sandbox.grid(), &before);
    assert!(sandbox.history().is_empty());
}

/// Test tick steps first and snapshots the result.
#[test]
fn test_tick_snapshots_after_step() {
    let mut sandbox = Sandbox::new(SandboxConfig::default()).unwrap();
    assert!(!sandbox.toggle_pause());
    assert!(sandbox.tick().unwrap());
    assert_eq!(sandbox.history().len(), 1);

    let after = sandbox.grid().clone();
    assert_eq!(
        sandbox.history().latest().unwrap().restore().unwrap(),
        after
    );

    // Undo is refused while running.
    assert!(!sandbox.undo().unwrap());
    sandbox.set_paused(true);
    assert!(sandbox.undo().unwrap());
    assert_eq!(sandbox.grid(), &after);
}

/// Test a manual step snapshots first, so undo goes back one generation.
#[test]
fn test_step_once_then_undo() {
    let mut sandbox = Sandbox::new(SandboxConfig::default()).unwrap();
    let before = sandbox.grid().clone();

    assert!(sandbox.step_once().unwrap());
    assert_ne!(sandbox.grid(), &before);

    assert!(sandbox.undo().unwrap());
    assert_eq!(sandbox.grid(), &before);
    assert!(sandbox.history().is_empty());
}

/// Test manual stepping is ignored while running.
#[test]
fn test_step_once_while_running() {
    let mut sandbox = blank(5, 5);
    sandbox.set_paused(false);
    assert!(!sandbox.step_once().unwrap());
    assert!(sandbox.history().is_empty());
}

/// Test undo with nothing recorded reports an error and keeps the grid.
#[test]
fn test_undo_empty_history() {
    let mut sandbox = blank(5, 5);
    assert_eq!(
        sandbox.undo(),
        Err(SandboxError::History(HistoryError::EmptyHistory))
    );
    assert_eq!(sandbox.grid(), &Grid::new(5, 5).unwrap());
}

/// Test the mode toggles feed the next step.
#[test]
fn test_topology_toggle_changes_step() {
    let mut sandbox = blank(3, 3);
    sandbox.click(Point::new(0, 0)).unwrap(); // Scissors
    sandbox.click(Point::new(0, 0)).unwrap(); // Rock
    sandbox.click(Point::new(0, 0)).unwrap(); // Paper
    sandbox.click(Point::new(1, 1)).unwrap(); // Scissors
    sandbox.click(Point::new(1, 1)).unwrap(); // Rock

    // Orthogonal: the centre never sees the corner Paper.
    let mut orthogonal = sandbox.clone();
    orthogonal.step_once().unwrap();
    assert_eq!(orthogonal.grid().get(1, 1).unwrap(), CellState::Rock);

    sandbox.toggle_topology();
    sandbox.step_once().unwrap();
    assert_eq!(sandbox.grid().get(1, 1).unwrap(), CellState::Paper);
}

// =============================================================================
// Painting
// =============================================================================

/// Test clicks cycle species and snapshot every change.
#[test]
fn test_click_paints_species() {
    let mut sandbox = blank(4, 4);
    let at = Point::new(2, 1);

    let painted: Vec<_> = (0..4).map(|_| sandbox.click(at).unwrap()).collect();
    assert_eq!(
        painted,
        vec![
            ClickOutcome::Painted(CellState::Scissors),
            ClickOutcome::Painted(CellState::Rock),
            ClickOutcome::Painted(CellState::Paper),
            ClickOutcome::Painted(CellState::Scissors),
        ]
    );
    assert_eq!(sandbox.history().len(), 4);

    // Each snapshot holds the painted grid, so the first undo lands on
    // the current state and the second goes back one click.
    sandbox.undo().unwrap();
    assert_eq!(sandbox.grid().get_at(at).unwrap(), CellState::Scissors);
    sandbox.undo().unwrap();
    assert_eq!(sandbox.grid().get_at(at).unwrap(), CellState::Paper);
}

/// Test wall mode turns Wall into Empty and anything else into Wall.
#[test]
fn test_click_paints_walls() {
    let mut sandbox = blank(4, 4);
    let species = Point::new(2, 2);
    sandbox.click(species).unwrap(); // Scissors
    assert_eq!(sandbox.toggle_paint_mode(), PaintMode::Walls);

    let at = Point::new(0, 3);
    assert_eq!(sandbox.click(at).unwrap(), ClickOutcome::Painted(CellState::Wall));
    assert_eq!(sandbox.click(at).unwrap(), ClickOutcome::Painted(CellState::Empty));

    // A species cell is walled over too.
    assert_eq!(sandbox.click(species).unwrap(), ClickOutcome::Painted(CellState::Wall));
}

/// Test clicks off the grid are rejected without touching history.
#[test]
fn test_click_out_of_bounds() {
    let mut sandbox = blank(4, 4);
    assert_eq!(
        sandbox.click(Point::new(4, 0)),
        Err(SandboxError::Grid(GridError::OutOfBounds { x: 4, y: 0, width: 4, height: 4 }))
    );
    assert!(sandbox.history().is_empty());

    sandbox.cycle_selection();
    assert!(sandbox.click(Point::new(0, 9)).is_err());
}

// =============================================================================
// Selection
// =============================================================================

/// Test anchoring uses the default extent and offsets the interior by one.
#[test]
fn test_anchor_interior_offset() {
    let mut sandbox = blank(50, 50);
    assert_eq!(sandbox.cycle_selection(), SelectionPhase::Anchoring);

    let outcome = sandbox.click(Point::new(10, 10)).unwrap();
    assert_eq!(outcome, ClickOutcome::Anchored(Rect::new(10, 10, 9, 9)));
    assert!(sandbox.is_highlighted(Point::new(10, 10)));
    assert!(sandbox.is_highlighted(Point::new(18, 18)));
    assert!(!sandbox.is_highlighted(Point::new(19, 18)));

    // Anchoring never paints.
    assert_eq!(sandbox.grid(), &Grid::new(50, 50).unwrap());
}

/// Test an anchor near the far edge shrinks the extent to fit.
#[test]
fn test_anchor_shrinks_at_edge() {
    let mut sandbox = blank(50, 50);
    sandbox.cycle_selection();
    let outcome = sandbox.click(Point::new(45, 47)).unwrap();
    assert_eq!(outcome, ClickOutcome::Anchored(Rect::new(45, 47, 5, 3)));
}

/// Test resizing moves the far corner and ignores clicks behind the anchor.
#[test]
fn test_resize() {
    let mut sandbox = blank(50, 50);
    sandbox.cycle_selection();
    sandbox.click(Point::new(10, 10)).unwrap();
    assert_eq!(sandbox.cycle_selection(), SelectionPhase::Sizing);

    assert_eq!(
        sandbox.click(Point::new(14, 12)).unwrap(),
        ClickOutcome::Resized(Rect::new(10, 10, 5, 3))
    );
    assert_eq!(sandbox.click(Point::new(5, 20)).unwrap(), ClickOutcome::Ignored);
    assert_eq!(sandbox.selector().interior(), Rect::new(10, 10, 5, 3));

    // Back to idle: nothing is highlighted and clicks paint again.
    assert_eq!(sandbox.cycle_selection(), SelectionPhase::Idle);
    assert!(!sandbox.is_highlighted(Point::new(10, 10)));
    assert_eq!(
        sandbox.click(Point::new(10, 10)).unwrap(),
        ClickOutcome::Painted(CellState::Scissors)
    );
}

/// Test an off-grid resize click is rejected and the selection stays on the grid.
#[test]
fn test_resize_off_grid_rejected() {
    let mut sandbox = blank(20, 20);
    sandbox.cycle_selection();
    sandbox.click(Point::new(5, 5)).unwrap();
    sandbox.cycle_selection();
    let before = sandbox.selector().region();

    assert_eq!(
        sandbox.click(Point::new(500, 500)),
        Err(SandboxError::Grid(GridError::OutOfBounds { x: 500, y: 500, width: 20, height: 20 }))
    );
    let region = sandbox.selector().region();
    assert_eq!(region, before);
    assert!(region.x0 + region.xjump <= 20);
    assert!(region.y0 + region.yjump <= 20);

    // The last cell is still a valid far corner.
    assert_eq!(
        sandbox.click(Point::new(19, 19)).unwrap(),
        ClickOutcome::Resized(Rect::new(5, 5, 15, 15))
    );
}

/// Test pasting with the selection far past the grid edge writes nothing.
#[test]
fn test_paste_far_off_grid() {
    let mut sandbox = blank(10, 10);
    let shape = codec::encode(&Grid::filled(3, 3, CellState::Rock).unwrap()).unwrap();
    sandbox.import_shape(&shape).unwrap();

    sandbox.cycle_selection();
    sandbox.set_region(Region { x0: i64::MAX - 5, y0: 2, xjump: 4, yjump: 4 });
    let written = sandbox.paste_selection().unwrap().unwrap();
    assert!(written.is_empty());
    assert_eq!(sandbox.grid(), &Grid::new(10, 10).unwrap());
}

// =============================================================================
// Regenerate
// =============================================================================

/// Test regenerate fills only the selection while one is active.
#[test]
fn test_regenerate_selection() {
    let mut sandbox = blank(20, 20);
    assert_eq!(sandbox.cycle_placement(), PlacementMode::Fixed(CellState::Wall));
    assert_eq!(sandbox.cycle_placement(), PlacementMode::Fixed(CellState::Rock));

    sandbox.cycle_selection();
    sandbox.click(Point::new(2, 3)).unwrap();
    let filled = sandbox.regenerate().unwrap();

    assert_eq!(filled, Rect::new(2, 3, 9, 9));
    assert_eq!(sandbox.grid().count(CellState::Rock), 81);
    assert_eq!(sandbox.grid().get(1, 3).unwrap(), CellState::Empty);
    assert_eq!(sandbox.history().len(), 1);
}

/// Test regenerate with no selection refills the whole grid.
#[test]
fn test_regenerate_whole_grid() {
    let mut sandbox = blank(12, 8);
    sandbox.cycle_placement(); // Wall
    let filled = sandbox.regenerate().unwrap();
    assert_eq!(filled, Rect::new(0, 0, 12, 8));
    assert_eq!(sandbox.grid().count(CellState::Wall), 96);
}

/// Test random regeneration draws only species.
#[test]
fn test_regenerate_random() {
    let mut sandbox = blank(10, 10);
    for _ in 0..5 {
        sandbox.cycle_placement();
    }
    assert_eq!(sandbox.config().placement, PlacementMode::Random);
    sandbox.regenerate().unwrap();
    assert!(sandbox.grid().cells().iter().all(|cell| cell.is_species()));
}

// =============================================================================
// Clipboard
// =============================================================================

/// Test copy and paste are no-ops without an active selection.
#[test]
fn test_clipboard_needs_selection() {
    let mut sandbox = blank(10, 10);
    assert_eq!(sandbox.copy_selection().unwrap(), None);
    assert_eq!(sandbox.paste_selection().unwrap(), None);

    sandbox.cycle_selection();
    // Selection active but nothing saved.
    assert_eq!(sandbox.paste_selection().unwrap(), None);
}

/// Test copying the selection and pasting it elsewhere.
#[test]
fn test_copy_then_paste_elsewhere() {
    let mut sandbox = blank(20, 20);
    sandbox.click(Point::new(1, 1)).unwrap(); // Scissors
    sandbox.click(Point::new(2, 1)).unwrap();
    sandbox.click(Point::new(2, 1)).unwrap(); // Rock

    sandbox.cycle_selection();
    sandbox.click(Point::new(1, 1)).unwrap();
    sandbox.cycle_selection();
    sandbox.click(Point::new(2, 1)).unwrap();
    assert_eq!(sandbox.selector().interior(), Rect::new(1, 1, 2, 1));

    let encoded = sandbox.copy_selection().unwrap().unwrap();
    assert_eq!(codec::decode(&encoded).unwrap().to_string(), "SR");
    assert_eq!(sandbox.clipboard().encoded(), Some(encoded.as_str()));

    sandbox.set_region(Region { x0: 9, y0: 9, xjump: 3, yjump: 2 });
    let history_before = sandbox.history().len();
    let written = sandbox.paste_selection().unwrap().unwrap();

    assert_eq!(written, Rect::new(10, 10, 2, 1));
    assert_eq!(sandbox.grid().get(10, 10).unwrap(), CellState::Scissors);
    assert_eq!(sandbox.grid().get(11, 10).unwrap(), CellState::Rock);
    assert_eq!(sandbox.history().len(), history_before + 1);
}

/// Test a paste hanging off the grid is clipped.
#[test]
fn test_paste_is_clipped() {
    let mut sandbox = blank(20, 20);
    let shape = codec::encode(&Grid::filled(5, 5, CellState::Rock).unwrap()).unwrap();
    sandbox.import_shape(&shape).unwrap();

    sandbox.cycle_selection();
    sandbox.set_region(Region { x0: 17, y0: 17, xjump: 10, yjump: 10 });
    let written = sandbox.paste_selection().unwrap().unwrap();

    assert_eq!(written, Rect::new(18, 18, 2, 2));
    assert_eq!(sandbox.grid().count(CellState::Rock), 4);
}

/// Test a rejected import keeps the saved shape.
#[test]
fn test_import_rejections() {
    let mut sandbox = blank(10, 10);
    assert!(matches!(
        sandbox.import_shape("0010012"),
        Err(SandboxError::Clipboard(ClipboardError::Codec(_)))
    ));
    assert!(sandbox.clipboard().shape().is_none());

    let shape = codec::encode(&Grid::filled(3, 3, CellState::Paper).unwrap()).unwrap();
    sandbox.import_shape(&shape).unwrap();
    assert!(sandbox.import_shape("001001!!!").is_err());
    assert_eq!(sandbox.clipboard().encoded(), Some(shape.as_str()));
}

// =============================================================================
// Export / Load
// =============================================================================

/// Test export then load into another session of the same size.
#[test]
fn test_export_load() {
    let source = Sandbox::new(SandboxConfig::default().with_size(30, 20)).unwrap();
    let encoded = source.export().unwrap();

    let mut target = blank(30, 20);
    target.load(&encoded).unwrap();
    assert_eq!(target.grid(), source.grid());
    assert_eq!(target.history().len(), 1);
}

/// Test loading a grid of another size is refused and changes nothing.
#[test]
fn test_load_dimension_mismatch() {
    let mut sandbox = blank(10, 10);
    let encoded = codec::encode(&Grid::new(5, 5).unwrap()).unwrap();
    assert!(matches!(
        sandbox.load(&encoded),
        Err(SandboxError::Grid(GridError::DimensionMismatch { .. }))
    ));
    assert_eq!(sandbox.grid().dimensions(), (10, 10));
    assert!(sandbox.history().is_empty());
}
