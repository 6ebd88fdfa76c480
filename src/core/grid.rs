//! The live cell grid.
//!
//! ## Storage
//!
//! One contiguous buffer indexed by `y * width + x`. Rows are never
//! allocated separately, so region writes and full replacement are plain
//! index arithmetic.
//!
//! ## Text Form
//!
//! `Display` and [`Grid::from_pattern`] use one character per cell:
//! `.` Empty, `#` Wall, `R` Rock, `P` Paper, `S` Scissors.
//!
//! ```
//! use ropas::core::{CellState, Grid};
//!
//! let grid = Grid::from_pattern("R.\n#S").unwrap();
//! assert_eq!(grid.get(1, 1).unwrap(), CellState::Scissors);
//! assert_eq!(grid.to_string(), "R.\n#S");
//! ```

use super::cell::CellState;
use super::geometry::{Point, Rect};
use crate::error::GridError;

/// Largest width or height a grid may have.
pub const MAX_DIMENSION: usize = 65_535;

/// Dense rectangular grid of cell states.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a grid with every cell set to `state`.
    pub fn filled(width: usize, height: usize, state: CellState) -> Result<Self, GridError> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![state; width * height],
        })
    }

    /// Create an all-Empty grid.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        Self::filled(width, height, CellState::Empty)
    }

    /// Create a grid by calling `f(x, y)` for every cell in row-major order.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> CellState,
    ) -> Result<Self, GridError> {
        check_dimensions(width, height)?;
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Ok(Self { width, height, cells })
    }

    /// Build a grid from row-major cells. `cells.len()` must equal `width * height`.
    pub fn from_cells(width: usize, height: usize, cells: Vec<CellState>) -> Result<Self, GridError> {
        check_dimensions(width, height)?;
        if cells.len() != width * height {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height, cells })
    }

    /// Parse the text form. Blank lines and surrounding whitespace are ignored.
    pub fn from_pattern(pattern: &str) -> Result<Self, GridError> {
        let mut width = None;
        let mut height = 0;
        let mut cells = Vec::new();

        for line in pattern.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let start = cells.len();
            for ch in line.chars() {
                cells.push(CellState::from_symbol(ch).ok_or(GridError::UnknownSymbol(ch))?);
            }
            let found = cells.len() - start;
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(GridError::RaggedPattern { row: height, expected, found });
                }
                Some(_) => {}
            }
            height += 1;
        }

        Self::from_cells(width.unwrap_or(0), height, cells)
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: grids have at least one cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Read a cell.
    pub fn get(&self, x: usize, y: usize) -> Result<CellState, GridError> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Read a cell by point.
    pub fn get_at(&self, point: Point) -> Result<CellState, GridError> {
        self.get(point.x, point.y)
    }

    /// Write a cell.
    pub fn set(&mut self, x: usize, y: usize, state: CellState) -> Result<(), GridError> {
        let i = self.index(x, y)?;
        self.cells[i] = state;
        Ok(())
    }

    /// Replace every cell with `other`'s. Dimensions must match.
    pub fn replace(&mut self, other: Grid) -> Result<(), GridError> {
        if other.dimensions() != self.dimensions() {
            return Err(GridError::DimensionMismatch {
                expected_width: self.width,
                expected_height: self.height,
                width: other.width,
                height: other.height,
            });
        }
        self.cells = other.cells;
        Ok(())
    }

    /// Copy `sub` into this grid with its top-left corner at `(x0, y0)`.
    ///
    /// Cells of `sub` that land outside the grid are dropped. Returns the
    /// rectangle that was actually written (possibly empty).
    pub fn write_region(&mut self, x0: usize, y0: usize, sub: &Grid) -> Rect {
        let target = Rect::new(x0, y0, sub.width, sub.height).clip(self.width, self.height);
        if target.is_empty() {
            return target;
        }
        for dy in 0..target.height {
            let src = dy * sub.width;
            let dst = (target.y + dy) * self.width + target.x;
            self.cells[dst..dst + target.width].copy_from_slice(&sub.cells[src..src + target.width]);
        }
        target
    }

    /// Copy out the part of `rect` that lies inside the grid.
    pub fn extract(&self, rect: Rect) -> Result<Grid, GridError> {
        let clipped = rect.clip(self.width, self.height);
        if clipped.is_empty() {
            return Err(GridError::EmptyRegion);
        }
        let mut cells = Vec::with_capacity(clipped.width * clipped.height);
        for y in clipped.y..clipped.bottom() {
            let start = y * self.width + clipped.x;
            cells.extend_from_slice(&self.cells[start..start + clipped.width]);
        }
        Ok(Grid {
            width: clipped.width,
            height: clipped.height,
            cells,
        })
    }

    /// Overwrite each cell of `rect` inside the grid with `f(x, y)`.
    pub fn fill_region(&mut self, rect: Rect, mut f: impl FnMut(usize, usize) -> CellState) -> Rect {
        let clipped = rect.clip(self.width, self.height);
        for y in clipped.y..clipped.bottom() {
            for x in clipped.x..clipped.right() {
                self.cells[y * self.width + x] = f(x, y);
            }
        }
        clipped
    }

    /// New grid of the same size with `f(x, y, cell)` applied to every cell.
    #[must_use]
    pub fn map(&self, mut f: impl FnMut(usize, usize, CellState) -> CellState) -> Grid {
        let cells = self
            .cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| f(i % self.width, i / self.width, cell))
            .collect();
        Grid {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks_exact(self.width)
    }

    /// Count cells holding `state`.
    #[must_use]
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if self.in_bounds(x, y) {
            Ok(y * self.width + x)
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<(), GridError> {
    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(GridError::InvalidDimensions { width, height });
    }
    Ok(())
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
