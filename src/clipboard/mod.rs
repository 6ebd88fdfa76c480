//! One saved shape for copy/paste and export/import.
//!
//! A copied region is held both decoded (for pasting) and as its codec
//! string (for display and export). Importing a string from outside
//! replaces the shape the same way a copy does.

use crate::codec;
use crate::core::{Grid, Point, Rect};
use crate::error::{ClipboardError, MalformedInput};

/// Shortest string [`ClipboardStore::import_external`] accepts: a header
/// plus at least three payload symbols.
pub const MIN_IMPORT_LEN: usize = 9;

/// A copied sub-grid and its encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedShape {
    grid: Grid,
    encoded: String,
}

impl SavedShape {
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn encoded(&self) -> &str {
        &self.encoded
    }
}

/// Holds at most one [`SavedShape`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClipboardStore {
    shape: Option<SavedShape>,
}

impl ClipboardStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy `rect` out of `grid`, replacing any saved shape.
    ///
    /// Returns the encoded string so the host can show or export it.
    pub fn copy(&mut self, grid: &Grid, rect: Rect) -> Result<String, ClipboardError> {
        let shape = grid.extract(rect)?;
        let encoded = codec::encode(&shape)?;
        self.shape = Some(SavedShape {
            grid: shape,
            encoded: encoded.clone(),
        });
        Ok(encoded)
    }

    /// Write the saved shape into `grid` with its top-left at `at`.
    ///
    /// Parts hanging over the grid's edge are dropped. Returns the
    /// rectangle actually written. The shape stays saved.
    pub fn paste(&self, grid: &mut Grid, at: Point) -> Result<Rect, ClipboardError> {
        let shape = self.shape.as_ref().ok_or(ClipboardError::NothingCopied)?;
        Ok(grid.write_region(at.x, at.y, &shape.grid))
    }

    /// Decode a shape string from outside and save it for the next paste.
    ///
    /// On failure the previously saved shape is kept.
    pub fn import_external(&mut self, input: &str) -> Result<(), ClipboardError> {
        let input = input.trim();
        if input.len() < MIN_IMPORT_LEN {
            return Err(MalformedInput::TooShort { len: input.len() }.into());
        }
        let grid = codec::decode(input)?;
        self.shape = Some(SavedShape {
            grid,
            encoded: input.to_owned(),
        });
        Ok(())
    }

    #[must_use]
    pub fn shape(&self) -> Option<&SavedShape> {
        self.shape.as_ref()
    }

    /// Encoded form of the saved shape.
    #[must_use]
    pub fn encoded(&self) -> Option<&str> {
        self.shape.as_ref().map(SavedShape::encoded)
    }

    pub fn clear(&mut self) {
        self.shape = None;
    }
}
