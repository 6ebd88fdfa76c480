//! Error types for grid access, the state codec, history and the clipboard.
//!
//! Every failure here is local and recoverable. The host decides how to
//! present them; the core only reports the condition.

use thiserror::Error;

/// Errors from reading or writing the live grid.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// Coordinate outside `[0, width) x [0, height)`.
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Replacement grid does not match the store's dimensions.
    #[error("expected a {expected_width}x{expected_height} grid, got {width}x{height}")]
    DimensionMismatch {
        expected_width: usize,
        expected_height: usize,
        width: usize,
        height: usize,
    },

    /// Width or height is zero or above [`crate::MAX_DIMENSION`].
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// A text pattern row has a different length than the first row.
    #[error("pattern row {row} has {found} cells, expected {expected}")]
    RaggedPattern {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A text pattern contains a character with no cell state.
    #[error("unknown cell symbol {0:?}")]
    UnknownSymbol(char),

    /// A region read produced no cells after clipping.
    #[error("region has no cells inside the grid")]
    EmptyRegion,
}

/// Why a codec string could not be decoded.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MalformedInput {
    /// Fewer characters than a dimension header needs.
    #[error("input of {len} bytes is too short")]
    TooShort { len: usize },

    /// A header byte is not a base-5 digit.
    #[error("header byte {byte:#04x} at offset {offset} is not a base-5 digit")]
    InvalidHeader { offset: usize, byte: u8 },

    /// The header declares a zero-sized grid.
    #[error("header declares an empty {width}x{height} grid")]
    ZeroDimension { width: usize, height: usize },

    /// A payload byte is outside the base-62 alphabet.
    #[error("payload byte {byte:#04x} at offset {offset} is not a base-62 symbol")]
    InvalidSymbol { offset: usize, byte: u8 },

    /// The payload holds more base-5 digits than the grid has cells.
    #[error("payload needs {digits} cells but the grid only has {cells}")]
    PayloadOverflow { digits: usize, cells: usize },
}

/// Errors from [`crate::codec`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A dimension does not fit the three-digit base-5 header field.
    #[error("dimension {0} exceeds the codec limit of {max}", max = crate::codec::MAX_ENCODED_DIMENSION)]
    DimensionOverflow(usize),

    /// The input string is corrupt or foreign.
    #[error("malformed input: {0}")]
    MalformedInput(#[from] MalformedInput),
}

/// Errors from [`crate::history::HistoryManager`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// Undo with no prior snapshot.
    #[error("nothing to undo")]
    EmptyHistory,

    /// A snapshot could not be encoded or decoded.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
}

/// Errors from [`crate::clipboard::ClipboardStore`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// Paste with no saved shape.
    #[error("no shape has been copied or imported")]
    NothingCopied,

    /// The copied region could not be read.
    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    /// The shape could not be encoded or decoded.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
}

/// Errors from [`crate::session::Sandbox`] operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SandboxError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    History(#[from] HistoryError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

impl From<MalformedInput> for ClipboardError {
    fn from(err: MalformedInput) -> Self {
        Self::Codec(CodecError::MalformedInput(err))
    }
}
