//! Compact printable encoding of a grid.
//!
//! ## Format
//!
//! ```text
//! HHH WWW PAYLOAD
//! ```
//!
//! - `HHH`, `WWW`: height then width, three base-5 digits each, zero-padded
//!   (so at most 124 per axis)
//! - `PAYLOAD`: the cells read row-major as the digits of one base-5
//!   integer (first cell most significant, digit = `CellState` order),
//!   rewritten in base 62 over `0-9A-Za-z`
//!
//! Leading Empty cells carry no payload, so an all-Empty grid is the bare
//! header. Decoding zero-fills to the cell count the header declares.
//!
//! The same string is used for undo snapshots, the clipboard, and
//! export/import of shapes.
//!
//! ```
//! use ropas::codec::{decode, encode};
//! use ropas::core::Grid;
//!
//! let grid = Grid::from_pattern("RP\nS#").unwrap();
//! let encoded = encode(&grid).unwrap();
//! assert_eq!(decode(&encoded).unwrap(), grid);
//! ```

pub mod base62;
mod state;

pub use state::{decode, encode, HEADER_LEN, MAX_ENCODED_DIMENSION};
