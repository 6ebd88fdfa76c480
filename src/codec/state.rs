//! Grid <-> string encoding.

use num_bigint::BigUint;
use num_traits::Zero;

use super::base62;
use crate::core::{CellState, Grid};
use crate::error::{CodecError, MalformedInput};

/// Length of the `HHHWWW` dimension header.
pub const HEADER_LEN: usize = 6;

/// Largest height or width the three-digit base-5 header can carry.
pub const MAX_ENCODED_DIMENSION: usize = 124;

const FIELD_DIGITS: usize = 3;

/// Encode a grid as `HHHWWW` followed by its base-62 payload.
///
/// A grid with every cell Empty has no payload at all.
pub fn encode(grid: &Grid) -> Result<String, CodecError> {
    let (width, height) = grid.dimensions();
    for dimension in [height, width] {
        if dimension > MAX_ENCODED_DIMENSION {
            return Err(CodecError::DimensionOverflow(dimension));
        }
    }

    let mut out = String::with_capacity(HEADER_LEN + grid.len() / 2);
    push_field(&mut out, height);
    push_field(&mut out, width);

    let digits: Vec<u8> = grid.cells().iter().map(|c| c.digit()).collect();
    // Every digit is below 5, so this always parses.
    let value = BigUint::from_radix_be(&digits, 5).unwrap_or_default();
    if !value.is_zero() {
        out.extend(value.to_radix_be(62).into_iter().map(|d| char::from(base62::symbol(d))));
    }
    Ok(out)
}

/// Decode a string produced by [`encode`].
///
/// The payload is expanded back to exactly `height * width` cells, filling
/// from the last cell backward and zero-filling whatever the payload does
/// not reach.
pub fn decode(input: &str) -> Result<Grid, CodecError> {
    let bytes = input.as_bytes();
    if bytes.len() < HEADER_LEN {
        return Err(MalformedInput::TooShort { len: bytes.len() }.into());
    }
    let (header, payload) = bytes.split_at(HEADER_LEN);

    let height = parse_field(&header[..FIELD_DIGITS], 0)?;
    let width = parse_field(&header[FIELD_DIGITS..], FIELD_DIGITS)?;
    if width == 0 || height == 0 {
        return Err(MalformedInput::ZeroDimension { width, height }.into());
    }
    let cell_count = width * height;

    let payload_digits = payload
        .iter()
        .enumerate()
        .map(|(i, &byte)| {
            base62::digit(byte).ok_or(MalformedInput::InvalidSymbol {
                offset: HEADER_LEN + i,
                byte,
            })
        })
        .collect::<Result<Vec<u8>, _>>()?;

    let mut cells = vec![CellState::Empty; cell_count];
    let value = BigUint::from_radix_be(&payload_digits, 62).unwrap_or_default();
    if !value.is_zero() {
        let cell_digits = value.to_radix_le(5);
        if cell_digits.len() > cell_count {
            return Err(MalformedInput::PayloadOverflow {
                digits: cell_digits.len(),
                cells: cell_count,
            }
            .into());
        }
        for (cell, digit) in cells.iter_mut().rev().zip(cell_digits) {
            *cell = CellState::from_digit(digit).unwrap_or_default();
        }
    }

    Grid::from_cells(width, height, cells)
        .map_err(|_| MalformedInput::ZeroDimension { width, height }.into())
}

fn push_field(out: &mut String, value: usize) {
    let mut digits = [b'0'; FIELD_DIGITS];
    let mut rest = value;
    for slot in digits.iter_mut().rev() {
        *slot = b'0' + (rest % 5) as u8;
        rest /= 5;
    }
    out.extend(digits.iter().map(|&d| char::from(d)));
}

fn parse_field(field: &[u8], offset: usize) -> Result<usize, MalformedInput> {
    field.iter().enumerate().try_fold(0, |acc, (i, &byte)| match byte {
        b'0'..=b'4' => Ok(acc * 5 + usize::from(byte - b'0')),
        _ => Err(MalformedInput::InvalidHeader { offset: offset + i, byte }),
    })
}
