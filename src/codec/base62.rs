//! The 62-symbol payload alphabet: digits, then uppercase, then lowercase.

/// Payload symbols in digit order.
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const INVALID: u8 = u8::MAX;

const LOOKUP: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Symbol for a digit in `0..62`.
#[must_use]
pub fn symbol(digit: u8) -> u8 {
    ALPHABET[digit as usize]
}

/// Digit for a symbol, or `None` if it is not in the alphabet.
#[must_use]
pub fn digit(symbol: u8) -> Option<u8> {
    match LOOKUP[symbol as usize] {
        INVALID => None,
        d => Some(d),
    }
}
