//! Modulo-43 symbol table.
//!
//! Numerical value assignments used to compute the HIBC check character, see Appendix B of
//! ANSI/HIBC 2.5. The table is also the alphabet every encoded data structure is drawn from.

use crate::{UdiError, UdiResult};

/// The 43 HIBC symbols in value order. Index 38 is a space.
pub const MOD43_TABLE: [char; 43] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I',
    'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '-', '.',
    ' ', '$', '/', '+', '%',
];

/// Returns the Modulo-43 value of `symbol`.
///
/// ASCII letters are uppercased before lookup, so `'a'` and `'A'` share a value.
///
/// # Errors
///
/// Returns [`UdiError::InvalidSymbol`] if the character is not part of the table. This covers
/// every non-ASCII character, since only ASCII letters are case folded.
pub fn to_index(symbol: char) -> UdiResult<usize> {
    let upper = symbol.to_ascii_uppercase();
    MOD43_TABLE
        .iter()
        .position(|&c| c == upper)
        .ok_or(UdiError::InvalidSymbol(symbol))
}

/// Returns the symbol with Modulo-43 value `index`.
///
/// # Errors
///
/// Returns [`UdiError::IndexOutOfRange`] unless `index` is in `0..=42`.
pub fn from_index(index: usize) -> UdiResult<char> {
    MOD43_TABLE
        .get(index)
        .copied()
        .ok_or(UdiError::IndexOutOfRange(index))
}
