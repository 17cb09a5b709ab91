//! Modulo-43 check character.

use crate::mod43::{from_index, to_index};
use crate::UdiResult;

/// Computes the HIBC check character for `data`.
///
/// The Modulo-43 values of all characters are summed (walking from the last character to the
/// first, as Appendix B does), the sum is reduced modulo 43 and mapped back to a symbol.
///
/// # Errors
///
/// Returns [`crate::UdiError::InvalidSymbol`] if `data` contains a character outside the
/// Modulo-43 table.
pub fn generate_check_char(data: &str) -> UdiResult<char> {
    let mut sum = 0usize;
    for symbol in data.chars().rev() {
        sum += to_index(symbol)?;
    }
    from_index(sum % 43)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UdiError;

    #[test]
    fn test_generate_check_char_matches_reference_vectors() {
        assert_eq!(generate_check_char("+A123BJC5D6E71").unwrap(), 'G');
        assert_eq!(generate_check_char("+123456789").unwrap(), '0');
        assert_eq!(generate_check_char("+foobar").unwrap(), 'N');
    }

    #[test]
    fn test_generate_check_char_can_be_a_space() {
        assert_eq!(generate_check_char("+A123AA40").unwrap(), ' ');
    }

    #[test]
    fn test_generate_check_char_of_empty_input_is_zero() {
        assert_eq!(generate_check_char("").unwrap(), '0');
    }

    #[test]
    fn test_generate_check_char_propagates_invalid_symbol() {
        let err = generate_check_char("+A123#").expect_err("should reject");
        assert!(matches!(err, UdiError::InvalidSymbol('#')));
    }

    #[test]
    fn test_generate_check_char_is_deterministic() {
        let first = generate_check_char("+$$91234573C001/16D20160101/14D20200101X").unwrap();
        for _ in 0..5 {
            assert_eq!(
                generate_check_char("+$$91234573C001/16D20160101/14D20200101X").unwrap(),
                first
            );
        }
    }
}
