//! Logic-Check transform
//!
//! The FUS server authenticates every request with a "logic check": each
//! character of the server nonce selects, by its low four bits, one character
//! of a reference string. The reference is public firmware metadata, so this
//! is a keyed substitution and not a cryptographic hash. The server recomputes
//! it with the same formula, so it must be reproduced exactly.

use crate::error::FusError;
use tracing::trace;

/// Mask applied to each nonce character code
pub const LOGIC_CHECK_MASK: u32 = 0xF;

/// Minimum reference length that can satisfy any nonce
pub const REFERENCE_LEN: usize = LOGIC_CHECK_MASK as usize + 1;

/// Compute the Logic-Check token for `nonce` over `reference`.
///
/// The output has exactly as many characters as `nonce`; character `i` is
/// `reference[code(nonce[i]) & 0xF]`.
///
/// # Errors
///
/// Returns [`FusError::IndexOutOfRange`] when a computed index is not a valid
/// character position in `reference`. An empty nonce never fails.
pub fn logic_check(reference: &str, nonce: &str) -> Result<String, FusError> {
    let alphabet: Vec<char> = reference.chars().collect();
    let mut out = String::with_capacity(nonce.len());

    for c in nonce.chars() {
        let index = (u32::from(c) & LOGIC_CHECK_MASK) as usize;
        let picked = alphabet.get(index).ok_or(FusError::IndexOutOfRange {
            index,
            len: alphabet.len(),
        })?;
        out.push(*picked);
    }

    trace!(
        reference_len = alphabet.len(),
        nonce_len = nonce.chars().count(),
        "computed logic check"
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE: &str = "0123456789ABCDEF";

    #[test]
    fn test_low_nibble_selects_character() {
        // '0' = 0x30 -> 0, 'A' = 0x41 -> 1, 'o' = 0x6F -> 15, '\u{0}' -> 0
        let out = logic_check(REFERENCE, "0Ao\u{0}").unwrap();
        assert_eq!(out, "01F0");
    }

    #[test]
    fn test_high_bits_are_discarded() {
        // 0x21, 0x31, 0x41, 0x51 all share low nibble 1
        let out = logic_check(REFERENCE, "!1AQ").unwrap();
        assert_eq!(out, "1111");
    }

    #[test]
    fn test_empty_nonce() {
        assert_eq!(logic_check(REFERENCE, "").unwrap(), "");
        assert_eq!(logic_check("", "").unwrap(), "");
    }

    #[test]
    fn test_short_reference_out_of_range() {
        // 'O' = 0x4F -> index 15
        let err = logic_check("ABCDEFGHIJ", "O").unwrap_err();
        assert!(matches!(
            err,
            FusError::IndexOutOfRange { index: 15, len: 10 }
        ));
    }

    #[test]
    fn test_short_reference_in_range_succeeds() {
        // Only indices 0..=3 are used, so a 4-character reference is enough
        let out = logic_check("WXYZ", "0123").unwrap();
        assert_eq!(out, "WXYZ");
    }

    #[test]
    fn test_non_ascii_characters() {
        // U+00E9 = 0xE9 -> 9; U+20AC = 0x20AC -> 12
        let out = logic_check(REFERENCE, "\u{e9}\u{20ac}").unwrap();
        assert_eq!(out, "9C");
    }

    #[test]
    fn test_long_reference_uses_first_sixteen() {
        let out = logic_check("abcdefghijklmnopqrstuvwxyz", "o").unwrap();
        assert_eq!(out, "p");
    }
}
