//! Property-based tests for the Logic-Check transform and key derivation

use fus_client::{derive_decryption_key, logic_check, FusError};
use proptest::prelude::*;

proptest! {
    #[test]
    fn output_length_matches_nonce(
        reference in "[A-Za-z0-9/]{16,64}",
        nonce in any::<String>()
    ) {
        let out = logic_check(&reference, &nonce).unwrap();
        prop_assert_eq!(out.chars().count(), nonce.chars().count());
    }
}

proptest! {
    #[test]
    fn each_character_is_reference_at_low_nibble(
        reference in "[A-Za-z0-9/]{16,64}",
        nonce in "\\PC{0,64}"
    ) {
        let alphabet: Vec<char> = reference.chars().collect();
        let out: Vec<char> = logic_check(&reference, &nonce).unwrap().chars().collect();
        for (i, c) in nonce.chars().enumerate() {
            prop_assert_eq!(out[i], alphabet[(c as u32 & 0xF) as usize]);
        }
    }
}

proptest! {
    #[test]
    fn transform_is_deterministic(
        reference in "[A-Za-z0-9]{16}",
        nonce in "[ -~]{0,32}"
    ) {
        prop_assert_eq!(logic_check(&reference, &nonce).unwrap(), logic_check(&reference, &nonce).unwrap());
    }
}

proptest! {
    #[test]
    fn short_reference_errors_iff_index_exceeds(
        reference in "[A-Z]{0,15}",
        nonce in "[ -~]{1,32}"
    ) {
        let len = reference.chars().count();
        let max_index = nonce.chars().map(|c| (c as u32 & 0xF) as usize).max().unwrap_or(0);
        match logic_check(&reference, &nonce) {
            Ok(_) => prop_assert!(max_index < len),
            Err(FusError::IndexOutOfRange { index, len: got }) => {
                prop_assert!(index >= len);
                prop_assert_eq!(got, len);
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}

proptest! {
    #[test]
    fn derived_key_is_sixteen_bytes(
        version in "[A-Z0-9/]{16,60}",
        logical_value in "[ -~]{0,32}"
    ) {
        let key = derive_decryption_key(&version, &logical_value).unwrap();
        prop_assert_eq!(key.as_bytes().len(), 16);
        prop_assert_eq!(key, derive_decryption_key(&version, &logical_value).unwrap());
    }
}
