//! Common fixtures for fus-client integration tests

#![allow(dead_code)]

/// Firmware version string as reported by the server (PDA/CSC/MODEM/BOOTLOADER)
pub const FW_VERSION: &str = "G998BXXU1AUA1/G998BOXM1AUA1/G998BXXU1AUA1/G998BXXU1AUA1";

/// A server nonce after decryption by the caller
pub const NONCE: &str = "2Gf0+kq9XsbT1Nwa";

/// Logic check of `NONCE` over `FW_VERSION`
pub const FW_LOGIC_CHECK: &str = "9UXGAA9A189B9GU9";

pub const MODEL: &str = "SM-G998B";
pub const IMEI: &str = "353000000000001";

/// Binary file name whose reference is `ABCDEF0123456789`
pub const BINARY_FILE: &str = "FIRMWARE_IMAGE_ABCDEF0123456789.zip";

/// Logic check of `NONCE` over `ABCDEF0123456789`
pub const BINARY_LOGIC_CHECK: &str = "C10A55B32DCEB81B";

/// Logical value issued with `FW_VERSION` and its expected key
pub const LOGICAL_VALUE: &str = "Lv9fZ3qT";
pub const EXPECTED_KEY_HEX: &str = "a0f18c20b2e3de71d19a56362583c0d8";

/// Text content of a field, or `None` when absent or numeric
pub fn text<'a>(envelope: &'a fus_client::Envelope, name: &str) -> Option<&'a str> {
    envelope.field(name).and_then(fus_client::FieldValue::as_text)
}
