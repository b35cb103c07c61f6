//! Firmware decryption key derivation
//!
//! The server hands out a "logical value" with each firmware version. The
//! binary decryption key is MD5 over the Logic-Check token of that value
//! against the version string. MD5 is what the server uses; it is kept for
//! protocol compatibility only.

use crate::error::FusError;
use crate::logic_check::logic_check;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use md5::{Digest, Md5};
use std::fmt;
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Length of a derived key in bytes
pub const KEY_LEN: usize = 16;

/// Firmware decryption key (16 bytes) that zeroizes on drop
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct DecryptionKey([u8; KEY_LEN]);

impl DecryptionKey {
    /// Wrap raw key bytes
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        DecryptionKey(bytes)
    }

    /// Get a reference to the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Lowercase hex encoding
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Standard base64 encoding
    pub fn to_base64(&self) -> String {
        BASE64.encode(self.0)
    }
}

impl AsRef<[u8]> for DecryptionKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for DecryptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DecryptionKey([REDACTED])")
    }
}

/// Derive the decryption key for a firmware version
///
/// # Errors
///
/// Returns [`FusError::IndexOutOfRange`] when `firmware_version` is too short
/// for the characters in `logical_value`.
pub fn derive_decryption_key(
    firmware_version: &str,
    logical_value: &str,
) -> Result<DecryptionKey, FusError> {
    let check = logic_check(firmware_version, logical_value)?;

    let mut hasher = Md5::new();
    hasher.update(check.as_bytes());
    let digest = hasher.finalize();

    let mut key = [0u8; KEY_LEN];
    key.copy_from_slice(&digest);
    debug!("derived firmware decryption key");
    Ok(DecryptionKey(key))
}
