//! Unified error type for the FUS message layer
//!
//! The message layer has exactly one domain failure: a Logic-Check index that
//! falls outside the reference string. Everything else is accepted as-is and
//! left for the server to judge. Serialization errors come from the external
//! markup engine and are carried separately.
//!
//! # Example
//!
//! ```
//! use fus_client::{logic_check, FusError};
//!
//! let err = logic_check("short", "\u{000F}").unwrap_err();
//! assert!(matches!(err, FusError::IndexOutOfRange { index: 15, len: 5 }));
//! ```

use thiserror::Error;

/// Error type for all FUS message operations
///
/// # Error Categories
///
/// - **IndexOutOfRange**: the reference string is too short for a nonce-derived index
/// - **Serialization**: the markup engine failed to render an envelope
#[derive(Debug, Error)]
pub enum FusError {
    /// A 4-bit index computed from the nonce does not fit the reference string
    #[error("Logic check index {index} out of range for reference of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Markup serialization error
    #[error("XML serialization error: {0}")]
    Serialization(#[from] quick_xml::errors::serialize::SeError),
}

impl FusError {
    /// Returns true if the error is potentially retryable
    ///
    /// Every operation in this crate is deterministic, so repeating a call with
    /// the same input always fails the same way.
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Returns a suggestion for resolving this error
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            Self::IndexOutOfRange { .. } => Some(
                "The reference string must have at least 16 characters; check the firmware version or binary file name",
            ),
            Self::Serialization(_) => None,
        }
    }

    /// Returns true if the error was caused by caller-supplied input
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}
