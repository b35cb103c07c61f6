//! Client-side message layer for the FUS firmware update server protocol
//!
//! Builds the BinaryInform and BinaryInit request envelopes, computes the
//! Logic-Check integrity token, and derives firmware decryption keys. Transport
//! and session handling belong to the caller.

pub mod envelope;
pub mod error;
pub mod key;
pub mod logic_check;
pub mod message;
pub mod prelude;
pub mod region;
pub mod serializer;

pub use envelope::{Envelope, Field, FieldValue, PROTOCOL_VERSION};
pub use error::FusError;
pub use key::{derive_decryption_key, DecryptionKey, KEY_LEN};
pub use logic_check::{logic_check, LOGIC_CHECK_MASK, REFERENCE_LEN};
pub use message::{
    binary_init_reference, build_binary_init_message, build_registration_message,
    ClientIdentity, FusMessageBuilder,
};
pub use region::{CarrierInfo, Region};
pub use serializer::XmlSerializer;
