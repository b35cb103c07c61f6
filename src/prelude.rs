//! FUS client prelude
//!
//! ```rust
//! use fus_client::prelude::*;
//!
//! # fn example() -> Result<(), FusError> {
//! let builder = FusMessageBuilder::new().with_serializer(XmlSerializer::pretty(2));
//! let xml = builder.binary_init_xml("SM-G998B_1_20210101000000_abcdef1234_fac.zip.enc4", "nonce")?;
//! assert!(xml.contains("BINARY_FILE_NAME"));
//! # Ok(())
//! # }
//! ```

pub use crate::envelope::{Envelope, Field, FieldValue};
pub use crate::error::FusError;
pub use crate::key::{derive_decryption_key, DecryptionKey};
pub use crate::logic_check::logic_check;
pub use crate::message::{
    build_binary_init_message, build_registration_message, ClientIdentity, FusMessageBuilder,
};
pub use crate::region::Region;
pub use crate::serializer::XmlSerializer;
