//! BinaryInform and BinaryInit request builders
//!
//! # Protocol Flow
//!
//! 1. The server issues a nonce for the session
//! 2. The client sends BinaryInform (device registration) to learn the
//!    latest firmware and its binary file name
//! 3. The client sends BinaryInit to announce the download of that file
//!
//! Both requests carry a `LOGIC_CHECK` token computed from the nonce. The
//! builders here only produce documents; sending them is the caller's job.
//!
//! # Example
//!
//! ```
//! use fus_client::{build_registration_message, XmlSerializer};
//!
//! # fn example() -> Result<(), fus_client::FusError> {
//! let envelope = build_registration_message(
//!     "G998BXXU1AUA1/G998BOXM1AUA1/G998BXXU1AUA1/G998BXXU1AUA1",
//!     "EUX",
//!     "SM-G998B",
//!     "0123456789abcdef",
//!     "350000000000000",
//! )?;
//! assert_eq!(envelope.len(), 13);
//! let xml = XmlSerializer::new().serialize(&envelope)?;
//! assert!(xml.starts_with("<FUSMsg>"));
//! # Ok(())
//! # }
//! ```

use crate::envelope::Envelope;
use crate::error::FusError;
use crate::logic_check::{logic_check, REFERENCE_LEN};
use crate::region::Region;
use crate::serializer::XmlSerializer;
use tracing::debug;

pub const ACCESS_MODE: &str = "ACCESS_MODE";
pub const BINARY_NATURE: &str = "BINARY_NATURE";
pub const CLIENT_PRODUCT: &str = "CLIENT_PRODUCT";
pub const CLIENT_VERSION: &str = "CLIENT_VERSION";
pub const DEVICE_FW_VERSION: &str = "DEVICE_FW_VERSION";
pub const DEVICE_LOCAL_CODE: &str = "DEVICE_LOCAL_CODE";
pub const DEVICE_MODEL_NAME: &str = "DEVICE_MODEL_NAME";
pub const DEVICE_IMEI_PUSH: &str = "DEVICE_IMEI_PUSH";
pub const LOGIC_CHECK: &str = "LOGIC_CHECK";
pub const DEVICE_AID_CODE: &str = "DEVICE_AID_CODE";
pub const DEVICE_CC_CODE: &str = "DEVICE_CC_CODE";
pub const MCC_NUM: &str = "MCC_NUM";
pub const MNC_NUM: &str = "MNC_NUM";
pub const BINARY_FILE_NAME: &str = "BINARY_FILE_NAME";

const ACCESS_MODE_VALUE: u32 = 2;
const BINARY_NATURE_VALUE: u32 = 1;

/// Client product name reported to the server
pub const DEFAULT_CLIENT_PRODUCT: &str = "Smart Switch";
/// Client version reported to the server
pub const DEFAULT_CLIENT_VERSION: &str = "4.3.24062_1";

/// Client product and version announced in BinaryInform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIdentity {
    pub product: String,
    pub version: String,
}

impl ClientIdentity {
    pub fn new(product: impl Into<String>, version: impl Into<String>) -> Self {
        ClientIdentity {
            product: product.into(),
            version: version.into(),
        }
    }
}

impl Default for ClientIdentity {
    fn default() -> Self {
        ClientIdentity::new(DEFAULT_CLIENT_PRODUCT, DEFAULT_CLIENT_VERSION)
    }
}

/// Builds FUS request envelopes and renders them with an owned serializer
#[derive(Debug, Clone, Default)]
pub struct FusMessageBuilder {
    identity: ClientIdentity,
    serializer: XmlSerializer,
}

impl FusMessageBuilder {
    /// Builder with the default client identity and compact XML output
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identity(mut self, identity: ClientIdentity) -> Self {
        self.identity = identity;
        self
    }

    pub fn with_serializer(mut self, serializer: XmlSerializer) -> Self {
        self.serializer = serializer;
        self
    }

    pub fn identity(&self) -> &ClientIdentity {
        &self.identity
    }

    pub fn serializer(&self) -> &XmlSerializer {
        &self.serializer
    }

    /// Build a BinaryInform (device registration) envelope
    ///
    /// `EUX` and `EUY` regions get four carrier fields appended after the
    /// base fields. Unknown regions are accepted without complaint.
    pub fn registration(
        &self,
        firmware_version: &str,
        region_code: &str,
        model_name: &str,
        nonce: &str,
        imei: &str,
    ) -> Result<Envelope, FusError> {
        let region = Region::from(region_code);
        let check = logic_check(firmware_version, nonce)?;

        let mut envelope = Envelope::new();
        envelope.push(ACCESS_MODE, ACCESS_MODE_VALUE);
        envelope.push(BINARY_NATURE, BINARY_NATURE_VALUE);
        envelope.push(CLIENT_PRODUCT, self.identity.product.as_str());
        envelope.push(CLIENT_VERSION, self.identity.version.as_str());
        envelope.push(DEVICE_FW_VERSION, firmware_version);
        envelope.push(DEVICE_LOCAL_CODE, region.as_str());
        envelope.push(DEVICE_MODEL_NAME, model_name);
        envelope.push(DEVICE_IMEI_PUSH, imei);
        envelope.push(LOGIC_CHECK, check);

        if let Some(carrier) = region.carrier() {
            envelope.extend([
                (DEVICE_AID_CODE, region.as_str()),
                (DEVICE_CC_CODE, carrier.country_code),
                (MCC_NUM, carrier.mcc),
                (MNC_NUM, carrier.mnc),
            ]);
        }

        debug!(
            region = %region,
            model = model_name,
            fields = envelope.len(),
            "built BinaryInform envelope"
        );
        Ok(envelope)
    }

    /// Build a BinaryInit (download announcement) envelope
    ///
    /// The logic check uses [`binary_init_reference`] of `filename`, which must
    /// have at least 16 characters before its first `.`.
    pub fn binary_init(&self, filename: &str, nonce: &str) -> Result<Envelope, FusError> {
        let reference = binary_init_reference(filename);
        let len = reference.chars().count();
        if len < REFERENCE_LEN {
            return Err(FusError::IndexOutOfRange {
                index: REFERENCE_LEN - 1,
                len,
            });
        }
        let check = logic_check(reference, nonce)?;

        let mut envelope = Envelope::new();
        envelope.push(BINARY_FILE_NAME, filename);
        envelope.push(LOGIC_CHECK, check);

        debug!(filename, fields = envelope.len(), "built BinaryInit envelope");
        Ok(envelope)
    }

    /// Build and serialize a BinaryInform envelope
    pub fn registration_xml(
        &self,
        firmware_version: &str,
        region_code: &str,
        model_name: &str,
        nonce: &str,
        imei: &str,
    ) -> Result<String, FusError> {
        let envelope = self.registration(firmware_version, region_code, model_name, nonce, imei)?;
        self.serializer.serialize(&envelope)
    }

    /// Build and serialize a BinaryInit envelope
    pub fn binary_init_xml(&self, filename: &str, nonce: &str) -> Result<String, FusError> {
        let envelope = self.binary_init(filename, nonce)?;
        self.serializer.serialize(&envelope)
    }
}

/// Reference string for a BinaryInit logic check: the last 16 characters of
/// `filename` before its first `.`, or the whole prefix if it is shorter.
pub fn binary_init_reference(filename: &str) -> &str {
    let base = filename.split('.').next().unwrap_or_default();
    let start = base
        .char_indices()
        .rev()
        .nth(REFERENCE_LEN - 1)
        .map_or(0, |(i, _)| i);
    &base[start..]
}

/// Build a BinaryInform envelope with the default client identity
pub fn build_registration_message(
    firmware_version: &str,
    region_code: &str,
    model_name: &str,
    nonce: &str,
    imei: &str,
) -> Result<Envelope, FusError> {
    FusMessageBuilder::new().registration(firmware_version, region_code, model_name, nonce, imei)
}

/// Build a BinaryInit envelope
pub fn build_binary_init_message(filename: &str, nonce: &str) -> Result<Envelope, FusError> {
    FusMessageBuilder::new().binary_init(filename, nonce)
}
