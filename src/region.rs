//! Region codes and the carrier metadata they add to a BinaryInform request

use std::fmt;

/// Carrier metadata the server expects alongside certain region codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarrierInfo {
    /// `DEVICE_CC_CODE`
    pub country_code: &'static str,
    /// `MCC_NUM`
    pub mcc: &'static str,
    /// `MNC_NUM`
    pub mnc: &'static str,
}

const EUX_CARRIER: CarrierInfo = CarrierInfo {
    country_code: "DE",
    mcc: "262",
    mnc: "01",
};

const EUY_CARRIER: CarrierInfo = CarrierInfo {
    country_code: "RS",
    mcc: "220",
    mnc: "01",
};

/// Device region (CSC) code
///
/// Only `EUX` and `EUY` change the request shape. Any other code is passed
/// through untouched and validated by the server, if at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Region {
    Eux,
    Euy,
    Other(String),
}

impl Region {
    /// The code as sent in `DEVICE_LOCAL_CODE`
    pub fn as_str(&self) -> &str {
        match self {
            Region::Eux => "EUX",
            Region::Euy => "EUY",
            Region::Other(code) => code,
        }
    }

    /// Carrier metadata for regions that require it
    pub fn carrier(&self) -> Option<CarrierInfo> {
        match self {
            Region::Eux => Some(EUX_CARRIER),
            Region::Euy => Some(EUY_CARRIER),
            Region::Other(_) => None,
        }
    }
}

impl From<&str> for Region {
    fn from(code: &str) -> Self {
        match code {
            "EUX" => Region::Eux,
            "EUY" => Region::Euy,
            other => Region::Other(other.to_string()),
        }
    }
}

impl From<String> for Region {
    fn from(code: String) -> Self {
        match code.as_str() {
            "EUX" => Region::Eux,
            "EUY" => Region::Euy,
            _ => Region::Other(code),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
