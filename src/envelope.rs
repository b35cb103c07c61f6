//! FUS protocol envelope
//!
//! Every request has the same scaffold: a header carrying the protocol
//! version and a body with a single `Put` operation. The `Put` holds named
//! slots, each wrapping its scalar in a `Data` element:
//!
//! ```text
//! <FUSMsg>
//!   <FUSHdr><ProtoVer>1.0</ProtoVer></FUSHdr>
//!   <FUSBody><Put>
//!     <FIELD_NAME><Data>value</Data></FIELD_NAME>
//!   </Put></FUSBody>
//! </FUSMsg>
//! ```
//!
//! Some server implementations are sensitive to field order, so fields are
//! kept in insertion order and serialized in that order.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

/// Protocol version sent in `FUSHdr/ProtoVer`
pub const PROTOCOL_VERSION: &str = "1.0";

/// Scalar carried by a field's `Data` element
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(u32),
    Text(String),
}

impl FieldValue {
    /// Text content, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Number(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<u32> for FieldValue {
    fn from(n: u32) -> Self {
        FieldValue::Number(n)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

/// A named slot in the `Put` operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub value: FieldValue,
}

/// A complete FUS request document
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename = "FUSMsg")]
pub struct Envelope {
    #[serde(rename = "FUSHdr")]
    header: Header,
    #[serde(rename = "FUSBody")]
    body: Body,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
struct Header {
    #[serde(rename = "ProtoVer")]
    proto_ver: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
struct Body {
    #[serde(rename = "Put")]
    put: Put,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Put {
    fields: Vec<Field>,
}

#[derive(serde::Serialize)]
struct Data<'a> {
    #[serde(rename = "Data")]
    value: &'a FieldValue,
}

impl Serialize for Put {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Put", self.fields.len())?;
        for field in &self.fields {
            state.serialize_field(field.name, &Data { value: &field.value })?;
        }
        state.end()
    }
}

impl Envelope {
    /// Create an envelope with the protocol header and an empty `Put`
    pub fn new() -> Self {
        Envelope {
            header: Header {
                proto_ver: PROTOCOL_VERSION,
            },
            body: Body { put: Put::default() },
        }
    }

    /// Append a field after all existing ones
    pub fn push(&mut self, name: &'static str, value: impl Into<FieldValue>) {
        self.body.put.fields.push(Field {
            name,
            value: value.into(),
        });
    }

    /// Append several fields in order
    pub fn extend<I, V>(&mut self, fields: I)
    where
        I: IntoIterator<Item = (&'static str, V)>,
        V: Into<FieldValue>,
    {
        for (name, value) in fields {
            self.push(name, value);
        }
    }

    /// Protocol version from the header
    pub fn protocol_version(&self) -> &str {
        self.header.proto_ver
    }

    /// Fields in insertion order
    pub fn fields(&self) -> &[Field] {
        &self.body.put.fields
    }

    /// Field names in insertion order
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.body.put.fields.iter().map(|f| f.name)
    }

    /// Value of the first field called `name`
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.body
            .put
            .fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| &f.value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.body.put.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.put.fields.is_empty()
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Self::new()
    }
}
