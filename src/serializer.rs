//! XML rendering of FUS envelopes
//!
//! `XmlSerializer` is a plain value with no internal state. Construct one and
//! share it, or construct one per call; both behave identically.

use crate::envelope::Envelope;
use crate::error::FusError;
use quick_xml::se::Serializer;
use serde::Serialize;
use tracing::trace;

/// Renders an [`Envelope`] as XML markup without an XML declaration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XmlSerializer {
    indent: Option<usize>,
}

impl XmlSerializer {
    /// Compact output, the form sent on the wire
    pub const fn new() -> Self {
        XmlSerializer { indent: None }
    }

    /// Indented output for logs and debugging
    pub const fn pretty(indent: usize) -> Self {
        XmlSerializer {
            indent: Some(indent),
        }
    }

    pub fn indent(&self) -> Option<usize> {
        self.indent
    }

    /// Serialize an envelope, preserving field order
    pub fn serialize(&self, envelope: &Envelope) -> Result<String, FusError> {
        let mut out = String::new();
        let mut ser = Serializer::new(&mut out);
        if let Some(width) = self.indent {
            ser.indent(' ', width);
        }
        envelope.serialize(ser)?;
        trace!(bytes = out.len(), fields = envelope.len(), "serialized envelope");
        Ok(out)
    }
}
