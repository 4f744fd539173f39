//! JSON writer for VAST documents

use crate::error::Result;
use crate::vast::envelope::VastDocument;

/// JSON writer with compact mode support
pub struct JsonWriter {
    /// Whether to use pretty-print formatting
    pretty: bool,
}

impl JsonWriter {
    /// Create a writer
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Create a pretty-printing writer
    pub fn pretty() -> Self {
        Self::new(true)
    }

    /// Create a compact writer
    pub fn compact() -> Self {
        Self::new(false)
    }

    /// Serialize a document to a JSON string
    pub fn write(&self, document: &VastDocument) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(document)?
        } else {
            serde_json::to_string(document)?
        };
        Ok(json)
    }
}
