//! VAST output module
//!
//! The generic labeled-tree output shape, the comment-tree projection into
//! it, the document envelope and the JSON writer.

pub mod node;
pub mod projector;
pub mod envelope;
pub mod json;

pub use node::{NodeKind, VastNode};
pub use projector::project;
pub use envelope::{ColorLegend, VastDocument, VAST_FORMAT, VAST_VERSION};
pub use json::JsonWriter;
