//! Generic markup tree module
//!
//! The parsed element/text tree the converter consumes, plus dotted-selector
//! matching and depth-first lookup over it. Producing this tree from raw
//! markup text is an external collaborator's job; it is exchanged here as
//! serialized `MarkupNode` values.

pub mod model;
pub mod selector;

pub use model::{Element, MarkupNode};
pub use selector::{find_all, find_first, Selector};
