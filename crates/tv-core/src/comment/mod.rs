//! Comment system module
//!
//! Handles extraction of flat comment records from the markup tree and
//! reconstruction of their nesting hierarchy from the indentation signal.

pub mod model;
pub mod extractor;
pub mod reconstructor;

pub use model::{CommentNode, CommentRecord, CommentTree};
pub use extractor::CommentExtractor;
pub use reconstructor::reconstruct;
