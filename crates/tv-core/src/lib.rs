//! tv-core - Core library for threadvast
//!
//! This crate provides the core business logic for the threadvast converter:
//! locating comment containers in a parsed markup tree, flattening them into
//! indentation-annotated records, rebuilding the nesting hierarchy from the
//! indentation signal alone, and projecting the result into a VAST
//! (visual-annotation-structure-tree) document.

pub mod error;
pub mod config;
pub mod markup;
pub mod comment;
pub mod vast;
pub mod pipeline;

pub use error::{Result, ThreadvastError};
pub use pipeline::Converter;
