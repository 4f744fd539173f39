//! threadvast - discussion thread to VAST converter CLI
//!
//! Reads a parsed markup tree (JSON) of a discussion page, rebuilds the
//! comment hierarchy from its indentation signal and emits a VAST document.
//!
//! ## Quick Start
//!
//! ```bash
//! # Convert a parsed thread to a VAST document
//! threadvast convert thread.json --source "item?id=1" -o thread.vast.json
//!
//! # Inspect the flat records before reconstruction
//! threadvast records thread.json
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
