//! Commit graph data structures and algorithms
//!
//! - `core`: Layout configuration and the pager wrapper
//! - `graph`: Lane assignment and edge routing
//! - `objects`: Commit records and commit ids
//! - `render`: Text, SVG and JSON output

pub mod core;
pub mod graph;
pub mod objects;
pub mod render;
