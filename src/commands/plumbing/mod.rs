//! Plumbing commands
//!
//! - `render`: lay out and draw a commit list read from JSON

pub mod render;
