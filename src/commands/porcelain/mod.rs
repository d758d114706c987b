//! Porcelain commands
//!
//! - `log`: draw the history of an existing git repository

pub mod log;
