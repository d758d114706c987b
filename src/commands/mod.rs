//! Command implementations
//!
//! - `porcelain`: user-facing commands working on a repository (`log`)
//! - `plumbing`: commands working on a commit list supplied as JSON (`render`)

pub mod plumbing;
pub mod porcelain;
