//! Where commits come from and where drawings go
//!
//! - `commit_source`: the `CommitSource` seam and id deduplication
//! - `json_source`: commit records from a JSON document
//! - `git_source`: commit records from `git log` on an existing repository
//! - `session`: output writer plus layout and render settings

pub mod commit_source;
pub mod git_source;
pub mod json_source;
pub mod session;
