//! Commit records handed to the layout pass
//!
//! - `commit_id`: opaque commit identifier
//! - `commit`: commit record with author, message and branch labels

pub mod commit;
pub mod commit_id;
