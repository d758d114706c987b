//! Commit records consumed by the layout pass
//!
//! A commit record is the only thing the graph layout knows about history:
//! - The commit id
//! - Parent commit ids, in order (the first one is the mainline parent)
//! - Author information
//! - The commit message
//! - Local and remote branch names pointing at the commit
//!
//! ## Format
//!
//! As JSON:
//! ```text
//! { "oid": "...",
//!   "parents": ["...", ...],
//!   "author": { "name": "...", "email": "...", "timestamp": 1700000000 },
//!   "message": "...",
//!   "branches": ["main"], "remoteBranches": ["origin/main"] }
//! ```

use crate::artifacts::objects::commit_id::CommitId;
use serde::{Deserialize, Serialize};

/// Author information
///
/// Contains name, email, and a timestamp in seconds since the Unix epoch.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Author {
    name: String,
    email: String,
    timestamp: i64,
}

impl Author {
    /// Create a new author with a specific timestamp
    ///
    /// # Arguments
    ///
    /// * `name` - Author's name
    /// * `email` - Author's email address
    /// * `timestamp` - Seconds since the Unix epoch
    pub fn new(name: String, email: String, timestamp: i64) -> Self {
        Author {
            name,
            email,
            timestamp,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Format author name and email for display
    ///
    /// # Returns
    ///
    /// String in format "Name <email@example.com>"
    pub fn display_name(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }

    /// Format timestamp in human-readable form (UTC)
    ///
    /// # Returns
    ///
    /// String like "Mon Jan 1 12:34:56 2024 +0000", or the raw seconds when
    /// the timestamp is out of chrono's range
    pub fn readable_timestamp(&self) -> String {
        match chrono::DateTime::from_timestamp(self.timestamp, 0) {
            Some(datetime) => datetime.format("%a %b %-d %H:%M:%S %Y %z").to_string(),
            None => self.timestamp.to_string(),
        }
    }
}

/// Commit record as supplied by a commit source
///
/// Ids are assumed unique within one working set. Commit sources are
/// responsible for deduplication; the layout pass does not check it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphCommit {
    oid: CommitId,
    #[serde(default)]
    parents: Vec<CommitId>,
    author: Author,
    #[serde(default)]
    message: String,
    #[serde(default)]
    branches: Vec<String>,
    #[serde(default)]
    remote_branches: Vec<String>,
}

impl GraphCommit {
    /// Create a new commit record without branch labels
    ///
    /// # Arguments
    ///
    /// * `oid` - Commit id, unique within the working set
    /// * `parents` - Parent ids, mainline parent first
    /// * `author` - Author information
    /// * `message` - Commit message
    pub fn new(oid: CommitId, parents: Vec<CommitId>, author: Author, message: String) -> Self {
        GraphCommit {
            oid,
            parents,
            author,
            message,
            branches: Vec::new(),
            remote_branches: Vec::new(),
        }
    }

    pub fn with_branches(mut self, branches: Vec<String>) -> Self {
        self.branches = branches;
        self
    }

    pub fn with_remote_branches(mut self, remote_branches: Vec<String>) -> Self {
        self.remote_branches = remote_branches;
        self
    }

    pub fn oid(&self) -> &CommitId {
        &self.oid
    }

    pub fn parents(&self) -> &[CommitId] {
        &self.parents
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    /// Get the full commit message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the first line of the commit message
    ///
    /// Useful for short-form display (e.g., one line per graph row)
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    pub fn branches(&self) -> &[String] {
        &self.branches
    }

    pub fn remote_branches(&self) -> &[String] {
        &self.remote_branches
    }
}
