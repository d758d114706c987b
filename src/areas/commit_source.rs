//! Commit sources
//!
//! A commit source supplies the ordered working set for one layout pass. The
//! order it returns is the order rows are drawn in; the layout never re-sorts.

use crate::artifacts::objects::commit::GraphCommit;
use std::collections::HashSet;

pub trait CommitSource {
    /// Fetch the working set, in drawing order, with unique commit ids
    fn commits(&self) -> anyhow::Result<Vec<GraphCommit>>;
}

impl CommitSource for Vec<GraphCommit> {
    fn commits(&self) -> anyhow::Result<Vec<GraphCommit>> {
        Ok(dedup_commits(self.clone()))
    }
}

/// Drop repeated commit ids, keeping the first occurrence
///
/// The layout pass assumes unique ids; this is where that is enforced.
pub fn dedup_commits(commits: Vec<GraphCommit>) -> Vec<GraphCommit> {
    let mut seen = HashSet::with_capacity(commits.len());

    commits
        .into_iter()
        .filter(|commit| {
            let first = seen.insert(commit.oid().clone());
            if !first {
                debug_log!("dropping duplicate commit {}", commit.oid());
            }
            first
        })
        .collect()
}
