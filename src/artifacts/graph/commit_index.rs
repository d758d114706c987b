//! Row lookups built once per layout pass
//!
//! Answers two questions in O(1) instead of scanning the commit list:
//! - "on which row is commit X?" (`row_of`)
//! - "which earlier rows list X as a parent?" (`children_of`)

use crate::artifacts::objects::commit::GraphCommit;
use crate::artifacts::objects::commit_id::CommitId;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct CommitIndex<'c> {
    rows: HashMap<&'c CommitId, usize>,
    children: HashMap<&'c CommitId, Vec<usize>>,
}

impl<'c> CommitIndex<'c> {
    /// Build the index over commits in row order
    ///
    /// A child is only recorded when its parent sits on a later row. Parents
    /// on earlier rows (or missing ones) are history boundaries for layout
    /// purposes, so they never produce an edge.
    pub fn build<I>(commits: I) -> Self
    where
        I: IntoIterator<Item = &'c GraphCommit>,
        I::IntoIter: Clone,
    {
        let commits = commits.into_iter();

        let rows = commits
            .clone()
            .enumerate()
            .map(|(row, commit)| (commit.oid(), row))
            .collect::<HashMap<_, _>>();

        let mut children = HashMap::<&'c CommitId, Vec<usize>>::new();
        for (row, commit) in commits.enumerate() {
            for parent in commit.parents() {
                let Some(&parent_row) = rows.get(parent) else {
                    continue;
                };
                if parent_row <= row {
                    continue;
                }

                let child_rows = children.entry(parent).or_default();
                // same parent listed twice on one commit
                if child_rows.last() != Some(&row) {
                    child_rows.push(row);
                }
            }
        }

        Self { rows, children }
    }

    pub fn row_of(&self, oid: &CommitId) -> Option<usize> {
        self.rows.get(oid).copied()
    }

    /// Row of `oid` when it lies strictly below `row`
    pub fn row_below(&self, oid: &CommitId, row: usize) -> Option<usize> {
        self.row_of(oid).filter(|&parent_row| parent_row > row)
    }

    /// Rows of commits listing `oid` as a parent, ascending
    pub fn children_of(&self, oid: &CommitId) -> &[usize] {
        self.children.get(oid).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
