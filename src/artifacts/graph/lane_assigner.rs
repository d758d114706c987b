//! Lane assignment for the commit graph
//!
//! A single forward pass over the commits, in the order given, that places
//! every commit in a vertical lane.
//!
//! ## Algorithm
//!
//! Lanes live in an arena of slots indexed by lane number. A slot is either
//! free or expecting one specific commit, the one that continues its track.
//! For each commit:
//!
//! 1. If a lane expects this commit, take the lowest such lane. Any other lane
//!    expecting it converges here and becomes free.
//! 2. Otherwise take the lowest free lane, appending a new one if none is free.
//! 3. Update the lane state per parent:
//!    - no parents (root): the lane becomes free
//!    - first parent: continues on the commit's lane if it is present further
//!      down, otherwise the lane becomes free (history boundary)
//!    - every other parent present further down reuses a lane already
//!      expecting it, or takes the lowest free lane (or a new one)
//!
//! The lane a parent edge travels on after the child is processed is its
//! *carrier*. Carriers are recorded per parent so that edge routing never has
//! to replay lane state.
//!
//! This is a greedy first-fit heuristic. It never loses a connection but makes
//! no attempt at a minimum-width layout.
//!
//! ## Preconditions
//!
//! Commit ids must be unique within the working set. Duplicate ids make the
//! layout undefined; commit sources deduplicate before handing over.

use crate::artifacts::graph::commit_index::CommitIndex;
use crate::artifacts::objects::commit::GraphCommit;
use crate::artifacts::objects::commit_id::CommitId;

/// Per-commit output of the lane assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneRow<'c> {
    /// Originating commit
    pub commit: &'c GraphCommit,
    /// Row index, equal to the commit's position in the input
    pub row: usize,
    /// Lane the commit is drawn in
    pub lane: usize,
    /// Number of lanes used by the whole pass
    pub lane_count: usize,
    /// Carrier lane per parent, aligned with `commit.parents()`.
    /// `None` when the parent is outside the working set.
    pub parent_lanes: Vec<Option<usize>>,
}

/// Arena of lane slots, each optionally expecting a commit
#[derive(Debug, Default)]
struct LaneSlots<'c> {
    slots: Vec<Option<&'c CommitId>>,
    highest: Option<usize>,
}

impl<'c> LaneSlots<'c> {
    fn expecting(&self, oid: &CommitId) -> Option<usize> {
        self.slots.iter().position(|slot| *slot == Some(oid))
    }

    /// Lowest free lane, growing the arena when every lane is taken
    fn allocate(&mut self) -> usize {
        let lane = match self.slots.iter().position(Option::is_none) {
            Some(lane) => lane,
            None => {
                self.slots.push(None);
                self.slots.len() - 1
            }
        };
        self.highest = self.highest.max(Some(lane));
        lane
    }

    fn expect(&mut self, lane: usize, oid: &'c CommitId) {
        self.slots[lane] = Some(oid);
    }

    fn free(&mut self, lane: usize) {
        self.slots[lane] = None;
    }

    /// Free every lane other than `keep` that expects `oid`
    fn converge(&mut self, oid: &CommitId, keep: usize) {
        for (lane, slot) in self.slots.iter_mut().enumerate() {
            if lane != keep && *slot == Some(oid) {
                debug_log!("  lane {} converges into lane {}", lane, keep);
                *slot = None;
            }
        }
    }

    fn lane_count(&self) -> usize {
        self.highest.map_or(0, |lane| lane + 1)
    }
}

/// Assigns lanes to commits in one forward pass
///
/// Lane state lives only inside one call to [`LaneAssigner::assign`]; every
/// call starts from an empty arena, so separate calls never share state.
pub struct LaneAssigner<'c> {
    commits: &'c [GraphCommit],
    index: CommitIndex<'c>,
}

impl<'c> LaneAssigner<'c> {
    pub fn new(commits: &'c [GraphCommit]) -> Self {
        Self {
            commits,
            index: CommitIndex::build(commits),
        }
    }

    /// Assign a lane to every commit, preserving input order
    ///
    /// # Returns
    ///
    /// One [`LaneRow`] per commit, in input order. Empty input yields no rows.
    pub fn assign(&self) -> Vec<LaneRow<'c>> {
        let mut lanes = LaneSlots::default();
        let mut rows = Vec::with_capacity(self.commits.len());

        for (row, commit) in self.commits.iter().enumerate() {
            let lane = match lanes.expecting(commit.oid()) {
                Some(lane) => {
                    debug_log!("{}: continues expected lane {}", commit.oid(), lane);
                    lanes.converge(commit.oid(), lane);
                    lane
                }
                None => {
                    let lane = lanes.allocate();
                    debug_log!("{}: takes free lane {}", commit.oid(), lane);
                    lane
                }
            };
            lanes.free(lane);

            let parent_lanes = commit
                .parents()
                .iter()
                .enumerate()
                .map(|(position, parent)| {
                    self.place_parent(&mut lanes, row, lane, position, parent)
                })
                .collect();

            rows.push(LaneRow {
                commit,
                row,
                lane,
                lane_count: 0,
                parent_lanes,
            });
        }

        let lane_count = lanes.lane_count();
        for row in rows.iter_mut() {
            row.lane_count = lane_count;
        }

        rows
    }

    /// Choose the carrier lane for one parent of the commit on `row`
    fn place_parent(
        &self,
        lanes: &mut LaneSlots<'c>,
        row: usize,
        lane: usize,
        position: usize,
        parent: &'c CommitId,
    ) -> Option<usize> {
        if self.index.row_below(parent, row).is_none() {
            debug_log!("  parent {} outside the working set", parent);
            return None;
        }

        if position == 0 {
            lanes.expect(lane, parent);
            return Some(lane);
        }

        if let Some(existing) = lanes.expecting(parent) {
            debug_log!("  parent {} already expected on lane {}", parent, existing);
            return Some(existing);
        }

        let carrier = lanes.allocate();
        debug_log!("  parent {} opens lane {}", parent, carrier);
        lanes.expect(carrier, parent);
        Some(carrier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::graph::test_support::{arbitrary_history, commit};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::{fixture, rstest};

    fn lanes_of(rows: &[LaneRow]) -> Vec<usize> {
        rows.iter().map(|row| row.lane).collect()
    }

    #[fixture]
    fn merge_of_two_branches() -> Vec<GraphCommit> {
        //     A (merge)
        //    / \
        //   B   C
        //    \ /
        //     D
        vec![
            commit("A", &["B", "C"]),
            commit("B", &["D"]),
            commit("C", &["D"]),
            commit("D", &[]),
        ]
    }

    #[rstest]
    fn test_empty_history_yields_no_rows() {
        let commits: Vec<GraphCommit> = vec![];
        let rows = LaneAssigner::new(&commits).assign();

        assert!(rows.is_empty());
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(25)]
    fn test_linear_history_stays_in_lane_zero(#[case] length: usize) {
        let ids = (0..length).map(|n| format!("c{n}")).collect::<Vec<_>>();
        let commits = ids
            .iter()
            .enumerate()
            .map(|(n, id)| match ids.get(n + 1) {
                Some(parent) => commit(id, &[parent]),
                None => commit(id, &[]),
            })
            .collect::<Vec<_>>();

        let rows = LaneAssigner::new(&commits).assign();

        assert_eq!(rows.len(), length);
        assert!(rows.iter().all(|row| row.lane == 0 && row.lane_count == 1));
    }

    #[rstest]
    fn test_merge_of_two_branches(merge_of_two_branches: Vec<GraphCommit>) {
        let rows = LaneAssigner::new(&merge_of_two_branches).assign();

        assert_eq!(lanes_of(&rows), vec![0, 0, 1, 0]);
        assert!(rows.iter().all(|row| row.lane_count == 2));
        assert_eq!(rows[0].parent_lanes, vec![Some(0), Some(1)]);
        assert_eq!(rows[1].parent_lanes, vec![Some(0)]);
        assert_eq!(rows[2].parent_lanes, vec![Some(1)]);
        assert!(rows[3].parent_lanes.is_empty());
    }

    #[rstest]
    fn test_rows_reference_originating_commits(merge_of_two_branches: Vec<GraphCommit>) {
        let rows = LaneAssigner::new(&merge_of_two_branches).assign();

        for (n, row) in rows.iter().enumerate() {
            assert_eq!(row.row, n);
            assert_eq!(row.commit, &merge_of_two_branches[n]);
        }
    }

    #[rstest]
    fn test_root_commit_frees_its_lane() {
        // R is a root; T is an unrelated tip that must reuse lane 0 afterwards
        let commits = vec![commit("R", &[]), commit("T", &[])];
        let rows = LaneAssigner::new(&commits).assign();

        assert_eq!(lanes_of(&rows), vec![0, 0]);
        assert_eq!(rows[0].lane_count, 1);
    }

    #[rstest]
    fn test_missing_parent_frees_lane() {
        let commits = vec![commit("X", &["missing-oid"]), commit("Y", &[])];
        let rows = LaneAssigner::new(&commits).assign();

        assert_eq!(rows[0].parent_lanes, vec![None]);
        assert_eq!(lanes_of(&rows), vec![0, 0]);
        assert_eq!(rows[0].lane_count, 1);
    }

    #[rstest]
    fn test_two_disjoint_tips_keep_two_lanes_open() {
        // main: M1 -> M2 -> M3 (root), side: S1 -> S2 (root), interleaved
        let commits = vec![
            commit("M1", &["M2"]),
            commit("S1", &["S2"]),
            commit("M2", &["M3"]),
            commit("S2", &[]),
            commit("M3", &[]),
            commit("Z", &[]),
        ];
        let rows = LaneAssigner::new(&commits).assign();

        assert_eq!(lanes_of(&rows), vec![0, 1, 0, 1, 0, 0]);
        assert!(rows.iter().all(|row| row.lane_count == 2));
    }

    #[rstest]
    fn test_second_parent_reuses_lane_already_expecting_it() {
        //   M1 merges X and F, M2 merges Y and F: F is expected only once
        let commits = vec![
            commit("M1", &["X", "F"]),
            commit("M2", &["Y", "F"]),
            commit("X", &[]),
            commit("Y", &[]),
            commit("F", &[]),
        ];
        let rows = LaneAssigner::new(&commits).assign();

        assert_eq!(rows[0].lane, 0);
        assert_eq!(rows[0].parent_lanes, vec![Some(0), Some(1)]);
        assert_eq!(rows[1].lane, 2);
        assert_eq!(rows[1].parent_lanes, vec![Some(2), Some(1)]);
        assert_eq!(rows[4].lane, 1);
        assert_eq!(rows[0].lane_count, 3);
    }

    #[rstest]
    fn test_octopus_merge_opens_lane_per_parent() {
        let commits = vec![
            commit("O", &["P1", "P2", "P3"]),
            commit("P1", &[]),
            commit("P2", &[]),
            commit("P3", &[]),
        ];
        let rows = LaneAssigner::new(&commits).assign();

        assert_eq!(rows[0].parent_lanes, vec![Some(0), Some(1), Some(2)]);
        assert_eq!(lanes_of(&rows), vec![0, 0, 1, 2]);
        assert_eq!(rows[0].lane_count, 3);
    }

    #[rstest]
    fn test_merge_with_missing_second_parent() {
        let commits = vec![commit("M", &["A", "gone"]), commit("A", &[])];
        let rows = LaneAssigner::new(&commits).assign();

        assert_eq!(rows[0].parent_lanes, vec![Some(0), None]);
        assert_eq!(rows[0].lane_count, 1);
    }

    #[rstest]
    fn test_parent_listed_above_child_is_a_boundary() {
        let commits = vec![commit("P", &[]), commit("X", &["P"])];
        let rows = LaneAssigner::new(&commits).assign();

        assert_eq!(rows[1].parent_lanes, vec![None]);
        assert_eq!(lanes_of(&rows), vec![0, 0]);
    }

    #[rstest]
    fn test_converging_lanes_are_freed() {
        // B and C both continue to D on their own lanes; after D only one
        // lane stays open, so E (an unrelated tip) reuses lane 1
        let commits = vec![
            commit("B", &["D"]),
            commit("C", &["D"]),
            commit("D", &["F"]),
            commit("E", &[]),
            commit("F", &[]),
        ];
        let rows = LaneAssigner::new(&commits).assign();

        assert_eq!(lanes_of(&rows), vec![0, 1, 0, 1, 0]);
    }

    proptest! {
        #[test]
        fn prop_lanes_are_within_lane_count(commits in arbitrary_history()) {
            let rows = LaneAssigner::new(&commits).assign();

            prop_assert_eq!(rows.len(), commits.len());
            let lane_count = rows[0].lane_count;
            for row in &rows {
                prop_assert_eq!(row.lane_count, lane_count);
                prop_assert!(row.lane < lane_count);
                prop_assert_eq!(row.parent_lanes.len(), row.commit.parents().len());
                for carrier in row.parent_lanes.iter().flatten() {
                    prop_assert!(*carrier < lane_count);
                }
            }
        }

        #[test]
        fn prop_present_parents_always_get_a_carrier(commits in arbitrary_history()) {
            let index = CommitIndex::build(&commits);
            let rows = LaneAssigner::new(&commits).assign();

            for row in &rows {
                for (parent, carrier) in row.commit.parents().iter().zip(&row.parent_lanes) {
                    let present = index.row_below(parent, row.row).is_some();
                    prop_assert_eq!(present, carrier.is_some());
                }
            }
        }

        #[test]
        fn prop_first_parent_continues_on_same_lane(commits in arbitrary_history()) {
            let rows = LaneAssigner::new(&commits).assign();

            for row in &rows {
                if let Some(Some(carrier)) = row.parent_lanes.first() {
                    prop_assert_eq!(*carrier, row.lane);
                }
            }
        }

        #[test]
        fn prop_assignment_is_deterministic(commits in arbitrary_history()) {
            let first = LaneAssigner::new(&commits).assign();
            let second = LaneAssigner::new(&commits).assign();

            prop_assert_eq!(first, second);
        }
    }
}
