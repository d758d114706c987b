//! Complete layout pass: lane assignment followed by edge routing
//!
//! The layout is recomputed from scratch for every commit snapshot; nothing
//! is carried over between passes.

use crate::artifacts::core::layout_config::LayoutConfig;
use crate::artifacts::graph::edge_router::{Edge, EdgeRouter, Marker};
use crate::artifacts::graph::lane_assigner::LaneAssigner;
use crate::artifacts::objects::commit::GraphCommit;
use crate::artifacts::objects::commit_id::CommitId;
use serde::Serialize;

/// Layout of one commit, in the order the commits were supplied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRow {
    pub oid: CommitId,
    pub lane: usize,
    pub lane_count: usize,
    pub edges: Vec<Edge>,
    pub color_key: usize,
    #[serde(skip)]
    pub marker: Marker,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GraphLayout {
    rows: Vec<LayoutRow>,
    lane_count: usize,
}

impl GraphLayout {
    /// Assign lanes and route edges for `commits`
    ///
    /// Only `palette_size` of the configuration is consulted, to derive each
    /// row's color key.
    pub fn compute(commits: &[GraphCommit], config: &LayoutConfig) -> Self {
        let lane_rows = LaneAssigner::new(commits).assign();
        let routed_rows = EdgeRouter::new(&lane_rows).route();
        let lane_count = lane_rows.first().map_or(0, |row| row.lane_count);

        let rows = lane_rows
            .iter()
            .zip(routed_rows)
            .map(|(lane_row, routed)| LayoutRow {
                oid: lane_row.commit.oid().clone(),
                lane: lane_row.lane,
                lane_count: lane_row.lane_count,
                edges: routed.edges,
                color_key: config.color_key(lane_row.lane),
                marker: routed.marker,
            })
            .collect();

        Self { rows, lane_count }
    }

    pub fn rows(&self) -> &[LayoutRow] {
        &self.rows
    }

    pub fn lane_count(&self) -> usize {
        self.lane_count
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
