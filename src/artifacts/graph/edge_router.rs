//! Edge routing for the commit graph
//!
//! Derives the drawing segments of every row from the lane assignment. This is
//! a pure function of the rows: no I/O, no presentation constants, and the
//! same rows always produce the same segments.
//!
//! ## Segments
//!
//! Every parent edge travels on its carrier lane between the child row and the
//! parent row. Within one row the segments are, in order:
//!
//! - pass-through verticals: lanes other than the row's own lane carrying a
//!   track that neither starts nor ends on this row (ascending lane)
//! - inbound connectors: one per distinct carrier lane arriving at this
//!   commit, straight when it is the row's lane, a curve converging on the dot
//!   otherwise (ascending source lane)
//! - outbound connectors: one per parent further down, straight when the
//!   carrier is the row's lane, a curve bending toward the carrier otherwise
//!   (parent order)
//!
//! Each row also carries a commit marker at (lane, row).

use crate::artifacts::graph::commit_index::CommitIndex;
use crate::artifacts::graph::lane_assigner::LaneRow;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Straight,
    Curve,
}

/// What an edge segment means relative to the row it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeRole {
    PassThrough,
    Inbound,
    Outbound,
}

/// One connector segment inside a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub from_lane: usize,
    pub to_lane: usize,
    pub kind: EdgeKind,
    pub into_dot_from_above: bool,
}

impl Edge {
    fn pass_through(lane: usize) -> Self {
        Edge {
            from_lane: lane,
            to_lane: lane,
            kind: EdgeKind::Straight,
            into_dot_from_above: false,
        }
    }

    fn inbound(from_lane: usize, row_lane: usize) -> Self {
        Edge {
            from_lane,
            to_lane: row_lane,
            kind: Self::kind_between(from_lane, row_lane),
            into_dot_from_above: true,
        }
    }

    fn outbound(row_lane: usize, to_lane: usize) -> Self {
        Edge {
            from_lane: row_lane,
            to_lane,
            kind: Self::kind_between(row_lane, to_lane),
            into_dot_from_above: false,
        }
    }

    fn kind_between(from_lane: usize, to_lane: usize) -> EdgeKind {
        if from_lane == to_lane {
            EdgeKind::Straight
        } else {
            EdgeKind::Curve
        }
    }

    /// Classify the segment relative to the lane of the row holding it
    pub fn role(&self, row_lane: usize) -> EdgeRole {
        if self.into_dot_from_above {
            EdgeRole::Inbound
        } else if self.from_lane == row_lane {
            EdgeRole::Outbound
        } else {
            EdgeRole::PassThrough
        }
    }
}

/// Commit dot position, the click target of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Marker {
    pub lane: usize,
    pub row: usize,
}

/// Segments of one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutedRow {
    pub lane: usize,
    pub edges: Vec<Edge>,
    pub marker: Marker,
}

impl RoutedRow {
    pub fn edges_with_role(&self, role: EdgeRole) -> impl Iterator<Item = &Edge> {
        self.edges
            .iter()
            .filter(move |edge| edge.role(self.lane) == role)
    }
}

/// Routes connector segments for a complete set of lane rows
pub struct EdgeRouter<'r, 'c> {
    rows: &'r [LaneRow<'c>],
    index: CommitIndex<'c>,
}

impl<'r, 'c> EdgeRouter<'r, 'c> {
    pub fn new(rows: &'r [LaneRow<'c>]) -> Self {
        Self {
            rows,
            index: CommitIndex::build(rows.iter().map(|row| row.commit)),
        }
    }

    /// Produce the segments of every row, in row order
    pub fn route(&self) -> Vec<RoutedRow> {
        let pass_throughs = self.pass_through_lanes();

        self.rows
            .iter()
            .zip(pass_throughs)
            .map(|(row, lanes)| {
                let mut edges = lanes
                    .into_iter()
                    .map(Edge::pass_through)
                    .collect::<Vec<_>>();

                edges.extend(
                    self.inbound_lanes(row)
                        .into_iter()
                        .map(|from_lane| Edge::inbound(from_lane, row.lane)),
                );
                edges.extend(
                    self.outbound_lanes(row)
                        .map(|to_lane| Edge::outbound(row.lane, to_lane)),
                );

                RoutedRow {
                    lane: row.lane,
                    edges,
                    marker: Marker {
                        lane: row.lane,
                        row: row.row,
                    },
                }
            })
            .collect()
    }

    /// Carrier lanes of every track strictly spanning each row
    fn pass_through_lanes(&self) -> Vec<BTreeSet<usize>> {
        let mut lanes = vec![BTreeSet::new(); self.rows.len()];

        for row in self.rows {
            for (parent, carrier) in row.commit.parents().iter().zip(&row.parent_lanes) {
                let (Some(carrier), Some(parent_row)) =
                    (carrier, self.index.row_below(parent, row.row))
                else {
                    continue;
                };
                for spanned in &mut lanes[row.row + 1..parent_row] {
                    spanned.insert(*carrier);
                }
            }
        }

        lanes
    }

    /// Distinct carrier lanes arriving at the row's commit
    fn inbound_lanes(&self, row: &LaneRow) -> BTreeSet<usize> {
        let oid = row.commit.oid();

        self.index
            .children_of(oid)
            .iter()
            .flat_map(|&child_row| {
                let child = &self.rows[child_row];
                child
                    .commit
                    .parents()
                    .iter()
                    .zip(&child.parent_lanes)
                    .filter(move |(parent, _)| *parent == oid)
                    .filter_map(|(_, carrier)| *carrier)
            })
            .collect()
    }

    /// Carrier lane per distinct parent further down, in parent order
    fn outbound_lanes<'a>(&self, row: &'a LaneRow) -> impl Iterator<Item = usize> + 'a {
        let parents = row.commit.parents();

        parents
            .iter()
            .zip(&row.parent_lanes)
            .enumerate()
            .filter(move |(position, (parent, _))| !parents[..*position].contains(*parent))
            .filter_map(|(_, (_, carrier))| *carrier)
    }
}
