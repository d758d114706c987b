//! Commit graph layout
//!
//! Turns an ordered commit list into lanes and connector segments:
//!
//! - `commit_index`: oid -> row and oid -> child rows lookups
//! - `lane_assigner`: single forward pass placing commits in lanes
//! - `edge_router`: pass-through, inbound and outbound segments per row
//! - `layout`: the whole pass, producing serializable rows
//!
//! ## Data flow
//!
//! ```text
//! commits -> LaneAssigner -> LaneRow[] -> EdgeRouter -> RoutedRow[] -> GraphLayout
//! ```
//!
//! Everything here is synchronous, allocation-only and free of I/O.

pub mod commit_index;
pub mod edge_router;
pub mod lane_assigner;
pub mod layout;

#[cfg(test)]
pub(crate) mod test_support;
