use crate::artifacts::objects::commit::{Author, GraphCommit};
use crate::artifacts::objects::commit_id::CommitId;
use proptest::prelude::*;

pub(crate) fn oid(id: &str) -> CommitId {
    CommitId::try_parse(id).expect("Invalid test CommitId")
}

/// Commit with a fixed author and the id as its message
pub(crate) fn commit(id: &str, parents: &[&str]) -> GraphCommit {
    GraphCommit::new(
        oid(id),
        parents.iter().map(|parent| oid(parent)).collect(),
        Author::new("fake_user".into(), "fake_email@email.com".into(), 1640995200),
        id.to_lowercase(),
    )
}

/// Random history in row order: every parent either lies on a later row or
/// is outside the working set.
pub(crate) fn arbitrary_history() -> impl Strategy<Value = Vec<GraphCommit>> {
    (1usize..40)
        .prop_flat_map(|size| {
            proptest::collection::vec(
                proptest::collection::vec((0usize..64, proptest::bool::weighted(0.1)), 0..4),
                size,
            )
        })
        .prop_map(|picks| {
            let size = picks.len();
            picks
                .into_iter()
                .enumerate()
                .map(|(row, parent_picks)| {
                    let parents = parent_picks
                        .into_iter()
                        .filter_map(|(pick, outside)| {
                            if outside {
                                Some(format!("outside{pick}"))
                            } else if row + 1 < size {
                                Some(format!("c{}", row + 1 + pick % (size - row - 1)))
                            } else {
                                None
                            }
                        })
                        .collect::<Vec<_>>();
                    let parents = parents.iter().map(String::as_str).collect::<Vec<_>>();
                    commit(&format!("c{row}"), &parents)
                })
                .collect()
        })
}
