//! Positional reconciliation of existing child nodes against incoming data.
//!
//! Existing node `i` is paired with incoming item `i`. The policy decides
//! which side wins for the unpaired tail:
//! - surplus existing nodes are removed when `trim` is set, kept otherwise;
//! - surplus incoming items create nodes via `make_new` when `grow` is set,
//!   otherwise the whole call fails before touching `existing`.
//!
//! Paired and created nodes are both handed to `update` together with their
//! item, in order. Used for rows within a body and cells within a row.

use dom::Node;
use std::ops::AddAssign;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReconcilePolicy {
    pub grow: bool,
    pub trim: bool,
}

impl ReconcilePolicy {
    pub const RESIZE: ReconcilePolicy = ReconcilePolicy {
        grow: true,
        trim: true,
    };
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub updated: usize,
    pub created: usize,
    pub removed: usize,
}

impl AddAssign for ReconcileSummary {
    fn add_assign(&mut self, other: Self) {
        self.updated += other.updated;
        self.created += other.created;
        self.removed += other.removed;
    }
}

/// Incoming data needs more nodes than exist and the policy forbids growth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthDenied {
    pub existing: usize,
    pub requested: usize,
}

pub fn reconcile_sequence<T>(
    existing: &mut Vec<Node>,
    incoming: Vec<T>,
    policy: ReconcilePolicy,
    mut make_new: impl FnMut() -> Node,
    mut update: impl FnMut(&mut Node, T),
) -> Result<ReconcileSummary, GrowthDenied> {
    if !policy.grow && incoming.len() > existing.len() {
        return Err(GrowthDenied {
            existing: existing.len(),
            requested: incoming.len(),
        });
    }

    let mut summary = ReconcileSummary::default();
    if policy.trim && existing.len() > incoming.len() {
        summary.removed = existing.len() - incoming.len();
        existing.truncate(incoming.len());
    }

    for (index, item) in incoming.into_iter().enumerate() {
        if index < existing.len() {
            summary.updated += 1;
        } else {
            existing.push(make_new());
            summary.created += 1;
        }
        update(&mut existing[index], item);
    }
    Ok(summary)
}
