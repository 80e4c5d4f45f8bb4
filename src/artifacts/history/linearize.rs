//! Chronological linearization of the divergence tree
//!
//! A frontier-based k-way merge over all branch chains at once: the
//! frontier holds the next candidate node of every active branch, and the
//! candidate with the oldest author timestamp is emitted first. A node only
//! enters the frontier once its chain predecessor (or the branch point it
//! hangs off) has been emitted, so every chain's internal order survives
//! even when timestamps are equal or out of order across branches.

use crate::artifacts::branch::ref_name::RefName;
use crate::artifacts::history::branch_history::BranchHistory;
use crate::artifacts::objects::object_id::ObjectId;

/// One entry of the rendered event stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryEvent {
    /// A commit on `branch`
    Commit {
        branch: RefName,
        oid: ObjectId,
        short_oid: String,
        subject: String,
    },
    /// A tag resolved onto the most recently emitted commit of `branch`
    TagApplied { branch: RefName, tag: String },
    /// `child` diverges from `parent` at the most recently emitted commit
    BranchCreated { parent: RefName, child: RefName },
}

/// Next candidate node of one active branch
struct Cursor<'a> {
    chain: &'a BranchHistory,
    index: usize,
}

/// Remove the frontier entry with the oldest author timestamp
///
/// Ties are broken by insertion order: the earliest-inserted candidate
/// wins, keeping the output stable.
fn remove_oldest<'a>(frontier: &mut Vec<Cursor<'a>>) -> Cursor<'a> {
    let mut oldest_index = 0;
    for (i, cursor) in frontier.iter().enumerate().skip(1) {
        let oldest = frontier[oldest_index].chain.nodes()[frontier[oldest_index].index]
            .commit()
            .timestamp();
        let when = cursor.chain.nodes()[cursor.index].commit().timestamp();
        if when < oldest {
            oldest_index = i;
        }
    }
    frontier.remove(oldest_index)
}

impl BranchHistory {
    /// Emit the tree as a single chronologically ordered event sequence
    ///
    /// Consumes the tree's structure at call time; commits across branches
    /// interleave by author time rather than by branch enumeration order.
    pub fn linearize(&self) -> Vec<HistoryEvent> {
        let mut events = Vec::new();
        if self.nodes().is_empty() {
            return events;
        }

        let mut frontier = vec![Cursor {
            chain: self,
            index: 0,
        }];

        while !frontier.is_empty() {
            let cursor = remove_oldest(&mut frontier);
            let node = &cursor.chain.nodes()[cursor.index];

            if cursor.index + 1 < cursor.chain.nodes().len() {
                frontier.push(Cursor {
                    chain: cursor.chain,
                    index: cursor.index + 1,
                });
            }

            events.push(HistoryEvent::Commit {
                branch: node.branch().clone(),
                oid: node.oid().clone(),
                short_oid: node.oid().to_short_oid(),
                subject: node.commit().short_message(),
            });

            for tag in node.tag_names() {
                events.push(HistoryEvent::TagApplied {
                    branch: node.branch().clone(),
                    tag: tag.clone(),
                });
            }

            for child in node.child_branches() {
                events.push(HistoryEvent::BranchCreated {
                    parent: node.branch().clone(),
                    child: child.branch().clone(),
                });
                frontier.push(Cursor {
                    chain: child,
                    index: 0,
                });
            }
        }

        events
    }
}
