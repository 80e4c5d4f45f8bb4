//! Branch history reconstruction
//!
//! This module turns the independent, linear first-parent chains of a
//! repository's branches into a single divergence tree and derives
//! renderable views from it:
//!
//! - `branch_history`: chain building and the divergence merge that folds
//!   every branch into one tree
//! - `linearize`: chronological, frontier-based traversal emitting the
//!   event stream renderers consume
//! - `filter`: structural simplification of the tree
//!
//! Merge commits are not modeled; every chain follows first parents only,
//! so a plain tree of owned node sequences is sufficient (no general graph
//! structure is needed).

pub mod branch_history;
pub mod filter;
pub mod linearize;

use crate::artifacts::branch::ref_name::RefName;
use thiserror::Error;

/// Fatal conditions raised while reconstructing history
///
/// Soft conditions (redundant chains, unresolvable tags) are absorbed and
/// logged, never surfaced as errors.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// A commit or its parent could not be read from the object database.
    /// No partial tree is safe to render, so this aborts the whole run.
    #[error("failed to read ancestry of {branch}")]
    AncestryRead {
        branch: RefName,
        #[source]
        source: anyhow::Error,
    },

    /// The repository exposes no branch references at all.
    #[error("no branch found")]
    EmptyTree,
}
