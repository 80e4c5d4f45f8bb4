//! Structural simplification of the divergence tree
//!
//! Collapses interior nodes that carry no structural information, leaving
//! the skeleton a renderer needs: every chain keeps its first and last
//! node, every branch point survives, and in `AllTags` mode so does every
//! tagged commit. Successors are positional, so dropping nodes re-links
//! the surviving sequence implicitly.

use crate::FilterMode;
use crate::artifacts::history::branch_history::{BranchHistory, Node};

impl BranchHistory {
    /// Simplify the tree in place according to `mode`
    ///
    /// `Full` keeps everything. A chain can shrink to a single node (root
    /// and tip coincide after filtering) but never to zero nodes.
    pub fn simplify(&mut self, mode: FilterMode) {
        if mode == FilterMode::Full {
            return;
        }
        filter_nodes(&mut self.nodes, mode);
    }
}

fn filter_nodes(nodes: &mut Vec<Node>, mode: FilterMode) {
    let scanned = std::mem::take(nodes);
    let len = scanned.len();

    for (index, mut node) in scanned.into_iter().enumerate() {
        // branch points are never dropped; recurse into their subtrees
        if !node.child_branches.is_empty() {
            for child in &mut node.child_branches {
                filter_nodes(&mut child.nodes, mode);
            }
            nodes.push(node);
            continue;
        }

        let endpoint = index == 0 || index + 1 == len;
        let tagged = mode == FilterMode::AllTags && !node.tag_names.is_empty();
        if endpoint || tagged {
            nodes.push(node);
        }
    }
}
