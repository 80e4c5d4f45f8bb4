//! Per-branch commit chains and the divergence merge
//!
//! A `BranchHistory` is the linear, oldest-first sequence of commits from a
//! branch's root to its tip. The first chain built becomes the root of the
//! divergence tree; every further chain is folded in by walking both
//! sequences in parallel and attaching the new chain as a child branch at
//! the node where its commit hashes first depart from known history.
//!
//! A node's successor within its chain is positional (the next element of
//! the owning `nodes` vector); `child_branches` is the only ownership edge
//! between chains. Across the whole tree every commit hash appears at most
//! once, except for branches that share no history at all, which are
//! attached at the tree root as an accepted approximation.

use crate::artifacts::branch::ref_name::RefName;
use crate::artifacts::history::HistoryError;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use tracing::{debug, info};

/// One commit within one branch's chain
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) oid: ObjectId,
    pub(crate) commit: Commit,
    pub(crate) branch: RefName,
    /// Chains that diverge from known history at this node
    pub(crate) child_branches: Vec<BranchHistory>,
    /// Tag display names resolved onto this exact commit
    pub(crate) tag_names: Vec<String>,
}

impl Node {
    fn new(oid: ObjectId, commit: Commit, branch: RefName) -> Self {
        Node {
            oid,
            commit,
            branch,
            child_branches: Vec::new(),
            tag_names: Vec::new(),
        }
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    pub fn commit(&self) -> &Commit {
        &self.commit
    }

    pub fn branch(&self) -> &RefName {
        &self.branch
    }

    pub fn child_branches(&self) -> &[BranchHistory] {
        &self.child_branches
    }

    pub fn tag_names(&self) -> &[String] {
        &self.tag_names
    }
}

/// Result of folding a chain into the tree
///
/// Folding never fails on valid input; a chain that contributes no new
/// commits is a soft, informational condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The chain was truncated at its first unknown commit and attached
    /// as a child branch.
    Attached,
    /// Every commit already existed somewhere in the tree; no structural
    /// change was made.
    Redundant,
}

/// Linear first-parent history of one branch, root first
#[derive(Debug, Clone)]
pub struct BranchHistory {
    pub(crate) branch: RefName,
    pub(crate) nodes: Vec<Node>,
}

impl BranchHistory {
    /// Build the chain for a branch by walking first parents from its tip
    ///
    /// The `load_commit` closure resolves a commit hash against the object
    /// database. Walking stops at the first commit without a parent; any
    /// other resolution failure is an ancestry read error, which aborts
    /// the run.
    pub fn build<L>(branch: RefName, tip: ObjectId, load_commit: &L) -> Result<Self, HistoryError>
    where
        L: Fn(&ObjectId) -> anyhow::Result<Commit>,
    {
        let mut nodes = Vec::new();
        let mut cursor = Some(tip);

        while let Some(oid) = cursor {
            let commit = load_commit(&oid).map_err(|source| HistoryError::AncestryRead {
                branch: branch.clone(),
                source,
            })?;

            cursor = commit.parent().cloned();
            nodes.push(Node::new(oid, commit, branch.clone()));
        }

        // walked tip-to-root; chains are kept root first
        nodes.reverse();

        Ok(BranchHistory { branch, nodes })
    }

    pub fn branch(&self) -> &RefName {
        &self.branch
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Fold another branch's chain into this tree
    ///
    /// Both sequences are walked oldest to newest with a cursor pair over
    /// the known chain. A commit already at the cursor is shared history; a
    /// commit matching the head of a child branch attached at the previous
    /// node re-seats the cursor onto that child chain (the new chain is a
    /// further descendant of it) and consumes the matched commit. The first
    /// commit matching neither is the divergence point: the new chain is
    /// truncated to start there and attached at the previous node.
    ///
    /// Branch topologies where three or more branches diverge from the
    /// same ancestor are handled by repeated re-seating; the result can
    /// depend on fold order for branches that share no linear relation.
    pub fn merge(&mut self, mut other: BranchHistory) -> MergeOutcome {
        // path of (node index, child index) hops from the root chain to
        // the chain the cursor currently walks
        let mut path: Vec<(usize, usize)> = Vec::new();
        let mut base_idx = 0usize;

        let mut i = 0;
        'chain: while i < other.nodes.len() {
            let chain = self.chain_at(&path);
            let oid = &other.nodes[i].oid;

            if base_idx < chain.nodes.len() && chain.nodes[base_idx].oid == *oid {
                // shared history, advance both cursors
                base_idx += 1;
                i += 1;
                continue;
            }

            let prev_idx = base_idx.saturating_sub(1);
            for (child_idx, child) in chain.nodes[prev_idx].child_branches.iter().enumerate() {
                if child.nodes[0].oid == *oid {
                    // descendant of an already-attached branch: re-seat the
                    // cursor onto the child chain, consuming the shared head
                    path.push((prev_idx, child_idx));
                    base_idx = 1;
                    i += 1;
                    continue 'chain;
                }
            }

            // divergence point: keep only the commits this chain introduces
            other.nodes.drain(..i);
            let chain = self.chain_at_mut(&path);
            chain.nodes[prev_idx].child_branches.push(other);
            return MergeOutcome::Attached;
        }

        info!(
            base = %self.branch,
            other = %other.branch,
            "same or independent branch"
        );
        MergeOutcome::Redundant
    }

    fn chain_at(&self, path: &[(usize, usize)]) -> &BranchHistory {
        let mut chain = self;
        for &(node_idx, child_idx) in path {
            chain = &chain.nodes[node_idx].child_branches[child_idx];
        }
        chain
    }

    fn chain_at_mut(&mut self, path: &[(usize, usize)]) -> &mut BranchHistory {
        let mut chain = self;
        for &(node_idx, child_idx) in path {
            chain = &mut chain.nodes[node_idx].child_branches[child_idx];
        }
        chain
    }

    /// Depth-first search for the node carrying a commit
    pub fn find_node(&self, oid: &ObjectId) -> Option<&Node> {
        for node in &self.nodes {
            if node.oid == *oid {
                return Some(node);
            }
            for child in &node.child_branches {
                if let Some(found) = child.find_node(oid) {
                    return Some(found);
                }
            }
        }
        None
    }

    fn find_node_mut(&mut self, oid: &ObjectId) -> Option<&mut Node> {
        for node in &mut self.nodes {
            if node.oid == *oid {
                return Some(node);
            }
            for child in &mut node.child_branches {
                if let Some(found) = child.find_node_mut(oid) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Attach tag display names to the nodes carrying their target commits
    ///
    /// Tags targeting commits outside the tree (unreferenced history) are
    /// skipped; tag enumeration is independent of branch enumeration, so
    /// this is not an error.
    pub fn attach_tags(&mut self, tags: &[(String, ObjectId)]) {
        for (name, target) in tags {
            match self.find_node_mut(target) {
                Some(node) => node.tag_names.push(name.clone()),
                None => debug!(tag = %name, target = %target, "tag target not in tree"),
            }
        }
    }
}
