//! Symbolic reference names (branches and tags)
//!
//! References are the human-readable names a repository exposes:
//! `refs/heads/*` for branches, `refs/tags/*` for tags. Every name in the
//! history tree is kept fully qualified; display helpers strip the prefix.

use crate::artifacts::branch::{HEADS_REF_PREFIX, TAGS_REF_PREFIX};
use derive_new::new;

/// Fully qualified symbolic reference name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord, new)]
pub struct RefName(String);

impl RefName {
    /// Qualify user input as a branch reference
    ///
    /// Accepts either a full ref name (`refs/heads/develop`) or a bare
    /// branch name (`develop`).
    pub fn qualify_branch(name: &str) -> Self {
        if name.starts_with("refs/") {
            Self(name.to_string())
        } else {
            Self(format!("{HEADS_REF_PREFIX}{name}"))
        }
    }

    /// Short display form, without the `refs/heads/` or `refs/tags/` prefix
    pub fn to_short_name(&self) -> &str {
        self.0
            .strip_prefix(HEADS_REF_PREFIX)
            .or_else(|| self.0.strip_prefix(TAGS_REF_PREFIX))
            .unwrap_or(&self.0)
    }

    pub fn is_branch(&self) -> bool {
        self.0.starts_with(HEADS_REF_PREFIX)
    }

    pub fn is_tag(&self) -> bool {
        self.0.starts_with(TAGS_REF_PREFIX)
    }
}

impl AsRef<str> for RefName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RefName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
