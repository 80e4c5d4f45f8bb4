//! Branch and tag reference enumeration
//!
//! References are human-readable names pointing to commits:
//! - Branches: `refs/heads/*` pointing to branch tip commits
//! - Tags: `refs/tags/*` pointing to commits or annotated tag objects
//!
//! ## Sources
//!
//! Loose refs are single files under `.git/refs/` containing a 40-char
//! SHA-1. Packed refs live in `.git/packed-refs`, one `<oid> <name>` line
//! per ref, where a following `^<oid>` line carries the peeled commit of
//! an annotated tag. A loose ref shadows its packed counterpart.
//!
//! Enumeration is read-only and sorted by ref name, so branch processing
//! order is deterministic.

use crate::artifacts::branch::ref_name::RefName;
use crate::artifacts::branch::{HEADS_REF_PREFIX, TAGS_REF_PREFIX};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use std::collections::BTreeMap;
use std::path::Path;
use walkdir::WalkDir;

/// A tag reference and, for packed annotated tags, its peeled commit
#[derive(Debug, Clone)]
pub struct TagRef {
    pub name: RefName,
    pub target: ObjectId,
    pub peeled: Option<ObjectId>,
}

#[derive(Debug, Clone)]
struct RefTarget {
    oid: ObjectId,
    peeled: Option<ObjectId>,
}

/// Reference reader rooted at the `.git` directory
#[derive(Debug, new)]
pub struct Refs {
    path: Box<Path>,
}

impl Refs {
    /// Enumerate branch references as `(name, tip commit)` pairs
    pub fn list_branches(&self) -> anyhow::Result<Vec<(RefName, ObjectId)>> {
        Ok(self
            .collect_refs(HEADS_REF_PREFIX)?
            .into_iter()
            .map(|(name, target)| (name, target.oid))
            .collect())
    }

    /// Enumerate tag references, keeping packed peel information
    pub fn list_tags(&self) -> anyhow::Result<Vec<TagRef>> {
        Ok(self
            .collect_refs(TAGS_REF_PREFIX)?
            .into_iter()
            .map(|(name, target)| TagRef {
                name,
                target: target.oid,
                peeled: target.peeled,
            })
            .collect())
    }

    /// Merge packed and loose refs under one `refs/...` prefix
    ///
    /// The map is keyed by ref name, so iteration order (and therefore
    /// default branch processing order) is alphabetical.
    fn collect_refs(&self, prefix: &str) -> anyhow::Result<BTreeMap<RefName, RefTarget>> {
        let mut refs = BTreeMap::new();

        for (name, oid, peeled) in self.packed_refs()? {
            if name.as_ref().starts_with(prefix) {
                refs.insert(name, RefTarget { oid, peeled });
            }
        }
        for (name, oid) in self.loose_refs(prefix)? {
            // a loose ref shadows its packed counterpart
            refs.insert(name, RefTarget { oid, peeled: None });
        }

        Ok(refs)
    }

    fn loose_refs(&self, prefix: &str) -> anyhow::Result<Vec<(RefName, ObjectId)>> {
        let root = self.path.join(prefix);
        let mut refs = Vec::new();

        for entry in WalkDir::new(&root).into_iter().filter_map(|entry| entry.ok()) {
            if !entry.path().is_file() {
                continue;
            }
            let Ok(relative_path) = entry.path().strip_prefix(self.path.as_ref()) else {
                continue;
            };
            let name = RefName::new(relative_path.to_string_lossy().replace('\\', "/"));

            let content = std::fs::read_to_string(entry.path()).context(format!(
                "Unable to read ref file {}",
                entry.path().display()
            ))?;
            let content = content.trim();

            // symbolic refs carry no tip of their own
            if content.is_empty() || content.starts_with("ref: ") {
                continue;
            }

            refs.push((name, ObjectId::try_parse(content.to_string())?));
        }

        Ok(refs)
    }

    fn packed_refs(&self) -> anyhow::Result<Vec<(RefName, ObjectId, Option<ObjectId>)>> {
        let packed_path = self.path.join("packed-refs");
        if !packed_path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&packed_path).context(format!(
            "Unable to read packed refs at {}",
            packed_path.display()
        ))?;

        parse_packed_refs(&content)
    }
}

/// Parse the `packed-refs` file format
///
/// Lines starting with `#` are headers, `^<oid>` lines attach a peeled
/// commit to the reference on the preceding line.
fn parse_packed_refs(content: &str) -> anyhow::Result<Vec<(RefName, ObjectId, Option<ObjectId>)>> {
    let mut refs: Vec<(RefName, ObjectId, Option<ObjectId>)> = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(peeled) = line.strip_prefix('^') {
            let peeled = ObjectId::try_parse(peeled.to_string())
                .context("Invalid peeled line in packed-refs")?;
            let (_, _, slot) = refs
                .last_mut()
                .context("Peeled line without a preceding ref in packed-refs")?;
            *slot = Some(peeled);
            continue;
        }

        let (oid, name) = line
            .split_once(' ')
            .context("Invalid ref line in packed-refs")?;
        refs.push((
            RefName::new(name.trim().to_string()),
            ObjectId::try_parse(oid.to_string())?,
            None,
        ));
    }

    Ok(refs)
}
