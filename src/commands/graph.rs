use crate::areas::repository::Repository;
use crate::artifacts::branch::ref_name::RefName;
use crate::artifacts::core::page;
use crate::artifacts::history::HistoryError;
use crate::artifacts::history::branch_history::BranchHistory;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::render::js_graph::JsGraphRenderer;
use crate::artifacts::render::tree_dump::render_tree;
use crate::{FilterMode, OutputFormat};
use is_terminal::IsTerminal;
use std::collections::HashMap;
use std::io::Write;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct GraphOptions {
    pub filter: FilterMode,
    pub format: OutputFormat,
    /// Branch processing order; empty means all branches in enumeration order
    pub branches: Vec<String>,
    pub suppress_tags: bool,
    pub template: String,
}

impl Repository {
    /// Build, simplify, and render the divergence tree of this repository
    pub fn graph(&self, opts: &GraphOptions) -> anyhow::Result<()> {
        let mut history = if opts.branches.is_empty() {
            self.collect_history()?
        } else {
            self.collect_history_ordered(&opts.branches)?
        };

        history.attach_tags(&self.resolve_tags()?);
        history.simplify(opts.filter);

        match opts.format {
            OutputFormat::Tree => {
                let dump = render_tree(&history);
                if std::io::stdout().is_terminal() {
                    page(&dump)?;
                } else {
                    write!(self.writer(), "{}", dump)?;
                }
            }
            OutputFormat::Script => {
                let renderer =
                    JsGraphRenderer::new(opts.suppress_tags, opts.template.clone());
                let script = renderer.render_script(history.branch(), &history.linearize())?;
                write!(self.writer(), "{}", script)?;
            }
            OutputFormat::Html => {
                let renderer =
                    JsGraphRenderer::new(opts.suppress_tags, opts.template.clone());
                let html = renderer.render_html(history.branch(), &history.linearize())?;
                write!(self.writer(), "{}", html)?;
            }
        }

        Ok(())
    }

    /// Fold every branch into one tree, in reference enumeration order
    fn collect_history(&self) -> anyhow::Result<BranchHistory> {
        let mut base: Option<BranchHistory> = None;

        for (branch, tip) in self.refs().list_branches()? {
            info!(branch = %branch, "found branch");

            let chain = BranchHistory::build(branch, tip, &|oid| self.load_commit(oid))?;
            match &mut base {
                None => base = Some(chain),
                Some(history) => {
                    history.merge(chain);
                }
            }
        }

        Ok(base.ok_or(HistoryError::EmptyTree)?)
    }

    /// Fold the named branches into one tree, in the given order
    ///
    /// Unknown branch names are logged and skipped rather than failing the
    /// run, matching the forgiving behavior of branch enumeration.
    fn collect_history_ordered(&self, order: &[String]) -> anyhow::Result<BranchHistory> {
        let mut branches: HashMap<RefName, ObjectId> =
            self.refs().list_branches()?.into_iter().collect();

        let mut base: Option<BranchHistory> = None;
        for name in order {
            let branch = RefName::qualify_branch(name);

            // remove, so a branch named twice is only folded once
            let Some(tip) = branches.remove(&branch) else {
                warn!(branch = %branch, "branch not found");
                continue;
            };
            info!(branch = %branch, "found branch");

            let chain = BranchHistory::build(branch, tip, &|oid| self.load_commit(oid))?;
            match &mut base {
                None => base = Some(chain),
                Some(history) => {
                    history.merge(chain);
                }
            }
        }

        Ok(base.ok_or(HistoryError::EmptyTree)?)
    }

    fn load_commit(&self, oid: &ObjectId) -> anyhow::Result<Commit> {
        self.database()
            .parse_object_as_commit(oid)?
            .ok_or_else(|| anyhow::anyhow!("object is not a commit: {}", oid))
    }

    /// Resolve tag refs to `(display name, target commit)` pairs
    ///
    /// Annotated tags are peeled down to their commit; refs that cannot be
    /// resolved to a commit are skipped, never fatal.
    fn resolve_tags(&self) -> anyhow::Result<Vec<(String, ObjectId)>> {
        let mut resolved = Vec::new();

        for tag in self.refs().list_tags()? {
            info!(tag = %tag.name, "found tag");

            let target = match tag.peeled {
                Some(peeled) => Some(peeled),
                None => match self.database().peel_to_commit(&tag.target) {
                    Ok(target) => target.map(|(oid, _)| oid),
                    Err(error) => {
                        debug!(tag = %tag.name, %error, "unable to peel tag");
                        None
                    }
                },
            };

            match target {
                Some(oid) => resolved.push((tag.name.to_short_name().to_string(), oid)),
                None => debug!(tag = %tag.name, "tag does not point at a commit"),
            }
        }

        Ok(resolved)
    }
}
