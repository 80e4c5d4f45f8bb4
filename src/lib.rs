//! gtg - a git history graph outputter
//!
//! Reconstructs a branch divergence tree from the first-parent history of
//! every branch in a repository and renders it as a gitgraph.js script, an
//! HTML page embedding that script, or a plain-text tree dump.
//!
//! Only first-parent ancestry is modeled (see `--first-parent` in the git
//! command); merge commits are not supported.

use clap::ValueEnum;

pub mod areas;
pub mod artifacts;
pub mod commands;

/// Simplification applied to the divergence tree before rendering
///
/// - `Full`: keep every commit node
/// - `AllTags`: keep branch endpoints, branch points, and tagged commits
/// - `Simple`: keep branch endpoints and branch points only
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterMode {
    Full,
    #[value(name = "alltags")]
    AllTags,
    Simple,
}

/// Output produced by the graph command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// HTML page with the gitgraph.js script embedded
    Html,
    /// Bare gitgraph.js statements
    Script,
    /// Plain-text dump of the divergence tree
    Tree,
}
