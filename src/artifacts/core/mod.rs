//! Core utilities and shared types

use anyhow::Context;
use minus::Pager;

/// Display long plain-text output through the minus pager
///
/// Used by the tree format when stdout is a terminal; redirected output
/// is written directly instead.
pub fn page(content: &str) -> anyhow::Result<()> {
    let pager = Pager::new();
    pager
        .push_str(content)
        .context("Unable to push content to the pager")?;
    pager
        .set_prompt("gtg (q to quit)")
        .context("Unable to set the pager prompt")?;

    minus::page_all(pager).context("Unable to run the pager")
}
