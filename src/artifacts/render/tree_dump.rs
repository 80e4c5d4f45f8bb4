//! Plain-text dump of the divergence tree
//!
//! One line per node in chain order, recursing into child branches right
//! after the node they diverge from. Mostly useful to inspect what the
//! merge engine built before it is simplified or rendered.

use crate::artifacts::history::branch_history::BranchHistory;
use colored::Colorize;

pub fn render_tree(history: &BranchHistory) -> String {
    let mut buf = String::new();
    write_history(&mut buf, history);
    buf
}

fn write_history(buf: &mut String, history: &BranchHistory) {
    for (index, node) in history.nodes().iter().enumerate() {
        let tags = if node.tag_names().is_empty() {
            String::new()
        } else {
            let joined = format!("({})", node.tag_names().join(", "));
            format!(" {}", joined.as_str().yellow())
        };

        buf.push_str(&format!(
            " [{}] [{:03}] {} {} {}{}\n",
            history.branch().as_ref().green(),
            index,
            node.oid(),
            node.commit().timestamp().to_rfc3339(),
            node.commit().author().display_name(),
            tags
        ));

        for child in node.child_branches() {
            write_history(buf, child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::history::branch_history::tests::{InMemoryCommitStore, create_oid};
    use rstest::rstest;

    #[rstest]
    fn dumps_child_branches_under_their_fork_node() {
        colored::control::set_override(false);

        let mut store = InMemoryCommitStore::new();
        store.add_commit("a", None);
        store.add_commit("b", Some("a"));
        store.add_commit("c", Some("b"));
        store.add_commit("d", Some("b"));

        let mut tree = store.chain("main", "c");
        tree.merge(store.chain("feature", "d"));
        tree.attach_tags(&[("v1".to_string(), create_oid("b"))]);

        let dump = render_tree(&tree);
        let lines: Vec<&str> = dump.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with(" [refs/heads/main] [000]"));
        assert!(lines[1].contains("(v1)"));
        // feature's single node is printed after its fork node B
        assert!(lines[2].starts_with(" [refs/heads/feature] [000]"));
        assert!(lines[3].starts_with(" [refs/heads/main] [002]"));
    }
}
