//! gitgraph.js script and HTML page rendering
//!
//! Emits one JS statement per event: branch declarations, commits with
//! 7-char hashes and cleaned subject lines, and tag calls. The HTML format
//! wraps the script in a page loading gitgraph.js 1.8.3 from cdnjs.

use crate::artifacts::branch::ref_name::RefName;
use crate::artifacts::history::linearize::HistoryEvent;
use anyhow::Context;
use derive_new::new;
use regex::Regex;

/// Matches every character that cannot appear in a JS identifier
const IDENTIFIER_REGEX: &str = "[[:^alnum:]]";

/// Matches characters that would break out of a JS string literal
const SUBJECT_REGEX: &str = r#"["'\\]"#;

/// gitgraph.js template names accepted by `--template`
pub static TEMPLATES: phf::Set<&'static str> = phf::phf_set! {
    "metro",
    "blackarrow",
};

/// clap value parser for `--template`
pub fn parse_template(value: &str) -> Result<String, String> {
    if TEMPLATES.contains(value) {
        Ok(value.to_string())
    } else {
        Err(format!(
            "unsupported template '{value}' (supported: metro, blackarrow)"
        ))
    }
}

/// Derive a JS identifier from a ref name
///
/// Every non-alphanumeric character becomes an underscore and the result
/// is prefixed with one, so `refs/heads/a-b` yields `_refs_heads_a_b`.
fn js_var(identifier: &Regex, name: &RefName) -> String {
    format!("_{}", identifier.replace_all(name.as_ref(), "_"))
}

/// Renders the event stream as gitgraph.js statements
#[derive(Debug, Clone, new)]
pub struct JsGraphRenderer {
    suppress_tags: bool,
    template: String,
}

impl JsGraphRenderer {
    /// Render the bare gitgraph.js statements
    pub fn render_script(
        &self,
        root_branch: &RefName,
        events: &[HistoryEvent],
    ) -> anyhow::Result<String> {
        let identifier = Regex::new(IDENTIFIER_REGEX)
            .with_context(|| format!("invalid identifier regex: {IDENTIFIER_REGEX}"))?;
        let subject_filter = Regex::new(SUBJECT_REGEX)
            .with_context(|| format!("invalid subject regex: {SUBJECT_REGEX}"))?;

        let mut buf = String::new();
        buf.push_str(&format!(
            "var {} = gitgraph.branch(\"{}\");\n",
            js_var(&identifier, root_branch),
            root_branch
        ));

        for event in events {
            match event {
                HistoryEvent::Commit {
                    branch,
                    short_oid,
                    subject,
                    ..
                } => {
                    let subject = subject_filter.replace_all(subject, "");
                    buf.push_str(&format!(
                        "{}.commit({{sha1: \"{}\", message: \"{}\"}});\n",
                        js_var(&identifier, branch),
                        short_oid,
                        subject.trim()
                    ));
                }
                HistoryEvent::TagApplied { branch, tag } => {
                    if !self.suppress_tags {
                        buf.push_str(&format!(
                            "{}.tag(\"{}\");\n",
                            js_var(&identifier, branch),
                            tag
                        ));
                    }
                }
                HistoryEvent::BranchCreated { parent, child } => {
                    buf.push_str(&format!(
                        "var {} = {}.branch(\"{}\");\n",
                        js_var(&identifier, child),
                        js_var(&identifier, parent),
                        child
                    ));
                }
            }
        }

        Ok(buf)
    }

    /// Render a complete HTML page with the script embedded
    pub fn render_html(
        &self,
        root_branch: &RefName,
        events: &[HistoryEvent],
    ) -> anyhow::Result<String> {
        let mut buf = String::new();
        buf.push_str(
            "<html>\n\
             <head>\n\
             <script src=\"https://cdnjs.cloudflare.com/ajax/libs/gitgraph.js/1.8.3/gitgraph.min.js\"></script>\n\
             <link rel=\"stylesheet\" type=\"text/css\" href=\"https://cdnjs.cloudflare.com/ajax/libs/gitgraph.js/1.8.3/gitgraph.min.css\" />\n\
             </head>\n\
             \n\
             <body>\n\
             \x20   <canvas id=\"gitGraph\"></canvas>\n\
             </body>\n\
             \n\
             <script>\n",
        );
        buf.push_str(&format!(
            "var gitgraph = new GitGraph({{\n\
             \x20   template: \"{}\",\n\
             \x20   orientation: \"horizontal\",\n\
             \x20   mode: \"compact\",\n\
             \x20   elementId: \"gitGraph\"\n\
             }});\n",
            self.template
        ));
        buf.push_str(&self.render_script(root_branch, events)?);
        buf.push_str("</script>\n</html>\n");

        Ok(buf)
    }
}
