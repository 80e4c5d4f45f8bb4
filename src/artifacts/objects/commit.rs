//! Git commit object
//!
//! Commits represent snapshots of the repository at specific points in time.
//! This tool reads them for three things only: the first-parent link, the
//! author timestamp, and the message. Tree contents are never followed.
//!
//! ## Format
//!
//! On disk (after the `commit <size>\0` header):
//! ```text
//! tree <tree-sha>
//! parent <parent-sha>
//! author <name> <email> <timestamp> <timezone>
//! committer <name> <email> <timestamp> <timezone>
//!
//! <commit message>
//! ```
//!
//! Additional headers (`gpgsig`, `encoding`, ...) and their continuation
//! lines are skipped.

use crate::artifacts::objects::Unpackable;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use chrono::{DateTime, FixedOffset};
use std::io::BufRead;

/// Author information parsed from a commit header line
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Author {
    name: String,
    email: String,
    timestamp: DateTime<FixedOffset>,
}

impl Author {
    pub fn new(name: String, email: String, timestamp: DateTime<FixedOffset>) -> Self {
        Author {
            name,
            email,
            timestamp,
        }
    }

    /// Format author name and email for display
    ///
    /// # Returns
    ///
    /// String in format "Name <email@example.com>"
    pub fn display_name(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }
}

fn parse_timezone(tz: &str) -> anyhow::Result<FixedOffset> {
    if tz.len() != 5 {
        anyhow::bail!("Invalid timezone: {}", tz);
    }

    let sign = match &tz[..1] {
        "+" => 1,
        "-" => -1,
        _ => anyhow::bail!("Invalid timezone sign: {}", tz),
    };
    let hours: i32 = tz[1..3].parse().context("Invalid timezone hours")?;
    let minutes: i32 = tz[3..5].parse().context("Invalid timezone minutes")?;

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .ok_or_else(|| anyhow::anyhow!("Timezone offset out of range: {}", tz))
}

impl TryFrom<&str> for Author {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        // Format: "name <email> timestamp timezone"
        // Split from the right to get timezone and timestamp first
        let parts: Vec<&str> = value.rsplitn(3, ' ').collect();
        if parts.len() < 3 {
            return Err(anyhow::anyhow!("Invalid author format: {}", value));
        }

        let timezone = parse_timezone(parts[0])?;
        let timestamp = parts[1]
            .parse::<i64>()
            .map_err(|_| anyhow::anyhow!("Invalid timestamp: {}", parts[1]))?;
        let name_email_part = parts[2]; // "name <email>"

        let email_start = name_email_part
            .find('<')
            .ok_or_else(|| anyhow::anyhow!("Invalid author format: missing '<'"))?;
        let email_end = name_email_part
            .find('>')
            .ok_or_else(|| anyhow::anyhow!("Invalid author format: missing '>'"))?;

        let name = name_email_part[..email_start].trim().to_string();
        let email = name_email_part[email_start + 1..email_end].to_string();

        let timestamp = DateTime::from_timestamp(timestamp, 0)
            .ok_or_else(|| anyhow::anyhow!("Timestamp out of range"))?
            .with_timezone(&timezone);

        Ok(Author {
            name,
            email,
            timestamp,
        })
    }
}

/// Git commit object, reduced to what history reconstruction needs
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// Parent commit IDs (empty for a root commit, multiple for merges)
    parents: Vec<ObjectId>,
    /// Author who wrote the changes
    author: Author,
    /// Commit message
    message: String,
}

impl Commit {
    pub fn new(parents: Vec<ObjectId>, author: Author, message: String) -> Self {
        Commit {
            parents,
            author,
            message,
        }
    }

    /// First parent of the commit, or None for a root commit
    ///
    /// Further parents of merge commits are intentionally ignored; only
    /// first-parent ancestry is modeled.
    pub fn parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    /// Get the first line of the commit message
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").trim().to_string()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.author.timestamp()
    }
}

impl Unpackable for Commit {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let content = reader
            .bytes()
            .collect::<Result<Vec<u8>, std::io::Error>>()?;

        let content = String::from_utf8(content)?;
        let mut lines = content.lines();

        let tree_line = lines
            .next()
            .context("Invalid commit object: missing tree line")?;
        let tree_oid = tree_line
            .strip_prefix("tree ")
            .context("Invalid commit object: invalid tree line")?;
        ObjectId::try_parse(tree_oid.to_string())
            .context("Invalid commit object: invalid tree oid")?;

        // Parse all parent lines (there can be 0, 1, or multiple parents)
        let mut parents = Vec::new();
        let mut next_line = lines
            .next()
            .context("Invalid commit object: missing author line")?;

        while let Some(parent_oid) = next_line.strip_prefix("parent ") {
            parents.push(ObjectId::try_parse(parent_oid.to_string())?);

            next_line = lines
                .next()
                .context("Invalid commit object: missing author line")?;
        }

        // At this point, next_line should be the author line
        let author = next_line
            .strip_prefix("author ")
            .context("Invalid commit object: invalid author line")?;
        let author = Author::try_from(author)?;

        // Skip the remaining headers (committer, gpgsig, encoding, ...)
        // including continuation lines, up to the blank separator line.
        for line in lines.by_ref() {
            if line.is_empty() {
                break;
            }
        }

        let message = lines.collect::<Vec<&str>>().join("\n");
        Ok(Self::new(parents, author, message))
    }
}
