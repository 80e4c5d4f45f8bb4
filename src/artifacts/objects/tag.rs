//! Git annotated tag object
//!
//! Annotated tag refs point at a tag object rather than at the tagged
//! commit directly. Only the `object` and `type` headers are needed here,
//! to peel the reference down to a commit.

use crate::artifacts::objects::Unpackable;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use std::io::BufRead;

/// Annotated tag object, reduced to its target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    target: ObjectId,
    target_type: ObjectType,
}

impl Tag {
    pub fn target(&self) -> &ObjectId {
        &self.target
    }

    pub fn target_type(&self) -> ObjectType {
        self.target_type
    }
}

impl Unpackable for Tag {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let content = reader
            .bytes()
            .collect::<Result<Vec<u8>, std::io::Error>>()?;

        let content = String::from_utf8(content)?;
        let mut lines = content.lines();

        let object_line = lines
            .next()
            .context("Invalid tag object: missing object line")?;
        let target = object_line
            .strip_prefix("object ")
            .context("Invalid tag object: invalid object line")?;
        let target = ObjectId::try_parse(target.to_string())?;

        let type_line = lines
            .next()
            .context("Invalid tag object: missing type line")?;
        let target_type = type_line
            .strip_prefix("type ")
            .context("Invalid tag object: invalid type line")?;
        let target_type = ObjectType::try_from(target_type)?;

        Ok(Tag {
            target,
            target_type,
        })
    }
}
