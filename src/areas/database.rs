use crate::artifacts::objects::Unpackable;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tag::Tag;
use anyhow::Context;
use bytes::Bytes;
use std::io::{BufRead, Cursor, Read};
use std::path::{Path, PathBuf};

/// Annotated tags chaining to other tag objects are followed at most this
/// far before the reference is given up as unresolvable.
const MAX_TAG_PEEL_DEPTH: usize = 10;

/// Read-only view of the loose object database
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

// TODO: read packed objects; fully gc'd repositories keep nothing loose
impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> anyhow::Result<Option<Commit>> {
        let (object_type, object_reader) = self.parse_object_as_bytes(object_id)?;

        match object_type {
            ObjectType::Commit => Ok(Some(Commit::deserialize(object_reader)?)),
            _ => Ok(None),
        }
    }

    /// Resolve a ref target down to the commit it names
    ///
    /// Lightweight tag refs point at the commit directly; annotated tag
    /// refs point at a tag object whose `object` header is followed,
    /// possibly through further tag objects. Targets that do not lead to
    /// a commit yield `None`.
    pub fn peel_to_commit(
        &self,
        object_id: &ObjectId,
    ) -> anyhow::Result<Option<(ObjectId, Commit)>> {
        let mut current = object_id.clone();

        for _ in 0..MAX_TAG_PEEL_DEPTH {
            let (object_type, object_reader) = self.parse_object_as_bytes(&current)?;

            match object_type {
                ObjectType::Commit => {
                    let commit = Commit::deserialize(object_reader)?;
                    return Ok(Some((current, commit)));
                }
                ObjectType::Tag => {
                    let tag = Tag::deserialize(object_reader)?;
                    match tag.target_type() {
                        ObjectType::Commit | ObjectType::Tag => {
                            current = tag.target().clone();
                        }
                        _ => return Ok(None),
                    }
                }
                _ => return Ok(None),
            }
        }

        Ok(None)
    }

    fn parse_object_as_bytes(
        &self,
        object_id: &ObjectId,
    ) -> anyhow::Result<(ObjectType, impl BufRead)> {
        let object_path = self.path.join(object_id.to_path());
        let object_content = self.read_object(object_path)?;
        let mut object_reader = Cursor::new(object_content);

        let object_type = ObjectType::parse_object_type(&mut object_reader)?;

        Ok((object_type, object_reader))
    }

    fn read_object(&self, object_path: PathBuf) -> anyhow::Result<Bytes> {
        let object_content = std::fs::read(&object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;

        Self::decompress(object_content.into())
    }

    fn decompress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .context("Unable to decompress object content")?;

        Ok(decompressed_content.into())
    }
}
