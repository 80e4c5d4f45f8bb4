//! Git object types read by the graph builder
//!
//! Git stores all content as zlib-compressed objects identified by SHA-1
//! hashes, in the format `<type> <size>\0<content>`. This tool only ever
//! reads objects; the two types it understands are:
//!
//! - **Commit**: snapshot metadata (parents, author, message)
//! - **Tag**: annotated reference to another object
//!
//! Blobs and trees are recognized by the header parser but never
//! deserialized.

pub mod commit;
pub mod object_id;
pub mod object_type;
pub mod tag;

use std::io::BufRead;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Deserialization from the content part of a git object
///
/// Implementors receive a reader positioned just past the
/// `<type> <size>\0` header.
pub trait Unpackable: Sized {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self>;
}
