//! Git object identifier (SHA-1 hash)
//!
//! Object IDs are 40-character hexadecimal strings identifying every object
//! in a repository. The graph renderer abbreviates them to the standard
//! 7-character short form.

use crate::artifacts::objects::OBJECT_ID_LENGTH;
use std::path::PathBuf;

/// Git object identifier (SHA-1 hash)
///
/// A validated 40-character hexadecimal string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// # Arguments
    ///
    /// * `id` - 40-character hexadecimal string
    ///
    /// # Returns
    ///
    /// Validated ObjectId or error if invalid length/characters
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if id.len() != OBJECT_ID_LENGTH {
            return Err(anyhow::anyhow!("Invalid object ID length: {}", id.len()));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(anyhow::anyhow!("Invalid object ID characters: {}", id));
        }
        Ok(Self(id))
    }

    /// Convert to the object's path inside `.git/objects`
    ///
    /// Splits the hash as `XX/YYYYYY...` where XX is the first 2 chars.
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.0.split_at(2);
        PathBuf::from(dir).join(file)
    }

    /// Get abbreviated form of the object ID
    ///
    /// # Returns
    ///
    /// First 7 characters of the hash (standard Git abbreviation)
    pub fn to_short_oid(&self) -> String {
        self.0.split_at(7).0.to_string()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_valid_forty_char_hex() {
        let id = "0123456789abcdef0123456789abcdef01234567".to_string();
        let oid = ObjectId::try_parse(id.clone()).unwrap();
        assert_eq!(oid.as_ref(), id);
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(ObjectId::try_parse("abc123".to_string()).is_err());
        assert!(ObjectId::try_parse("0".repeat(41)).is_err());
    }

    #[test]
    fn rejects_non_hex_characters() {
        assert!(ObjectId::try_parse("z".repeat(40)).is_err());
    }

    #[test]
    fn short_oid_is_seven_chars() {
        let oid = ObjectId::try_parse("0123456789abcdef0123456789abcdef01234567".to_string())
            .unwrap();
        assert_eq!(oid.to_short_oid(), "0123456");
    }

    #[test]
    fn object_path_splits_after_two_chars() {
        let oid = ObjectId::try_parse("ab23456789abcdef0123456789abcdef01234567".to_string())
            .unwrap();
        assert_eq!(
            oid.to_path(),
            PathBuf::from("ab").join("23456789abcdef0123456789abcdef01234567")
        );
    }
}
