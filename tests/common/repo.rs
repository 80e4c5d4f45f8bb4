//! On-disk repository fixtures
//!
//! Builds real `.git` directories out of loose objects, so the binary
//! under test reads exactly what a repository created by git would
//! contain: zlib-compressed `<type> <size>\0<content>` objects addressed
//! by the SHA-1 of their full representation, plus plain ref files.

use assert_fs::TempDir;
use flate2::write::ZlibEncoder;
use sha1::{Digest, Sha1};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Well-known hash of the empty tree; the tool never reads trees, so all
/// fixture commits can share it without the object existing on disk.
const EMPTY_TREE_OID: &str = "4b825dc642cb6eb9a060e54bf8d69288fbee4904";

pub struct FixtureRepo {
    dir: TempDir,
}

impl FixtureRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");

        let git_dir = dir.path().join(".git");
        std::fs::create_dir_all(git_dir.join("objects")).expect("failed to create objects dir");
        std::fs::create_dir_all(git_dir.join("refs").join("heads"))
            .expect("failed to create heads dir");
        std::fs::create_dir_all(git_dir.join("refs").join("tags"))
            .expect("failed to create tags dir");
        std::fs::write(git_dir.join("HEAD"), "ref: refs/heads/master\n")
            .expect("failed to write HEAD");

        FixtureRepo { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn git_dir(&self) -> PathBuf {
        self.dir.path().join(".git")
    }

    /// Create a working-tree subdirectory (for discovery tests)
    pub fn subdir(&self, name: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::create_dir_all(&path).expect("failed to create subdir");
        path
    }

    /// Store a loose object and return its hex oid
    pub fn write_object(&self, object_type: &str, content: &str) -> String {
        let full = format!("{} {}\0{}", object_type, content.len(), content);

        let mut hasher = Sha1::new();
        hasher.update(full.as_bytes());
        let oid: String = hasher
            .finalize()
            .iter()
            .map(|byte| format!("{byte:02x}"))
            .collect();

        let object_dir = self.git_dir().join("objects").join(&oid[..2]);
        std::fs::create_dir_all(&object_dir).expect("failed to create object dir");

        let mut encoder = ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder
            .write_all(full.as_bytes())
            .expect("failed to compress object");
        let compressed = encoder.finish().expect("failed to finish compression");
        std::fs::write(object_dir.join(&oid[2..]), compressed).expect("failed to write object");

        oid
    }

    /// Store a commit object and return its oid
    pub fn commit(&self, parent: Option<&str>, message: &str, timestamp: i64) -> String {
        let mut content = format!("tree {EMPTY_TREE_OID}\n");
        if let Some(parent) = parent {
            content.push_str(&format!("parent {parent}\n"));
        }
        content.push_str(&format!(
            "author A U Thor <author@example.com> {timestamp} +0000\n\
             committer A U Thor <author@example.com> {timestamp} +0000\n\
             \n\
             {message}\n"
        ));

        self.write_object("commit", &content)
    }

    /// Store an annotated tag object pointing at a commit
    pub fn annotated_tag(&self, name: &str, target: &str, timestamp: i64) -> String {
        let content = format!(
            "object {target}\n\
             type commit\n\
             tag {name}\n\
             tagger A U Thor <author@example.com> {timestamp} +0000\n\
             \n\
             {name}\n"
        );

        self.write_object("tag", &content)
    }

    pub fn branch(&self, name: &str, oid: &str) {
        let path = self.git_dir().join("refs").join("heads").join(name);
        std::fs::create_dir_all(path.parent().expect("branch path has a parent"))
            .expect("failed to create branch dir");
        std::fs::write(path, format!("{oid}\n")).expect("failed to write branch ref");
    }

    pub fn tag_ref(&self, name: &str, oid: &str) {
        let path = self.git_dir().join("refs").join("tags").join(name);
        std::fs::create_dir_all(path.parent().expect("tag path has a parent"))
            .expect("failed to create tag dir");
        std::fs::write(path, format!("{oid}\n")).expect("failed to write tag ref");
    }

    pub fn packed_refs(&self, content: &str) {
        std::fs::write(self.git_dir().join("packed-refs"), content)
            .expect("failed to write packed-refs");
    }

    /// Overwrite a stored object with bytes that are not valid zlib
    pub fn corrupt_object(&self, oid: &str) {
        let path = self
            .git_dir()
            .join("objects")
            .join(&oid[..2])
            .join(&oid[2..]);
        std::fs::write(path, b"not a zlib stream").expect("failed to corrupt object");
    }
}

/// Three commits on master, a feature branch forking at the second one
///
/// ```text
/// master:  A(t=1000) <- B(t=2000) <- C(t=3000)
/// feature:                B        <- D(t=4000)
/// ```
pub struct ForkedFixture {
    pub repo: FixtureRepo,
    pub a: String,
    pub b: String,
    pub c: String,
    pub d: String,
}

pub fn forked_fixture() -> ForkedFixture {
    let repo = FixtureRepo::new();
    let a = repo.commit(None, "first commit", 1_000);
    let b = repo.commit(Some(&a), "second commit", 2_000);
    let c = repo.commit(Some(&b), "third commit", 3_000);
    let d = repo.commit(Some(&b), "feature work", 4_000);
    repo.branch("master", &c);
    repo.branch("feature", &d);

    ForkedFixture { repo, a, b, c, d }
}
