use crate::areas::database::Database;
use crate::areas::refs::Refs;
use std::cell::{RefCell, RefMut};
use std::path::Path;

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    refs: Refs,
}

impl Repository {
    /// Open the repository whose `.git` directory lives at `path`
    pub fn open(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = path.canonicalize()?;
        let git_dir = path.join(".git");

        if !git_dir.is_dir() {
            anyhow::bail!("not a git repository: {}", path.display());
        }

        let database = Database::new(git_dir.join("objects").into_boxed_path());
        let refs = Refs::new(git_dir.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            database,
            refs,
        })
    }

    /// Walk up from `start` until a directory containing `.git` is found
    pub fn discover(start: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let mut dir = start.canonicalize()?;

        loop {
            if dir.join(".git").is_dir() {
                return Self::open(&dir, writer);
            }

            if !dir.pop() {
                anyhow::bail!("not found git repository");
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }
}
