use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::errors::ConfigError;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Name of the metadata directory inside a working tree
pub const GIT_DIR: &str = ".git";

/// Everything a command needs to read one repository
///
/// Built once from the run configuration and passed explicitly; nothing is
/// read from global state.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    refs: Refs,
}

impl Repository {
    /// Open the repository rooted at `path`
    ///
    /// `writer` receives human-facing command output (and the graph itself
    /// when it is written to stdout).
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let git_path = path.join(GIT_DIR);

        if !git_path.is_dir() {
            return Err(ConfigError::NotARepository(path.to_path_buf()).into());
        }

        let database = Database::new(git_path.join("objects").into_boxed_path());
        let refs = Refs::new(git_path.into_boxed_path());

        Ok(Repository {
            path: path.to_path_buf().into_boxed_path(),
            writer: RefCell::new(writer),
            database,
            refs,
        })
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
