//! Repository discovery and layout.
//!
//! A [`Repository`] is just a located `.git` directory plus accessors for
//! the pieces the ordering engine reads: the loose object store and the
//! branch heads. Nothing here writes to disk.

mod discover;
mod env;
mod error;

pub use discover::{discover_git_dir, discover_git_dir_with_env};
pub use env::EnvOverrides;
pub use error::RepoError;

use std::path::{Path, PathBuf};

use topo_loose::LooseObjectStore;
use topo_ref::BranchHeads;

/// A discovered repository.
#[derive(Debug, Clone)]
pub struct Repository {
    git_dir: PathBuf,
    work_tree: Option<PathBuf>,
}

impl Repository {
    /// Find the repository containing `start`, honouring `GIT_DIR` and
    /// `GIT_CEILING_DIRECTORIES`.
    pub fn discover(start: impl AsRef<Path>) -> Result<Self, RepoError> {
        discover_git_dir(start.as_ref())
    }

    /// Discover with explicit environment overrides.
    pub fn discover_with_env(
        start: impl AsRef<Path>,
        env: &EnvOverrides,
    ) -> Result<Self, RepoError> {
        discover_git_dir_with_env(start.as_ref(), env)
    }

    /// Open an explicit git directory without walking.
    pub fn open(git_dir: impl AsRef<Path>) -> Result<Self, RepoError> {
        discover::open_git_dir(git_dir.as_ref())
    }

    /// Path to the `.git` directory.
    pub fn git_dir(&self) -> &Path {
        &self.git_dir
    }

    /// Directory containing `.git`, if it was found by walking.
    pub fn work_tree(&self) -> Option<&Path> {
        self.work_tree.as_deref()
    }

    /// The loose object store under `objects/`.
    pub fn objects(&self) -> LooseObjectStore {
        LooseObjectStore::open(self.git_dir.join("objects"))
    }

    /// The branch reference directory, `refs/heads/`.
    pub fn heads_dir(&self) -> PathBuf {
        self.git_dir.join("refs").join("heads")
    }

    /// All local branches, grouped by head commit.
    pub fn branch_heads(&self) -> Result<BranchHeads, RepoError> {
        Ok(BranchHeads::read(&self.heads_dir())?)
    }
}
