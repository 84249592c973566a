use std::path::PathBuf;

/// Errors from repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("not a git repository (or any of the parent directories): {}", .0.display())]
    NotFound(PathBuf),

    #[error("invalid git directory: {}: {reason}", path.display())]
    InvalidGitDir { path: PathBuf, reason: String },

    #[error(transparent)]
    Ref(#[from] topo_ref::RefError),
}
