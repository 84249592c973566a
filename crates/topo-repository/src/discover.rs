use std::path::{Path, PathBuf};

use crate::env::EnvOverrides;
use crate::{RepoError, Repository};

/// Discover a repository by walking up from `start`.
///
/// 1. `$GIT_DIR`, if set, is used directly.
/// 2. Otherwise each directory from `start` up to the filesystem root is
///    checked for a `.git/` directory; the first hit wins.
/// 3. Reaching a `$GIT_CEILING_DIRECTORIES` entry ends the search.
pub fn discover_git_dir(start: &Path) -> Result<Repository, RepoError> {
    discover_git_dir_with_env(start, &EnvOverrides::from_env())
}

/// Discover with explicit environment overrides (for testing).
pub fn discover_git_dir_with_env(
    start: &Path,
    env: &EnvOverrides,
) -> Result<Repository, RepoError> {
    if let Some(ref git_dir) = env.git_dir {
        let git_dir = if git_dir.is_absolute() {
            git_dir.clone()
        } else {
            start.join(git_dir)
        };
        return open_git_dir(&git_dir);
    }

    let start =
        std::fs::canonicalize(start).map_err(|_| RepoError::NotFound(start.to_path_buf()))?;

    let ceilings: Vec<PathBuf> = env
        .ceiling_directories
        .iter()
        .filter_map(|p| std::fs::canonicalize(p).ok())
        .collect();

    let mut current = Some(start.as_path());
    while let Some(dir) = current {
        if ceilings.iter().any(|c| c == dir) {
            tracing::debug!(ceiling = %dir.display(), "stopped at ceiling directory");
            break;
        }

        let dot_git = dir.join(".git");
        if is_readable_dir(&dot_git) {
            tracing::debug!(git_dir = %dot_git.display(), "found repository");
            return Ok(Repository {
                git_dir: dot_git,
                work_tree: Some(dir.to_path_buf()),
            });
        }

        current = dir.parent();
    }

    Err(RepoError::NotFound(start))
}

/// Open an explicit git directory.
pub(crate) fn open_git_dir(git_dir: &Path) -> Result<Repository, RepoError> {
    if !git_dir.is_dir() {
        return Err(RepoError::InvalidGitDir {
            path: git_dir.to_path_buf(),
            reason: "not a directory".into(),
        });
    }
    if !git_dir.join("objects").is_dir() {
        return Err(RepoError::InvalidGitDir {
            path: git_dir.to_path_buf(),
            reason: "missing objects directory".into(),
        });
    }
    Ok(Repository {
        git_dir: git_dir.to_path_buf(),
        work_tree: None,
    })
}

fn is_readable_dir(path: &Path) -> bool {
    path.is_dir() && std::fs::read_dir(path).is_ok()
}
