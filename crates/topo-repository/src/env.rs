use std::ffi::OsStr;
use std::path::PathBuf;

/// Environment variable overrides for repository discovery.
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    /// `GIT_DIR`: use this directory as the git dir, skip walking.
    pub git_dir: Option<PathBuf>,
    /// `GIT_CEILING_DIRECTORIES` (colon-separated): stop walking at these.
    pub ceiling_directories: Vec<PathBuf>,
}

impl EnvOverrides {
    /// Read the overrides from the process environment.
    pub fn from_env() -> Self {
        Self {
            git_dir: std::env::var_os("GIT_DIR")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            ceiling_directories: std::env::var_os("GIT_CEILING_DIRECTORIES")
                .map(|v| parse_path_list(&v))
                .unwrap_or_default(),
        }
    }
}

/// Split a colon-separated (semicolon on Windows) path list.
fn parse_path_list(value: &OsStr) -> Vec<PathBuf> {
    let sep = if cfg!(windows) { ';' } else { ':' };
    value
        .to_string_lossy()
        .split(sep)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .collect()
}
