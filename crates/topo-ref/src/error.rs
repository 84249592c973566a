use std::path::PathBuf;

/// Error types for reference operations.
#[derive(Debug, thiserror::Error)]
pub enum RefError {
    #[error("branch '{name}' does not point at a commit id: {source}")]
    InvalidTarget {
        name: String,
        #[source]
        source: topo_hash::HashError,
    },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error on {}: {source}", path.display())]
    IoPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
