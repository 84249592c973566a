//! Loose object reading.
//!
//! Each loose object lives at `.git/objects/XX/YYYY...` where `XX` is the
//! first byte of the id in hex and `YYYY...` is the rest. The file holds a
//! zlib stream of `"<type> <size>\0<content>"`. This crate only reads; it
//! never writes or repacks.

mod header;
mod read;

pub use header::commit_parents;
pub use read::LooseObject;

use std::path::{Path, PathBuf};

use topo_hash::ObjectId;

/// Read-only view of a loose object directory (`.git/objects/`).
#[derive(Debug, Clone)]
pub struct LooseObjectStore {
    objects_dir: PathBuf,
}

impl LooseObjectStore {
    /// Open the loose object store at the given path. Nothing is touched on disk.
    pub fn open(objects_dir: impl AsRef<Path>) -> Self {
        Self {
            objects_dir: objects_dir.as_ref().to_path_buf(),
        }
    }

    /// The objects directory this store reads from.
    pub fn objects_dir(&self) -> &Path {
        &self.objects_dir
    }

    /// File path for a given id.
    pub fn object_path(&self, oid: &ObjectId) -> PathBuf {
        self.objects_dir.join(oid.loose_path())
    }
}

/// Errors from loose object operations.
#[derive(Debug, thiserror::Error)]
pub enum LooseError {
    #[error("object {oid} not found at {}", path.display())]
    NotFound { oid: ObjectId, path: PathBuf },

    #[error("corrupt loose object {oid}: {reason}")]
    Corrupt { oid: ObjectId, reason: String },

    #[error("decompression error for {oid}: {source}")]
    Decompress {
        oid: ObjectId,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
