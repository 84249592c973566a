use std::fs;
use std::io::Read;

use bstr::{BString, ByteSlice};
use flate2::read::ZlibDecoder;
use topo_hash::ObjectId;

use crate::header::{commit_parents, split_header};
use crate::{LooseError, LooseObjectStore};

/// A decompressed loose object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LooseObject {
    /// Type name from the object header (`commit`, `tree`, ...), empty if absent.
    pub kind: BString,
    /// Object content after the header.
    pub content: Vec<u8>,
}

impl LooseObjectStore {
    /// Check if a loose object exists.
    pub fn contains(&self, oid: &ObjectId) -> bool {
        self.object_path(oid).is_file()
    }

    /// Read and inflate a loose object.
    ///
    /// A missing file is an error here: callers only ask for ids they
    /// found referenced elsewhere, so absence means the store is incomplete.
    pub fn read_raw(&self, oid: &ObjectId) -> Result<LooseObject, LooseError> {
        let path = self.object_path(oid);
        tracing::trace!(%oid, path = %path.display(), "reading loose object");

        let compressed = match fs::read(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(LooseError::NotFound { oid: *oid, path });
            }
            Err(source) => return Err(LooseError::Io { path, source }),
        };

        let raw = decompress_all(&compressed, oid)?;
        let (kind, content) = split_header(&raw);
        Ok(LooseObject {
            kind: BString::from(kind),
            content: content.to_vec(),
        })
    }

    /// Read a commit and return its parents in sorted header-line order.
    pub fn read_parents(&self, oid: &ObjectId) -> Result<Vec<ObjectId>, LooseError> {
        let object = self.read_raw(oid)?;
        if !object.kind.is_empty() && object.kind != "commit" {
            tracing::warn!(%oid, kind = %object.kind.as_bstr(), "reading parents of a non-commit object");
        }
        commit_parents(&object.content).map_err(|reason| LooseError::Corrupt { oid: *oid, reason })
    }
}

/// Zlib-decompress the full contents of a loose object file.
fn decompress_all(compressed: &[u8], oid: &ObjectId) -> Result<Vec<u8>, LooseError> {
    let mut decoder = ZlibDecoder::new(compressed);
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .map_err(|source| LooseError::Decompress { oid: *oid, source })?;
    Ok(decompressed)
}
