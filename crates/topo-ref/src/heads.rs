use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use bstr::ByteSlice;
use topo_hash::ObjectId;

use crate::RefError;

/// Branch heads keyed by the commit they point at.
///
/// Several branches may share a head, so each commit maps to the sorted set
/// of names pointing at it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchHeads {
    by_commit: BTreeMap<ObjectId, BTreeSet<String>>,
}

impl BranchHeads {
    /// Read every branch under `heads_dir` (normally `.git/refs/heads`).
    pub fn read(heads_dir: &Path) -> Result<Self, RefError> {
        let mut heads = Self::default();
        for name in list_branches(heads_dir)? {
            let oid = read_branch_head(heads_dir, &name)?;
            tracing::debug!(branch = %name, %oid, "resolved branch head");
            heads.insert(name, oid);
        }
        Ok(heads)
    }

    /// Record that `name` points at `oid`.
    pub fn insert(&mut self, name: impl Into<String>, oid: ObjectId) {
        self.by_commit.entry(oid).or_default().insert(name.into());
    }

    /// Branch names pointing at `oid`, sorted.
    pub fn names(&self, oid: &ObjectId) -> impl Iterator<Item = &str> {
        self.by_commit
            .get(oid)
            .into_iter()
            .flat_map(|names| names.iter().map(String::as_str))
    }

    /// Distinct head commits in ascending order.
    pub fn commits(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.by_commit.keys().copied()
    }

    /// Number of distinct head commits.
    pub fn len(&self) -> usize {
        self.by_commit.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_commit.is_empty()
    }
}

/// List all branch names under `heads_dir`, sorted.
///
/// A missing directory means there are no branches yet. Lock files left
/// behind by an interrupted ref update are skipped.
pub fn list_branches(heads_dir: &Path) -> Result<Vec<String>, RefError> {
    let mut names = Vec::new();
    if heads_dir.is_dir() {
        collect_branches_recursive(heads_dir, heads_dir, &mut names)?;
    }
    names.sort();
    Ok(names)
}

fn collect_branches_recursive(
    heads_dir: &Path,
    dir: &Path,
    names: &mut Vec<String>,
) -> Result<(), RefError> {
    let entries = fs::read_dir(dir).map_err(|source| RefError::IoPath {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| RefError::IoPath {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        if path.is_dir() {
            collect_branches_recursive(heads_dir, &path, names)?;
        } else if path.is_file() {
            let rel = path
                .strip_prefix(heads_dir)
                .map_err(|_| RefError::Parse("cannot determine branch name from path".into()))?;
            let parts = rel
                .components()
                .map(|c| c.as_os_str().to_str())
                .collect::<Option<Vec<_>>>()
                .ok_or_else(|| RefError::Parse(format!("non-UTF-8 branch path: {}", rel.display())))?;
            let name = parts.join("/");
            if name.ends_with(".lock") {
                continue;
            }
            names.push(name);
        }
    }
    Ok(())
}

/// Read the commit a branch points at: the trimmed content of its ref file.
pub fn read_branch_head(heads_dir: &Path, name: &str) -> Result<ObjectId, RefError> {
    let path = heads_dir.join(name);
    let contents = fs::read(&path).map_err(|source| RefError::IoPath {
        path: path.clone(),
        source,
    })?;
    let hex = contents
        .trim()
        .to_str()
        .map_err(|_| RefError::Parse(format!("invalid UTF-8 in branch '{name}'")))?;
    ObjectId::from_hex(hex).map_err(|source| RefError::InvalidTarget {
        name: name.to_string(),
        source,
    })
}
