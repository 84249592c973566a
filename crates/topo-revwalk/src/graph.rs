//! Commit graph construction.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::hash::BuildHasher;

use topo_hash::ObjectId;
use topo_loose::LooseObjectStore;

use crate::GraphError;

static NO_EDGES: BTreeSet<ObjectId> = BTreeSet::new();

/// Source of parent links for the graph builder.
pub trait ParentReader {
    /// The parents declared by commit `oid`.
    fn read_parents(&self, oid: &ObjectId) -> Result<Vec<ObjectId>, GraphError>;
}

impl ParentReader for LooseObjectStore {
    fn read_parents(&self, oid: &ObjectId) -> Result<Vec<ObjectId>, GraphError> {
        Ok(LooseObjectStore::read_parents(self, oid)?)
    }
}

/// In-memory parent table, keyed by commit.
impl<S: BuildHasher> ParentReader for HashMap<ObjectId, Vec<ObjectId>, S> {
    fn read_parents(&self, oid: &ObjectId) -> Result<Vec<ObjectId>, GraphError> {
        self.get(oid)
            .cloned()
            .ok_or(GraphError::CommitNotFound(*oid))
    }
}

/// The commit DAG, stored as an arena keyed by id with one edge table per
/// direction.
///
/// A commit is a node iff it is a key in both tables, and
/// `b ∈ children[a] ⇔ a ∈ parents[b]` holds for every pair. Edge sets are
/// ordered, so iterating parents or children always goes in ascending id
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitGraph {
    parents: HashMap<ObjectId, BTreeSet<ObjectId>>,
    children: HashMap<ObjectId, BTreeSet<ObjectId>>,
    roots: Vec<ObjectId>,
}

impl CommitGraph {
    fn ensure_node(&mut self, oid: ObjectId) {
        self.parents.entry(oid).or_default();
        self.children.entry(oid).or_default();
    }

    fn add_edge(&mut self, child: ObjectId, parent: ObjectId) {
        self.ensure_node(child);
        self.ensure_node(parent);
        self.parents.entry(child).or_default().insert(parent);
        self.children.entry(parent).or_default().insert(child);
    }

    pub fn contains(&self, oid: &ObjectId) -> bool {
        self.parents.contains_key(oid)
    }

    /// Direct parents of `oid`; empty for roots and for unknown ids.
    pub fn parents(&self, oid: &ObjectId) -> &BTreeSet<ObjectId> {
        self.parents.get(oid).unwrap_or(&NO_EDGES)
    }

    /// Direct children of `oid`; empty for heads and for unknown ids.
    pub fn children(&self, oid: &ObjectId) -> &BTreeSet<ObjectId> {
        self.children.get(oid).unwrap_or(&NO_EDGES)
    }

    /// Commits without parents, in the order the builder reached them.
    pub fn roots(&self) -> &[ObjectId] {
        &self.roots
    }

    /// Number of commits.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// All commit ids, ascending.
    pub fn commits(&self) -> Vec<ObjectId> {
        let mut ids: Vec<ObjectId> = self.parents.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

/// Expand `seeds` into the full graph of their ancestors.
///
/// Seeds are deduplicated and pushed in ascending order onto an explicit
/// stack. Each popped commit is read once; its parents (ascending) get edges
/// in both directions and are pushed if not yet visited. A parent id is
/// only read when it is itself popped, so a dangling reference surfaces as
/// that read's error.
pub fn build_graph<R>(
    reader: &R,
    seeds: impl IntoIterator<Item = ObjectId>,
) -> Result<CommitGraph, GraphError>
where
    R: ParentReader + ?Sized,
{
    let mut stack: Vec<ObjectId> = seeds.into_iter().collect();
    stack.sort_unstable();
    stack.dedup();

    let mut graph = CommitGraph::default();
    let mut visited: HashSet<ObjectId> = HashSet::new();

    while let Some(oid) = stack.pop() {
        if !visited.insert(oid) {
            continue;
        }
        graph.ensure_node(oid);

        let mut parents = reader.read_parents(&oid)?;
        parents.sort_unstable();
        tracing::debug!(%oid, parents = parents.len(), "expanding commit");

        for parent in parents {
            graph.add_edge(oid, parent);
            if !visited.contains(&parent) {
                stack.push(parent);
            }
        }

        if graph.parents(&oid).is_empty() {
            graph.roots.push(oid);
        }
    }

    tracing::info!(
        commits = graph.len(),
        roots = graph.roots.len(),
        "built commit graph"
    );
    Ok(graph)
}
