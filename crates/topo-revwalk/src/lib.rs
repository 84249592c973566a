//! Commit graph ordering.
//!
//! Starting from the branch heads, [`build_graph`] expands the full ancestry
//! into a [`CommitGraph`], [`topo_order`] linearises it with descendants
//! before ancestors, and [`render`] prints that order with branch names and
//! markers wherever two adjacent lines are not linked by a parent edge.
//!
//! Every step is iterative, so long histories cannot exhaust the call stack,
//! and every choice between candidates is made in ascending id order, so the
//! same graph always prints the same way.

mod graph;
mod order;
mod render;

pub use graph::{build_graph, CommitGraph, ParentReader};
pub use order::topo_order;
pub use render::render;

/// Errors produced while building the commit graph.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error(transparent)]
    Loose(#[from] topo_loose::LooseError),

    #[error("commit not found: {0}")]
    CommitNotFound(topo_hash::ObjectId),
}
