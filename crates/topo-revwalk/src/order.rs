//! Deterministic topological order, descendants first.

use std::collections::HashSet;

use topo_hash::ObjectId;

use crate::CommitGraph;

/// Order every commit so that each child precedes all of its parents.
///
/// This is a depth-first walk forward in history, from the roots along
/// child edges. The walk stack is seeded with the roots and fed each
/// commit's unvisited children, both in ascending order, so the greatest
/// candidate is explored first. A second stack holds the current chain of
/// commits; before a commit is entered, every chain entry it is not a child
/// of is closed and appended to the result. Whatever is still open at the
/// end is closed last, which puts the roots at the tail.
pub fn topo_order(graph: &CommitGraph) -> Vec<ObjectId> {
    let mut order = Vec::with_capacity(graph.len());
    let mut visited: HashSet<ObjectId> = HashSet::with_capacity(graph.len());
    let mut chain: Vec<ObjectId> = Vec::new();

    let mut stack = graph.roots().to_vec();
    stack.sort_unstable();

    while let Some(oid) = stack.pop() {
        if !visited.insert(oid) {
            continue;
        }

        while let Some(&top) = chain.last() {
            if graph.children(&top).contains(&oid) {
                break;
            }
            order.push(top);
            chain.pop();
        }
        chain.push(oid);

        stack.extend(
            graph
                .children(&oid)
                .iter()
                .filter(|child| !visited.contains(*child))
                .copied(),
        );
    }

    while let Some(top) = chain.pop() {
        order.push(top);
    }

    debug_assert_eq!(order.len(), graph.len());
    order
}
