//! Annotated history listing.

use std::collections::BTreeSet;
use std::io::{self, Write};

use topo_hash::ObjectId;
use topo_ref::BranchHeads;

use crate::CommitGraph;

/// Write `order` one commit per line, followed by the branches pointing at it.
///
/// When the next commit in `order` is not a parent of the current one, the
/// listing jumps: the current commit's parents are written as `p1 p2=`
/// followed by an empty line, and the next commit is preceded by its own
/// children as `=c1 c2`. Together the two markers tell a reader where the
/// graph really continues on each side of the jump.
pub fn render<W: Write + ?Sized>(
    out: &mut W,
    graph: &CommitGraph,
    order: &[ObjectId],
    branches: &BranchHeads,
) -> io::Result<()> {
    let mut jumped = false;

    for (i, oid) in order.iter().enumerate() {
        if jumped {
            jumped = false;
            writeln!(out, "={}", join(graph.children(oid)))?;
        }

        write!(out, "{oid}")?;
        for name in branches.names(oid) {
            write!(out, " {name}")?;
        }
        writeln!(out)?;

        if let Some(next) = order.get(i + 1) {
            let parents = graph.parents(oid);
            if !parents.contains(next) {
                jumped = true;
                writeln!(out, "{}=\n", join(parents))?;
            }
        }
    }
    Ok(())
}

fn join(ids: &BTreeSet<ObjectId>) -> String {
    ids.iter().map(ObjectId::to_hex).collect::<Vec<_>>().join(" ")
}
