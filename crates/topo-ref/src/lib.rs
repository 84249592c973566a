//! Local branch references.
//!
//! Only loose refs under `refs/heads/` are understood; a branch's name is
//! its file path relative to that directory, so `refs/heads/topic/x` is the
//! branch `topic/x`.

mod error;
mod heads;

pub use error::RefError;
pub use heads::{list_branches, read_branch_head, BranchHeads};
