//! Object identity for the topo workspace.
//!
//! Provides [`ObjectId`], the content hash every other crate keys on, and
//! the hex codec used to parse ids out of ref files and commit headers.

mod error;
pub mod hex;
mod oid;

pub use error::HashError;
pub use oid::ObjectId;
