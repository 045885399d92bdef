//! De Bruijn graph over fixed length DNA k-mers, stored in an open
//! addressing hash set, with a depth first contig walk.

#[macro_use]
pub mod rdbg;
pub mod error;
pub mod dbgconst;
pub mod new_types;
pub mod kmerset;
pub mod graph;
pub mod contig;
pub mod assemble;

pub use contig::ContigWalk;
pub use dbgconst::{DbgConst, DEFAULT_K};
pub use error::DbgError;
pub use graph::DeBruijnGraph;
pub use kmerset::KmerSet;
pub use new_types::{base::Base, node::Node, slot::Slot};
