//! Git data structures
//!
//! - `branch`: validated branch names
//! - `objects`: blob, tree and commit codecs plus object ids
//! - `graph`: dependency graph nodes, the builder and the DOT writer

pub mod branch;
pub mod graph;
pub mod objects;
