//! Plumbing commands (read-only walks over the object store)

pub mod graph;
