//! Object dependency graph
//!
//! - `graph_node`: Immutable node with its DOT label
//! - `graph_builder`: Builds the node graph from the object store
//! - `dot_writer`: Serializes the graph as a Graphviz document

pub mod dot_writer;
pub mod graph_builder;
pub mod graph_node;
