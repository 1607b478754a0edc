//! Dependency graph construction
//!
//! Walks from a root object through commit→tree, commit→parent and
//! tree→entry edges using an explicit work-list, so arbitrarily long
//! histories do not grow the call stack.
//!
//! Two memo tables keep the walk linear in the size of the object DAG:
//!
//! - decoded objects by id: each object is read and decoded at most once
//! - built nodes by (id, description): a node reachable along several
//!   paths is built once and shared between its parents
//!
//! Objects missing from the store drop the edge that points at them.

use crate::areas::database::Database;
use crate::artifacts::graph::graph_node::GraphNode;
use crate::artifacts::objects::object::ObjectEdge;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::DecodeError;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

type NodeKey = (ObjectId, Option<String>);

/// Graph-relevant part of a decoded object
#[derive(Debug)]
struct ResolvedObject {
    object_type: ObjectType,
    edges: Vec<ObjectEdge>,
}

enum Step {
    /// Resolve the object and schedule its children
    Enter(NodeKey),
    /// All children are built; assemble the node
    Exit(NodeKey, Rc<ResolvedObject>),
}

pub struct GraphBuilder<'d> {
    database: &'d Database,
    objects: HashMap<ObjectId, Option<Rc<ResolvedObject>>>,
    nodes: HashMap<NodeKey, Option<Rc<GraphNode>>>,
}

impl<'d> GraphBuilder<'d> {
    pub fn new(database: &'d Database) -> Self {
        GraphBuilder {
            database,
            objects: HashMap::new(),
            nodes: HashMap::new(),
        }
    }

    /// Build the graph rooted at `root`
    ///
    /// Returns `None` if the root object is not in the store.
    pub fn build(&mut self, root: &ObjectId) -> anyhow::Result<Option<Rc<GraphNode>>> {
        let root_key: NodeKey = (root.clone(), None);
        let mut work = vec![Step::Enter(root_key.clone())];
        let mut in_progress: HashSet<NodeKey> = HashSet::new();

        while let Some(step) = work.pop() {
            match step {
                Step::Enter(key) => {
                    if self.nodes.contains_key(&key) {
                        continue;
                    }
                    // entered but not exited means the key is on the current path
                    if in_progress.contains(&key) {
                        return Err(DecodeError::Cycle(key.0.to_string()).into());
                    }

                    let Some(resolved) = self.resolve(&key.0)? else {
                        tracing::debug!(oid = %key.0, "object not in store, dropping edge");
                        self.nodes.insert(key, None);
                        continue;
                    };

                    in_progress.insert(key.clone());
                    work.push(Step::Exit(key, resolved.clone()));
                    // reversed so that children are built in list order
                    for edge in resolved.edges.iter().rev() {
                        work.push(Step::Enter((edge.oid.clone(), edge.description.clone())));
                    }
                }
                Step::Exit(key, resolved) => {
                    in_progress.remove(&key);

                    let children = resolved
                        .edges
                        .iter()
                        .filter_map(|edge| {
                            self.nodes
                                .get(&(edge.oid.clone(), edge.description.clone()))
                                .cloned()
                                .flatten()
                        })
                        .collect();

                    let (oid, description) = key.clone();
                    let node = GraphNode::new(resolved.object_type, oid, description, children);
                    self.nodes.insert(key, Some(Rc::new(node)));
                }
            }
        }

        tracing::debug!(
            objects = self.decoded_objects(),
            nodes = self.nodes.len(),
            "built dependency graph"
        );

        Ok(self.nodes.get(&root_key).cloned().flatten())
    }

    /// Number of distinct objects read from the store so far
    pub fn decoded_objects(&self) -> usize {
        self.objects.values().filter(|object| object.is_some()).count()
    }

    fn resolve(&mut self, oid: &ObjectId) -> anyhow::Result<Option<Rc<ResolvedObject>>> {
        if let Some(resolved) = self.objects.get(oid) {
            return Ok(resolved.clone());
        }

        let resolved = self.database.parse_object(oid)?.map(|object| {
            Rc::new(ResolvedObject {
                object_type: object.object_type(),
                edges: object.edges(),
            })
        });
        tracing::trace!(%oid, found = resolved.is_some(), "resolved object");

        self.objects.insert(oid.clone(), resolved.clone());
        Ok(resolved)
    }
}
