use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::graph::dot_writer::{DotWriter, EdgeMode};
use crate::artifacts::graph::graph_builder::GraphBuilder;
use anyhow::Context;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

impl Repository {
    /// Render everything reachable from `branch` as a DOT document
    ///
    /// `output` of `None` sends the document to the repository writer
    /// instead of a file. The graph is built completely before the output
    /// is opened, so a fatal decode error never leaves a partial file.
    pub fn graph(
        &self,
        branch: &BranchName,
        output: Option<&Path>,
        mode: EdgeMode,
    ) -> anyhow::Result<usize> {
        let head = self.refs().read_branch(branch)?;

        let mut builder = GraphBuilder::new(self.database());
        let root = builder.build(&head)?;
        if root.is_none() {
            tracing::warn!(%branch, oid = %head, "branch head not found in object store");
        }

        let edges = match output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Unable to create output file {}", path.display()))?;
                DotWriter::new(BufWriter::new(file), mode)
                    .write_graph(root.as_deref())
                    .with_context(|| format!("Unable to write graph to {}", path.display()))?
            }
            None => {
                let mut writer = self.writer();
                DotWriter::new(&mut *writer, mode).write_graph(root.as_deref())?
            }
        };

        tracing::info!(
            repo = %self.path().display(),
            %branch,
            objects = builder.decoded_objects(),
            edges,
            "wrote dependency graph"
        );

        Ok(edges)
    }
}
