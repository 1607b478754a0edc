//! Branch head references
//!
//! Only direct references are understood: a branch head file under
//! `refs/heads` holding a 40-character SHA-1. Symbolic refs and
//! `packed-refs` are reported as errors instead of being followed.
//!
//! ## File Format
//!
//! `<40 hex characters>` followed by optional whitespace

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::ConfigError;
use anyhow::Context;
use derive_new::new;
use std::path::Path;

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// Git references reader
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the git directory (typically `.git`)
    path: Box<Path>,
}

impl Refs {
    /// Resolve a branch to the commit its head file points at
    ///
    /// # Errors
    ///
    /// - `ConfigError::MissingRef` if `refs/heads/<branch>` does not exist
    /// - `ConfigError::SymbolicRef` if the file holds `ref: <target>`
    /// - `ConfigError::InvalidRef` if the content is not a 40-character hash
    pub fn read_branch(&self, branch_name: &BranchName) -> anyhow::Result<ObjectId> {
        let ref_path = self.heads_path().join(branch_name.to_path());

        let content = match std::fs::read_to_string(&ref_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ConfigError::MissingRef(ref_path).into());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to read ref file at {:?}", ref_path));
            }
        };
        let content = content.trim();

        let symref_match = regex::Regex::new(SYMREF_REGEX)?.captures(content);
        if let Some(symref_match) = symref_match {
            return Err(ConfigError::SymbolicRef {
                path: ref_path,
                target: symref_match[1].to_string(),
            }
            .into());
        }

        let oid = ObjectId::try_parse(content.to_string()).map_err(|_| ConfigError::InvalidRef {
            path: ref_path.clone(),
            content: content.to_string(),
        })?;
        tracing::debug!(branch = %branch_name, %oid, "resolved branch head");

        Ok(oid)
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }
}
