//! Git commit object
//!
//! Commits represent snapshots of the repository at specific points in time.
//! For the dependency graph only the tree and the parents matter; the other
//! headers and the message are kept so a decoded commit is complete.
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! tree <tree-sha>
//! parent <parent-sha>
//! author <name> <email> <timestamp> <timezone>
//! committer <name> <email> <timestamp> <timezone>
//!
//! <commit message>
//! ```
//!
//! Header values may span several lines; every continuation line starts with
//! a single space (`gpgsig`, `mergetag`).

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::DecodeError;
use bytes::Bytes;
use derive_new::new;
use std::io::{BufRead, Read};

/// Git commit object
///
/// Represents a snapshot of the repository with metadata.
/// Contains references to:
/// - The tree representing the state of files
/// - Parent commit(s) for history
/// - Free-form headers (author, committer, encoding, signatures, ...)
/// - Commit message
#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct Commit {
    /// Tree object ID representing the directory snapshot
    tree_oid: ObjectId,
    /// Parent commit IDs (empty for a root commit, several for merges)
    parents: Vec<ObjectId>,
    /// Remaining headers in on-disk order
    headers: Vec<(String, String)>,
    /// Commit message, trimmed
    message: String,
}

impl Commit {
    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    /// Value of a header; the last occurrence wins if a key repeats
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Get the full commit message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the first line of the commit message
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}

impl Packable for Commit {
    fn serialize_body(&self) -> anyhow::Result<Bytes> {
        let mut lines = vec![format!("tree {}", self.tree_oid)];
        for parent in &self.parents {
            lines.push(format!("parent {parent}"));
        }
        for (key, value) in &self.headers {
            lines.push(format!("{key} {}", value.replace('\n', "\n ")));
        }
        lines.push(String::new());
        lines.push(self.message.to_string());

        let mut content = lines.join("\n");
        content.push('\n');

        Ok(Bytes::from(content))
    }
}

impl Unpackable for Commit {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut content = Vec::new();
        reader.read_to_end(&mut content)?;

        let content = String::from_utf8(content).map_err(|_| DecodeError::NonUtf8Commit)?;
        let lines = content.lines().collect::<Vec<&str>>();
        let mut cursor = 0;

        let tree_oid = lines
            .first()
            .and_then(|line| line.strip_prefix("tree "))
            .ok_or(DecodeError::MissingTreeLine)?;
        let tree_oid = ObjectId::try_parse(tree_oid.trim().to_string())?;
        cursor += 1;

        let mut parents = Vec::new();
        while let Some(parent) = lines
            .get(cursor)
            .and_then(|line| line.strip_prefix("parent "))
        {
            parents.push(ObjectId::try_parse(parent.trim().to_string())?);
            cursor += 1;
        }

        let mut headers: Vec<(String, String)> = Vec::new();
        loop {
            let line = lines.get(cursor).ok_or(DecodeError::UnterminatedHeader)?;
            cursor += 1;

            let blank = line.trim().is_empty();
            // a whitespace-only line is part of a multi-line value only when
            // the value carries on below it
            let continues = line.starts_with(' ')
                && (!blank || lines.get(cursor).is_some_and(|next| is_continuation(next)));

            if let (true, Some((_, value))) = (continues, headers.last_mut()) {
                value.push('\n');
                value.push_str(&line[1..]);
                continue;
            }

            let mut tokens = line.split_whitespace();
            let Some(key) = tokens.next() else {
                break; // blank line ends the headers
            };
            let value = tokens.collect::<Vec<&str>>().join(" ");
            headers.push((key.to_string(), value));
        }

        let message = lines[cursor..].join("\n").trim().to_string();

        Ok(Self::new(tree_oid, parents, headers, message))
    }
}

/// Indented line with content, as inside a `gpgsig` or `mergetag` value
fn is_continuation(line: &str) -> bool {
    line.starts_with(' ') && !line.trim().is_empty()
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }
}
