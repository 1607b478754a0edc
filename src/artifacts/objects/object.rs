use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use anyhow::Result;
use bytes::Bytes;
use sha1::{Digest, Sha1};
use std::io::{BufRead, Write};

pub trait Packable {
    /// Encode the object body, without the `<type> <size>\0` header
    fn serialize_body(&self) -> Result<Bytes>;

    fn serialize(&self) -> Result<Bytes>
    where
        Self: Object,
    {
        let body = self.serialize_body()?;

        let mut object_bytes = Vec::new();
        let header = format!("{} {}\0", self.object_type().as_str(), body.len());
        object_bytes.write_all(header.as_bytes())?;
        object_bytes.write_all(&body)?;

        Ok(Bytes::from(object_bytes))
    }
}

pub trait Unpackable {
    /// Decode an object body; the header has already been consumed
    fn deserialize(reader: impl BufRead) -> Result<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    fn object_id(&self) -> Result<ObjectId> {
        let content = self.serialize()?;
        let mut hasher = Sha1::new();
        hasher.update(&content);

        let oid = hasher.finalize();
        ObjectId::try_parse(format!("{oid:x}"))
    }
}

/// An outgoing dependency of a decoded object
///
/// `description` is the tree entry name, when the edge comes from a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectEdge {
    pub oid: ObjectId,
    pub description: Option<String>,
}

#[derive(Debug)]
pub enum ObjectBox {
    Blob(Box<Blob>),
    Tree(Box<Tree>),
    Commit(Box<Commit>),
}

impl ObjectBox {
    pub fn object_type(&self) -> ObjectType {
        match self {
            ObjectBox::Blob(blob) => blob.object_type(),
            ObjectBox::Tree(tree) => tree.object_type(),
            ObjectBox::Commit(commit) => commit.object_type(),
        }
    }

    /// Dependencies in graph order: a commit's tree then its parents, a tree's
    /// entries in on-disk order, nothing for a blob.
    pub fn edges(&self) -> Vec<ObjectEdge> {
        match self {
            ObjectBox::Blob(_) => Vec::new(),
            ObjectBox::Tree(tree) => tree
                .entries()
                .iter()
                .map(|entry| ObjectEdge {
                    oid: entry.oid.clone(),
                    description: Some(entry.name()),
                })
                .collect(),
            ObjectBox::Commit(commit) => std::iter::once(commit.tree_oid())
                .chain(commit.parents())
                .map(|oid| ObjectEdge {
                    oid: oid.clone(),
                    description: None,
                })
                .collect(),
        }
    }
}
