use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{ObjectBox, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use anyhow::Context;
use bytes::Bytes;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

/// Read-only view of the loose object directory (`.git/objects`)
///
/// A missing object file is an expected outcome and yields `Ok(None)`;
/// unreadable or corrupt files are errors.
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    /// Decompressed `<type> <size>\0<body>` content of an object
    pub fn load(&self, object_id: &ObjectId) -> anyhow::Result<Option<Bytes>> {
        let object_path = self.path.join(object_id.to_path());

        self.read_object(object_path)
    }

    pub fn parse_object(&self, object_id: &ObjectId) -> anyhow::Result<Option<ObjectBox>> {
        let Some(object_content) = self.load(object_id)? else {
            return Ok(None);
        };

        let object = Self::decode_object(object_content)
            .with_context(|| format!("Unable to decode object {object_id}"))?;

        Ok(Some(object))
    }

    fn decode_object(object_content: Bytes) -> anyhow::Result<ObjectBox> {
        let mut object_reader = Cursor::new(object_content);
        let header = ObjectType::parse_header(&mut object_reader)?;

        let body_len = object_reader.get_ref().len() - object_reader.position() as usize;
        if body_len != header.declared_size {
            tracing::warn!(
                object_type = %header.object_type,
                declared = header.declared_size,
                actual = body_len,
                "object size does not match its header"
            );
        }

        match header.object_type {
            ObjectType::Blob => Ok(ObjectBox::Blob(Box::new(Blob::deserialize(object_reader)?))),
            ObjectType::Tree => Ok(ObjectBox::Tree(Box::new(Tree::deserialize(object_reader)?))),
            ObjectType::Commit => Ok(ObjectBox::Commit(Box::new(Commit::deserialize(
                object_reader,
            )?))),
        }
    }

    fn read_object(&self, object_path: PathBuf) -> anyhow::Result<Option<Bytes>> {
        // a missing file or fan-out directory both surface as NotFound
        let object_content = match std::fs::read(&object_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::trace!(path = %object_path.display(), "object not in store");
                return Ok(None);
            }
            Err(e) => {
                return Err(e).context(format!(
                    "Unable to read object file {}",
                    object_path.display()
                ));
            }
        };
        tracing::trace!(path = %object_path.display(), "loaded object");

        let object_content = Self::decompress(object_content.into()).context(format!(
            "Unable to decompress object file {}",
            object_path.display()
        ))?;

        Ok(Some(object_content))
    }

    fn decompress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .context("Unable to decompress object content")?;

        Ok(decompressed_content.into())
    }
}
