//! Git tree object
//!
//! Trees represent directory snapshots in Git. They contain entries for files
//! (blobs), subdirectories (other trees) and submodules (commits of another
//! repository), along with their names and modes.
//!
//! ## Format
//!
//! On disk: `tree <size>\0<entries>`
//! Each entry: `<mode> <name>\0<20-byte-sha1>`
//!
//! Entries are kept in on-disk order so that re-encoding a decoded tree
//! reproduces the original bytes.

use crate::artifacts::objects::RAW_OBJECT_ID_LENGTH;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::DecodeError;
use bytes::Bytes;
use derive_new::new;
use std::io::{self, BufRead, Write};

/// A single `<mode> <name>\0<sha1>` record
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct TreeEntry {
    /// Octal digits exactly as stored (e.g. `100644`, `40000`)
    pub mode: String,
    /// Raw name bytes; git does not require names to be UTF-8
    name: Vec<u8>,
    pub oid: ObjectId,
}

impl TreeEntry {
    /// Entry name for display, with invalid UTF-8 replaced
    pub fn name(&self) -> String {
        String::from_utf8_lossy(&self.name).into_owned()
    }
}

/// Git tree object: an ordered list of entries
#[derive(Debug, Clone, Default, PartialEq, Eq, new)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }
}

impl Packable for Tree {
    fn serialize_body(&self) -> anyhow::Result<Bytes> {
        let mut content_bytes = Vec::new();

        for entry in &self.entries {
            content_bytes.write_all(entry.mode.as_bytes())?;
            content_bytes.push(b' ');
            content_bytes.write_all(&entry.name)?;
            content_bytes.push(0);
            entry.oid.write_h40_to(&mut content_bytes)?;
        }

        Ok(Bytes::from(content_bytes))
    }
}

impl Unpackable for Tree {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let mut entries = Vec::new();
        let mut reader = reader;
        let mut offset = 0;

        // Reuse scratch buffers to reduce allocs
        let mut mode_bytes = Vec::new();
        let mut name_bytes = Vec::new();

        loop {
            mode_bytes.clear();
            // Read "mode " (space-delimited)
            let mode_len = reader.read_until(b' ', &mut mode_bytes)?;
            if mode_len == 0 {
                break; // clean EOF: no more entries
            }
            if mode_bytes.pop() != Some(b' ') {
                return Err(DecodeError::TruncatedTreeEntry {
                    offset,
                    reason: "missing space after mode",
                }
                .into());
            }
            if mode_bytes.is_empty() || !mode_bytes.iter().all(u8::is_ascii_digit) {
                return Err(DecodeError::InvalidMode {
                    offset,
                    mode: String::from_utf8_lossy(&mode_bytes).into_owned(),
                }
                .into());
            }
            // only ASCII digits past this point
            let mode = String::from_utf8_lossy(&mode_bytes).into_owned();

            // Read "name\0"
            name_bytes.clear();
            let name_len = reader.read_until(b'\0', &mut name_bytes)?;
            if name_bytes.pop() != Some(b'\0') {
                return Err(DecodeError::TruncatedTreeEntry {
                    offset,
                    reason: "missing null after name",
                }
                .into());
            }

            // Read the raw object id
            let mut raw_oid = [0u8; RAW_OBJECT_ID_LENGTH];
            match reader.read_exact(&mut raw_oid) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    return Err(DecodeError::TruncatedTreeEntry {
                        offset,
                        reason: "incomplete object id",
                    }
                    .into());
                }
                Err(e) => return Err(e.into()),
            }

            entries.push(TreeEntry::new(
                mode,
                name_bytes.clone(),
                ObjectId::from_raw(&raw_oid),
            ));
            offset += mode_len + name_len + RAW_OBJECT_ID_LENGTH;
        }

        Ok(Tree::new(entries))
    }
}

impl Object for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }
}
