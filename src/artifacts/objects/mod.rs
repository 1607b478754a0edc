//! Git object types and decoding
//!
//! Git stores all content as objects identified by SHA-1 hashes. Three kinds
//! take part in the dependency graph:
//!
//! - **Blob**: File content (raw bytes)
//! - **Tree**: Directory listing (modes, names, and object IDs)
//! - **Commit**: Snapshot with metadata (tree, parent commits, headers, message)
//!
//! All objects share the loose object format `<type> <size>\0<content>`.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of a SHA-1 hash in raw bytes, as stored in tree entries
pub const RAW_OBJECT_ID_LENGTH: usize = 20;

/// Number of hash characters shown in a graph label
pub const LABEL_PREFIX_LENGTH: usize = 6;
