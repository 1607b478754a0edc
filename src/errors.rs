//! Fatal error taxonomy
//!
//! A missing object is not an error (the store reader returns `Ok(None)`).
//! Everything else is one of the two kinds below and aborts the run. Both are
//! carried inside `anyhow::Error`, so callers can recover the variant with
//! `downcast_ref`.

use std::path::PathBuf;

/// Malformed object content found in the store.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("object header is missing its null terminator")]
    MissingHeaderTerminator,

    #[error("malformed object header: {0:?}")]
    MalformedHeader(String),

    #[error("unknown object type: {0:?}")]
    UnknownObjectType(String),

    #[error("truncated tree entry at offset {offset}: {reason}")]
    TruncatedTreeEntry { offset: usize, reason: &'static str },

    #[error("invalid tree entry mode at offset {offset}: {mode:?}")]
    InvalidMode { offset: usize, mode: String },

    #[error("commit body is not valid UTF-8")]
    NonUtf8Commit,

    #[error("commit is missing its mandatory 'tree' line")]
    MissingTreeLine,

    #[error("commit header section is not terminated by a blank line")]
    UnterminatedHeader,

    #[error("invalid object hash: {0:?}")]
    InvalidHash(String),

    #[error("object {0} is reachable from itself")]
    Cycle(String),
}

/// Invalid configuration or branch head, detected before any store access.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unable to read config file {path}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },

    #[error("{0} is not a git repository (no .git directory)")]
    NotARepository(PathBuf),

    #[error("invalid branch name: {0:?}")]
    InvalidBranch(String),

    #[error("branch head {0} not found")]
    MissingRef(PathBuf),

    #[error("branch head {path} does not hold a 40-character hash: {content:?}")]
    InvalidRef { path: PathBuf, content: String },

    #[error("branch head {path} is a symbolic ref to {target}, which is not supported")]
    SymbolicRef { path: PathBuf, target: String },
}
