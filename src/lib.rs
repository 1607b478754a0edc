//! Object-dependency graph extraction for git repositories
//!
//! Reads loose objects straight from `.git/objects`, decodes commits, trees and
//! blobs, and writes the dependency graph rooted at a branch head as a Graphviz
//! DOT document.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod errors;
