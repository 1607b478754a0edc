//! Command implementations
//!
//! Each command is an `impl Repository` block that reads through the
//! repository's areas and writes its result.
//!
//! - `graph`: render the object graph reachable from a branch head as DOT

pub mod plumbing;
