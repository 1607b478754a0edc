//! Core repository components
//!
//! This module contains the on-disk areas of a repository the graph is read from:
//!
//! - `database`: Loose object store (`.git/objects`)
//! - `refs`: Branch heads (`.git/refs/heads`)
//! - `repository`: Context tying the areas and the output writer together

pub mod database;
pub mod refs;
pub mod repository;
