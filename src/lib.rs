//! movlib: a movie catalog on an arena-backed binary search tree.
//!
//! The domain layer holds the tree and the catalog types; the cli layer
//! wraps them in a small command-line tool.

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
