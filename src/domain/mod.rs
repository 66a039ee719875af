//! Domain layer: the search tree, movie entities, and the catalog loader
//!
//! This layer is independent of CLI and configuration concerns.

pub mod arena;
pub mod builder;
pub mod entities;
pub mod error;
pub mod library;

pub use arena::{InOrderIter, SearchTree, TreeNode};
pub use builder::{CatalogResult, LibraryBuilder, LoadReport, DEFAULT_DATE_FORMAT};
pub use entities::Movie;
pub use error::DomainError;
pub use library::MovieLibrary;
