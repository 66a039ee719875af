//! Movie catalog built on the ordered search tree.

use std::fmt;

use termtree::Tree;
use tracing::instrument;

use crate::domain::arena::SearchTree;
use crate::domain::entities::Movie;

/// A movie library keyed by title.
///
/// Thin client over [`SearchTree`]: callers speak titles and records, the
/// tree handles ordering and structure.
#[derive(Debug, Default)]
pub struct MovieLibrary {
    tree: SearchTree<Movie>,
}

impl MovieLibrary {
    pub fn new() -> Self {
        Self {
            tree: SearchTree::new(),
        }
    }

    /// Add a movie. Returns false if a movie with the same title is already
    /// present; the existing record wins.
    #[instrument(level = "debug", skip(self))]
    pub fn add(&mut self, movie: Movie) -> bool {
        self.tree.insert(movie)
    }

    /// Look up a movie by title.
    #[instrument(level = "debug", skip(self))]
    pub fn search(&self, title: &str) -> Option<&Movie> {
        self.tree.get(title)
    }

    /// Remove a movie by title, returning the stored record.
    #[instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, title: &str) -> Option<Movie> {
        self.tree.remove(title)
    }

    /// Number of movies in the library.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Longest root-to-leaf path; a single movie gives height 1.
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Movies in title order.
    pub fn iter(&self) -> impl Iterator<Item = &Movie> {
        self.tree.iter().map(|(_, node)| &node.element)
    }

    /// In-order parenthesized rendering of the catalog.
    pub fn render(&self) -> String {
        self.tree.render()
    }

    /// Structure rendering for terminal display.
    pub fn to_tree_string(&self) -> Tree<String> {
        self.tree.to_tree_string()
    }

    /// Diagnostic check of the underlying tree invariants.
    pub fn is_consistent(&self) -> bool {
        self.tree.validate()
    }
}

impl fmt::Display for MovieLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
