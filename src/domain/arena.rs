//! Arena-backed binary search tree.
//!
//! Nodes live in a generational arena and reference each other by index:
//! `left`/`right` are owning child links, `parent` is a non-owning
//! back-reference used for O(1) splicing during removal. No reference
//! cycles, no interior mutability.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::mem;

use generational_arena::Arena;
pub use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

/// Node in the arena-backed search tree.
#[derive(Debug)]
pub struct TreeNode<T> {
    /// Stored element, unique under the element ordering
    pub element: T,
    /// Index of the parent node, None for the root
    pub parent: Option<Index>,
    /// Index of the left child; every element below it is smaller
    pub left: Option<Index>,
    /// Index of the right child; every element below it is larger
    pub right: Option<Index>,
}

impl<T> TreeNode<T> {
    fn new(element: T, parent: Option<Index>) -> Self {
        Self {
            element,
            parent,
            left: None,
            right: None,
        }
    }

    /// True if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// True if this node has two children.
    pub fn is_full(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }
}

/// Unbalanced binary search tree over elements with a total order.
///
/// Elements are unique under their `Ord` relation; inserting a key-equal
/// element is rejected and the stored element wins. Lookups and removals
/// accept any borrowed key form of the element (`T: Borrow<Q>`), so a
/// partially populated probe can find a fully populated entry.
///
/// Height degrades to O(n) for sorted input; there is no balancing.
#[derive(Debug)]
pub struct SearchTree<T> {
    arena: Arena<TreeNode<T>>,
    root: Option<Index>,
}

impl<T> Default for SearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SearchTree<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Number of elements in the tree.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Index of the root node, None for empty trees.
    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn get_node(&self, idx: Index) -> Option<&TreeNode<T>> {
        self.arena.get(idx)
    }

    /// Length of the longest root-to-leaf path. A single node reports 1,
    /// an empty tree reports 0.
    pub fn height(&self) -> usize {
        match self.root {
            Some(root) => self.node_height(root),
            None => 0,
        }
    }

    fn node_height(&self, idx: Index) -> usize {
        let node = &self.arena[idx];
        let left = node.left.map_or(0, |child| self.node_height(child));
        let right = node.right.map_or(0, |child| self.node_height(child));
        1 + left.max(right)
    }

    /// Elements in ascending order.
    pub fn iter(&self) -> InOrderIter<'_, T> {
        InOrderIter::new(self)
    }
}

impl<T: Ord> SearchTree<T> {
    /// Insert an element, keeping the ordering invariant.
    ///
    /// Returns false if a key-equal element is already stored; the tree is
    /// left unchanged in that case.
    #[instrument(level = "trace", skip_all)]
    pub fn insert(&mut self, element: T) -> bool {
        let mut cursor = match self.root {
            Some(root) => root,
            None => {
                let root = self.arena.insert(TreeNode::new(element, None));
                self.root = Some(root);
                return true;
            }
        };

        loop {
            let ordering = element.cmp(&self.arena[cursor].element);
            let next = match ordering {
                Ordering::Equal => return false,
                Ordering::Less => self.arena[cursor].left,
                Ordering::Greater => self.arena[cursor].right,
            };
            match next {
                Some(child) => cursor = child,
                None => {
                    let leaf = self.arena.insert(TreeNode::new(element, Some(cursor)));
                    let parent = &mut self.arena[cursor];
                    match ordering {
                        Ordering::Less => parent.left = Some(leaf),
                        _ => parent.right = Some(leaf),
                    }
                    return true;
                }
            }
        }
    }

    /// Look up the stored element matching `probe`.
    pub fn get<Q>(&self, probe: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.locate(probe).map(|idx| &self.arena[idx].element)
    }

    pub fn contains<Q>(&self, probe: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.locate(probe).is_some()
    }

    /// Remove the element matching `probe` and return it.
    ///
    /// A node with two children is not unlinked itself: its in-order
    /// predecessor (the largest element of the left subtree, which has no
    /// right child) is detached instead and its element promoted into the
    /// node. Absent keys are a no-op returning None.
    #[instrument(level = "trace", skip_all)]
    pub fn remove<Q>(&mut self, probe: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let target = self.locate(probe)?;
        let node = &self.arena[target];
        if let (Some(left), Some(_)) = (node.left, node.right) {
            let predecessor = self.subtree_max(left);
            let promoted = self.detach(predecessor)?;
            Some(mem::replace(
                &mut self.arena[target].element,
                promoted.element,
            ))
        } else {
            self.detach(target).map(|node| node.element)
        }
    }

    fn locate<Q>(&self, probe: &Q) -> Option<Index>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cursor = self.root;
        while let Some(idx) = cursor {
            let node = &self.arena[idx];
            cursor = match probe.cmp(node.element.borrow()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(idx),
            };
        }
        None
    }

    /// Index of the largest element in the subtree rooted at `idx`.
    fn subtree_max(&self, mut idx: Index) -> Index {
        while let Some(right) = self.arena[idx].right {
            idx = right;
        }
        idx
    }

    /// Unlink a node with at most one child, splice that child (if any)
    /// into its place, and take the node out of the arena.
    fn detach(&mut self, idx: Index) -> Option<TreeNode<T>> {
        let node = self.arena.get(idx)?;
        let parent = node.parent;
        let child = node.left.or(node.right);

        if let Some(child_idx) = child {
            self.arena[child_idx].parent = parent;
        }
        match parent {
            None => self.root = child,
            Some(parent_idx) => {
                let parent_node = &mut self.arena[parent_idx];
                if parent_node.left == Some(idx) {
                    parent_node.left = child;
                } else {
                    parent_node.right = child;
                }
            }
        }
        self.arena.remove(idx)
    }

    /// Verify the structural invariants in a single traversal.
    ///
    /// Checks the ordering property via min/max propagation, that every
    /// parent/child pair is mutually linked, and that no arena slot is
    /// orphaned (unreachable from the root).
    #[instrument(level = "debug", skip_all)]
    pub fn validate(&self) -> bool {
        match self.root {
            None => self.arena.is_empty(),
            Some(root) => {
                if self.arena[root].parent.is_some() {
                    return false;
                }
                match self.check_subtree(root) {
                    Some((reachable, _, _)) => reachable == self.arena.len(),
                    None => false,
                }
            }
        }
    }

    /// Returns `(node count, smallest, largest)` for a structurally sound
    /// subtree, or None at the first violation.
    fn check_subtree(&self, idx: Index) -> Option<(usize, &T, &T)> {
        let node = self.arena.get(idx)?;
        let mut count = 1;
        let mut smallest = &node.element;
        let mut largest = &node.element;

        if let Some(left) = node.left {
            if self.arena.get(left)?.parent != Some(idx) {
                return None;
            }
            let (n, lo, hi) = self.check_subtree(left)?;
            if *hi >= node.element {
                return None;
            }
            count += n;
            smallest = lo;
        }
        if let Some(right) = node.right {
            if self.arena.get(right)?.parent != Some(idx) {
                return None;
            }
            let (n, lo, hi) = self.check_subtree(right)?;
            if *lo <= node.element {
                return None;
            }
            count += n;
            largest = hi;
        }
        Some((count, smallest, largest))
    }
}

impl<T: fmt::Display> SearchTree<T> {
    /// In-order debug rendering: every element prints as `(element)` and a
    /// subtree holding more than one node is wrapped in one extra pair of
    /// parentheses, so `B, A, C, F` inserted in that order renders as
    /// `(A)(B)((C)(F))`. The empty tree renders as an empty string.
    pub fn render(&self) -> String {
        match self.root {
            Some(root) => self.render_node(root),
            None => String::new(),
        }
    }

    fn render_node(&self, idx: Index) -> String {
        let node = &self.arena[idx];
        let mut out = String::new();
        if let Some(left) = node.left {
            out.push_str(&self.render_child(left));
        }
        out.push_str(&format!("({})", node.element));
        if let Some(right) = node.right {
            out.push_str(&self.render_child(right));
        }
        out
    }

    fn render_child(&self, idx: Index) -> String {
        let rendered = self.render_node(idx);
        if self.arena[idx].is_leaf() {
            rendered
        } else {
            format!("({})", rendered)
        }
    }

    /// Structure rendering for terminal display.
    pub fn to_tree_string(&self) -> Tree<String> {
        match self.root {
            Some(root_idx) => {
                fn build<T: fmt::Display>(
                    tree: &SearchTree<T>,
                    node_idx: Index,
                    parent_tree: &mut Tree<String>,
                ) {
                    let node = &tree.arena[node_idx];
                    for child_idx in [node.left, node.right].into_iter().flatten() {
                        let mut child_tree =
                            Tree::new(tree.arena[child_idx].element.to_string());
                        build(tree, child_idx, &mut child_tree);
                        parent_tree.push(child_tree);
                    }
                }

                let mut tree = Tree::new(self.arena[root_idx].element.to_string());
                build(self, root_idx, &mut tree);
                tree
            }
            None => Tree::new("Empty tree".to_string()),
        }
    }
}

/// In-order (ascending) iterator over the tree.
pub struct InOrderIter<'a, T> {
    tree: &'a SearchTree<T>,
    stack: Vec<Index>,
}

impl<'a, T> InOrderIter<'a, T> {
    fn new(tree: &'a SearchTree<T>) -> Self {
        let mut iter = Self {
            tree,
            stack: Vec::new(),
        };
        iter.push_left_spine(tree.root);
        iter
    }

    fn push_left_spine(&mut self, mut cursor: Option<Index>) {
        while let Some(idx) = cursor {
            self.stack.push(idx);
            cursor = self.tree.arena[idx].left;
        }
    }
}

impl<'a, T> Iterator for InOrderIter<'a, T> {
    type Item = (Index, &'a TreeNode<T>);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let node = self.tree.arena.get(idx)?;
        self.push_left_spine(node.right);
        Some((idx, node))
    }
}
