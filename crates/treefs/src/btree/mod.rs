// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Order-preserving directory index: a classic B-tree of minimum degree `t = 2`.
//!
//! Every node other than the root holds between [`MIN_KEYS`] and [`MAX_KEYS`]
//! entries, the root holds at most [`MAX_KEYS`], and all leaves sit at the same
//! depth. Insertion splits full nodes on the way down; deletion tops up thin
//! children (borrowing from a sibling or merging with one) before descending,
//! so neither operation ever has to walk back up the tree.
//!
//! Entries are identified by their [`Keyed::key`], compared byte-wise. The
//! tree does not check for duplicates: callers confirm absence with
//! [`BTree::search`] before calling [`BTree::insert`].

mod iter;
pub(crate) mod node;

pub use iter::Iter;

use diagnostics::log_debug;
use node::Node;

/// Minimum degree `t` of every tree.
pub const MIN_DEGREE: usize = 2;

/// Largest number of keys a node can hold (`2t - 1`).
pub const MAX_KEYS: usize = 2 * MIN_DEGREE - 1;

/// Smallest number of keys a non-root node can hold (`t - 1`).
pub const MIN_KEYS: usize = MIN_DEGREE - 1;

/// Largest number of children an internal node can hold (`2t`).
pub const MAX_CHILDREN: usize = 2 * MIN_DEGREE;

/// Anything stored in a [`BTree`] is indexed by a string key.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for String {
    fn key(&self) -> &str {
        self
    }
}

impl Keyed for &str {
    fn key(&self) -> &str {
        self
    }
}

/// A B-tree owning its root node and, through it, every entry.
pub struct BTree<E> {
    root: Box<Node<E>>,
}

impl<E> BTree<E> {
    /// Creates an empty tree whose root is a leaf with no keys.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: Node::new(true),
        }
    }

    /// The minimum degree this tree was built with.
    #[must_use]
    pub const fn degree(&self) -> usize {
        MIN_DEGREE
    }

    /// True when the root holds no keys, which implies the whole tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.keys.is_empty()
    }

    /// Number of entries, counted by traversal.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Number of levels, 1 for a tree that is a single leaf.
    #[must_use]
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut node = &*self.root;
        while !node.leaf {
            node = &node.children[0];
            height += 1;
        }
        height
    }

    /// In-order traversal, ascending by key. Each call starts again from the
    /// smallest entry.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, E> {
        Iter::new(&self.root)
    }

    /// Smallest entry.
    #[must_use]
    pub fn first(&self) -> Option<&E> {
        self.iter().next()
    }

    /// Largest entry.
    #[must_use]
    pub fn last(&self) -> Option<&E> {
        let mut node = &*self.root;
        while !node.leaf {
            node = &node.children[node.keys.len()];
        }
        node.keys.last()
    }

    /// Releases every node and entry, leaving an empty tree.
    pub fn clear(&mut self) {
        self.root = Node::new(true);
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> &Node<E> {
        &self.root
    }
}

impl<E: Keyed> BTree<E> {
    /// Finds the entry whose key equals `name`.
    #[must_use]
    pub fn search(&self, name: &str) -> Option<&E> {
        self.root.search(name)
    }

    /// Finds the entry whose key equals `name`, for modification in place.
    ///
    /// The key of the returned entry must not be changed.
    pub fn search_mut(&mut self, name: &str) -> Option<&mut E> {
        self.root.search_mut(name)
    }

    /// True if an entry keyed `name` is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.search(name).is_some()
    }

    /// Inserts an entry whose key is not yet present.
    pub fn insert(&mut self, entry: E) {
        debug_assert!(
            !self.contains(entry.key()),
            "duplicate key inserted into B-tree: {}",
            entry.key()
        );

        if self.root.is_full() {
            let old_root = std::mem::replace(&mut self.root, Node::new(false));
            self.root.children.push(old_root);
            self.root.split_child(0);

            let height = self.height();
            log_debug!("B-tree root split, height now {height}", height: height);
        }
        self.root.insert_non_full(entry);
    }

    /// Removes and returns the entry keyed `name`, or `None` when it is
    /// absent. An absent key leaves the tree untouched.
    pub fn delete(&mut self, name: &str) -> Option<E> {
        self.search(name)?;

        let removed = self.root.remove(name);

        if self.root.keys.is_empty() && !self.root.leaf {
            let child = self.root.children.remove(0);
            self.root = child;

            let height = self.height();
            log_debug!("B-tree root collapsed, height now {height}", height: height);
        }
        removed
    }
}

impl<E> Default for BTree<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, E> IntoIterator for &'a BTree<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: std::fmt::Debug> std::fmt::Debug for BTree<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
