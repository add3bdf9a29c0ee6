// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::cmp::Ordering;
use std::mem;

use super::{Keyed, MAX_CHILDREN, MAX_KEYS, MIN_DEGREE, MIN_KEYS};

/// One B-tree node: up to `2t-1` ordered keys and, when internal, exactly one
/// more child than keys.
pub(crate) struct Node<E> {
    pub(crate) leaf: bool,
    pub(crate) keys: Vec<E>,
    pub(crate) children: Vec<Box<Node<E>>>,
}

impl<E> Node<E> {
    pub(crate) fn new(leaf: bool) -> Box<Self> {
        let children = if leaf {
            Vec::new()
        } else {
            Vec::with_capacity(MAX_CHILDREN)
        };
        Box::new(Self {
            leaf,
            keys: Vec::with_capacity(MAX_KEYS),
            children,
        })
    }

    pub(crate) fn is_full(&self) -> bool {
        self.keys.len() == MAX_KEYS
    }

    fn debug_check_capacity(&self) {
        debug_assert!(self.keys.len() <= MAX_KEYS, "node holds too many keys");
        debug_assert!(
            self.children.len() <= MAX_CHILDREN,
            "node holds too many children"
        );
        debug_assert!(
            self.leaf || self.children.len() == self.keys.len() + 1,
            "internal node child count out of step with its keys"
        );
    }
}

impl<E: Keyed> Node<E> {
    /// Scans keys left to right: `Ok(i)` on an exact match, otherwise
    /// `Err(i)` with the index of the first larger key (the child to descend).
    fn position(&self, name: &str) -> Result<usize, usize> {
        for (i, key) in self.keys.iter().enumerate() {
            match name.cmp(key.key()) {
                Ordering::Greater => {}
                Ordering::Equal => return Ok(i),
                Ordering::Less => return Err(i),
            }
        }
        Err(self.keys.len())
    }

    pub(crate) fn search(&self, name: &str) -> Option<&E> {
        let mut node = self;
        loop {
            match node.position(name) {
                Ok(i) => return Some(&node.keys[i]),
                Err(_) if node.leaf => return None,
                Err(i) => node = &node.children[i],
            }
        }
    }

    pub(crate) fn search_mut(&mut self, name: &str) -> Option<&mut E> {
        match self.position(name) {
            Ok(i) => Some(&mut self.keys[i]),
            Err(_) if self.leaf => None,
            Err(i) => self.children[i].search_mut(name),
        }
    }

    /// Splits the full child at `i`: its upper `t-1` keys (and upper `t`
    /// children) move to a new right sibling and its median moves up here.
    pub(crate) fn split_child(&mut self, i: usize) {
        let child = &mut self.children[i];
        debug_assert!(child.is_full(), "split of a non-full node");

        let mut sibling = Node::new(child.leaf);
        sibling.keys.extend(child.keys.drain(MIN_DEGREE..));
        if !child.leaf {
            sibling.children.extend(child.children.drain(MIN_DEGREE..));
        }
        let median = child.keys.remove(MIN_DEGREE - 1);

        self.keys.insert(i, median);
        self.children.insert(i + 1, sibling);
        self.debug_check_capacity();
    }

    /// Inserts into a subtree whose root has room for one more key.
    pub(crate) fn insert_non_full(&mut self, entry: E) {
        debug_assert!(!self.is_full(), "insert into a full node");

        let (Ok(mut idx) | Err(mut idx)) = self.position(entry.key());
        if self.leaf {
            self.keys.insert(idx, entry);
            self.debug_check_capacity();
            return;
        }

        if self.children[idx].is_full() {
            self.split_child(idx);
            if entry.key() > self.keys[idx].key() {
                idx += 1;
            }
        }
        self.children[idx].insert_non_full(entry);
    }

    /// Largest entry of the subtree left of key `idx`.
    fn predecessor(&self, idx: usize) -> &E {
        let mut node = &*self.children[idx];
        while !node.leaf {
            node = &node.children[node.keys.len()];
        }
        &node.keys[node.keys.len() - 1]
    }

    /// Smallest entry of the subtree right of key `idx`.
    fn successor(&self, idx: usize) -> &E {
        let mut node = &*self.children[idx + 1];
        while !node.leaf {
            node = &node.children[0];
        }
        &node.keys[0]
    }

    /// Rotates right: the left sibling's largest key moves up to separator
    /// `idx - 1`, and the old separator moves down to the front of child `idx`.
    fn borrow_from_prev(&mut self, idx: usize) {
        let (before, after) = self.children.split_at_mut(idx);
        let sibling = &mut before[idx - 1];
        let child = &mut after[0];

        let last = sibling.keys.len() - 1;
        let up = sibling.keys.remove(last);
        let down = mem::replace(&mut self.keys[idx - 1], up);
        child.keys.insert(0, down);

        if !child.leaf {
            let last = sibling.children.len() - 1;
            child.children.insert(0, sibling.children.remove(last));
        }
        child.debug_check_capacity();
    }

    /// Rotates left: the right sibling's smallest key moves up to separator
    /// `idx`, and the old separator moves down to the end of child `idx`.
    fn borrow_from_next(&mut self, idx: usize) {
        let (before, after) = self.children.split_at_mut(idx + 1);
        let child = &mut before[idx];
        let sibling = &mut after[0];

        let up = sibling.keys.remove(0);
        let down = mem::replace(&mut self.keys[idx], up);
        child.keys.push(down);

        if !child.leaf {
            child.children.push(sibling.children.remove(0));
        }
        child.debug_check_capacity();
    }

    /// Folds child `idx + 1` and separator `idx` into child `idx`.
    fn merge(&mut self, idx: usize) {
        let sibling = self.children.remove(idx + 1);
        let separator = self.keys.remove(idx);

        let child = &mut self.children[idx];
        let Node { keys, children, .. } = *sibling;
        child.keys.push(separator);
        child.keys.extend(keys);
        child.children.extend(children);

        child.debug_check_capacity();
        self.debug_check_capacity();
    }

    /// Brings child `idx`, currently at the minimum, up to at least `t` keys.
    /// Returns the index of the child that now covers the same key range,
    /// which moves left when the last child merges into its left sibling.
    fn fill(&mut self, idx: usize) -> usize {
        if idx > 0 && self.children[idx - 1].keys.len() > MIN_KEYS {
            self.borrow_from_prev(idx);
            idx
        } else if idx < self.keys.len() && self.children[idx + 1].keys.len() > MIN_KEYS {
            self.borrow_from_next(idx);
            idx
        } else if idx < self.keys.len() {
            self.merge(idx);
            idx
        } else {
            self.merge(idx - 1);
            idx - 1
        }
    }

    /// Removes `name` from this subtree. The caller guarantees this node has
    /// more than the minimum number of keys unless it is the root.
    pub(crate) fn remove(&mut self, name: &str) -> Option<E> {
        match self.position(name) {
            Ok(idx) if self.leaf => Some(self.keys.remove(idx)),
            Ok(idx) => self.remove_separator(idx, name),
            Err(_) if self.leaf => None,
            Err(idx) => {
                let idx = if self.children[idx].keys.len() == MIN_KEYS {
                    self.fill(idx)
                } else {
                    idx
                };
                self.children[idx].remove(name)
            }
        }
    }

    /// Removes internal key `idx`, replacing it with its predecessor or
    /// successor when a neighboring child can spare a key, merging otherwise.
    fn remove_separator(&mut self, idx: usize, name: &str) -> Option<E> {
        if self.children[idx].keys.len() >= MIN_DEGREE {
            let predecessor = self.predecessor(idx).key().to_owned();
            let replacement = self.children[idx].remove(&predecessor)?;
            Some(mem::replace(&mut self.keys[idx], replacement))
        } else if self.children[idx + 1].keys.len() >= MIN_DEGREE {
            let successor = self.successor(idx).key().to_owned();
            let replacement = self.children[idx + 1].remove(&successor)?;
            Some(mem::replace(&mut self.keys[idx], replacement))
        } else {
            self.merge(idx);
            self.children[idx].remove(name)
        }
    }
}
