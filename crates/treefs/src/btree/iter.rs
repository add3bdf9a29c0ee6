// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::iter::FusedIterator;

use super::node::Node;

/// In-order iterator over a [`super::BTree`].
///
/// Holds the path from the root to the next entry; each frame records the
/// node and the index of its next unvisited key.
pub struct Iter<'a, E> {
    stack: Vec<(&'a Node<E>, usize)>,
}

impl<'a, E> Iter<'a, E> {
    pub(crate) fn new(root: &'a Node<E>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.descend(root);
        iter
    }

    /// Pushes `node` and its leftmost descendants.
    fn descend(&mut self, mut node: &'a Node<E>) {
        loop {
            self.stack.push((node, 0));
            if node.leaf {
                break;
            }
            node = &node.children[0];
        }
    }
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, next) = self.stack.last_mut()?;
            let node: &'a Node<E> = *node;
            if *next < node.keys.len() {
                let idx = *next;
                *next += 1;
                if !node.leaf {
                    self.descend(&node.children[idx + 1]);
                }
                return Some(&node.keys[idx]);
            }
            self.stack.pop();
        }
    }
}

impl<E> FusedIterator for Iter<'_, E> {}
