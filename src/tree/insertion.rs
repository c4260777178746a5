//! Insertion: leaf insert followed by the red-red fixup.

use std::cmp::Ordering;

use tracing::{debug, trace};

use super::RedBlackTree;
use super::node::{Color, Node, NodeId, Side};

impl<T: Ord> RedBlackTree<T> {
    /// Inserts a key.
    ///
    /// Returns `true` if the key was added, `false` if an equal key was
    /// already present (the stored key is kept and nothing changes).
    ///
    /// # Complexity
    ///
    /// O(log N), at most two rotations
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// assert!(tree.insert(42));
    /// assert!(!tree.insert(42));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        let mut parent = None;
        let mut side = Side::Left;
        let mut cursor = self.root;
        while let Some(current) = cursor {
            side = match key.cmp(&self.nodes[current].key) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => {
                    debug!("duplicate key ignored");
                    return false;
                }
            };
            parent = Some(current);
            cursor = self.child(current, side);
        }

        let node = self.nodes.allocate(Node::new_red(key, parent));
        match parent {
            None => self.root = Some(node),
            Some(parent) => self.nodes[parent].set_child(side, Some(node)),
        }

        self.rebalance_after_insert(node);
        self.length += 1;
        self.invalidate_sorted();
        true
    }
}

impl<T> RedBlackTree<T> {
    /// Restores the color invariants after `node` was linked in red.
    ///
    /// Only the red-uncle case moves the violation upwards; every other case
    /// ends the loop.
    fn rebalance_after_insert(&mut self, mut node: NodeId) {
        loop {
            let Some(mut parent) = self.parent(node) else {
                trace!(case = "root", "recolored root black");
                self.set_color(node, Color::Black);
                return;
            };
            if !self.is_red(Some(parent)) {
                return;
            }

            // A red parent is never the root, so the grandparent exists.
            let Some(grandparent) = self.parent(parent) else {
                unreachable!("red node {parent:?} sits at the root");
            };
            let parent_side = self.side_of(parent, grandparent);
            let uncle = self.child(grandparent, parent_side.opposite());

            if let Some(uncle) = uncle.filter(|&uncle| self.is_red(Some(uncle))) {
                trace!(case = "red_uncle", "recolored parent, uncle and grandparent");
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                node = grandparent;
                continue;
            }

            if self.side_of(node, parent) != parent_side {
                trace!(case = "zig_zag", "rotated at parent");
                self.rotate(parent, parent_side);
                parent = node;
            }

            trace!(case = "zig_zig", "rotated at grandparent");
            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            self.rotate(grandparent, parent_side.opposite());
            return;
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
