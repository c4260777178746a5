//! Removal: predecessor substitution, single-child splice and the
//! sibling-driven fixup.

use std::borrow::Borrow;

use tracing::{debug, trace};

use super::RedBlackTree;
use super::node::{Color, NodeId, Side};

impl<T: Ord> RedBlackTree<T> {
    /// Removes the key and returns the stored value, if it was present.
    ///
    /// # Complexity
    ///
    /// O(log N), at most three rotations
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackTree;
    ///
    /// let mut tree: RedBlackTree<String> = ["left", "right"]
    ///     .into_iter()
    ///     .map(String::from)
    ///     .collect();
    /// assert_eq!(tree.take("left"), Some("left".to_string()));
    /// assert_eq!(tree.take("left"), None);
    /// ```
    pub fn take<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some(matched) = self.find_node(key) else {
            debug!("remove of absent key ignored");
            return None;
        };

        // With a left subtree, the in-order predecessor hands its key to the
        // matched node and is spliced out in its place. It has no right child.
        let spliced = match self.nodes[matched].left {
            Some(left) => {
                let predecessor = self.extreme(left, Side::Right);
                self.nodes.swap_keys(matched, predecessor);
                predecessor
            }
            None => matched,
        };

        let removed = self.splice_out(spliced);
        self.length -= 1;
        self.invalidate_sorted();
        Some(removed)
    }
}

impl<T> RedBlackTree<T> {
    /// Unlinks a node with at most one child, promotes that child into its
    /// slot, repairs the colors and returns the node's key.
    fn splice_out(&mut self, node: NodeId) -> T {
        let (left, right) = (self.nodes[node].left, self.nodes[node].right);
        debug_assert!(
            left.is_none() || right.is_none(),
            "spliced node {node:?} has two children"
        );
        let child = left.or(right);
        let parent = self.parent(node);
        let vacated = parent.map(|parent| self.side_of(node, parent));

        self.replace_in_parent(node, child);
        let removed = self.nodes.release(node);

        if removed.color == Color::Black {
            match (child, parent, vacated) {
                (Some(child), _, _) if self.is_red(Some(child)) => {
                    trace!(case = "red_child", "recolored promoted child black");
                    self.set_color(child, Color::Black);
                }
                (_, Some(parent), Some(side)) => self.rebalance_after_remove(parent, side),
                _ => {}
            }
        }
        removed.key
    }

    /// Repairs a black-height deficit on the `vacated` side of `parent`.
    ///
    /// When the sibling and both of its children are black the deficit moves
    /// up one level; it stops at the root or at the first red ancestor.
    fn rebalance_after_remove(&mut self, mut parent: NodeId, mut vacated: Side) {
        loop {
            let far = vacated.opposite();
            let mut sibling = self.sibling(parent, far);

            if self.is_red(Some(sibling)) {
                trace!(case = "red_sibling", "rotated red sibling above parent");
                self.set_color(parent, Color::Red);
                self.set_color(sibling, Color::Black);
                self.rotate(parent, vacated);
                sibling = self.sibling(parent, far);
            }

            let near_nephew = self.child(sibling, vacated);
            let far_nephew = self.child(sibling, far);

            if !self.is_red(near_nephew) && !self.is_red(far_nephew) {
                self.set_color(sibling, Color::Red);
                if self.is_red(Some(parent)) {
                    trace!(case = "black_sibling", "absorbed deficit in red parent");
                    self.set_color(parent, Color::Black);
                    return;
                }
                let Some(grandparent) = self.parent(parent) else {
                    trace!(case = "black_sibling", "deficit reached the root");
                    return;
                };
                trace!(case = "black_sibling", "propagated deficit upwards");
                vacated = self.side_of(parent, grandparent);
                parent = grandparent;
                continue;
            }

            if !self.is_red(far_nephew) {
                if let Some(near_nephew) = near_nephew {
                    trace!(case = "near_nephew", "rotated red nephew above sibling");
                    self.set_color(near_nephew, Color::Black);
                    self.set_color(sibling, Color::Red);
                    self.rotate(sibling, far);
                    sibling = self.sibling(parent, far);
                }
            }

            trace!(case = "far_nephew", "rotated sibling above parent");
            let parent_color = self.nodes[parent].color;
            self.set_color(sibling, parent_color);
            self.set_color(parent, Color::Black);
            if let Some(far_nephew) = self.child(sibling, far) {
                self.set_color(far_nephew, Color::Black);
            }
            self.rotate(parent, vacated);
            return;
        }
    }

    /// The child of `parent` opposite the deficient side. A deficit on one
    /// side implies at least one black node on the other, so it is present.
    fn sibling(&self, parent: NodeId, far: Side) -> NodeId {
        let Some(sibling) = self.child(parent, far) else {
            unreachable!("black-height deficit under {parent:?} without a sibling");
        };
        sibling
    }
}

// =============================================================================
// Tests
// =============================================================================
