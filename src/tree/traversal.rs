//! In-order traversal and the memoized sorted view.

use smallvec::SmallVec;
use tracing::trace;

use super::RedBlackTree;
use super::node::NodeId;

/// Inline capacity of the traversal stacks. The height of a valid tree stays
/// under `2 * log2(n + 1)`, so this covers any tree that fits in memory.
const STACK_INLINE: usize = 64;

impl<T> RedBlackTree<T> {
    /// Node ids in ascending key order, walked with an explicit stack.
    fn in_order_ids(&self) -> Vec<NodeId> {
        let mut ordered = Vec::with_capacity(self.length);
        let mut stack: SmallVec<[NodeId; STACK_INLINE]> = SmallVec::new();
        let mut cursor = self.root;

        while cursor.is_some() || !stack.is_empty() {
            while let Some(current) = cursor {
                stack.push(current);
                cursor = self.nodes[current].left;
            }
            if let Some(current) = stack.pop() {
                ordered.push(current);
                cursor = self.nodes[current].right;
            }
        }
        ordered
    }

    /// Borrowed keys in ascending order.
    pub(super) fn keys_in_order(&self) -> Vec<&T> {
        self.in_order_ids()
            .into_iter()
            .map(|id| &self.nodes[id].key)
            .collect()
    }

    /// Number of nodes on the longest path from the root down to an absent
    /// link; `0` for an empty tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackTree;
    ///
    /// let tree: RedBlackTree<u32> = (1..=7).collect();
    /// assert!(tree.height() <= 6);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut stack: SmallVec<[(NodeId, usize); STACK_INLINE]> = SmallVec::new();
        if let Some(root) = self.root {
            stack.push((root, 1));
        }
        while let Some((current, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            let node = &self.nodes[current];
            stack.extend(
                [node.left, node.right]
                    .into_iter()
                    .flatten()
                    .map(|child| (child, depth + 1)),
            );
        }
        deepest
    }

    /// Consumes the tree and returns its keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackTree;
    ///
    /// let tree: RedBlackTree<String> = ["pear", "apple"]
    ///     .into_iter()
    ///     .map(String::from)
    ///     .collect();
    /// assert_eq!(tree.into_sorted_vec(), vec!["apple", "pear"]);
    /// ```
    #[must_use]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        self.in_order_ids()
            .into_iter()
            .map(|id| self.nodes.release(id).key)
            .collect()
    }
}

impl<T: Clone> RedBlackTree<T> {
    /// Returns the keys in ascending order.
    ///
    /// The result is memoized: repeated calls without an intervening
    /// mutation return the same snapshot without walking the tree again.
    /// Any successful `insert` or `remove` marks the snapshot stale.
    ///
    /// # Complexity
    ///
    /// O(N) after a mutation, O(1) otherwise
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackTree;
    ///
    /// let mut tree: RedBlackTree<i32> = [123, 24, 63].into_iter().collect();
    /// assert_eq!(tree.sort(), &[24, 63, 123]);
    ///
    /// tree.insert(25);
    /// assert_eq!(tree.sort(), &[24, 25, 63, 123]);
    /// ```
    #[must_use]
    pub fn sort(&self) -> &[T] {
        self.sorted.get_or_init(|| {
            trace!(length = self.length, "rebuilding sorted snapshot");
            self.keys_in_order().into_iter().cloned().collect()
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
