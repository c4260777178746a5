//! Runtime verification of the red-black invariants.
//!
//! [`RedBlackTree::validate`] is meant for tests and debugging. A tree
//! mutated only through its public API always passes it.

use super::RedBlackTree;
use super::node::NodeId;

/// A broken red-black tree invariant, as reported by
/// [`RedBlackTree::validate`].
///
/// Depths count edges from the root, so the root is at depth `0`.
///
/// # Examples
///
/// ```rust
/// use redblack::InvariantViolation;
///
/// let error = InvariantViolation::BlackHeightMismatch { depth: 2, left: 1, right: 2 };
/// assert_eq!(
///     format!("{error}"),
///     "black-height mismatch at depth 2: left subtree 1, right subtree 2"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The root node is red.
    RedRoot,
    /// The in-order sequence is not strictly ascending at this position.
    OrderViolation {
        /// Zero-based in-order index of the first key not greater than its
        /// predecessor.
        position: usize,
    },
    /// A red node has a red child.
    RedRedViolation {
        /// Depth of the red child.
        depth: usize,
    },
    /// Two sibling subtrees carry different numbers of black nodes.
    BlackHeightMismatch {
        /// Depth of the node whose subtrees disagree.
        depth: usize,
        /// Black-height of the left subtree.
        left: usize,
        /// Black-height of the right subtree.
        right: usize,
    },
    /// A node's `parent` link does not point at the node owning it.
    BrokenParentLink {
        /// Depth of the node with the stale link.
        depth: usize,
    },
    /// The recorded length disagrees with the number of reachable nodes.
    LengthMismatch {
        /// Length the tree believes it has.
        recorded: usize,
        /// Nodes actually reachable from the root.
        counted: usize,
    },
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RedRoot => write!(formatter, "root node is red"),
            Self::OrderViolation { position } => {
                write!(formatter, "keys out of order at in-order position {position}")
            }
            Self::RedRedViolation { depth } => {
                write!(formatter, "red node with red parent at depth {depth}")
            }
            Self::BlackHeightMismatch { depth, left, right } => write!(
                formatter,
                "black-height mismatch at depth {depth}: left subtree {left}, right subtree {right}"
            ),
            Self::BrokenParentLink { depth } => {
                write!(formatter, "parent link disagrees with owner at depth {depth}")
            }
            Self::LengthMismatch { recorded, counted } => write!(
                formatter,
                "length mismatch: recorded {recorded}, reachable {counted}"
            ),
        }
    }
}

impl std::error::Error for InvariantViolation {}

impl<T: Ord> RedBlackTree<T> {
    /// Checks every structural invariant of the tree.
    ///
    /// On success returns the black-height: the number of black nodes on
    /// each path from the root to an absent link, root included (`0` for an
    /// empty tree).
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = (0..100).collect();
    /// let black_height = tree.validate().unwrap();
    /// assert!(black_height >= 1);
    /// ```
    pub fn validate(&self) -> Result<usize, InvariantViolation> {
        if let Some(root) = self.root {
            if self.nodes[root].is_red() {
                return Err(InvariantViolation::RedRoot);
            }
            if self.nodes[root].parent.is_some() {
                return Err(InvariantViolation::BrokenParentLink { depth: 0 });
            }
        }

        let black_height = self.check_subtree(self.root, 0)?;

        let keys = self.keys_in_order();
        if let Some(position) = keys.windows(2).position(|pair| pair[0] >= pair[1]) {
            return Err(InvariantViolation::OrderViolation {
                position: position + 1,
            });
        }
        if keys.len() != self.length || self.nodes.live() != self.length {
            return Err(InvariantViolation::LengthMismatch {
                recorded: self.length,
                counted: keys.len(),
            });
        }

        Ok(black_height)
    }
}

impl<T> RedBlackTree<T> {
    /// Verifies colors and parent links below `link`, returning its
    /// black-height.
    fn check_subtree(&self, link: Option<NodeId>, depth: usize) -> Result<usize, InvariantViolation> {
        let Some(id) = link else {
            return Ok(0);
        };
        let node = &self.nodes[id];

        for child in [node.left, node.right].into_iter().flatten() {
            if self.nodes[child].parent != Some(id) {
                return Err(InvariantViolation::BrokenParentLink { depth: depth + 1 });
            }
            if node.is_red() && self.nodes[child].is_red() {
                return Err(InvariantViolation::RedRedViolation { depth: depth + 1 });
            }
        }

        let left = self.check_subtree(node.left, depth + 1)?;
        let right = self.check_subtree(node.right, depth + 1)?;
        if left != right {
            return Err(InvariantViolation::BlackHeightMismatch { depth, left, right });
        }
        Ok(left + usize::from(!node.is_red()))
    }
}

// =============================================================================
// Tests
// =============================================================================
