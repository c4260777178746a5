//! # redblack
//!
//! An ordered, self-balancing binary search tree (red-black tree) over
//! totally ordered keys.
//!
//! ## Overview
//!
//! [`RedBlackTree`] stores each distinct key once and keeps its height within
//! `2 * log2(n + 1)` by rebalancing after every insertion and removal:
//!
//! - **Search**: plain binary-search descent
//! - **Insertion**: leaf insert followed by an upward recolor/rotate fixup
//! - **Removal**: predecessor substitution, single-child splice and a
//!   sibling-driven fixup that may cascade towards the root
//! - **Sorted view**: an in-order snapshot that is built lazily and reused
//!   until the next mutation
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` as an ascending sequence
//!
//! ## Example
//!
//! ```rust
//! use redblack::RedBlackTree;
//!
//! let mut tree = RedBlackTree::new();
//! tree.insert_all([123, 24, 63, 25, 98]);
//!
//! assert!(tree.contains(&63));
//! assert_eq!(tree.sort(), &[24, 25, 63, 98, 123]);
//!
//! tree.remove(&63);
//! assert_eq!(tree.len(), 4);
//! assert!(tree.validate().is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use redblack::prelude::*;
///
/// let tree: RedBlackTree<u8> = [3, 1, 2].into_iter().collect();
/// assert_eq!(tree.validate(), Ok(1));
/// ```
pub mod prelude {
    pub use crate::tree::*;
}

pub mod tree;

pub use tree::InvariantViolation;
pub use tree::RedBlackTree;
