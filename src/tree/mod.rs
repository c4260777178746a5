//! Ordered set based on a mutable Red-Black Tree.
//!
//! This module provides [`RedBlackTree`], an ordered collection of distinct
//! keys that stays balanced under arbitrary insertion and removal.
//!
//! # Overview
//!
//! - O(log N) `contains`, `get`, `insert`, `remove`
//! - O(log N) `first`/`last`
//! - O(1) `len` and `is_empty`
//! - O(N) `sort` after a mutation, O(1) for repeated calls in between
//!
//! # Examples
//!
//! ```rust
//! use redblack::RedBlackTree;
//!
//! let mut tree = RedBlackTree::new();
//! tree.insert(3);
//! tree.insert(1);
//! tree.insert(2);
//!
//! // Keys are always kept in ascending order
//! assert_eq!(tree.sort(), &[1, 2, 3]);
//!
//! // Duplicates are ignored
//! assert!(!tree.insert(2));
//! assert_eq!(tree.len(), 3);
//! ```
//!
//! # Internal Structure
//!
//! The tree maintains the following invariants after every operation:
//! 1. Keys in a left subtree are less than the node's key, keys in a right
//!    subtree are greater
//! 2. The root is black
//! 3. A red node never has a red parent
//! 4. Every path from a node down to an absent link passes through the same
//!    number of black nodes
//! 5. Every `parent` link agrees with the owning child link
//!
//! Nodes are stored in an index arena; see [`RedBlackTree::validate`] for a
//! runtime check of all of the above.

mod deletion;
mod insertion;
mod node;
mod rotation;
mod traversal;
mod validation;

pub use validation::InvariantViolation;

use node::{Arena, Color, NodeId, Side};
use std::borrow::Borrow;
use std::cell::OnceCell;
use std::cmp::Ordering;
use std::fmt;

// =============================================================================
// RedBlackTree Definition
// =============================================================================

/// An ordered set of distinct keys backed by a red-black tree.
///
/// Keys must implement `Ord`; the ordering is the only capability the tree
/// needs. Inserting a key that is already present leaves the tree untouched.
///
/// # Time Complexity
///
/// | Operation      | Complexity        |
/// |----------------|-------------------|
/// | `new`          | O(1)              |
/// | `contains`     | O(log N)          |
/// | `insert`       | O(log N)          |
/// | `remove`       | O(log N)          |
/// | `first`/`last` | O(log N)          |
/// | `sort`         | O(N), then O(1)   |
/// | `len`          | O(1)              |
///
/// # Threading
///
/// A tree is `Send` but not `Sync`: the memoized sorted view is filled in
/// lazily through shared references. Callers sharing a tree across threads
/// must serialize access externally, e.g. behind a `Mutex`.
///
/// # Examples
///
/// ```rust
/// use redblack::RedBlackTree;
///
/// let mut months: RedBlackTree<&str> = ["March", "January", "February"]
///     .into_iter()
///     .collect();
/// assert_eq!(months.first(), Some(&"February"));
///
/// months.remove("February");
/// assert_eq!(months.sort(), &["January", "March"]);
/// ```
#[derive(Clone)]
pub struct RedBlackTree<T> {
    /// Owner of every node
    nodes: Arena<T>,
    /// Root node, `None` for an empty tree
    root: Option<NodeId>,
    /// Number of keys
    length: usize,
    /// In-order snapshot; empty while stale
    sorted: OnceCell<Vec<T>>,
}

impl<T> RedBlackTree<T> {
    /// Creates a new empty tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = RedBlackTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            length: 0,
            sorted: OnceCell::new(),
        }
    }

    /// Returns the number of keys in the tree.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert_all([1, 2, 2, 3]);
    /// assert_eq!(tree.len(), 3);
    /// ```
    #[doc(alias = "size")]
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the tree holds no keys.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.length = 0;
        self.invalidate_sorted();
    }

    /// Returns the smallest key, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = [5, 2, 9].into_iter().collect();
    /// assert_eq!(tree.first(), Some(&2));
    /// ```
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.root
            .map(|root| &self.nodes[self.extreme(root, Side::Left)].key)
    }

    /// Returns the largest key, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = [5, 2, 9].into_iter().collect();
    /// assert_eq!(tree.last(), Some(&9));
    /// ```
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.root
            .map(|root| &self.nodes[self.extreme(root, Side::Right)].key)
    }

    // -------------------------------------------------------------------------
    // Link helpers shared by the rebalancing routines
    // -------------------------------------------------------------------------

    /// Color of a possibly absent link; absent links are black.
    fn color_of(&self, link: Option<NodeId>) -> Color {
        link.map_or(Color::Black, |id| self.nodes[id].color)
    }

    fn is_red(&self, link: Option<NodeId>) -> bool {
        self.color_of(link) == Color::Red
    }

    fn set_color(&mut self, id: NodeId, color: Color) {
        self.nodes[id].color = color;
    }

    fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    fn child(&self, id: NodeId, side: Side) -> Option<NodeId> {
        self.nodes[id].child(side)
    }

    /// Which side of `parent` the node `child` hangs from.
    fn side_of(&self, child: NodeId, parent: NodeId) -> Side {
        if self.nodes[parent].left == Some(child) {
            Side::Left
        } else {
            debug_assert_eq!(self.nodes[parent].right, Some(child));
            Side::Right
        }
    }

    /// Walks from `from` down one side as far as possible.
    fn extreme(&self, from: NodeId, side: Side) -> NodeId {
        let mut current = from;
        while let Some(next) = self.child(current, side) {
            current = next;
        }
        current
    }

    /// Marks the sorted snapshot stale.
    fn invalidate_sorted(&mut self) {
        self.sorted.take();
    }
}

impl<T: Ord> RedBlackTree<T> {
    /// Returns `true` if the tree contains the key.
    ///
    /// The key may be any borrowed form of the tree's key type, but the
    /// ordering on the borrowed form must match the ordering on the key type.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackTree;
    ///
    /// let tree: RedBlackTree<String> = ["b".to_string(), "a".to_string()]
    ///     .into_iter()
    ///     .collect();
    /// assert!(tree.contains("a"));
    /// assert!(!tree.contains("c"));
    /// ```
    #[doc(alias = "search")]
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(key).is_some()
    }

    /// Returns a reference to the stored key equal to `key`.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(key).map(|id| &self.nodes[id].key)
    }

    /// Binary-search descent from the root.
    fn find_node<Q>(&self, key: &Q) -> Option<NodeId>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cursor = self.root;
        while let Some(current) = cursor {
            cursor = match key.cmp(self.nodes[current].key.borrow()) {
                Ordering::Less => self.nodes[current].left,
                Ordering::Greater => self.nodes[current].right,
                Ordering::Equal => return Some(current),
            };
        }
        None
    }

    /// Inserts every key of `keys` in order, as repeated [`insert`] calls.
    ///
    /// Returns how many keys were actually added.
    ///
    /// [`insert`]: RedBlackTree::insert
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// assert_eq!(tree.insert_all([4, 8, 4, 15]), 3);
    /// ```
    pub fn insert_all<I>(&mut self, keys: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        keys.into_iter()
            .fold(0, |added, key| added + usize::from(self.insert(key)))
    }

    /// Removes the key from the tree. Returns `true` if it was present.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackTree;
    ///
    /// let mut tree: RedBlackTree<i32> = (1..=5).collect();
    /// assert!(tree.remove(&3));
    /// assert!(!tree.remove(&3));
    /// assert_eq!(tree.sort(), &[1, 2, 4, 5]);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.take(key).is_some()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for RedBlackTree<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for RedBlackTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.insert_all(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for RedBlackTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<T: PartialEq> PartialEq for RedBlackTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.keys_in_order() == other.keys_in_order()
    }
}

impl<T: Eq> Eq for RedBlackTree<T> {}

impl<T: fmt::Debug> fmt::Debug for RedBlackTree<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.keys_in_order()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for RedBlackTree<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for key in self.keys_in_order() {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}")?;
        }
        write!(formatter, "}}")
    }
}

static_assertions::assert_impl_all!(RedBlackTree<i32>: Send, Clone, Default);
static_assertions::assert_not_impl_any!(RedBlackTree<i32>: Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T> serde::Serialize for RedBlackTree<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut sequence = serializer.serialize_seq(Some(self.len()))?;
        for key in self.keys_in_order() {
            sequence.serialize_element(key)?;
        }
        sequence.end()
    }
}

#[cfg(feature = "serde")]
struct RedBlackTreeVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for RedBlackTreeVisitor<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    type Value = RedBlackTree<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut tree = RedBlackTree::new();
        while let Some(key) = access.next_element()? {
            tree.insert(key);
        }
        Ok(tree)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for RedBlackTree<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(RedBlackTreeVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
