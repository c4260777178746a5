//! Node model and the arena that owns every node of a tree.
//!
//! Links between nodes are [`NodeId`] indices into the arena. The arena is
//! the only owner; `parent` links are navigation aids and carry no ownership.

use std::mem;
use std::ops::{Index, IndexMut};

// =============================================================================
// Color and Side
// =============================================================================

/// The color of a red-black tree node. Absent links count as black.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Color {
    Red,
    Black,
}

/// Which child slot of a parent a node occupies.
///
/// Mirrored cases of the fixup routines are written once against a `Side`
/// and its [`Side::opposite`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

// =============================================================================
// Node Definition
// =============================================================================

/// Index of a node slot inside an [`Arena`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub(crate) struct NodeId(usize);

#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) key: T,
    pub(crate) color: Color,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<T> Node<T> {
    /// Creates a new red leaf hanging under `parent`.
    pub(crate) const fn new_red(key: T, parent: Option<NodeId>) -> Self {
        Self {
            key,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        }
    }

    pub(crate) const fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Overwrites one child link. The child's `parent` link is the caller's
    /// responsibility.
    pub(crate) const fn set_child(&mut self, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    pub(crate) fn is_red(&self) -> bool {
        self.color == Color::Red
    }
}

// =============================================================================
// Arena
// =============================================================================

/// Slot storage for nodes. Released slots are recycled by later allocations.
#[derive(Clone, Debug)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<Node<T>>>,
    vacant: Vec<NodeId>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            vacant: Vec::new(),
        }
    }

    pub(crate) fn allocate(&mut self, node: Node<T>) -> NodeId {
        if let Some(id) = self.vacant.pop() {
            self.slots[id.0] = Some(node);
            id
        } else {
            self.slots.push(Some(node));
            NodeId(self.slots.len() - 1)
        }
    }

    /// Frees a slot and hands back the node it held.
    pub(crate) fn release(&mut self, id: NodeId) -> Node<T> {
        let Some(node) = self.slots.get_mut(id.0).and_then(Option::take) else {
            unreachable!("release of vacant node slot {id:?}");
        };
        self.vacant.push(id);
        node
    }

    /// Exchanges the keys stored in two live slots, leaving links and colors
    /// in place.
    pub(crate) fn swap_keys(&mut self, first: NodeId, second: NodeId) {
        if first == second {
            return;
        }
        if let Ok([Some(a), Some(b)]) = self.slots.get_disjoint_mut([first.0, second.0]) {
            mem::swap(&mut a.key, &mut b.key);
        } else {
            unreachable!("key swap between {first:?} and {second:?} touched a vacant slot");
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.vacant.clear();
    }

    /// Number of live nodes.
    pub(crate) fn live(&self) -> usize {
        self.slots.len() - self.vacant.len()
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Self::Output {
        match self.slots.get(id.0) {
            Some(Some(node)) => node,
            _ => unreachable!("dangling link to node slot {id:?}"),
        }
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        match self.slots.get_mut(id.0) {
            Some(Some(node)) => node,
            _ => unreachable!("dangling link to node slot {id:?}"),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Side::Left, Side::Right)]
    #[case(Side::Right, Side::Left)]
    fn test_side_opposite(#[case] side: Side, #[case] expected: Side) {
        assert_eq!(side.opposite(), expected);
        assert_eq!(side.opposite().opposite(), side);
    }

    #[rstest]
    fn test_new_red_node_has_no_children() {
        let node = Node::new_red(7, None);
        assert!(node.is_red());
        assert_eq!(node.child(Side::Left), None);
        assert_eq!(node.child(Side::Right), None);
    }

    #[rstest]
    fn test_set_child_writes_requested_side() {
        let mut arena = Arena::new();
        let parent = arena.allocate(Node::new_red(5, None));
        let child = arena.allocate(Node::new_red(3, Some(parent)));

        arena[parent].set_child(Side::Left, Some(child));

        assert_eq!(arena[parent].left, Some(child));
        assert_eq!(arena[parent].right, None);
    }

    #[rstest]
    fn test_release_recycles_slot() {
        let mut arena = Arena::new();
        let first = arena.allocate(Node::new_red('a', None));
        let _second = arena.allocate(Node::new_red('b', None));

        let released = arena.release(first);
        assert_eq!(released.key, 'a');
        assert_eq!(arena.live(), 1);

        let reused = arena.allocate(Node::new_red('c', None));
        assert_eq!(reused, first);
        assert_eq!(arena[reused].key, 'c');
        assert_eq!(arena.live(), 2);
    }

    #[rstest]
    fn test_swap_keys_keeps_links() {
        let mut arena = Arena::new();
        let parent = arena.allocate(Node::new_red(10, None));
        let child = arena.allocate(Node::new_red(4, Some(parent)));
        arena[parent].left = Some(child);

        arena.swap_keys(parent, child);

        assert_eq!(arena[parent].key, 4);
        assert_eq!(arena[child].key, 10);
        assert_eq!(arena[parent].left, Some(child));
        assert_eq!(arena[child].parent, Some(parent));
    }

    #[rstest]
    fn test_swap_keys_with_itself_is_noop() {
        let mut arena = Arena::new();
        let node = arena.allocate(Node::new_red(1, None));
        arena.swap_keys(node, node);
        assert_eq!(arena[node].key, 1);
    }

    #[rstest]
    #[should_panic(expected = "dangling link")]
    fn test_index_on_released_slot_panics() {
        let mut arena = Arena::new();
        let node = arena.allocate(Node::new_red(1, None));
        arena.release(node);
        let _ = &arena[node];
    }
}
