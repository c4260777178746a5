//! Rotation primitives and the link plumbing they share with splicing.
//!
//! A rotation never changes the in-order key sequence; it only moves one
//! child up into its parent's position.

use super::RedBlackTree;
use super::node::{NodeId, Side};

impl<T> RedBlackTree<T> {
    /// Hangs `child` (possibly absent) under `parent` on `side` and points the
    /// child's `parent` link back.
    pub(super) fn attach(&mut self, parent: NodeId, side: Side, child: Option<NodeId>) {
        self.nodes[parent].set_child(side, child);
        if let Some(child) = child {
            self.nodes[child].parent = Some(parent);
        }
    }

    /// Puts `replacement` into the slot `old` occupies: the root link, or the
    /// matching child link of `old`'s parent. `old`'s own links are left as
    /// they were.
    pub(super) fn replace_in_parent(&mut self, old: NodeId, replacement: Option<NodeId>) {
        match self.parent(old) {
            None => {
                self.root = replacement;
                if let Some(replacement) = replacement {
                    self.nodes[replacement].parent = None;
                }
            }
            Some(parent) => {
                let side = self.side_of(old, parent);
                self.attach(parent, side, replacement);
            }
        }
    }

    /// Rotates around `pivot` in `direction`.
    ///
    /// `Side::Left` is a left rotation: the pivot's right child rises into the
    /// pivot's position and the pivot becomes its left child. `Side::Right`
    /// mirrors it. Returns the node now rooting the rotated subtree.
    pub(super) fn rotate(&mut self, pivot: NodeId, direction: Side) -> NodeId {
        let rising_side = direction.opposite();
        let Some(riser) = self.child(pivot, rising_side) else {
            unreachable!("rotation at {pivot:?} without a {rising_side:?} child");
        };
        let inner = self.child(riser, direction);

        self.replace_in_parent(pivot, Some(riser));
        self.attach(pivot, rising_side, inner);
        self.attach(riser, direction, Some(pivot));
        riser
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn keys_of(tree: &RedBlackTree<i32>, id: Option<NodeId>) -> Option<i32> {
        id.map(|id| tree.nodes[id].key)
    }

    #[rstest]
    fn test_rotate_left_at_root() {
        // 2 -> right 4 -> children 3, 5
        let mut tree: RedBlackTree<i32> = [2, 1, 4, 3, 5].into_iter().collect();
        let root = tree.root.unwrap();
        assert_eq!(tree.nodes[root].key, 2);

        let new_root = tree.rotate(root, Side::Left);

        assert_eq!(tree.root, Some(new_root));
        assert_eq!(tree.nodes[new_root].key, 4);
        assert_eq!(tree.nodes[new_root].parent, None);
        assert_eq!(keys_of(&tree, tree.nodes[new_root].left), Some(2));
        assert_eq!(keys_of(&tree, tree.nodes[new_root].right), Some(5));
        assert_eq!(keys_of(&tree, tree.nodes[root].right), Some(3));
        assert_eq!(tree.nodes[root].parent, Some(new_root));

        let inner = tree.nodes[root].right.unwrap();
        assert_eq!(tree.nodes[inner].parent, Some(root));
        assert_eq!(tree.keys_in_order(), vec![&1, &2, &3, &4, &5]);
    }

    #[rstest]
    fn test_rotate_right_below_root() {
        let mut tree: RedBlackTree<i32> = [10, 5, 15, 3, 7].into_iter().collect();
        let root = tree.root.unwrap();
        let five = tree.nodes[root].left.unwrap();
        assert_eq!(tree.nodes[five].key, 5);

        let risen = tree.rotate(five, Side::Right);

        assert_eq!(tree.nodes[risen].key, 3);
        assert_eq!(tree.nodes[root].left, Some(risen));
        assert_eq!(tree.nodes[risen].parent, Some(root));
        assert_eq!(keys_of(&tree, tree.nodes[risen].right), Some(5));
        assert_eq!(keys_of(&tree, tree.nodes[five].left), None);
        assert_eq!(keys_of(&tree, tree.nodes[five].right), Some(7));
        assert_eq!(tree.keys_in_order(), vec![&3, &5, &7, &10, &15]);
    }

    #[rstest]
    #[case(Side::Left)]
    #[case(Side::Right)]
    fn test_rotation_round_trip_restores_shape(#[case] direction: Side) {
        let mut tree: RedBlackTree<i32> = (1..=15).collect();
        let before = tree.keys_in_order().into_iter().copied().collect::<Vec<_>>();
        let root = tree.root.unwrap();

        let riser = tree.rotate(root, direction);
        let back = tree.rotate(riser, direction.opposite());

        assert_eq!(back, root);
        assert_eq!(tree.root, Some(root));
        let after = tree.keys_in_order().into_iter().copied().collect::<Vec<_>>();
        assert_eq!(before, after);
        assert!(tree.validate().is_ok());
    }

    #[rstest]
    fn test_replace_in_parent_with_absent_clears_root() {
        let mut tree: RedBlackTree<i32> = [1].into_iter().collect();
        let root = tree.root.unwrap();
        tree.replace_in_parent(root, None);
        assert_eq!(tree.root, None);
    }
}
