#![cfg(feature = "serde")]
//! Serde round-trip tests for RedBlackTree.

use redblack::RedBlackTree;
use rstest::rstest;

#[rstest]
fn test_serialize_as_ascending_sequence() {
    let tree: RedBlackTree<i32> = [3, 1, 2].into_iter().collect();
    let json = serde_json::to_string(&tree).unwrap();
    assert_eq!(json, "[1,2,3]");
}

#[rstest]
fn test_serialize_empty_tree() {
    let tree: RedBlackTree<i32> = RedBlackTree::new();
    assert_eq!(serde_json::to_string(&tree).unwrap(), "[]");
}

#[rstest]
fn test_deserialize_collapses_duplicates() {
    let tree: RedBlackTree<i32> = serde_json::from_str("[5, 1, 5, 3]").unwrap();
    assert_eq!(tree.len(), 3);
    assert_eq!(tree.sort(), &[1, 3, 5]);
    assert!(tree.validate().is_ok());
}

#[rstest]
fn test_roundtrip_strings() {
    let tree: RedBlackTree<String> = ["pear", "fig", "apple"]
        .into_iter()
        .map(String::from)
        .collect();
    let json = serde_json::to_string(&tree).unwrap();
    let restored: RedBlackTree<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, tree);
}

#[rstest]
fn test_deserialize_rejects_map() {
    let result: Result<RedBlackTree<i32>, _> = serde_json::from_str(r#"{"a": 1}"#);
    assert!(result.is_err());
}
