//! Tests for the arena-backed search tree

use movlib::domain::SearchTree;

fn tree_of(values: &[&str]) -> SearchTree<String> {
    let mut tree = SearchTree::new();
    for value in values {
        tree.insert(value.to_string());
    }
    tree
}

fn titles(tree: &SearchTree<String>) -> Vec<String> {
    tree.iter().map(|(_, node)| node.element.clone()).collect()
}

// ============================================================
// Insertion Tests
// ============================================================

#[test]
fn given_empty_tree_when_inserting_then_value_becomes_root() {
    // Arrange
    let mut tree = SearchTree::new();

    // Act
    let inserted = tree.insert(42);

    // Assert
    assert!(inserted);
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.get(&42), Some(&42));
    assert!(tree.validate());
}

#[test]
fn given_existing_value_when_inserting_again_then_rejected_and_size_unchanged() {
    // Arrange
    let mut tree = tree_of(&["B", "A", "C"]);

    // Act
    let inserted = tree.insert("A".to_string());

    // Assert
    assert!(!inserted);
    assert_eq!(tree.len(), 3);
    assert!(tree.validate());
}

#[test]
fn given_inserted_value_when_searching_then_round_trips() {
    let mut tree = SearchTree::new();
    for value in [50, 30, 70, 20, 40] {
        assert!(tree.insert(value));
        assert_eq!(tree.get(&value), Some(&value));
    }
    assert!(!tree.contains(&99));
}

#[test]
fn given_shuffled_input_when_iterating_then_visits_in_ascending_order() {
    let tree = tree_of(&["Memento", "Melody", "Mellow Mud", "Melvin and Howard"]);

    let visited = titles(&tree);

    let mut expected = visited.clone();
    expected.sort();
    assert_eq!(visited, expected);
    assert_eq!(visited.len(), 4);
}

// ============================================================
// Height and Size Tests
// ============================================================

#[test]
fn given_empty_tree_when_measuring_then_height_is_zero_and_len_is_zero() {
    let tree: SearchTree<i32> = SearchTree::new();

    assert_eq!(tree.height(), 0);
    assert_eq!(tree.len(), 0);
    assert!(tree.is_empty());
}

#[test]
fn given_single_node_when_measuring_then_height_is_one() {
    let tree = tree_of(&["B"]);

    assert_eq!(tree.height(), 1);
    assert_eq!(tree.len(), 1);
}

#[test]
fn given_descending_chain_when_measuring_then_height_equals_len() {
    // Worst case: sorted input degrades to a linked list
    let tree = tree_of(&["C", "B", "A"]);

    assert_eq!(tree.height(), 3);
    assert_eq!(tree.len(), 3);
    assert!(tree.validate());
}

// ============================================================
// Removal Tests
// ============================================================

#[test]
fn given_empty_tree_when_removing_then_returns_none() {
    let mut tree: SearchTree<String> = SearchTree::new();

    assert_eq!(tree.remove("A"), None);
    assert!(tree.validate());
}

#[test]
fn given_absent_value_when_removing_then_tree_unchanged() {
    let mut tree = tree_of(&["B", "A", "C"]);

    assert_eq!(tree.remove("Z"), None);
    assert_eq!(tree.len(), 3);
    assert!(tree.validate());
}

#[test]
fn given_leaf_node_when_removing_then_parent_link_is_cleared() {
    let mut tree = tree_of(&["B", "A"]);

    let removed = tree.remove("A");

    assert_eq!(removed, Some("A".to_string()));
    assert!(!tree.contains("A"));
    assert_eq!(tree.len(), 1);
    assert!(tree.validate());
}

#[test]
fn given_root_leaf_when_removing_then_tree_becomes_empty() {
    let mut tree = tree_of(&["B"]);

    let removed = tree.remove("B");

    assert_eq!(removed, Some("B".to_string()));
    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
    assert!(tree.validate());
}

#[test]
fn given_node_with_single_child_when_removing_then_child_is_spliced_up() {
    // C is root, B its left child, A below B
    let mut tree = tree_of(&["C", "B", "A"]);

    let removed = tree.remove("B");

    assert_eq!(removed, Some("B".to_string()));
    assert_eq!(titles(&tree), vec!["A", "C"]);
    assert_eq!(tree.height(), 2);
    assert!(tree.validate());
}

#[test]
fn given_root_with_single_child_when_removing_then_child_becomes_root() {
    let mut tree = tree_of(&["B", "F"]);

    let removed = tree.remove("B");

    assert_eq!(removed, Some("B".to_string()));
    assert_eq!(titles(&tree), vec!["F"]);
    assert_eq!(tree.height(), 1);
    assert!(tree.validate());
}

#[test]
fn given_full_node_when_removing_then_in_order_predecessor_is_promoted() {
    // B has two children, so its predecessor A fills the gap
    let mut tree = tree_of(&["B", "A", "C", "F"]);

    let removed = tree.remove("B");

    assert_eq!(removed, Some("B".to_string()));
    assert!(!tree.contains("B"));
    assert!(tree.contains("A"));
    assert_eq!(tree.len(), 3);
    assert_eq!(tree.render(), "(A)((C)(F))");
    assert!(tree.validate());
}

#[test]
fn given_predecessor_with_left_child_when_removing_then_subtree_is_respliced() {
    // Removing 50 promotes 40 (the max of the left subtree); 40's own left
    // child 35 must be re-spliced under 30.
    let mut tree = SearchTree::new();
    for value in [50, 30, 70, 20, 40, 35] {
        tree.insert(value);
    }

    let removed = tree.remove(&50);

    assert_eq!(removed, Some(50));
    let visited: Vec<i32> = tree.iter().map(|(_, node)| node.element).collect();
    assert_eq!(visited, vec![20, 30, 35, 40, 70]);
    assert_eq!(tree.len(), 5);
    assert!(tree.validate());
}

// ============================================================
// Rendering Tests
// ============================================================

#[test]
fn given_seeded_tree_when_rendering_then_in_order_parenthesized_form() {
    let tree = tree_of(&["B", "A", "C", "F"]);

    assert_eq!(tree.render(), "(A)(B)((C)(F))");
}

#[test]
fn given_empty_tree_when_rendering_then_empty_string() {
    let tree: SearchTree<String> = SearchTree::new();

    assert_eq!(tree.render(), "");
}

#[test]
fn given_tree_when_rendering_structure_then_termtree_lists_root_first() {
    let tree = tree_of(&["B", "A", "C"]);

    let rendered = tree.to_tree_string().to_string();

    assert!(rendered.starts_with('B'));
    assert!(rendered.contains('A'));
    assert!(rendered.contains('C'));
}

// ============================================================
// Mutation Sequence Tests
// ============================================================

/// A long add/remove sequence exercising every removal case repeatedly,
/// with the structural invariants checked after each step.
#[test]
fn given_long_mutation_sequence_when_applied_then_invariants_hold_throughout() {
    movlib::util::testing::init_test_setup();
    let mut tree: SearchTree<String> = SearchTree::new();

    let add = |tree: &mut SearchTree<String>, value: &str, expect: bool| {
        assert_eq!(tree.insert(value.to_string()), expect, "add {}", value);
        assert!(tree.validate(), "validate after add {}", value);
    };
    let remove = |tree: &mut SearchTree<String>, value: &str, expect: bool| {
        assert_eq!(tree.remove(value).is_some(), expect, "remove {}", value);
        assert!(tree.validate(), "validate after remove {}", value);
    };

    add(&mut tree, "B", true);
    add(&mut tree, "A", true);
    remove(&mut tree, "A", true);
    add(&mut tree, "C", true);
    remove(&mut tree, "C", true);
    add(&mut tree, "F", true);
    remove(&mut tree, "B", true); // root with a single right child
    add(&mut tree, "C", true);
    add(&mut tree, "D", true);
    add(&mut tree, "C", false); // duplicate
    add(&mut tree, "E", true);
    remove(&mut tree, "B", false); // already gone
    remove(&mut tree, "D", true); // single child
    remove(&mut tree, "C", true);
    remove(&mut tree, "E", true);
    add(&mut tree, "L", true);
    add(&mut tree, "H", true);
    add(&mut tree, "I", true);
    add(&mut tree, "G", true);
    remove(&mut tree, "L", true); // single child
    remove(&mut tree, "H", true); // full node
    remove(&mut tree, "I", true);
    remove(&mut tree, "G", true);

    assert_eq!(tree.render(), "(F)");
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.height(), 1);
}
