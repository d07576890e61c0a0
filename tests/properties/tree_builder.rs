//! Property tests for forest construction.

use proptest::prelude::*;

use sharetree::domain::tree::{build_tree, IndexTree, TreeBuilder};

use crate::strategies::records;

fn shape(tree: &IndexTree) -> Vec<(String, usize, bool)> {
    tree.walk()
        .into_iter()
        .map(|(idx, depth)| (tree.node(idx).part.clone(), depth, tree.is_leaf(idx)))
        .collect()
}

fn expected_display_path(tree: &IndexTree, root: &str, relative: &str) -> String {
    match tree.stripped_root() {
        Some(_) => relative.to_string(),
        None => format!("{}/{}", root, relative),
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every record becomes exactly one leaf, and the leaves give
    /// back the input `(root, path)` multiset.
    #[test]
    fn property_records_map_to_leaves(input in records()) {
        let tree = build_tree(input.clone());

        let mut leaves: Vec<(String, String)> = tree
            .walk()
            .into_iter()
            .filter_map(|(idx, _)| tree.record(idx))
            .map(|r| (r.root.clone(), r.path.clone()))
            .collect();
        let mut expected: Vec<(String, String)> = input
            .iter()
            .map(|r| (r.root.clone(), r.path.clone()))
            .collect();
        leaves.sort();
        expected.sort();

        prop_assert_eq!(leaves, expected);
    }

    /// PROPERTY: joining the parts from the top down to a leaf spells the
    /// record's root and relative path, with or without collapsing.
    #[test]
    fn property_display_path_reconstructs_record(input in records(), collapse in any::<bool>()) {
        let tree = TreeBuilder::new().collapse(collapse).build(input);

        for (idx, _) in tree.walk() {
            if let Some(record) = tree.record(idx) {
                let expected = expected_display_path(&tree, &record.root, record.relative_path());
                prop_assert_eq!(tree.display_path(idx), Some(expected));
            }
        }
    }

    /// PROPERTY: leaves never have children and no nested folder is left
    /// with a single folder child.
    #[test]
    fn property_collapse_reaches_fixpoint(input in records()) {
        let tree = build_tree(input);

        for (idx, depth) in tree.walk() {
            let children = tree.children(idx);
            if tree.is_leaf(idx) {
                prop_assert!(children.is_empty());
            } else if depth > 0 {
                let single_folder = matches!(children, [only] if !tree.is_leaf(*only));
                prop_assert!(!single_folder, "{:?} still has one folder child", tree.node(idx).part);
            }
        }
    }

    /// PROPERTY: building the same records twice gives the same forest.
    #[test]
    fn property_build_is_deterministic(input in records()) {
        let first = build_tree(input.clone());
        let second = build_tree(input);

        prop_assert_eq!(shape(&first), shape(&second));
        prop_assert_eq!(first.stripped_root(), second.stripped_root());
    }

    /// PROPERTY: every displayed path resolves back to its node.
    #[test]
    fn property_find_inverts_display_path(input in records()) {
        let tree = build_tree(input);

        for (idx, _) in tree.walk() {
            let path = tree.display_path(idx).unwrap();
            let found = tree.find(&path).unwrap();
            // Same displayed path; the first match may be an earlier twin.
            prop_assert_eq!(tree.display_path(found), Some(path));
        }
    }
}
