//! Property tests for row-state classification and selection propagation.

use proptest::prelude::*;

use sharetree::domain::row_state::{classify, RowState, RowStates};
use sharetree::domain::selection::{click, select_subtree, ClickAction, Selection};
use sharetree::domain::tree::build_tree;

use crate::strategies::records;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: classification only reads the selection; per-node and
    /// whole-forest results agree and repeat.
    #[test]
    fn property_classification_is_idempotent(
        input in records(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..6),
    ) {
        let tree = build_tree(input);
        let nodes = tree.walk();
        let mut selection = Selection::new();
        if !nodes.is_empty() {
            for pick in &picks {
                let (idx, _) = nodes[pick.index(nodes.len())];
                select_subtree(&tree, idx, true, &mut selection);
            }
        }

        let first = RowStates::compute(&tree, selection.predicate());
        let second = RowStates::compute(&tree, selection.predicate());
        prop_assert_eq!(&first, &second);

        for &(idx, _) in &nodes {
            prop_assert_eq!(classify(&tree, idx, &selection.predicate()), first.get(idx));
        }
    }

    /// PROPERTY: selecting a subtree selects every record in it, clearing it
    /// removes every one, and the node's state follows.
    #[test]
    fn property_select_and_clear_post_conditions(
        input in records(),
        pick in any::<prop::sample::Index>(),
    ) {
        let tree = build_tree(input);
        let nodes = tree.walk();
        prop_assume!(!nodes.is_empty());
        let (idx, _) = nodes[pick.index(nodes.len())];
        let mut selection = Selection::new();

        select_subtree(&tree, idx, true, &mut selection);
        prop_assert!(tree.leaf_records(idx).all(|r| selection.contains(r)));
        let state = classify(&tree, idx, &selection.predicate());
        prop_assert!(
            matches!(
                state,
                Some(RowState::Selected | RowState::Downloaded | RowState::DownloadedOrSelected)
            ),
            "unexpected state after select: {:?}",
            state
        );

        select_subtree(&tree, idx, false, &mut selection);
        prop_assert!(tree.leaf_records(idx).all(|r| !selection.contains(r)));
        let state = classify(&tree, idx, &selection.predicate());
        prop_assert!(
            matches!(
                state,
                Some(RowState::None | RowState::Downloaded | RowState::DownloadedOrNone)
            ),
            "unexpected state after clear: {:?}",
            state
        );
    }

    /// PROPERTY: a click never adds and removes at once, and an ignored
    /// click leaves the selection untouched.
    #[test]
    fn property_click_is_one_directional(
        input in records(),
        pick in any::<prop::sample::Index>(),
        preselect in any::<bool>(),
    ) {
        let tree = build_tree(input);
        let nodes = tree.walk();
        prop_assume!(!nodes.is_empty());
        let (idx, _) = nodes[pick.index(nodes.len())];

        let mut selection = Selection::new();
        if preselect {
            if let Some(&(first_leaf, _)) = nodes.iter().find(|(n, _)| tree.is_leaf(*n)) {
                select_subtree(&tree, first_leaf, true, &mut selection);
            }
        }
        let before = selection.clone();

        match click(&tree, idx, &mut selection) {
            ClickAction::Select => {
                prop_assert!(before.iter().all(|r| selection.contains(r)));
                prop_assert!(tree.leaf_records(idx).all(|r| selection.contains(r)));
            }
            ClickAction::Clear => {
                prop_assert!(selection.iter().all(|r| before.contains(r)));
                prop_assert!(tree.leaf_records(idx).all(|r| !selection.contains(r)));
            }
            ClickAction::Ignore => prop_assert_eq!(&selection, &before),
        }
    }
}
