//! Property tests for size aggregation.

use proptest::prelude::*;

use sharetree::domain::size::{SizeEntry, SizeMap};
use sharetree::domain::tree::build_tree;

use crate::strategies::records;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a node's size is the sum of the records beneath it, exact
    /// only when every one of them has an actual size.
    #[test]
    fn property_folder_size_is_flat_sum(input in records()) {
        let tree = build_tree(input);
        let sizes = SizeMap::compute(&tree);

        for (idx, _) in tree.walk() {
            let flat = SizeEntry::sum(tree.leaf_records(idx).map(|r| SizeEntry::from(r.file_size)));
            prop_assert_eq!(sizes.get(idx), flat);

            let exact = tree.leaf_records(idx).all(|r| r.file_size.is_exact());
            prop_assert_eq!(sizes.get(idx).is_exact(), exact);
        }
    }

    /// PROPERTY: aggregating one subtree agrees with the whole-forest pass.
    #[test]
    fn property_subtree_sizes_agree(input in records()) {
        let tree = build_tree(input);
        let sizes = SizeMap::compute(&tree);

        for &root in tree.roots() {
            let sub = SizeMap::compute_subtree(&tree, root);
            prop_assert_eq!(sub.get(root), sizes.get(root));
        }
    }
}
