//! Shared generators for index records.

use proptest::prelude::*;

use sharetree::models::{FileSize, IndexRecord};

pub fn file_size() -> impl Strategy<Value = FileSize> {
    prop_oneof![
        (0u64..10_000).prop_map(FileSize::Actual),
        (0u64..10_000).prop_map(FileSize::Estimated),
        Just(FileSize::Unknown),
    ]
}

/// Small alphabets so that folders are shared and name clashes between
/// files and folders actually happen.
pub fn record() -> impl Strategy<Value = IndexRecord> {
    (
        prop::sample::select(vec!["music", "books"]),
        prop::collection::vec("[a-c]{1,2}", 1..=4),
        any::<bool>(),
        file_size(),
        any::<bool>(),
    )
        .prop_map(|(root, segments, leading_slash, size, downloaded)| {
            let mut path = segments.join("/");
            if leading_slash {
                path.insert(0, '/');
            }
            let record = IndexRecord::new(root, path, size);
            if downloaded {
                record.downloaded()
            } else {
                record
            }
        })
}

pub fn records() -> impl Strategy<Value = Vec<IndexRecord>> {
    prop::collection::vec(record(), 0..24)
}
