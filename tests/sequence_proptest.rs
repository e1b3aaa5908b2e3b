//! Property-based tests for the node sequence container
//!
//! These pin down the container's access laws for arbitrary element counts:
//! everything pushed is retrievable, in order, and every index at or past
//! the count fails the same way.

use mdview::markdown::ast::{NodeSeq, OutOfBounds};
use proptest::prelude::*;

proptest! {
    #[test]
    fn pushed_elements_come_back_in_order(items in proptest::collection::vec(any::<u32>(), 0..64)) {
        let mut seq = NodeSeq::new();
        for item in &items {
            seq.push(*item);
        }

        prop_assert_eq!(seq.len(), items.len());
        for (index, item) in items.iter().enumerate() {
            prop_assert_eq!(seq.get(index), Ok(item));
        }
    }

    #[test]
    fn indices_at_or_past_the_count_fail(
        items in proptest::collection::vec(any::<u32>(), 0..16),
        offset in 0usize..32,
    ) {
        let mut seq = NodeSeq::new();
        for item in &items {
            seq.push(*item);
        }

        let index = items.len() + offset;
        prop_assert_eq!(
            seq.get(index),
            Err(OutOfBounds { index, len: items.len() })
        );
    }

    #[test]
    fn iteration_matches_indexed_access(items in proptest::collection::vec(any::<i64>(), 0..64)) {
        let seq: NodeSeq<i64> = items.clone().into();
        let iterated: Vec<i64> = seq.iter().copied().collect();
        prop_assert_eq!(iterated, items);
    }
}

#[test]
fn a_fresh_sequence_rejects_index_zero() {
    let seq: NodeSeq<u8> = NodeSeq::new();
    assert_eq!(seq.get(0), Err(OutOfBounds { index: 0, len: 0 }));
}
