//! Property-based tests for sequin using proptest.

use proptest::prelude::*;
use sequin::from;

// ============================================================================
// Test helpers
// ============================================================================

/// Tags every element with its source position, so stability checks can
/// recover the original order after a sort.
fn tag(items: Vec<i64>) -> Vec<(i64, usize)> {
    items.into_iter().enumerate().map(|(i, v)| (v, i)).collect()
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Filtering should never return more items than the input.
    #[test]
    fn filter_never_grows_collection(
        items in prop::collection::vec(any::<i64>(), 0..100),
        threshold in any::<i64>(),
    ) {
        let survivors = from(items.clone())
            .where_(move |n| *n > threshold)
            .to_vec();
        prop_assert!(survivors.len() <= items.len());
    }

    /// Chained where_ calls behave exactly like one combined predicate.
    #[test]
    fn chained_where_equals_combined_predicate(
        items in prop::collection::vec(any::<i64>(), 0..100),
        threshold in any::<i64>(),
    ) {
        let chained = from(items.clone())
            .where_(move |n| *n > threshold)
            .where_(|n| n % 2 == 0)
            .to_vec();

        let combined = from(items)
            .where_(move |n| *n > threshold && n % 2 == 0)
            .to_vec();

        prop_assert_eq!(chained, combined);
    }

    /// count should equal the length of the materialized result.
    #[test]
    fn count_equals_to_vec_len(
        items in prop::collection::vec(any::<i64>(), 0..100),
        threshold in any::<i64>(),
    ) {
        let stage = from(items).where_(move |n| *n >= threshold);
        prop_assert_eq!(stage.count(), stage.to_vec().len());
    }

    /// skip(a).take(b) yields the contiguous clamped slice [a, a+b).
    #[test]
    fn skip_take_is_a_contiguous_slice(
        items in prop::collection::vec(any::<i64>(), 0..100),
        a in 0usize..120,
        b in 0usize..120,
    ) {
        let result = from(items.clone()).skip(a).take(b).to_vec();

        let start = a.min(items.len());
        let end = (start + b).min(items.len());
        prop_assert_eq!(result, items[start..end].to_vec());
    }

    /// any() is true iff the materialized result is non-empty.
    #[test]
    fn any_consistent_with_to_vec(
        items in prop::collection::vec(any::<i64>(), 0..50),
        threshold in any::<i64>(),
    ) {
        let stage = from(items).where_(move |n| *n < threshold);
        prop_assert_eq!(stage.any(), !stage.to_vec().is_empty());
    }

    /// all(pred) is true iff filtering by pred removes nothing.
    #[test]
    fn all_consistent_with_filtering(
        items in prop::collection::vec(any::<i64>(), 0..50),
        threshold in any::<i64>(),
    ) {
        let stage = from(items);
        let survivors = stage.count_where(move |n| *n <= threshold);
        prop_assert_eq!(stage.all(move |n| *n <= threshold), survivors == stage.count());
    }

    /// Sorting is stable: elements with equal keys keep their source order.
    #[test]
    fn ordering_is_stable(
        items in prop::collection::vec(0i64..10, 0..50),
    ) {
        let sorted = from(tag(items)).order_asc(|pair| pair.0).to_vec();

        for window in sorted.windows(2) {
            let (prev, curr) = (window[0], window[1]);
            prop_assert!(prev.0 <= curr.0, "sort order violated");
            if prev.0 == curr.0 {
                prop_assert!(prev.1 < curr.1, "equal keys reordered");
            }
        }
    }

    /// A tie-break only reorders within equal primary keys.
    #[test]
    fn then_by_respects_primary_key(
        items in prop::collection::vec((0i64..5, 0i64..5), 0..50),
    ) {
        let sorted = from(items)
            .order_asc(|pair| pair.0)
            .then_desc(|pair| pair.1)
            .to_vec();

        for window in sorted.windows(2) {
            let (prev, curr) = (window[0], window[1]);
            prop_assert!(prev.0 <= curr.0);
            if prev.0 == curr.0 {
                prop_assert!(prev.1 >= curr.1);
            }
        }
    }

    /// select preserves order and count.
    #[test]
    fn select_preserves_count_and_order(
        items in prop::collection::vec(any::<i32>(), 0..100),
    ) {
        let projected = from(items.clone()).select(|n| i64::from(*n) * 2).to_vec();

        prop_assert_eq!(projected.len(), items.len());
        for (source, doubled) in items.iter().zip(&projected) {
            prop_assert_eq!(i64::from(*source) * 2, *doubled);
        }
    }

    /// select_many output length is the sum of sub-sequence lengths.
    #[test]
    fn select_many_length_is_sum(
        items in prop::collection::vec(0usize..5, 0..30),
    ) {
        let expected: usize = items.iter().sum();
        let flattened = from(items).select_many(|n| vec![0u8; *n]).to_vec();
        prop_assert_eq!(flattened.len(), expected);
    }

    /// to_map with unique keys preserves the element count.
    #[test]
    fn to_map_unique_keys_keeps_size(
        items in prop::collection::vec(any::<i64>(), 0..50),
    ) {
        let len = items.len();
        let map = from(tag(items)).to_map(|pair| pair.1);
        prop_assert_eq!(map.map(|m| m.len()), Ok(len));
    }

    /// sum agrees with the standard iterator sum.
    #[test]
    fn sum_matches_iterator_sum(
        items in prop::collection::vec(-1000i64..1000, 0..100),
    ) {
        let expected: i64 = items.iter().sum();
        prop_assert_eq!(from(items).sum(), expected);
    }

    /// first_or_default agrees with the head of the materialized result.
    #[test]
    fn first_or_default_is_the_head(
        items in prop::collection::vec(any::<i64>(), 0..50),
        threshold in any::<i64>(),
    ) {
        let stage = from(items).where_(move |n| *n != threshold);
        prop_assert_eq!(stage.first_or_default(), stage.to_vec().first().copied());
    }
}

// ============================================================================
// Additional edge case tests
// ============================================================================

#[test]
fn empty_source_is_empty_everywhere() {
    let stage = from(Vec::<i64>::new());

    assert!(stage.to_vec().is_empty());
    assert_eq!(stage.count(), 0);
    assert!(!stage.any());
    assert!(stage.all(|_| false)); // vacuously true
    assert_eq!(stage.first_or_default(), None);
}

#[test]
fn skip_equal_to_length_returns_empty() {
    assert!(from(vec![1i64, 2, 3, 4, 5]).skip(5).to_vec().is_empty());
}

#[test]
fn take_zero_returns_empty() {
    assert!(from(vec![1i64, 2, 3]).take(0).to_vec().is_empty());
}

#[test]
fn take_beyond_length_returns_all() {
    assert_eq!(from(vec![1i64, 2, 3]).take(100).to_vec(), vec![1, 2, 3]);
}
