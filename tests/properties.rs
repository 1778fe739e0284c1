use any_by_right::{any_by_right, try_any_by_right};
use proptest::prelude::*;

/// Runs `any_by_right` with `pred` and returns the result plus the indices
/// the predicate was invoked with, in call order
fn traced<F: Fn(i32) -> bool>(data: &[i32], pred: F) -> (bool, Vec<usize>) {
    let mut calls = Vec::new();
    let r = any_by_right(data, |&v, i, _| {
        calls.push(i);
        pred(v)
    });
    (r, calls)
}

proptest! {
    #[test]
    fn agrees_with_iterator_any(data in proptest::collection::vec(-50i32..50, 0..64), limit in -60i32..60) {
        let (r, _) = traced(&data, |v| v > limit);
        prop_assert_eq!(r, data.iter().any(|&v| v > limit));
    }

    #[test]
    fn no_match_visits_every_index_descending(data in proptest::collection::vec(any::<i32>(), 0..64)) {
        let (r, calls) = traced(&data, |_| false);
        prop_assert!(!r);
        let expected: Vec<usize> = (0..data.len()).rev().collect();
        prop_assert_eq!(calls, expected);
    }

    #[test]
    fn stops_at_rightmost_match(data in proptest::collection::vec(0i32..8, 1..64)) {
        let (r, calls) = traced(&data, |v| v == 0);
        match data.iter().rposition(|&v| v == 0) {
            Some(k) => {
                prop_assert!(r);
                let expected: Vec<usize> = (k..data.len()).rev().collect();
                prop_assert_eq!(calls, expected);
            }
            None => {
                prop_assert!(!r);
                prop_assert_eq!(calls.len(), data.len());
            }
        }
    }

    #[test]
    fn single_match_at_k(len in 1usize..64, seed in any::<usize>()) {
        let k = seed % len;
        let mut data = vec![0; len];
        data[k] = 1;
        let (r, calls) = traced(&data, |v| v == 1);
        prop_assert!(r);
        prop_assert_eq!(calls.last().copied(), Some(k));
        prop_assert_eq!(calls.len(), len - k);
    }

    #[test]
    fn try_variant_matches_infallible(data in proptest::collection::vec(any::<u8>(), 0..64), limit in any::<u8>()) {
        let r: Result<bool, ()> = try_any_by_right(&data, |&v, _, _| Ok(v > limit));
        prop_assert_eq!(r, Ok(any_by_right(&data, |&v, _, _| v > limit)));
    }
}

#[test]
fn empty_is_false() {
    let (r, calls) = traced(&[], |_| true);
    assert!(!r);
    assert!(calls.is_empty());
}
