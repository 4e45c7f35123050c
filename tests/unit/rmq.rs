//! Range-minimum index over suffix arrays and random arrays.

use super::common::XorShift64;
use attrix::sais::suffix_array;
use attrix::RangeMinIndex;

fn brute_force_argmin(values: &[usize], l: usize, r: usize) -> usize {
    (l..=r).fold(l, |best, i| if values[i] < values[best] { i } else { best })
}

#[test]
fn every_range_of_a_suffix_array() {
    let sa = suffix_array(b"mississippi");
    let rmq = RangeMinIndex::build(&sa).unwrap();
    for l in 0..sa.len() {
        for r in l..sa.len() {
            assert_eq!(rmq.query_min_index(l, r).unwrap(), brute_force_argmin(&sa, l, r));
            assert_eq!(rmq.query_min(l, r).unwrap(), sa[brute_force_argmin(&sa, l, r)]);
        }
    }
}

#[test]
fn random_ranges_with_many_ties() {
    let mut rng = XorShift64::new(11);
    let values: Vec<usize> = (0..1000).map(|_| rng.below(8)).collect();
    let rmq = RangeMinIndex::build(&values).unwrap();
    assert_eq!(rmq.len(), values.len());
    for _ in 0..2000 {
        let (a, b) = (rng.below(values.len()), rng.below(values.len()));
        let (l, r) = (a.min(b), a.max(b));
        assert_eq!(
            rmq.query_min_index(l, r).unwrap(),
            brute_force_argmin(&values, l, r),
            "[{}, {}]",
            l,
            r
        );
    }
}

#[test]
fn out_of_bounds_is_an_error() {
    let values = vec![3usize, 1, 2];
    let rmq = RangeMinIndex::build(&values).unwrap();
    assert!(rmq.query_min_index(1, 5).is_err());
    assert!(rmq.query_min_index(2, 0).is_err());
}
