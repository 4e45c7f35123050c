// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the range-minimum index.
//!
//! Answers must equal the leftmost brute-force arg-min, and malformed ranges
//! must return Err instead of panicking.

#![no_main]

use arbitrary::Arbitrary;
use attrix::RangeMinIndex;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    values: Vec<u16>,
    ranges: Vec<(u16, u16)>,
}

fuzz_target!(|input: Input| {
    let rmq = RangeMinIndex::build(&input.values).expect("small tables allocate");
    for &(l, r) in input.ranges.iter().take(64) {
        let (l, r) = (usize::from(l), usize::from(r));
        match rmq.query_min_index(l, r) {
            Ok(p) => {
                assert!(l <= r && r < input.values.len());
                let best = (l..=r)
                    .fold(l, |b, i| if input.values[i] < input.values[b] { i } else { b });
                assert_eq!(p, best);
            }
            Err(_) => assert!(l > r || r >= input.values.len()),
        }
    }
});
