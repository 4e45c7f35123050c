// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for build-then-query over arbitrary bytes.
//!
//! Any non-empty input must build, and every position must come back
//! unchanged through both point and range queries.

#![no_main]

use arbitrary::Arbitrary;
use attrix::{AttractorIndex, IndexConfig};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    tau: u8,
    text: Vec<u8>,
}

fuzz_target!(|input: Input| {
    if input.text.is_empty() || input.text.len() > 4096 {
        return;
    }
    let tau = 2 + usize::from(input.tau % 6);
    let index = AttractorIndex::build(&input.text, &IndexConfig::with_tau(tau))
        .expect("non-empty text with tau >= 2 always builds");

    for (i, &b) in input.text.iter().enumerate() {
        assert_eq!(index.query(i).unwrap(), b, "query({})", i);
    }
    assert_eq!(index.extract_all().unwrap(), input.text);
    assert!(index.query(input.text.len()).is_err());
});
