// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for construction from caller-supplied parses.
//!
//! Arbitrary phrase lists must be rejected with an error, never a panic.
//! Lists that happen to be valid parses must index the text faithfully.

#![no_main]

use arbitrary::Arbitrary;
use attrix::sais::suffix_array;
use attrix::{AttractorIndex, IndexConfig, NoopObserver, Phrase};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    text: Vec<u8>,
    /// (is_copy, source, len) triples
    phrases: Vec<(bool, u16, u8)>,
}

fuzz_target!(|input: Input| {
    if input.text.is_empty() || input.text.len() > 2048 {
        return;
    }
    let sa = suffix_array(&input.text);
    let phrases: Vec<Phrase> = input
        .phrases
        .iter()
        .map(|&(is_copy, source, len)| {
            if is_copy {
                Phrase::Copy {
                    source: usize::from(source),
                    len: usize::from(len),
                }
            } else {
                Phrase::Literal(len)
            }
        })
        .collect();

    if let Ok(index) = AttractorIndex::from_parts(
        &input.text,
        &sa,
        &phrases,
        &IndexConfig::default(),
        &NoopObserver,
    ) {
        assert_eq!(index.extract_all().unwrap(), input.text);
    }
});
