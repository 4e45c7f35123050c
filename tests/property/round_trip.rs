//! Reconstruction properties.

use super::common::assert_round_trip;
use attrix::{AttractorIndex, IndexConfig};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Texts over a small alphabet, so repeats are common.
fn small_alphabet_text() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(b"ACGT".to_vec()), 1..300)
}

/// Texts built by repeating a short seed with edits, so ɤ stays small.
fn repetitive_text() -> impl Strategy<Value = Vec<u8>> {
    (
        prop::collection::vec(any::<u8>(), 1..12),
        1usize..40,
        prop::collection::vec((any::<prop::sample::Index>(), any::<u8>()), 0..4),
    )
        .prop_map(|(seed, copies, edits)| {
            let mut text = seed.repeat(copies);
            for (at, byte) in edits {
                let i = at.index(text.len());
                text[i] = byte;
            }
            text
        })
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// query(i) == T[i] for every i.
    #[test]
    fn prop_point_queries_round_trip(text in small_alphabet_text(), tau in 2usize..6) {
        let index = AttractorIndex::new(tau, &text, text.len()).unwrap();
        assert_round_trip(&index, &text);
    }

    /// query_range(s, l) == T[s..s+l] for every valid window.
    #[test]
    fn prop_ranges_round_trip(
        text in repetitive_text(),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        let index = AttractorIndex::build(&text, &IndexConfig::default()).unwrap();
        let (x, y) = (a.index(text.len() + 1), b.index(text.len() + 1));
        let (start, end) = (x.min(y), x.max(y));
        prop_assert_eq!(index.query_range(start, end - start).unwrap(), &text[start..end]);

        let mut buf = vec![0u8; end - start];
        index.query_into(start, &mut buf).unwrap();
        prop_assert_eq!(&buf[..], &text[start..end]);
    }

    /// Only the first `length` bytes are indexed.
    #[test]
    fn prop_prefix_round_trips(text in small_alphabet_text(), cut in any::<prop::sample::Index>()) {
        let length = cut.index(text.len()) + 1;
        let index = AttractorIndex::new(2, &text, length).unwrap();
        prop_assert_eq!(index.extract_all().unwrap(), &text[..length]);
        prop_assert!(index.query(length).is_err());
    }

    /// Parallel linking builds the same tables as the sequential path.
    #[test]
    fn prop_parallel_build_is_identical(text in repetitive_text()) {
        let sequential = AttractorIndex::build(&text, &IndexConfig::default()).unwrap();
        let config = IndexConfig { parallel: true, ..IndexConfig::default() };
        let parallel = AttractorIndex::build(&text, &config).unwrap();
        prop_assert_eq!(sequential.block_lens(), parallel.block_lens());
        prop_assert_eq!(sequential.stats().link_count, parallel.stats().link_count);
        prop_assert_eq!(parallel.extract_all().unwrap(), text);
    }
}
