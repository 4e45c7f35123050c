//! Structural invariants of built indexes.

use super::common::{assert_levels_well_formed, assert_links_sound, build};
use attrix::lz77::{expand, factorize};
use attrix::sais::suffix_array;
use attrix::AttractorSet;
use proptest::prelude::*;

fn text_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(prop::sample::select(b"ab".to_vec()), 1..250),
        prop::collection::vec(prop::sample::select(b"abcd".to_vec()), 1..250),
        prop::collection::vec(any::<u8>(), 1..100),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_levels_are_monotone(text in text_strategy(), tau in 2usize..6) {
        assert_levels_well_formed(&build(&text, tau));
    }

    #[test]
    fn prop_links_are_sound(text in text_strategy(), tau in 2usize..5) {
        assert_links_sound(&build(&text, tau), &text);
    }

    #[test]
    fn prop_builds_are_deterministic(text in text_strategy()) {
        let a = build(&text, 2);
        let b = build(&text, 2);
        prop_assert_eq!(a.attractor_positions(), b.attractor_positions());
        prop_assert_eq!(a.stats(), b.stats());
        for i in 0..text.len() {
            prop_assert_eq!(a.query(i).unwrap(), b.query(i).unwrap());
            prop_assert_eq!(a.query(i).unwrap(), a.query(i).unwrap());
        }
    }

    #[test]
    fn prop_suffix_array_is_sorted(text in text_strategy()) {
        let sa = suffix_array(&text);
        let mut sorted: Vec<usize> = (0..text.len()).collect();
        sorted.sort_by(|&a, &b| text[a..].cmp(&text[b..]));
        prop_assert_eq!(sa, sorted);
    }

    #[test]
    fn prop_parse_reproduces_text(text in text_strategy()) {
        let phrases = factorize(&text, &suffix_array(&text)).unwrap();
        prop_assert_eq!(expand(&phrases), text.clone());

        let attractors = AttractorSet::from_phrases(&phrases).unwrap();
        prop_assert_eq!(attractors.covered_len(), text.len());
        prop_assert_eq!(*attractors.positions().last().unwrap(), text.len() - 1);
    }
}
