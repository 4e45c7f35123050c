//! Construction from externally computed suffix arrays and parses.

use std::cell::RefCell;

use super::common::{assert_links_sound, assert_round_trip, repetitive_text};
use attrix::lz77::factorize;
use attrix::sais::suffix_array;
use attrix::{AttractorIndex, BuildEvent, IndexConfig, IndexError, NoopObserver, Phrase};

/// Split every copy into two shorter copies of the same source run.
fn split_copies(phrases: &[Phrase]) -> Vec<Phrase> {
    let mut out = Vec::new();
    for &phrase in phrases {
        match phrase {
            Phrase::Copy { source, len } if len >= 2 => {
                let half = len / 2;
                out.push(Phrase::Copy { source, len: half });
                out.push(Phrase::Copy {
                    source: source + half,
                    len: len - half,
                });
            }
            other => out.push(other),
        }
    }
    out
}

#[test]
fn all_literal_parse_is_a_trivial_attractor() {
    let text = b"banana bandana";
    let sa = suffix_array(text);
    let phrases: Vec<Phrase> = text.iter().map(|&b| Phrase::Literal(b)).collect();
    let index =
        AttractorIndex::from_parts(text, &sa, &phrases, &IndexConfig::default(), &NoopObserver)
            .unwrap();
    assert_eq!(index.gamma(), text.len());
    assert_eq!(index.depth(), 1);
    assert_round_trip(&index, text);
}

#[test]
fn non_greedy_parse_still_indexes() {
    let text = repetitive_text(12, 1500, 19);
    let sa = suffix_array(&text);
    let greedy = factorize(&text, &sa).unwrap();
    let finer = split_copies(&greedy);
    assert!(finer.len() > greedy.len());

    let index =
        AttractorIndex::from_parts(&text, &sa, &finer, &IndexConfig::with_tau(3), &NoopObserver)
            .unwrap();
    assert_eq!(index.gamma(), finer.len());
    assert_round_trip(&index, &text);
    assert_links_sound(&index, &text);
}

#[test]
fn from_parts_skips_the_suffix_array_event() {
    let text = b"abcabcabcabc";
    let sa = suffix_array(text);
    let phrases = factorize(text, &sa).unwrap();
    let events = RefCell::new(Vec::new());
    let observer = |e: &BuildEvent| events.borrow_mut().push(e.clone());

    AttractorIndex::from_parts(text, &sa, &phrases, &IndexConfig::default(), &observer).unwrap();

    let events = events.into_inner();
    assert_eq!(
        events.first(),
        Some(&BuildEvent::Factorized {
            phrases: phrases.len()
        })
    );
    assert!(!events
        .iter()
        .any(|e| matches!(e, BuildEvent::SuffixArrayBuilt { .. })));
}

#[test]
fn inconsistent_parts_are_rejected() {
    let text = b"abcabc";
    let sa = suffix_array(text);
    let phrases = factorize(text, &sa).unwrap();
    let config = IndexConfig::default();

    let short_sa = &sa[1..];
    assert!(matches!(
        AttractorIndex::from_parts(text, short_sa, &phrases, &config, &NoopObserver),
        Err(IndexError::LengthMismatch { expected: 6, actual: 5, .. })
    ));

    let mut long_parse = phrases.clone();
    long_parse.push(Phrase::Literal(b'x'));
    assert!(matches!(
        AttractorIndex::from_parts(text, &sa, &long_parse, &config, &NoopObserver),
        Err(IndexError::LengthMismatch { expected: 6, actual: 7, .. })
    ));

    let zero = [Phrase::Copy { source: 0, len: 0 }];
    assert!(matches!(
        AttractorIndex::from_parts(text, &sa, &zero, &config, &NoopObserver),
        Err(IndexError::InvalidArgument { .. })
    ));

    assert!(matches!(
        AttractorIndex::from_parts(text, &sa, &phrases, &IndexConfig::with_tau(1), &NoopObserver),
        Err(IndexError::InvalidArgument { .. })
    ));
}
