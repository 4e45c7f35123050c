//! Named scenarios.

use super::common::{
    assert_links_sound, assert_round_trip, build, dna_text, fibonacci_word, random_text,
    repetitive_text, XorShift64,
};
use attrix::{AttractorIndex, IndexConfig, IndexError, DEFAULT_SENTINEL};

#[test]
fn periodic_text() {
    let text = b"abcabcabc";
    let index = AttractorIndex::new(2, text, text.len()).unwrap();
    assert_round_trip(&index, text);
}

#[test]
fn unary_text_needs_two_attractors() {
    let text = b"aaaaaaaa";
    let index = AttractorIndex::new(2, text, text.len()).unwrap();
    assert!(index.gamma() <= 2);
    for i in 0..text.len() {
        assert_eq!(index.query(i).unwrap(), b'a');
    }
}

#[test]
fn single_byte_text() {
    let index = AttractorIndex::new(2, b"x", 1).unwrap();
    assert_eq!(index.depth(), 1);
    assert!(index.levels()[0].is_terminal());
    assert_eq!(index.query(0).unwrap(), b'x');
    assert!(index.query(1).is_err());
}

#[test]
fn random_four_letter_texts() {
    for seed in 0..50 {
        let len = 50 + (seed as usize * 37) % 400;
        let text = dna_text(seed, len);
        let index = build(&text, 2);
        assert_round_trip(&index, &text);
    }
}

#[test]
fn boundaries_never_return_the_sentinel() {
    // Lengths that are multiples of neither τ nor ɤ
    for (len, tau) in [(101usize, 2usize), (97, 3), (1001, 4), (55, 2), (7, 3)] {
        let text = random_text(len as u64, len, b"abcdefgh");
        assert!(!text.contains(&DEFAULT_SENTINEL));
        let index = build(&text, tau);
        assert_eq!(index.query(0).unwrap(), text[0]);
        assert_eq!(index.query(len - 1).unwrap(), text[len - 1]);
        assert_eq!(index.query_range(len - 2, 2).unwrap(), &text[len - 2..]);
    }
}

#[test]
fn custom_sentinel_is_never_observed() {
    let text = repetitive_text(3, 777, 10);
    let config = IndexConfig {
        sentinel: b'z',
        ..IndexConfig::with_tau(3)
    };
    let index = AttractorIndex::build(&text, &config).unwrap();
    assert_eq!(index.extract_all().unwrap(), text);
}

#[test]
fn fibonacci_word_stays_shallow() {
    let text = fibonacci_word(4181);
    let index = build(&text, 2);
    assert_round_trip(&index, &text);
    assert_links_sound(&index, &text);
    assert!(index.gamma() < 40);
}

#[test]
fn binary_text_with_zero_bytes() {
    let mut text = vec![0u8; 300];
    text.extend(random_text(8, 300, &[0, 1, 255]));
    let index = build(&text, 2);
    assert_round_trip(&index, &text);
}

#[test]
fn errors_are_descriptive() {
    let index = build(b"hello world", 2);
    let err = index.query_range(8, 10).unwrap_err();
    assert_eq!(
        err,
        IndexError::OutOfRange {
            start: 8,
            len: 10,
            text_len: 11
        }
    );
    assert!(err.to_string().contains("11"));
}

#[test]
fn index_is_shared_across_threads() {
    let text = repetitive_text(1, 5000, 23);
    let index = build(&text, 2);
    std::thread::scope(|scope| {
        for t in 0..4 {
            let (index, text) = (&index, &text);
            scope.spawn(move || {
                for i in (t..text.len()).step_by(4) {
                    assert_eq!(index.query(i).unwrap(), text[i]);
                }
            });
        }
    });
}

#[test]
#[ignore = "large sweep; run with --ignored"]
fn large_random_sweep() {
    // 1000 texts, lengths log-uniform in 1..=2^20
    let mut rng = XorShift64::new(2024);
    for round in 0..1000u64 {
        let shift = rng.below(21);
        let len = 1 + rng.below(1 << shift);
        let text = dna_text(round, len);
        let index = build(&text, 2);
        assert_eq!(index.extract_all().unwrap(), text, "round {} len {}", round, len);
        for i in (0..len).step_by(1 + len / 512) {
            assert_eq!(index.query(i).unwrap(), text[i], "round {} query({})", round, i);
        }
    }
}
