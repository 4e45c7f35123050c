//! Shared test utilities and fixtures.

#![allow(dead_code)]

use attrix::hierarchy::window_starts;
use attrix::{AttractorIndex, AttractorSet, IndexConfig, LevelTable};

// Re-export canonical generators from attrix::testing
#[allow(unused_imports)]
pub use attrix::testing::{dna_text, fibonacci_word, random_text, repetitive_text, XorShift64};

// ============================================================================
// BUILDERS
// ============================================================================

pub fn build(text: &[u8], tau: usize) -> AttractorIndex {
    AttractorIndex::build(text, &IndexConfig::with_tau(tau))
        .unwrap_or_else(|e| panic!("build failed for {:?}: {}", String::from_utf8_lossy(text), e))
}

/// Naive leftmost occurrence of `pattern` in `text`.
pub fn naive_leftmost(text: &[u8], pattern: &[u8]) -> Option<usize> {
    text.windows(pattern.len()).position(|w| w == pattern)
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Every position and the whole text come back unchanged.
pub fn assert_round_trip(index: &AttractorIndex, text: &[u8]) {
    assert_eq!(index.len(), text.len());
    for (i, &b) in text.iter().enumerate() {
        assert_eq!(
            index.query(i).unwrap(),
            b,
            "query({}) on text of length {} with tau {}",
            i,
            text.len(),
            index.tau()
        );
    }
    assert_eq!(index.extract_all().unwrap(), text);
}

/// Block starts of every level, recomputed from the public shape.
pub fn level_starts(index: &AttractorIndex) -> Vec<Vec<i64>> {
    let attractors = AttractorSet::from_positions(index.attractor_positions().to_vec()).unwrap();
    let lens = index.block_lens();
    let mut all: Vec<Vec<i64>> = Vec::with_capacity(lens.len());
    all.push((0..index.len()).step_by(lens[0]).map(|s| s as i64).collect());
    for &len in &lens[1..] {
        all.push(window_starts(&attractors, index.tau(), len).unwrap());
    }
    all
}

/// Each link maps the in-text part of its block onto equal bytes.
pub fn assert_links_sound(index: &AttractorIndex, text: &[u8]) {
    let n = text.len() as i64;
    let positions = index.attractor_positions();

    for (depth, (level, starts)) in index.levels().iter().zip(level_starts(index)).enumerate() {
        let LevelTable::Links(links) = level.table() else {
            continue;
        };
        assert_eq!(links.len(), starts.len(), "level {} slot count", depth);

        for (block, (link, &s)) in links.iter().zip(&starts).enumerate() {
            let lo = s.max(0);
            let hi = (s + level.block_len() as i64).min(n);
            let Some(link) = link else {
                assert!(lo >= hi, "level {} block {} overlaps the text but has no link", depth, block);
                continue;
            };
            let source = link.source_start(positions[link.attractor]);
            for p in lo..hi {
                let q = source + (p - s);
                assert!(
                    (0..n).contains(&q),
                    "level {} block {}: source {} out of text",
                    depth,
                    block,
                    q
                );
                assert_eq!(
                    text[q as usize], text[p as usize],
                    "level {} block {}: text[{}] != text[{}]",
                    depth, block, q, p
                );
            }
        }
    }
}

/// Block lengths strictly decrease to a single terminal level below `2 * alpha`.
pub fn assert_levels_well_formed(index: &AttractorIndex) {
    let lens = index.block_lens();
    assert!(!lens.is_empty());
    assert!(lens.windows(2).all(|w| w[1] < w[0]), "lengths {:?}", lens);
    assert!(*lens.last().unwrap() < 2 * index.alpha());

    let levels = index.levels();
    for (i, level) in levels.iter().enumerate() {
        assert_eq!(level.is_terminal(), i + 1 == levels.len(), "level {}", i);
    }
}
