//! Runtime contracts for construction inputs and the built hierarchy.
//!
//! These are debug-mode assertions:
//!
//! 1. They are **zero-cost in release builds** (`debug_assert!` behind
//!    `cfg!(debug_assertions)`)
//! 2. They provide **early failure detection** during development
//! 3. Each one checks an invariant the query descent relies on
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | Invariant                                          |
//! |----------------------------|----------------------------------------------------|
//! | `check_suffix_array`       | SA is a permutation in lexicographic suffix order  |
//! | `check_attractors`         | positions strictly increase and end at n-1         |
//! | `check_levels_monotone`    | block lengths strictly decrease, one terminal last |
//! | `check_links_in_bounds`    | links hit real attractors and copy from the text   |
//!
//! # Usage
//!
//! ```ignore
//! // In debug builds, this panics if the invariant is violated
//! check_suffix_array(text, &suffix_array);
//!
//! // In release builds, this is a no-op
//! ```

use crate::attractor::AttractorSet;
use crate::level::{Level, LevelTable};

// ============================================================================
// CONSTRUCTION INPUT CONTRACTS
// ============================================================================

/// Check that `suffix_array` is the suffix array of `text`.
///
/// Sortedness is checked in O(n) through the inverse permutation: adjacent
/// suffixes `a`, `b` are ordered iff `text[a] < text[b]`, or the bytes tie and
/// the suffix after `a` ranks below the suffix after `b`.
///
/// # Panics (debug builds only)
/// Panics if positions are missing or out of order.
#[inline]
pub fn check_suffix_array(text: &[u8], suffix_array: &[usize]) {
    if !cfg!(debug_assertions) {
        return;
    }
    let n = text.len();
    debug_assert_eq!(
        suffix_array.len(),
        n,
        "Contract violation: suffix_array.len() {} != text.len() {}",
        suffix_array.len(),
        n
    );

    // rank[n] = 0 stands for the empty suffix
    let mut rank = vec![usize::MAX; n + 1];
    rank[n] = 0;
    for (i, &pos) in suffix_array.iter().enumerate() {
        debug_assert!(
            pos < n && rank[pos] == usize::MAX,
            "Contract violation: suffix_array[{}] = {} is out of range or repeated",
            i,
            pos
        );
        rank[pos] = i + 1;
    }

    for i in 1..suffix_array.len() {
        let (a, b) = (suffix_array[i - 1], suffix_array[i]);
        let ordered = text[a] < text[b] || (text[a] == text[b] && rank[a + 1] < rank[b + 1]);
        debug_assert!(
            ordered,
            "Contract violation: suffix_array not sorted at {} (positions {}, {})",
            i,
            a,
            b
        );
    }
}

/// Check that attractor positions strictly increase and cover `[0, n)`.
#[inline]
pub fn check_attractors(attractors: &AttractorSet, n: usize) {
    let positions = attractors.positions();
    for i in 1..positions.len() {
        debug_assert!(
            positions[i - 1] < positions[i],
            "Contract violation: attractor {} at {} not after {}",
            i,
            positions[i],
            positions[i - 1]
        );
    }
    debug_assert_eq!(
        attractors.covered_len(),
        n,
        "Contract violation: parse covers {} bytes of {}",
        attractors.covered_len(),
        n
    );
}

// ============================================================================
// HIERARCHY CONTRACTS
// ============================================================================

/// Check that block lengths strictly decrease and that exactly the last level
/// is terminal with `block_len < 2 * alpha`.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_levels_monotone(levels: &[Level], alpha: usize) {
    for i in 1..levels.len() {
        debug_assert!(
            levels[i].block_len() < levels[i - 1].block_len(),
            "Contract violation: level {} block_len {} >= level {} block_len {}",
            i,
            levels[i].block_len(),
            i - 1,
            levels[i - 1].block_len()
        );
    }

    for (i, level) in levels.iter().enumerate() {
        let last = i + 1 == levels.len();
        debug_assert_eq!(
            level.is_terminal(),
            last,
            "Contract violation: level {} terminal={} but last={}",
            i,
            level.is_terminal(),
            last
        );
    }

    if let Some(terminal) = levels.last() {
        debug_assert!(
            terminal.block_len() < 2 * alpha,
            "Contract violation: terminal block_len {} >= 2 * alpha {}",
            terminal.block_len(),
            alpha
        );
    }
}

/// Check that every link of one level anchors on an existing attractor and
/// maps the in-text part of its block onto positions inside the text.
///
/// The source start itself may be negative for blocks that begin before the
/// text; only the positions a query can reach must land in `[0, n)`.
#[inline]
pub fn check_links_in_bounds(
    depth: usize,
    level: &Level,
    starts: &[i64],
    attractors: &AttractorSet,
    n: usize,
) {
    if !cfg!(debug_assertions) {
        return;
    }
    let LevelTable::Links(links) = level.table() else {
        return;
    };
    debug_assert_eq!(
        links.len(),
        starts.len(),
        "Contract violation: level {} has {} links for {} blocks",
        depth,
        links.len(),
        starts.len()
    );
    let n = n as i64;
    let len = level.block_len() as i64;
    for (block, (link, &s)) in links.iter().zip(starts).enumerate() {
        let Some(link) = link else { continue };
        debug_assert!(
            link.attractor < attractors.len(),
            "Contract violation: level {} block {} links to attractor {} of {}",
            depth,
            block,
            link.attractor,
            attractors.len()
        );
        let lo = s.max(0);
        let hi = (s + len).min(n);
        let source = link.source_start(attractors.position(link.attractor));
        debug_assert!(
            source + (lo - s) >= 0 && source + (hi - s) <= n,
            "Contract violation: level {} block {} copies [{}, {}) outside the text",
            depth,
            block,
            source + (lo - s),
            source + (hi - s)
        );
    }
}
