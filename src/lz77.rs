// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Greedy LZ77 factorization from a suffix array.
//!
//! Each phrase is either a single literal byte or the longest copy of an
//! earlier-starting occurrence. Copies may overlap their own phrase.
//!
//! The longest previous factor at position `i` starts at one of two
//! candidates: the closest suffix-array neighbours of `i` (on either side)
//! whose text position is smaller than `i`. Those are the previous and next
//! smaller values around `i` in suffix-array order, computed for every
//! position with one stack pass.
//!
//! ```text
//! text: a b a b a b c
//!       │ │ └───┬───┘ │
//!       a b  copy(0,4) c      phrases: 4, attractors: 0 1 5 6
//! ```
//!
//! Total work is O(n): the stack pass is linear and every match extension
//! is paid for by the phrase it produces.

use crate::error::{try_with_capacity, Result};

const NONE: usize = usize::MAX;

/// One unit of an LZ77 parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phrase {
    /// A byte with no earlier occurrence.
    Literal(u8),
    /// `len` bytes equal to the text starting at `source` (`source` precedes the phrase).
    Copy { source: usize, len: usize },
}

impl Phrase {
    /// Number of text bytes the phrase covers.
    #[inline]
    pub fn span(&self) -> usize {
        match self {
            Phrase::Literal(_) => 1,
            Phrase::Copy { len, .. } => *len,
        }
    }
}

/// Factorize `text` given its suffix array.
pub fn factorize(text: &[u8], suffix_array: &[usize]) -> Result<Vec<Phrase>> {
    let n = text.len();
    debug_assert_eq!(suffix_array.len(), n);
    if n == 0 {
        return Ok(Vec::new());
    }

    let (psv, nsv) = smaller_neighbours(suffix_array)?;

    let mut phrases = Vec::new();
    let mut i = 0;
    while i < n {
        let mut best_len = 0;
        let mut best_src = NONE;
        for candidate in [psv[i], nsv[i]] {
            if candidate == NONE {
                continue;
            }
            let len = common_prefix_len(text, candidate, i);
            if len > best_len {
                best_len = len;
                best_src = candidate;
            }
        }

        if best_len == 0 {
            phrases.push(Phrase::Literal(text[i]));
            i += 1;
        } else {
            phrases.push(Phrase::Copy {
                source: best_src,
                len: best_len,
            });
            i += best_len;
        }
    }

    Ok(phrases)
}

/// For every text position, the nearest suffix-array neighbours to the left
/// and right holding a smaller text position.
fn smaller_neighbours(suffix_array: &[usize]) -> Result<(Vec<usize>, Vec<usize>)> {
    let n = suffix_array.len();
    let mut psv = try_with_capacity(n)?;
    psv.resize(n, NONE);
    let mut nsv = try_with_capacity(n)?;
    nsv.resize(n, NONE);

    // Increasing stack of text positions
    let mut stack: Vec<usize> = Vec::new();
    for &pos in suffix_array {
        while let Some(&top) = stack.last() {
            if top < pos {
                break;
            }
            stack.pop();
            nsv[top] = pos;
            psv[top] = stack.last().copied().unwrap_or(NONE);
        }
        stack.push(pos);
    }
    while let Some(top) = stack.pop() {
        psv[top] = stack.last().copied().unwrap_or(NONE);
    }

    Ok((psv, nsv))
}

/// Length of the common prefix of the suffixes at `a` and `b`.
#[inline]
fn common_prefix_len(text: &[u8], a: usize, b: usize) -> usize {
    text[a..]
        .iter()
        .zip(&text[b..])
        .take_while(|(x, y)| x == y)
        .count()
}

/// Rebuild the text a parse describes.
pub fn expand(phrases: &[Phrase]) -> Vec<u8> {
    let mut out: Vec<u8> = Vec::with_capacity(phrases.iter().map(Phrase::span).sum());
    for phrase in phrases {
        match *phrase {
            Phrase::Literal(b) => out.push(b),
            Phrase::Copy { source, len } => {
                // Byte by byte: the copy may overlap its own output
                for k in 0..len {
                    let b = out[source + k];
                    out.push(b);
                }
            }
        }
    }
    out
}
