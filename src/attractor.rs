// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Attractor positions derived from an LZ77 parse.
//!
//! The last byte of every phrase is an attractor position. Any substring
//! whose leftmost occurrence avoided all of them would sit strictly inside a
//! copy phrase, and the copy's source would hold an earlier occurrence.

use crate::error::{IndexError, Result};
use crate::lz77::Phrase;

/// Strictly increasing phrase-end positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttractorSet {
    positions: Vec<usize>,
}

impl AttractorSet {
    /// Accumulate phrase lengths into end positions.
    pub fn from_phrases(phrases: &[Phrase]) -> Result<Self> {
        let mut positions = Vec::with_capacity(phrases.len());
        let mut covered = 0usize;
        for phrase in phrases {
            let span = phrase.span();
            if span == 0 {
                return Err(IndexError::InvalidArgument {
                    what: "copy phrase of length zero",
                });
            }
            covered += span;
            positions.push(covered - 1);
        }
        Ok(Self { positions })
    }

    /// Build from explicit positions, rejecting unsorted or duplicate input.
    pub fn from_positions(positions: Vec<usize>) -> Result<Self> {
        if positions.windows(2).any(|w| w[0] >= w[1]) {
            return Err(IndexError::InvalidArgument {
                what: "attractor positions must be strictly increasing",
            });
        }
        Ok(Self { positions })
    }

    /// Number of attractors (ɤ).
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Text position of attractor `k`.
    #[inline]
    pub fn position(&self, k: usize) -> usize {
        self.positions[k]
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// One past the last covered position, i.e. the parsed text length.
    pub fn covered_len(&self) -> usize {
        self.positions.last().map_or(0, |&p| p + 1)
    }

    /// Smallest `k` with `position(k)` in `[lo, hi]`.
    ///
    /// Positions are sorted, so the first position `>= lo` is the only
    /// candidate: if it exceeds `hi`, no attractor lies in the window.
    pub fn first_within(&self, lo: usize, hi: usize) -> Option<usize> {
        let k = self.positions.partition_point(|&p| p < lo);
        match self.positions.get(k) {
            Some(&p) if p <= hi => Some(k),
            _ => None,
        }
    }
}
