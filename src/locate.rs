// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Earliest-occurrence search over the suffix array.
//!
//! For a window `T[start..=end]` the suffixes having it as a prefix form one
//! contiguous run of the suffix array. Two binary searches find the run,
//! a range-minimum query over the run yields the smallest text position `x`
//! among those suffixes, i.e. the leftmost occurrence of the window.
//!
//! ```text
//! window "ab" in "cabab"          SA   suffix
//!                                  3   ab        ┐ run [0, 1]
//!                                  1   abab      ┘ min position = 1
//!                                  4   b
//!                                  2   bab
//!                                  0   cabab
//! ```
//!
//! The leftmost occurrence of any substring contains an attractor position,
//! and that attractor anchors the block's link.

use std::cmp::Ordering;

use crate::attractor::AttractorSet;
use crate::error::{IndexError, Result};
use crate::level::Link;
use crate::rmq::RangeMinIndex;

/// Read-only construction context for link computation.
pub struct OccurrenceLocator<'a> {
    text: &'a [u8],
    suffix_array: &'a [usize],
    rmq: &'a RangeMinIndex<'a, usize>,
    attractors: &'a AttractorSet,
}

impl<'a> OccurrenceLocator<'a> {
    pub fn new(
        text: &'a [u8],
        suffix_array: &'a [usize],
        rmq: &'a RangeMinIndex<'a, usize>,
        attractors: &'a AttractorSet,
    ) -> Self {
        debug_assert_eq!(text.len(), suffix_array.len());
        debug_assert_eq!(rmq.len(), suffix_array.len());
        Self {
            text,
            suffix_array,
            rmq,
            attractors,
        }
    }

    /// Clamp an inclusive window to the text, `None` if nothing of it remains.
    fn clamp(&self, start: i64, end: i64) -> Option<(usize, usize)> {
        let last = self.text.len() as i64 - 1;
        let end = end.min(last);
        let start = start.max(0);
        if end < 0 || start > end {
            return None;
        }
        Some((start as usize, end as usize))
    }

    /// Compare the suffix at `pos` with the window `text[start..=end]`,
    /// treating a suffix that ends inside the window as smaller.
    fn compare_suffix(&self, pos: usize, start: usize, end: usize) -> Ordering {
        let window = &self.text[start..=end];
        let suffix = &self.text[pos..];
        let head = &suffix[..suffix.len().min(window.len())];
        // A shorter equal head compares Less, which is the rule we want
        head.cmp(window)
    }

    /// Leftmost text position where the clamped window `[start, end]` occurs.
    ///
    /// Returns `None` for windows lying entirely outside the text.
    pub fn earliest_occurrence(&self, start: i64, end: i64) -> Result<Option<usize>> {
        let Some((lo, hi)) = self.clamp(start, end) else {
            return Ok(None);
        };

        let r1 = self
            .suffix_array
            .partition_point(|&p| self.compare_suffix(p, lo, hi) == Ordering::Less);
        let r2 = self
            .suffix_array
            .partition_point(|&p| self.compare_suffix(p, lo, hi) != Ordering::Greater);

        // The window occurs at `lo` itself, so the run is never empty
        if r1 >= r2 {
            return Err(IndexError::InvalidRange {
                l: r1,
                r: r2,
                len: self.suffix_array.len(),
            });
        }

        let slot = self.rmq.query_min_index(r1, r2 - 1)?;
        Ok(Some(self.suffix_array[slot]))
    }

    /// Link for the block spanning `[start, end]` (inclusive, possibly signed).
    ///
    /// The search uses the window clamped to the text; the offset is computed
    /// against the unclamped start so that `source_start + (p - start)` maps
    /// every in-text position `p` of the block onto an equal byte.
    pub fn locate(&self, start: i64, end: i64) -> Result<Option<Link>> {
        let Some((lo, hi)) = self.clamp(start, end) else {
            return Ok(None);
        };
        let Some(x) = self.earliest_occurrence(start, end)? else {
            return Ok(None);
        };

        let width = hi - lo;
        let k = self
            .attractors
            .first_within(x, x + width)
            .ok_or(IndexError::AttractorNotFound {
                start,
                end,
                occurrence: x,
            })?;

        let source_start = x as i64 - (lo as i64 - start);
        let offset = self.attractors.position(k) as i64 - source_start;
        debug_assert!(offset >= 0);

        Ok(Some(Link {
            attractor: k,
            offset: offset as usize,
        }))
    }
}
