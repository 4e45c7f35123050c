// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Static range-minimum index over a borrowed slice.
//!
//! A bottom-up segment tree with power-of-two leaves. Each node stores the
//! position of the minimum in its span, not the value, so the answer is an
//! index into the original slice.
//!
//! ```text
//! values:  [5, 2, 7, 2]
//!
//!              [1]              ties go to the smaller position
//!           /       \
//!        [1]         [3]
//!       /   \       /   \
//!     [0]   [1]   [2]   [3]
//! ```
//!
//! Build is O(n), queries are O(log n).

use crate::error::{try_with_capacity, IndexError, Result};

/// Marks an unused leaf past the end of the input.
const EMPTY: usize = usize::MAX;

/// Range-minimum index returning the leftmost arg-min of `values[l..=r]`.
#[derive(Debug)]
pub struct RangeMinIndex<'a, T> {
    values: &'a [T],
    leaves: usize,
    tree: Vec<usize>,
}

impl<'a, T: Copy + Ord> RangeMinIndex<'a, T> {
    /// Build the tree in one pass over `values`.
    pub fn build(values: &'a [T]) -> Result<Self> {
        let leaves = values.len().max(1).next_power_of_two();
        let mut tree = try_with_capacity(2 * leaves)?;
        tree.resize(2 * leaves, EMPTY);

        for (i, slot) in tree[leaves..leaves + values.len()].iter_mut().enumerate() {
            *slot = i;
        }

        let mut index = Self {
            values,
            leaves,
            tree,
        };
        for node in (1..leaves).rev() {
            index.tree[node] = index.better(index.tree[2 * node], index.tree[2 * node + 1]);
        }
        Ok(index)
    }

    /// Number of values covered.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Position `p` in `[l, r]` minimizing `values[p]`, smallest `p` on ties.
    pub fn query_min_index(&self, l: usize, r: usize) -> Result<usize> {
        if l > r || r >= self.values.len() {
            return Err(IndexError::InvalidRange {
                l,
                r,
                len: self.values.len(),
            });
        }

        let mut best = EMPTY;
        let mut lo = l + self.leaves;
        let mut hi = r + self.leaves + 1;
        while lo < hi {
            if lo & 1 == 1 {
                best = self.better(best, self.tree[lo]);
                lo += 1;
            }
            if hi & 1 == 1 {
                hi -= 1;
                best = self.better(best, self.tree[hi]);
            }
            lo >>= 1;
            hi >>= 1;
        }

        debug_assert!(best != EMPTY, "non-empty range always has a minimum");
        Ok(best)
    }

    /// Value at the arg-min of `[l, r]`.
    pub fn query_min(&self, l: usize, r: usize) -> Result<T> {
        self.query_min_index(l, r).map(|p| self.values[p])
    }

    #[inline]
    fn better(&self, a: usize, b: usize) -> usize {
        match (a, b) {
            (EMPTY, _) => b,
            (_, EMPTY) => a,
            _ => {
                let (va, vb) = (self.values[a], self.values[b]);
                if vb < va || (vb == va && b < a) {
                    b
                } else {
                    a
                }
            }
        }
    }
}
