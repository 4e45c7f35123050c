// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type shared by construction and queries.
//!
//! Two families of failure exist. Caller misuse (`InvalidArgument`,
//! `OutOfRange`, `LengthMismatch`) is reported and can be retried with
//! corrected input. Everything else means an internal invariant broke:
//! the parse was not an attractor for the text, a table was built wrong,
//! or memory ran out. Those are never retried.

use std::fmt;

/// Errors produced while building or querying an [`AttractorIndex`](crate::AttractorIndex).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// A construction parameter is unusable (`tau < 2`, zero length, ...).
    InvalidArgument { what: &'static str },
    /// A query touches positions outside `[0, text_len)`.
    OutOfRange {
        start: usize,
        len: usize,
        text_len: usize,
    },
    /// A supplied buffer, suffix array or parse disagrees with the text length.
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
    /// Malformed range-minimum query.
    InvalidRange { l: usize, r: usize, len: usize },
    /// The earliest occurrence of a block contains no attractor position.
    AttractorNotFound {
        start: i64,
        end: i64,
        occurrence: usize,
    },
    /// A query descended into a padding block or a missing table slot.
    BrokenLink { level: usize, block: i64 },
    /// Reserving a table of `bytes` bytes failed.
    AllocationFailure { bytes: usize },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::InvalidArgument { what } => write!(f, "invalid argument: {}", what),
            IndexError::OutOfRange {
                start,
                len,
                text_len,
            } => {
                write!(
                    f,
                    "range [{}, {}+{}) outside text of length {}",
                    start, start, len, text_len
                )
            }
            IndexError::LengthMismatch {
                what,
                expected,
                actual,
            } => {
                write!(f, "{} has length {} but expected {}", what, actual, expected)
            }
            IndexError::InvalidRange { l, r, len } => {
                write!(f, "invalid minimum query [{}, {}] over {} values", l, r, len)
            }
            IndexError::AttractorNotFound {
                start,
                end,
                occurrence,
            } => {
                write!(
                    f,
                    "no attractor inside occurrence at {} of window [{}, {}]; \
                     the parse is not an attractor for this text",
                    occurrence, start, end
                )
            }
            IndexError::BrokenLink { level, block } => {
                write!(f, "query reached unlinked block {} on level {}", block, level)
            }
            IndexError::AllocationFailure { bytes } => {
                write!(f, "failed to allocate {} bytes", bytes)
            }
        }
    }
}

impl std::error::Error for IndexError {}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, IndexError>;

/// Allocate a vector with exactly `capacity` slots, surfacing allocation
/// failure as [`IndexError::AllocationFailure`].
pub(crate) fn try_with_capacity<T>(capacity: usize) -> Result<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(capacity)
        .map_err(|_| IndexError::AllocationFailure {
            bytes: capacity.saturating_mul(std::mem::size_of::<T>()),
        })?;
    Ok(v)
}
