// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The public index: construction pipeline plus positional queries.
//!
//! ```text
//! text ──▶ suffix array ──▶ LZ77 parse ──▶ attractors
//!               │                              │
//!               └──▶ RMQ ──▶ locator ◀─────────┘
//!                              │
//!                              ▼
//!                         levels (kept)
//! ```
//!
//! Only the levels and the attractor positions survive construction.

use crate::attractor::AttractorSet;
use crate::config::IndexConfig;
use crate::contracts;
use crate::error::{IndexError, Result};
use crate::hierarchy;
use crate::level::Level;
use crate::locate::OccurrenceLocator;
use crate::lz77::{self, Phrase};
use crate::observer::{BuildEvent, BuildObserver, NoopObserver};
use crate::query::QueryEngine;
use crate::rmq::RangeMinIndex;
use crate::sais;
use crate::stats::IndexStats;

/// Random access to a text through its string-attractor hierarchy.
#[derive(Debug, Clone)]
pub struct AttractorIndex {
    config: IndexConfig,
    len: usize,
    attractors: AttractorSet,
    alpha: usize,
    levels: Vec<Level>,
}

impl AttractorIndex {
    /// Index the first `length` bytes of `text` with branching factor `tau`.
    pub fn new(tau: usize, text: &[u8], length: usize) -> Result<Self> {
        if length > text.len() {
            return Err(IndexError::LengthMismatch {
                what: "text",
                expected: length,
                actual: text.len(),
            });
        }
        Self::build(&text[..length], &IndexConfig::with_tau(tau))
    }

    pub fn build(text: &[u8], config: &IndexConfig) -> Result<Self> {
        Self::build_with_observer(text, config, &NoopObserver)
    }

    /// Build, reporting every stage to `observer`.
    pub fn build_with_observer(
        text: &[u8],
        config: &IndexConfig,
        observer: &dyn BuildObserver,
    ) -> Result<Self> {
        config.validate()?;
        if text.is_empty() {
            return Err(IndexError::InvalidArgument {
                what: "text must not be empty",
            });
        }

        let suffix_array = sais::suffix_array(text);
        observer.on_event(&BuildEvent::SuffixArrayBuilt {
            len: suffix_array.len(),
        });
        let phrases = lz77::factorize(text, &suffix_array)?;

        Self::from_parts(text, &suffix_array, &phrases, config, observer)
    }

    /// Build from a suffix array and an LZ77 parse computed elsewhere.
    ///
    /// The parse must cover the text exactly. Its phrase ends become the
    /// attractor positions, so a parse that is not an attractor for `text`
    /// fails with [`IndexError::AttractorNotFound`].
    pub fn from_parts(
        text: &[u8],
        suffix_array: &[usize],
        phrases: &[Phrase],
        config: &IndexConfig,
        observer: &dyn BuildObserver,
    ) -> Result<Self> {
        config.validate()?;
        let n = text.len();
        if n == 0 {
            return Err(IndexError::InvalidArgument {
                what: "text must not be empty",
            });
        }
        if suffix_array.len() != n {
            return Err(IndexError::LengthMismatch {
                what: "suffix array",
                expected: n,
                actual: suffix_array.len(),
            });
        }
        contracts::check_suffix_array(text, suffix_array);

        let attractors = AttractorSet::from_phrases(phrases)?;
        if attractors.covered_len() != n {
            return Err(IndexError::LengthMismatch {
                what: "phrase coverage",
                expected: n,
                actual: attractors.covered_len(),
            });
        }
        contracts::check_attractors(&attractors, n);
        observer.on_event(&BuildEvent::Factorized {
            phrases: attractors.len(),
        });

        let hierarchy = {
            let rmq = RangeMinIndex::build(suffix_array)?;
            let locator = OccurrenceLocator::new(text, suffix_array, &rmq, &attractors);
            hierarchy::build_levels(text, &locator, &attractors, config, observer)?
        };

        Ok(Self {
            config: config.clone(),
            len: n,
            attractors,
            alpha: hierarchy.alpha,
            levels: hierarchy.levels,
        })
    }

    fn engine(&self) -> QueryEngine<'_> {
        QueryEngine::new(&self.levels, &self.attractors, self.config.tau)
    }

    fn check_range(&self, start: usize, len: usize) -> Result<()> {
        match start.checked_add(len) {
            Some(end) if end <= self.len => Ok(()),
            _ => Err(IndexError::OutOfRange {
                start,
                len,
                text_len: self.len,
            }),
        }
    }

    /// Byte at `index`.
    pub fn query(&self, index: usize) -> Result<u8> {
        if index >= self.len {
            return Err(IndexError::OutOfRange {
                start: index,
                len: 1,
                text_len: self.len,
            });
        }
        self.engine().resolve_char(index)
    }

    /// `len` bytes starting at `start`.
    pub fn query_range(&self, start: usize, len: usize) -> Result<Vec<u8>> {
        self.check_range(start, len)?;
        self.engine().resolve_range(start, len)
    }

    /// Fill `out` with the bytes starting at `start`.
    pub fn query_into(&self, start: usize, out: &mut [u8]) -> Result<()> {
        self.check_range(start, out.len())?;
        self.engine().resolve_into(start, out)
    }

    /// Reconstruct the whole text.
    pub fn extract_all(&self) -> Result<Vec<u8>> {
        self.engine().resolve_range(0, self.len)
    }

    /// Indexed text length n.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: construction rejects empty texts.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn tau(&self) -> usize {
        self.config.tau
    }

    /// Number of attractor positions (ɤ).
    #[inline]
    pub fn gamma(&self) -> usize {
        self.attractors.len()
    }

    /// Literal threshold: levels with blocks shorter than `2 * alpha` store bytes.
    #[inline]
    pub fn alpha(&self) -> usize {
        self.alpha
    }

    /// Number of levels, terminal included.
    #[inline]
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    pub fn block_lens(&self) -> Vec<usize> {
        self.levels.iter().map(Level::block_len).collect()
    }

    pub fn attractor_positions(&self) -> &[usize] {
        self.attractors.positions()
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats::collect(
            self.len,
            self.config.tau,
            self.attractors.positions(),
            self.alpha,
            &self.levels,
        )
    }
}
