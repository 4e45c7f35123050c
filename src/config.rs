// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Build configuration.

use serde::{Deserialize, Serialize};

use crate::error::{IndexError, Result};

/// Default branching factor.
pub const DEFAULT_TAU: usize = 2;

/// Byte written into literal storage for positions outside the text.
pub const DEFAULT_SENTINEL: u8 = b'$';

/// Parameters fixed for the lifetime of an index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndexConfig {
    /// Refinement factor τ: each level divides the block length by `tau`
    /// and places `2 * tau` blocks around every attractor.
    pub tau: usize,
    /// Padding byte for literal cells outside `[0, n)`.
    pub sentinel: u8,
    /// Link blocks of one level concurrently (needs the `parallel` feature).
    pub parallel: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            tau: DEFAULT_TAU,
            sentinel: DEFAULT_SENTINEL,
            parallel: false,
        }
    }
}

impl IndexConfig {
    pub fn with_tau(tau: usize) -> Self {
        Self {
            tau,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.tau < 2 {
            return Err(IndexError::InvalidArgument {
                what: "tau must be at least 2",
            });
        }
        Ok(())
    }
}
