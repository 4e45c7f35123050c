// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Construction of the block hierarchy.
//!
//! ```text
//! level 0   |----|----|----|----|----|        ɤ blocks of ceil(n/ɤ)
//!                     ▲ a_i
//! level 1          |--|--|--|--|               2τ blocks of ceil(len/τ)
//!                  a_i - τ·len  …  a_i + τ·len   around every attractor
//! level 2           |-|-|-|-|                   and so on until len < 2α
//! ```
//!
//! A block on level k-1 links to its leftmost occurrence, anchored at the
//! attractor it contains. Any position reached through that link lies within
//! one parent block length of the attractor, which is exactly the band level k
//! materializes. Blocks outside every band are never generated.
//!
//! The terminal level stores bytes. Cells before 0 or past n are filled with
//! the sentinel and are never read by a query.

use crate::attractor::AttractorSet;
use crate::config::IndexConfig;
use crate::contracts;
use crate::error::{try_with_capacity, Result};
use crate::level::{Level, Link};
use crate::locate::OccurrenceLocator;
use crate::observer::{BuildEvent, BuildObserver};

/// Levels plus the literal threshold they were built with.
#[derive(Debug, Clone)]
pub struct Hierarchy {
    pub levels: Vec<Level>,
    pub alpha: usize,
}

/// Root block length: `ceil(n / gamma)`.
#[inline]
pub fn root_block_len(n: usize, gamma: usize) -> usize {
    n.div_ceil(gamma.max(1)).max(1)
}

/// `max(1, ceil(log_tau(block_len)))`, in exact integer arithmetic.
pub fn alpha_for(block_len: usize, tau: usize) -> usize {
    let mut alpha = 0;
    let mut reach = 1usize;
    while reach < block_len {
        reach = reach.saturating_mul(tau);
        alpha += 1;
    }
    alpha.max(1)
}

/// Block length of the next level: `ceil(block_len / tau)`.
#[inline]
pub fn next_block_len(block_len: usize, tau: usize) -> usize {
    block_len.div_ceil(tau)
}

/// Starts of the `2 * tau` blocks around every attractor, in attractor order.
pub fn window_starts(attractors: &AttractorSet, tau: usize, block_len: usize) -> Result<Vec<i64>> {
    let per_attractor = 2 * tau;
    let mut starts = try_with_capacity(attractors.len() * per_attractor)?;
    let reach = (tau * block_len) as i64;
    for &pos in attractors.positions() {
        let begin = pos as i64 - reach;
        starts.extend((0..per_attractor as i64).map(|j| begin + j * block_len as i64));
    }
    Ok(starts)
}

/// Build every level, top to bottom.
pub fn build_levels(
    text: &[u8],
    locator: &OccurrenceLocator<'_>,
    attractors: &AttractorSet,
    config: &IndexConfig,
    observer: &dyn BuildObserver,
) -> Result<Hierarchy> {
    let n = text.len();
    let tau = config.tau;

    let mut block_len = root_block_len(n, attractors.len());
    let alpha = alpha_for(block_len, tau);
    let mut starts: Vec<i64> = (0..n).step_by(block_len).map(|s| s as i64).collect();
    let mut levels = Vec::new();

    loop {
        let depth = levels.len();
        let terminal = block_len < 2 * alpha;

        let level = if terminal {
            Level::literal(block_len, literal_blocks(text, &starts, block_len, config.sentinel)?)
        } else {
            Level::linked(block_len, link_blocks(locator, &starts, block_len, config.parallel)?)
        };
        contracts::check_links_in_bounds(depth, &level, &starts, attractors, n);

        observer.on_event(&BuildEvent::LevelBuilt {
            depth,
            block_len,
            blocks: starts.len(),
            terminal,
        });
        levels.push(level);

        if terminal {
            break;
        }

        block_len = next_block_len(block_len, tau);
        starts = window_starts(attractors, tau, block_len)?;
    }

    contracts::check_levels_monotone(&levels, alpha);
    observer.on_event(&BuildEvent::Finished {
        levels: levels.len(),
        alpha,
    });

    Ok(Hierarchy { levels, alpha })
}

/// One link slot per block, from the block's own span.
fn link_blocks(
    locator: &OccurrenceLocator<'_>,
    starts: &[i64],
    block_len: usize,
    parallel: bool,
) -> Result<Vec<Option<Link>>> {
    let width = block_len as i64 - 1;

    #[cfg(feature = "parallel")]
    if parallel {
        use rayon::prelude::*;
        return starts
            .par_iter()
            .map(|&s| locator.locate(s, s + width))
            .collect();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    let mut links = try_with_capacity(starts.len())?;
    for &s in starts {
        links.push(locator.locate(s, s + width)?);
    }
    Ok(links)
}

/// Copy every block's bytes into one arena, padding outside `[0, n)`.
fn literal_blocks(text: &[u8], starts: &[i64], block_len: usize, sentinel: u8) -> Result<Vec<u8>> {
    let n = text.len() as i64;
    let mut bytes = try_with_capacity(starts.len() * block_len)?;
    for &s in starts {
        let e = s + block_len as i64;
        let lo = s.clamp(0, n);
        let hi = e.clamp(0, n);
        if lo >= hi {
            bytes.resize(bytes.len() + block_len, sentinel);
            continue;
        }
        bytes.resize(bytes.len() + (lo - s) as usize, sentinel);
        bytes.extend_from_slice(&text[lo as usize..hi as usize]);
        bytes.resize(bytes.len() + (e - hi) as usize, sentinel);
    }
    Ok(bytes)
}
