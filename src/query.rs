// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Point and range queries by descending the level tables.
//!
//! The descent is a loop over at most `levels.len()` steps:
//!
//! ```text
//! level 0:  block = p / len₀,  local = p mod len₀
//! level k:  rel   = p - att_pos[a]
//!           block = a·2τ + τ + floor(rel / lenₖ),  local = rel mod lenₖ  (Euclidean)
//! link (a', off):  p ← att_pos[a'] - off + local,  a ← a'
//! terminal: literal[block][local]
//! ```
//!
//! Consecutive positions share a path as long as no visited block is left,
//! so a range query copies whole runs out of the terminal arena.

use crate::attractor::AttractorSet;
use crate::error::{IndexError, Result};
use crate::level::{Level, LevelTable};

/// Read-only view over built levels.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    levels: &'a [Level],
    attractors: &'a AttractorSet,
    tau: usize,
}

/// Where a descent ended: literal byte offset in the terminal arena and the
/// number of following positions that take the same path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Landing {
    pub arena_offset: usize,
    pub run: usize,
}

impl<'a> QueryEngine<'a> {
    pub fn new(levels: &'a [Level], attractors: &'a AttractorSet, tau: usize) -> Self {
        Self {
            levels,
            attractors,
            tau,
        }
    }

    /// Byte at text position `pos`. Bounds are the caller's concern.
    pub fn resolve_char(&self, pos: usize) -> Result<u8> {
        let landing = self.descend(pos)?;
        self.terminal_byte(landing.arena_offset)
    }

    /// Fill `out` with the bytes starting at `start`.
    pub fn resolve_into(&self, start: usize, out: &mut [u8]) -> Result<()> {
        let mut filled = 0;
        while filled < out.len() {
            let landing = self.descend(start + filled)?;
            let take = landing.run.min(out.len() - filled);
            let arena = self.terminal_arena()?;
            let src = arena
                .get(landing.arena_offset..landing.arena_offset + take)
                .ok_or(IndexError::BrokenLink {
                    level: self.levels.len() - 1,
                    block: landing.arena_offset as i64,
                })?;
            out[filled..filled + take].copy_from_slice(src);
            filled += take;
        }
        Ok(())
    }

    /// `len` bytes starting at `start`.
    pub fn resolve_range(&self, start: usize, len: usize) -> Result<Vec<u8>> {
        let mut out = vec![0u8; len];
        self.resolve_into(start, &mut out)?;
        Ok(out)
    }

    /// Walk the levels for `pos` down to the terminal arena.
    pub(crate) fn descend(&self, pos: usize) -> Result<Landing> {
        let mut pos = pos as i64;
        let mut anchor: Option<usize> = None;
        let mut run = usize::MAX;

        for (depth, level) in self.levels.iter().enumerate() {
            let len = level.block_len() as i64;
            let (block, local) = match anchor {
                None => (pos / len, pos % len),
                Some(a) => {
                    let rel = pos - self.attractors.position(a) as i64;
                    let base = (a * 2 * self.tau + self.tau) as i64;
                    (base + rel.div_euclid(len), rel.rem_euclid(len))
                }
            };
            if block < 0 || block as usize >= level.block_count() {
                return Err(IndexError::BrokenLink {
                    level: depth,
                    block,
                });
            }
            run = run.min((len - local) as usize);

            match level.table() {
                LevelTable::Literals(_) => {
                    return Ok(Landing {
                        arena_offset: block as usize * level.block_len() + local as usize,
                        run,
                    });
                }
                LevelTable::Links(_) => {
                    let link = level.link(block as usize).ok_or(IndexError::BrokenLink {
                        level: depth,
                        block,
                    })?;
                    pos = link.source_start(self.attractors.position(link.attractor)) + local;
                    anchor = Some(link.attractor);
                }
            }
        }

        Err(IndexError::BrokenLink {
            level: self.levels.len(),
            block: pos,
        })
    }

    fn terminal_arena(&self) -> Result<&'a [u8]> {
        match self.levels.last().map(Level::table) {
            Some(LevelTable::Literals(bytes)) => Ok(bytes),
            _ => Err(IndexError::BrokenLink {
                level: self.levels.len(),
                block: 0,
            }),
        }
    }

    fn terminal_byte(&self, arena_offset: usize) -> Result<u8> {
        self.terminal_arena()?
            .get(arena_offset)
            .copied()
            .ok_or(IndexError::BrokenLink {
                level: self.levels.len() - 1,
                block: arena_offset as i64,
            })
    }
}
