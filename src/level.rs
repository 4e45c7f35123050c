// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-level tables of the block hierarchy.
//!
//! Every level is an arena addressed by block index. Non-terminal levels
//! hold one link slot per block; the terminal level holds one contiguous
//! byte arena where block `i` occupies `[i * block_len, (i + 1) * block_len)`.

/// Where a block's content recurs: `attractor_position(attractor) - offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    /// Index into the attractor set.
    pub attractor: usize,
    /// Distance from the attractor back to the block's source start.
    pub offset: usize,
}

impl Link {
    /// Source start in text coordinates (negative for blocks that begin before the text).
    #[inline]
    pub fn source_start(&self, attractor_pos: usize) -> i64 {
        attractor_pos as i64 - self.offset as i64
    }
}

/// Contents of one level.
#[derive(Debug, Clone)]
pub enum LevelTable {
    /// One slot per block; `None` for blocks lying entirely outside the text.
    Links(Vec<Option<Link>>),
    /// Literal bytes of every block, padded with the sentinel.
    Literals(Vec<u8>),
}

/// A level of the hierarchy: fixed block length plus its table.
#[derive(Debug, Clone)]
pub struct Level {
    block_len: usize,
    table: LevelTable,
}

impl Level {
    pub fn linked(block_len: usize, links: Vec<Option<Link>>) -> Self {
        Self {
            block_len,
            table: LevelTable::Links(links),
        }
    }

    pub fn literal(block_len: usize, bytes: Vec<u8>) -> Self {
        debug_assert_eq!(bytes.len() % block_len, 0);
        Self {
            block_len,
            table: LevelTable::Literals(bytes),
        }
    }

    #[inline]
    pub fn block_len(&self) -> usize {
        self.block_len
    }

    #[inline]
    pub fn table(&self) -> &LevelTable {
        &self.table
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self.table, LevelTable::Literals(_))
    }

    /// Number of blocks on this level.
    pub fn block_count(&self) -> usize {
        match &self.table {
            LevelTable::Links(links) => links.len(),
            LevelTable::Literals(bytes) => bytes.len() / self.block_len,
        }
    }

    /// Link slot of `block`, `None` when the slot is padding or out of range.
    #[inline]
    pub fn link(&self, block: usize) -> Option<Link> {
        match &self.table {
            LevelTable::Links(links) => links.get(block).copied().flatten(),
            LevelTable::Literals(_) => None,
        }
    }

    /// Literal bytes of `block` on the terminal level.
    #[inline]
    pub fn literal_block(&self, block: usize) -> Option<&[u8]> {
        match &self.table {
            LevelTable::Literals(bytes) => {
                let start = block.checked_mul(self.block_len)?;
                bytes.get(start..start + self.block_len)
            }
            LevelTable::Links(_) => None,
        }
    }

    /// Blocks without a link (always zero on the terminal level).
    pub fn padding_blocks(&self) -> usize {
        match &self.table {
            LevelTable::Links(links) => links.iter().filter(|l| l.is_none()).count(),
            LevelTable::Literals(_) => 0,
        }
    }

    /// Heap bytes owned by the table.
    pub fn heap_bytes(&self) -> usize {
        match &self.table {
            LevelTable::Links(links) => links.capacity() * std::mem::size_of::<Option<Link>>(),
            LevelTable::Literals(bytes) => bytes.capacity(),
        }
    }
}
