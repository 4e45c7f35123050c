//! Structure statistics for a built index.

use serde::Serialize;

use crate::level::{Level, LevelTable};

/// Shape of one level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelStats {
    pub depth: usize,
    pub block_len: usize,
    pub blocks: usize,
    pub terminal: bool,
    /// Blocks lying entirely outside the text.
    pub padding_blocks: usize,
    pub heap_bytes: usize,
}

/// Whole-index summary, printed by `attrix stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    pub text_len: usize,
    pub tau: usize,
    pub gamma: usize,
    pub alpha: usize,
    pub levels: Vec<LevelStats>,
    pub link_count: usize,
    pub literal_bytes: usize,
    /// Level tables plus attractor positions.
    pub heap_bytes: usize,
}

impl LevelStats {
    pub fn of(depth: usize, level: &Level) -> Self {
        Self {
            depth,
            block_len: level.block_len(),
            blocks: level.block_count(),
            terminal: level.is_terminal(),
            padding_blocks: level.padding_blocks(),
            heap_bytes: level.heap_bytes(),
        }
    }
}

impl IndexStats {
    pub fn collect(
        text_len: usize,
        tau: usize,
        attractors: &[usize],
        alpha: usize,
        levels: &[Level],
    ) -> Self {
        let mut link_count = 0;
        let mut literal_bytes = 0;
        for level in levels {
            match level.table() {
                LevelTable::Links(links) => link_count += links.iter().flatten().count(),
                LevelTable::Literals(bytes) => literal_bytes += bytes.len(),
            }
        }
        let level_bytes: usize = levels.iter().map(Level::heap_bytes).sum();

        Self {
            text_len,
            tau,
            gamma: attractors.len(),
            alpha,
            levels: levels
                .iter()
                .enumerate()
                .map(|(depth, level)| LevelStats::of(depth, level))
                .collect(),
            link_count,
            literal_bytes,
            heap_bytes: level_bytes + std::mem::size_of_val(attractors),
        }
    }

    /// Bytes per text byte; `0.0` for an empty text.
    pub fn bytes_per_symbol(&self) -> f64 {
        if self.text_len == 0 {
            return 0.0;
        }
        self.heap_bytes as f64 / self.text_len as f64
    }
}
