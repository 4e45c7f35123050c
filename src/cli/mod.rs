// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the attrix command-line interface.
//!
//! Three subcommands over a plain input file: `stats` builds the index and
//! reports its shape, `query` prints reconstructed bytes, and `verify`
//! reconstructs the whole file, compares checksums and times point queries.

pub mod display;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "attrix",
    about = "Random access to files through a string-attractor index",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    /// Input file (read fully into memory)
    pub file: PathBuf,

    /// Branching factor τ (at least 2)
    #[arg(short, long, default_value_t = attrix::DEFAULT_TAU)]
    pub tau: usize,

    /// Link the blocks of each level on all cores
    #[arg(long)]
    pub parallel: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the index and print level statistics
    Stats {
        #[command(flatten)]
        build: BuildArgs,

        /// Print statistics as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print bytes reconstructed from the index
    Query {
        #[command(flatten)]
        build: BuildArgs,

        /// First byte offset
        #[arg(short, long)]
        offset: usize,

        /// Number of bytes
        #[arg(short, long, default_value = "1")]
        len: usize,

        /// Write the raw bytes instead of an escaped rendering
        #[arg(long)]
        raw: bool,
    },

    /// Reconstruct the whole file and check it against the original
    Verify {
        #[command(flatten)]
        build: BuildArgs,

        /// Number of random point queries to time
        #[arg(long, default_value = "100000")]
        samples: usize,

        /// Seed for the query positions
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}
