// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use attrix::testing::XorShift64;
use attrix::{AttractorIndex, BuildEvent, BuildObserver, IndexConfig, IndexStats};
use clap::Parser;
use serde::Serialize;

mod cli;
use cli::display::*;
use cli::{BuildArgs, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Stats { build, json } => run_stats(&build, json),
        Commands::Query {
            build,
            offset,
            len,
            raw,
        } => run_query(&build, offset, len, raw),
        Commands::Verify {
            build,
            samples,
            seed,
        } => run_verify(&build, samples, seed),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BUILD
// ═══════════════════════════════════════════════════════════════════════════

/// Spinner fed by construction events.
#[cfg(feature = "parallel")]
struct Progress {
    bar: indicatif::ProgressBar,
}

#[cfg(feature = "parallel")]
impl Progress {
    fn new() -> Self {
        use indicatif::{ProgressBar, ProgressStyle};

        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {prefix:<10} {msg} {elapsed:.dim}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_prefix("Building");
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }
}

#[cfg(feature = "parallel")]
impl BuildObserver for Progress {
    fn on_event(&self, event: &BuildEvent) {
        match event {
            BuildEvent::SuffixArrayBuilt { len } => {
                self.bar.set_message(format!("suffix array over {} bytes", len));
            }
            BuildEvent::Factorized { phrases } => {
                self.bar.set_message(format!("{} attractors", phrases));
            }
            BuildEvent::LevelBuilt {
                depth,
                block_len,
                blocks,
                ..
            } => {
                self.bar.set_message(format!(
                    "level {} ({} blocks of {})",
                    depth, blocks, block_len
                ));
            }
            BuildEvent::Finished { levels, alpha } => {
                self.bar
                    .finish_with_message(format!("{} levels, alpha {}", levels, alpha));
            }
        }
    }
}

/// Plain status lines on stderr.
#[cfg(not(feature = "parallel"))]
struct Progress;

#[cfg(not(feature = "parallel"))]
impl Progress {
    fn new() -> Self {
        Self
    }
}

#[cfg(not(feature = "parallel"))]
impl BuildObserver for Progress {
    fn on_event(&self, event: &BuildEvent) {
        match event {
            BuildEvent::LevelBuilt {
                depth,
                block_len,
                blocks,
                terminal,
            } => eprintln!(
                "   level {}: {} blocks of {}{}",
                depth,
                blocks,
                block_len,
                if *terminal { " (literal)" } else { "" }
            ),
            BuildEvent::Finished { levels, alpha } => {
                eprintln!("✓ built {} levels, alpha {}", levels, alpha);
            }
            _ => {}
        }
    }
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    let text = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    if text.is_empty() {
        bail!("{} is empty", path.display());
    }
    Ok(text)
}

fn build_index(args: &BuildArgs, text: &[u8]) -> Result<(AttractorIndex, Duration)> {
    let config = IndexConfig {
        tau: args.tau,
        parallel: args.parallel,
        ..IndexConfig::default()
    };
    let progress = Progress::new();
    let started = Instant::now();
    let index = AttractorIndex::build_with_observer(text, &config, &progress)
        .with_context(|| format!("indexing {}", args.file.display()))?;
    Ok((index, started.elapsed()))
}

fn brotli_size(data: &[u8]) -> Result<usize> {
    let mut compressed = Vec::new();
    {
        let mut encoder = brotli::CompressorWriter::new(&mut compressed, 4096, 11, 22);
        encoder.write_all(data).context("brotli compression")?;
    }
    Ok(compressed.len())
}

// ═══════════════════════════════════════════════════════════════════════════
// STATS
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsReport<'a> {
    file: String,
    build_ms: f64,
    brotli_bytes: usize,
    #[serde(flatten)]
    stats: &'a IndexStats,
}

fn run_stats(args: &BuildArgs, json: bool) -> Result<()> {
    let text = read_input(&args.file)?;
    let (index, elapsed) = build_index(args, &text)?;
    let stats = index.stats();
    let brotli_bytes = brotli_size(&text)?;

    if json {
        let report = StatsReport {
            file: args.file.display().to_string(),
            build_ms: elapsed.as_secs_f64() * 1000.0,
            brotli_bytes,
            stats: &stats,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!();
    banner(&format!("ATTRIX  {}", args.file.display()));

    section_top("TEXT");
    row(&format!("  length      {}", pad_left(&format_size(stats.text_len), 12)));
    row(&format!("  brotli -11  {}", pad_left(&format_size(brotli_bytes), 12)));
    row(&format!(
        "  attractors  {}   τ = {}   α = {}",
        pad_left(&stats.gamma.to_string(), 12),
        stats.tau,
        stats.alpha
    ));
    row(&format!(
        "  build       {}",
        pad_left(&format!("{:.1} ms", elapsed.as_secs_f64() * 1000.0), 12)
    ));

    section_mid("LEVELS");
    row(&dim("  depth  kind    block_len      blocks   padding         size"));
    for level in &stats.levels {
        row(&format!(
            "  {}  {} {} {} {} {}",
            pad_left(&level.depth.to_string(), 5),
            pad_right(&level_badge(level.terminal), 6),
            pad_left(&level.block_len.to_string(), 12),
            pad_left(&level.blocks.to_string(), 11),
            pad_left(&level.padding_blocks.to_string(), 9),
            pad_left(&format_size(level.heap_bytes), 12),
        ));
    }

    section_mid("MEMORY");
    row(&format!(
        "  links {}   literals {}",
        pad_left(&stats.link_count.to_string(), 10),
        pad_left(&format_size(stats.literal_bytes), 10)
    ));
    row(&format!(
        "  total {}   {:.2} B/symbol   vs brotli {}",
        pad_left(&format_size(stats.heap_bytes), 10),
        stats.bytes_per_symbol(),
        ratio_colored(stats.heap_bytes, brotli_bytes)
    ));
    section_bot();
    println!();

    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// QUERY
// ═══════════════════════════════════════════════════════════════════════════

fn run_query(args: &BuildArgs, offset: usize, len: usize, raw: bool) -> Result<()> {
    let text = read_input(&args.file)?;
    let (index, _) = build_index(args, &text)?;
    let bytes = index
        .query_range(offset, len)
        .with_context(|| format!("querying [{}, {})", offset, offset.saturating_add(len)))?;

    if raw {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&bytes)?;
        stdout.flush()?;
    } else {
        println!("{}", escape_bytes(&bytes));
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// VERIFY
// ═══════════════════════════════════════════════════════════════════════════

fn crc32(data: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

fn run_verify(args: &BuildArgs, samples: usize, seed: u64) -> Result<()> {
    let text = read_input(&args.file)?;
    let (index, elapsed) = build_index(args, &text)?;

    let started = Instant::now();
    let rebuilt = index.extract_all().context("extracting text")?;
    let extract_time = started.elapsed();

    let expected = crc32(&text);
    let actual = crc32(&rebuilt);
    if expected != actual || rebuilt != text {
        eprintln!(
            "{} crc32 {:08x} != {:08x}",
            fail("MISMATCH"),
            actual,
            expected
        );
        if let Some(i) = rebuilt.iter().zip(&text).position(|(a, b)| a != b) {
            eprintln!("   first difference at offset {}", i);
        }
        bail!("reconstruction of {} differs", args.file.display());
    }

    let mut rng = XorShift64::new(seed);
    let positions: Vec<usize> = (0..samples).map(|_| rng.below(text.len())).collect();
    let started = Instant::now();
    let mut checksum = 0u64;
    for &p in &positions {
        let b = index.query(p)?;
        if b != text[p] {
            bail!("query({}) returned {:#04x}, expected {:#04x}", p, b, text[p]);
        }
        checksum = checksum.wrapping_add(u64::from(b));
    }
    let query_time = started.elapsed();

    println!(
        "{} crc32 {:08x}  ({} bytes, built in {:.1} ms)",
        ok("OK"),
        actual,
        text.len(),
        elapsed.as_secs_f64() * 1000.0
    );
    println!(
        "   extract_all  {} µs total",
        timing_us(extract_time.as_secs_f64() * 1e6)
    );
    if samples > 0 {
        println!(
            "   query        {} µs/op  over {} random positions {}",
            timing_us(query_time.as_secs_f64() * 1e6 / samples as f64),
            samples,
            dim(&format!("(sum {})", checksum))
        );
    }
    Ok(())
}
