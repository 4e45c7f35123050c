// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the attrix CLI.
//!
//! OneDark on dark terminals, One Light on light ones. `ATTRIX_THEME`
//! ("dark" / "light") overrides detection, then `COLORFGBG` is consulted,
//! then dark is assumed. `NO_COLOR` and non-TTY stdout disable escapes.

use std::sync::OnceLock;

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("ATTRIX_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221);
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164);
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            rgb(match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            })
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers, plain text off a TTY.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, ANSI escapes excluded.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

fn border(color_fn: fn() -> String) -> (String, &'static str) {
    if use_colors() {
        (color_fn(), RESET)
    } else {
        (String::new(), "")
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let (b, r) = border(GRAY);
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{b}│{r}{}{}{b}│{r}", content, " ".repeat(pad));
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let (b, r) = border(GRAY);
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{b}┌{r}{}{b}{}┐{r}", label_part, "─".repeat(remaining));
}

/// ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let (b, r) = border(GRAY);
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{b}├{r}{}{b}{}┤{r}", label_part, "─".repeat(remaining));
}

/// └──────────────────┘
pub fn section_bot() {
    let (b, r) = border(GRAY);
    println!("{b}└{}┘{r}", "─".repeat(BOX_WIDTH));
}

/// ╔═══╗ / ║ title ║ / ╚═══╝
pub fn banner(text: &str) {
    let (b, r) = border(BLUE);
    let colored = themed(CYAN, &[BOLD], text);
    let total_pad = BOX_WIDTH.saturating_sub(visible_len(&colored));
    let left = total_pad / 2;
    println!("{b}╔{}╗{r}", "═".repeat(BOX_WIDTH));
    println!(
        "{b}║{r}{}{}{}{b}║{r}",
        " ".repeat(left),
        colored,
        " ".repeat(total_pad - left)
    );
    println!("{b}╚{}╝{r}", "═".repeat(BOX_WIDTH));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// `[LINK]` or `[LIT]` for a level row.
pub fn level_badge(terminal: bool) -> String {
    let (tag, color): (&str, fn() -> String) = if terminal {
        ("LIT", MAGENTA)
    } else {
        ("LINK", BLUE)
    };
    themed(color, &[], &format!("[{}]", tag))
}

/// Size of `actual` relative to `baseline`, green when smaller.
pub fn ratio_colored(actual: usize, baseline: usize) -> String {
    if baseline == 0 {
        return themed(GRAY, &[], "   N/A");
    }
    let ratio = actual as f64 / baseline as f64;
    let text = format!("{:>6.2}x", ratio);
    if ratio <= 1.0 {
        themed(GREEN, &[BOLD], &text)
    } else if ratio <= 4.0 {
        themed(YELLOW, &[], &text)
    } else {
        themed(RED, &[], &text)
    }
}

pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visible), s)
    }
}

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Human-readable byte count.
pub fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

/// Microseconds, green under 1, yellow under 10, red above.
pub fn timing_us(value: f64) -> String {
    let text = format!("{:>10.3}", value);
    let color: fn() -> String = if value < 1.0 {
        GREEN
    } else if value < 10.0 {
        YELLOW
    } else {
        RED
    };
    themed(color, &[], &text)
}

/// Printable rendering of raw bytes: ASCII graphic characters as-is,
/// everything else as `\xNN`.
pub fn escape_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &b in bytes {
        match b {
            b'\n' => out.push_str("\\n"),
            b'\t' => out.push_str("\\t"),
            b'\\' => out.push_str("\\\\"),
            0x20..=0x7e => out.push(b as char),
            _ => out.push_str(&format!("\\x{:02x}", b)),
        }
    }
    out
}

/// Dimmed secondary text.
pub fn dim(text: &str) -> String {
    themed(GRAY, &[DIM], text)
}

pub fn ok(text: &str) -> String {
    themed(GREEN, &[BOLD], text)
}

pub fn fail(text: &str) -> String {
    themed(RED, &[BOLD], text)
}
