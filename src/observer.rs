// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Construction progress events.
//!
//! The library never prints. Callers that want progress pass a
//! [`BuildObserver`]; the CLI turns the events into a spinner.

use serde::Serialize;

/// One step of index construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum BuildEvent {
    /// Suffix array is ready (skipped when it was supplied by the caller).
    SuffixArrayBuilt { len: usize },
    /// LZ77 parse is ready; `phrases` is ɤ.
    Factorized { phrases: usize },
    /// A level finished.
    LevelBuilt {
        depth: usize,
        block_len: usize,
        blocks: usize,
        terminal: bool,
    },
    /// All levels are built.
    Finished { levels: usize, alpha: usize },
}

/// Receives [`BuildEvent`]s in construction order.
pub trait BuildObserver {
    fn on_event(&self, event: &BuildEvent);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl BuildObserver for NoopObserver {
    #[inline]
    fn on_event(&self, _event: &BuildEvent) {}
}

impl<F: Fn(&BuildEvent)> BuildObserver for F {
    fn on_event(&self, event: &BuildEvent) {
        self(event)
    }
}
