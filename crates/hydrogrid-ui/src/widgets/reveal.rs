//! Reveal-on-scroll sections.
//!
//! Mirrors the observe-then-unobserve intersection pattern: a section
//! latches to revealed the first time enough of it is visible and never
//! un-reveals, so fade-in animations play exactly once.

use indexmap::IndexMap;

/// Visible fraction at which a section reveals.
pub const DEFAULT_REVEAL_THRESHOLD: f32 = 0.2;

/// One-shot reveal latch for a single section.
#[derive(Clone, Copy, Debug)]
pub struct RevealState {
    threshold: f32,
    revealed: bool,
}

impl RevealState {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            revealed: false,
        }
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Feeds the latest visible fraction; returns true exactly once, on the
    /// observation that crosses the threshold.
    pub fn observe(&mut self, visible_fraction: f32) -> bool {
        if !self.revealed && visible_fraction >= self.threshold {
            self.revealed = true;
            return true;
        }
        false
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_THRESHOLD)
    }
}

/// Reveal tracking for many sections, keyed by section id. Iteration order
/// follows first observation, which is document order in practice.
#[derive(Clone, Debug, Default)]
pub struct RevealSet {
    sections: IndexMap<u64, RevealState>,
    threshold: f32,
}

impl RevealSet {
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_REVEAL_THRESHOLD)
    }

    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            sections: IndexMap::new(),
            threshold,
        }
    }

    /// Feeds one section's visible fraction; returns whether it newly
    /// revealed. Unknown keys start tracking implicitly.
    pub fn observe(&mut self, key: u64, visible_fraction: f32) -> bool {
        let threshold = self.threshold;
        self.sections
            .entry(key)
            .or_insert_with(|| RevealState::new(threshold))
            .observe(visible_fraction)
    }

    /// Feeds a whole visibility sweep; returns the keys that newly
    /// revealed, in sweep order.
    pub fn sweep(&mut self, visibilities: impl IntoIterator<Item = (u64, f32)>) -> Vec<u64> {
        visibilities
            .into_iter()
            .filter(|&(key, fraction)| self.observe(key, fraction))
            .map(|(key, _)| key)
            .collect()
    }

    pub fn is_revealed(&self, key: u64) -> bool {
        self.sections.get(&key).is_some_and(|s| s.revealed())
    }

    pub fn revealed_count(&self) -> usize {
        self.sections.values().filter(|s| s.revealed()).count()
    }
}
