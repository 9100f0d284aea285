//! Generated element identifiers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

/// Hands out unique, monotonically numbered element ids.
///
/// Widgets that need an id for `aria-activedescendant` references draw from a
/// generator.  [`IdGenerator::global`] is shared by every listbox in the
/// process; tests inject their own instance to get deterministic numbering.
#[derive(Debug, Default)]
pub struct IdGenerator {
    start: u64,
    next: AtomicU64,
}

impl IdGenerator {
    /// A fresh generator whose first id is numbered 0.
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// A fresh generator whose first id is numbered `start`.
    /// [`reset`](IdGenerator::reset) returns to `start`.
    pub fn starting_at(start: u64) -> Self {
        Self {
            start,
            next: AtomicU64::new(start),
        }
    }

    /// The process-wide generator.
    pub fn global() -> Arc<IdGenerator> {
        static GLOBAL: OnceLock<Arc<IdGenerator>> = OnceLock::new();
        GLOBAL.get_or_init(|| Arc::new(IdGenerator::new())).clone()
    }

    /// Return `"{prefix}-{n}"` and advance the counter.
    pub fn next_id(&self, prefix: &str) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{prefix}-{n}")
    }

    /// Number the next id from the starting value again.
    pub fn reset(&self) {
        self.next.store(self.start, Ordering::Relaxed);
    }
}
