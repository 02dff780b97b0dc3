// SPDX-License-Identifier: MPL-2.0
//! Resources held while the modal is visible.
//!
//! Opening the modal acquires the Escape key listener and the gallery
//! scroll lock as a single [`Scope`]. Releasing consumes the scope, so a
//! scope can only ever be released once. The application derives its
//! Escape subscription and the grid's scroll lock from the scope being
//! held, which keeps them in step with the counts in [`ScopeStats`].

use std::time::Instant;

/// Acquisition and release counts over the modal's lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScopeStats {
    pub acquired: u32,
    pub released: u32,
}

impl ScopeStats {
    /// True when every acquired scope has been released.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.acquired == self.released
    }
}

#[derive(Debug)]
pub(super) struct Scope {
    opened_at: Instant,
}

impl Scope {
    pub(super) fn acquire(opened_at: Instant, stats: &mut ScopeStats) -> Self {
        stats.acquired += 1;
        log::debug!("Modal scope acquired (escape listener, scroll lock)");
        Self { opened_at }
    }

    pub(super) fn opened_at(&self) -> Instant {
        self.opened_at
    }

    pub(super) fn release(self, stats: &mut ScopeStats) {
        stats.released += 1;
        log::debug!(
            "Modal scope released after {:?}",
            self.opened_at.elapsed()
        );
    }
}
