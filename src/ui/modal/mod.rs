// SPDX-License-Identifier: MPL-2.0
//! Detail modal shown over the grid for the selected item.
//!
//! The modal tracks two things:
//!
//! - **Open**: whether an item is selected. The modal never decides this
//!   itself; the owner pushes it in with [`State::sync`] after every change
//!   to the selection.
//! - **Animated**: whether the entrance has started. Opening leaves the
//!   modal in [`AnimationPhase::Pending`] so the first paint shows the
//!   hidden layers. The next frame moves it to [`AnimationPhase::Entered`],
//!   from which [`RevealFrame`]s are computed.
//!
//! While open the modal holds a scope (Escape listener and scroll lock) that
//! is released exactly once when it closes or is torn down.

mod reveal;
mod scope;
mod view;

pub use reveal::RevealFrame;
pub use scope::ScopeStats;
pub use view::{view, ViewContext};

use crate::config::RevealTimings;
use scope::Scope;
use std::time::Instant;

/// Entrance state of an open modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationPhase {
    /// Painted in the hidden state, waiting for the next frame.
    #[default]
    Pending,
    /// Entrance started at the given frame.
    Entered { at: Instant },
}

#[derive(Debug, Clone)]
pub enum Message {
    Frame(Instant),
    EscapePressed,
    BackdropPressed,
    ClosePressed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The user asked to close; the owner should clear the selection.
    CloseRequested,
}

#[derive(Debug)]
pub struct State {
    open: bool,
    phase: AnimationPhase,
    scope: Option<Scope>,
    stats: ScopeStats,
    timings: RevealTimings,
    show_image: bool,
    last_frame: Option<Instant>,
    settled: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new(RevealTimings::default(), true)
    }
}

impl State {
    #[must_use]
    pub fn new(timings: RevealTimings, show_image: bool) -> Self {
        Self {
            open: false,
            phase: AnimationPhase::Pending,
            scope: None,
            stats: ScopeStats::default(),
            timings,
            show_image,
            last_frame: None,
            settled: false,
        }
    }

    /// Applies the open flag derived from the selection.
    ///
    /// Opening acquires the scope and restarts the entrance from
    /// [`AnimationPhase::Pending`]. Closing resets the phase immediately and
    /// releases the scope. Repeating the current value does nothing.
    pub fn sync(&mut self, open: bool, now: Instant) {
        if open == self.open {
            return;
        }

        self.open = open;
        self.phase = AnimationPhase::Pending;
        self.last_frame = None;
        self.settled = false;

        if open {
            self.scope = Some(Scope::acquire(now, &mut self.stats));
        } else {
            self.release_scope();
        }
    }

    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::Frame(at) => {
                self.on_frame(at);
                Effect::None
            }
            Message::EscapePressed if self.listens_for_escape() => Effect::CloseRequested,
            Message::BackdropPressed | Message::ClosePressed if self.open => {
                Effect::CloseRequested
            }
            _ => Effect::None,
        }
    }

    fn on_frame(&mut self, at: Instant) {
        let Some(opened_at) = self.scope.as_ref().map(Scope::opened_at) else {
            return;
        };
        // Frames requested before this opening belong to an earlier one.
        if at < opened_at {
            return;
        }

        let entered_at = match self.phase {
            AnimationPhase::Pending => {
                self.phase = AnimationPhase::Entered { at };
                at
            }
            AnimationPhase::Entered { at } => at,
        };

        self.last_frame = Some(at);
        let elapsed = at.saturating_duration_since(entered_at);
        self.settled = reveal::is_complete(elapsed, &self.timings);
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn is_animated(&self) -> bool {
        matches!(self.phase, AnimationPhase::Entered { .. })
    }

    #[must_use]
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    /// True while the entrance still needs frames.
    #[must_use]
    pub fn needs_frames(&self) -> bool {
        self.open && !self.settled
    }

    #[must_use]
    pub fn listens_for_escape(&self) -> bool {
        self.scope.is_some()
    }

    #[must_use]
    pub fn locks_scroll(&self) -> bool {
        self.scope.is_some()
    }

    #[must_use]
    pub fn shows_image(&self) -> bool {
        self.show_image
    }

    #[must_use]
    pub fn scope_stats(&self) -> ScopeStats {
        self.stats
    }

    /// Layer state at `now`.
    #[must_use]
    pub fn reveal_at(&self, now: Instant) -> RevealFrame {
        match self.phase {
            AnimationPhase::Pending => RevealFrame::HIDDEN,
            AnimationPhase::Entered { at } => {
                RevealFrame::at(now.saturating_duration_since(at), &self.timings)
            }
        }
    }

    /// Layer state at the most recent frame.
    #[must_use]
    pub fn reveal(&self) -> RevealFrame {
        if self.settled {
            return RevealFrame::SETTLED;
        }
        match self.last_frame {
            Some(now) => self.reveal_at(now),
            None => RevealFrame::HIDDEN,
        }
    }

    /// Closes the modal and releases its scope regardless of the selection.
    /// Safe to call more than once.
    pub fn teardown(&mut self) {
        self.open = false;
        self.phase = AnimationPhase::Pending;
        self.last_frame = None;
        self.settled = false;
        self.release_scope();
    }

    fn release_scope(&mut self) {
        if let Some(scope) = self.scope.take() {
            scope.release(&mut self.stats);
        }
    }
}

impl Drop for State {
    fn drop(&mut self) {
        self.release_scope();
    }
}
