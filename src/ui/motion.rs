// SPDX-License-Identifier: MPL-2.0
//! Time-based interpolation for UI transitions.
//!
//! Everything here is a pure function of elapsed time, so views can be
//! computed for any instant and tested without a running event loop.

use std::time::{Duration, Instant};

/// Timing curve applied to linear progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Cubic ease-out: fast start, gentle landing.
    #[default]
    EaseOut,
}

impl Easing {
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// A single transition: optional delay, then `duration` of eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
}

impl Transition {
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self {
            duration,
            delay: Duration::ZERO,
            easing: Easing::EaseOut,
        }
    }

    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[must_use]
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Delay plus duration.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.delay + self.duration
    }

    /// Eased progress in `0.0..=1.0` after `elapsed` time.
    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> f32 {
        let Some(active) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let linear = active.as_secs_f32() / self.duration.as_secs_f32();
        self.easing.apply(linear)
    }

    #[must_use]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.total()
    }
}

#[must_use]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// A value animated towards a target, restartable mid-flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    started: Option<Instant>,
    transition: Transition,
}

impl Tween {
    #[must_use]
    pub fn new(value: f32, transition: Transition) -> Self {
        Self {
            from: value,
            to: value,
            started: None,
            transition,
        }
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Starts moving towards `to` from wherever the value is at `now`.
    pub fn retarget(&mut self, to: f32, now: Instant) {
        if (self.to - to).abs() <= f32::EPSILON {
            return;
        }
        self.from = self.value_at(now);
        self.to = to;
        self.started = Some(now);
    }

    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        match self.started {
            Some(started) => {
                let t = self
                    .transition
                    .progress(now.saturating_duration_since(started));
                lerp(self.from, self.to, t)
            }
            None => self.to,
        }
    }

    #[must_use]
    pub fn is_running(&self, now: Instant) -> bool {
        self.started.is_some_and(|started| {
            !self
                .transition
                .is_finished(now.saturating_duration_since(started))
        })
    }
}
