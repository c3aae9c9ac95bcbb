//! Countdown timer and clock abstraction.
//!
//! A countdown emits one [`Tick`] per clock unit, from `total` down to 1,
//! then a single completion event. Waiting between ticks goes through the
//! [`Clock`] trait so tests can count sleeps instead of spending real time.

use crate::presenter::Presenter;
use crate::Result;
use std::time::Duration;

/// What a countdown is timing; presenters style each kind differently
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CountdownKind {
    /// A timed work set
    Work,
    /// Rest between sets or a rest exercise
    Rest,
    /// Reading period for an info exercise
    Reading,
}

/// One countdown update
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tick {
    pub remaining: u32,
    pub total: u32,
    pub label: String,
    pub kind: CountdownKind,
}

impl Tick {
    /// Seconds already elapsed
    pub fn elapsed(&self) -> u32 {
        self.total.saturating_sub(self.remaining)
    }

    /// `(total - remaining) / total`, clamped to `[0, 1]`
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        (self.elapsed() as f64 / self.total as f64).clamp(0.0, 1.0)
    }
}

/// Source of blocking waits between ticks
pub trait Clock {
    /// Block for one countdown unit
    fn sleep_tick(&mut self);
}

/// Real-time clock sleeping the configured tick length
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    tick: Duration,
}

impl SystemClock {
    pub fn new(tick: Duration) -> Self {
        Self { tick }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl Clock for SystemClock {
    fn sleep_tick(&mut self) {
        if !self.tick.is_zero() {
            std::thread::sleep(self.tick);
        }
    }
}

/// A single countdown of `total` seconds
#[derive(Clone, Debug)]
pub struct Countdown {
    total: u32,
    label: String,
    kind: CountdownKind,
}

impl Countdown {
    pub fn new(total: u32, label: impl Into<String>, kind: CountdownKind) -> Self {
        Self {
            total,
            label: label.into(),
            kind,
        }
    }

    /// Run the countdown to completion
    ///
    /// A zero-length countdown emits no ticks and completes immediately.
    pub fn run<P: Presenter + ?Sized, C: Clock + ?Sized>(
        &self,
        presenter: &mut P,
        clock: &mut C,
    ) -> Result<()> {
        tracing::debug!(
            "Countdown '{}' ({:?}) for {} seconds",
            self.label,
            self.kind,
            self.total
        );

        for remaining in (1..=self.total).rev() {
            presenter.tick(&Tick {
                remaining,
                total: self.total,
                label: self.label.clone(),
                kind: self.kind,
            })?;
            clock.sleep_tick();
        }

        presenter.announce_countdown_complete(&self.label, self.kind)
    }
}
