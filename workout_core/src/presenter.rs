//! Presentation port consumed by the progression engine.
//!
//! The engine decides *what* happens and *when*; a [`Presenter`] decides how
//! it looks. Implementations render to a terminal, record events for tests,
//! or anything else. Every method may fail; the engine aborts the run on the
//! first error it receives.

use crate::rollup::DayPreview;
use crate::timer::{CountdownKind, Tick};
use crate::{Day, Exercise, Program, Result, Section, Week};

/// Completed-day counter handed to the presenter after each day and week
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Progress {
    pub completed_days: usize,
    pub total_days: usize,
}

impl Progress {
    pub fn new(total_days: usize) -> Self {
        Self {
            completed_days: 0,
            total_days,
        }
    }

    /// Completion percentage in `[0, 100]`; an empty program counts as done
    pub fn percent(&self) -> f64 {
        if self.total_days == 0 {
            return 100.0;
        }
        let done = self.completed_days.min(self.total_days);
        done as f64 / self.total_days as f64 * 100.0
    }
}

/// Rendering and acknowledgment operations the engine relies on
pub trait Presenter {
    /// Overview of the whole program before the first week
    fn announce_preview(&mut self, program: &Program) -> Result<()>;

    fn announce_week(&mut self, week: &Week) -> Result<()>;

    /// Training-day header with the rollup of its sections
    fn announce_day(&mut self, day: &Day, preview: &DayPreview) -> Result<()>;

    /// The single announcement made for a rest day
    fn announce_rest_day(&mut self, day: &Day) -> Result<()>;

    fn announce_section(&mut self, section: &Section) -> Result<()>;

    /// Exercise header, shown once on entry with its detail string
    fn announce_exercise(&mut self, exercise: &Exercise, detail: &str) -> Result<()>;

    /// Start of set `index` of `total` (1-based)
    fn announce_set(&mut self, exercise: &Exercise, index: u32, total: u32) -> Result<()>;

    /// One countdown update
    fn tick(&mut self, tick: &Tick) -> Result<()>;

    fn announce_countdown_complete(&mut self, label: &str, kind: CountdownKind) -> Result<()>;

    fn announce_set_complete(&mut self) -> Result<()>;

    fn announce_exercise_complete(&mut self) -> Result<()>;

    fn announce_day_complete(&mut self, day: &Day, progress: Progress) -> Result<()>;

    fn announce_week_complete(&mut self, week: &Week, progress: Progress) -> Result<()>;

    fn announce_run_complete(&mut self) -> Result<()>;

    /// Block until the user answers; `false` means the user wants to stop
    fn confirm(&mut self, prompt: &str) -> Result<bool>;

    /// Report a failure to the user once, where it happened
    fn notify_error(&mut self, message: &str);
}
