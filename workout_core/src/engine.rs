//! Progression engine walking a workout program step by step.
//!
//! The engine traverses program → week → day → section → exercise → set in
//! declared order and drives a [`Presenter`] through every announcement,
//! confirmation and countdown:
//! - Rest days get one announcement and one confirmation, nothing else
//! - Training days preview their sections, then walk them in order
//! - Timed and reps exercises repeat per set with a rest between sets
//! - Rest and info exercises run a single countdown (info may skip it)

use crate::config::PacingConfig;
use crate::presenter::{Presenter, Progress};
use crate::rollup::{detail_for, DayPreview};
use crate::timer::{Clock, Countdown, CountdownKind, SystemClock};
use crate::{Day, Exercise, ExerciseKind, Program, Result, Section, Week};
use std::ops::ControlFlow;

/// Default rest between sets of a timed exercise
pub const TIMED_SET_REST_SECONDS: u32 = 60;

/// Default rest between sets of a reps exercise
pub const REPS_SET_REST_SECONDS: u32 = 90;

const SET_REST_LABEL: &str = "Rest between sets";
const READING_LABEL: &str = "Study the technique";

/// How a run ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every week and day was walked
    Completed,
    /// The user declined a confirmation
    Stopped,
}

/// Inter-set rest lengths used by the engine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pacing {
    pub timed_set_rest_seconds: u32,
    pub reps_set_rest_seconds: u32,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            timed_set_rest_seconds: TIMED_SET_REST_SECONDS,
            reps_set_rest_seconds: REPS_SET_REST_SECONDS,
        }
    }
}

impl From<&PacingConfig> for Pacing {
    fn from(config: &PacingConfig) -> Self {
        Self {
            timed_set_rest_seconds: config.timed_set_rest_seconds,
            reps_set_rest_seconds: config.reps_set_rest_seconds,
        }
    }
}

type Flow = ControlFlow<()>;

/// Return early from the enclosing step when the user chose to stop
macro_rules! proceed {
    ($flow:expr) => {
        if let ControlFlow::Break(()) = $flow {
            return Ok(ControlFlow::Break(()));
        }
    };
}

/// Run a program once with real-time pacing and default rest lengths
pub fn run<P: Presenter + ?Sized>(program: &Program, presenter: &mut P) -> Result<RunOutcome> {
    let mut clock = SystemClock::default();
    ProgressionEngine::new(presenter, &mut clock, Pacing::default()).run(program)
}

/// Single-pass state machine over a [`Program`]
pub struct ProgressionEngine<'a, P: ?Sized, C: ?Sized> {
    presenter: &'a mut P,
    clock: &'a mut C,
    pacing: Pacing,
    progress: Progress,
}

impl<'a, P, C> ProgressionEngine<'a, P, C>
where
    P: Presenter + ?Sized,
    C: Clock + ?Sized,
{
    pub fn new(presenter: &'a mut P, clock: &'a mut C, pacing: Pacing) -> Self {
        Self {
            presenter,
            clock,
            pacing,
            progress: Progress::default(),
        }
    }

    /// Progress as of the last completed day
    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Traverse the whole program once
    ///
    /// The first presenter error aborts the run; it is reported through
    /// `notify_error` and returned.
    pub fn run(&mut self, program: &Program) -> Result<RunOutcome> {
        self.progress = Progress::new(program.total_days());
        tracing::info!(
            "Starting program '{}' ({} weeks, {} days)",
            program.title,
            program.weeks.len(),
            self.progress.total_days
        );

        match self.run_program(program) {
            Ok(ControlFlow::Continue(())) => {
                tracing::info!("Program '{}' completed", program.title);
                Ok(RunOutcome::Completed)
            }
            Ok(ControlFlow::Break(())) => {
                tracing::info!(
                    "Program '{}' stopped by user at {:.0}%",
                    program.title,
                    self.progress.percent()
                );
                Ok(RunOutcome::Stopped)
            }
            Err(e) => {
                tracing::error!("Aborting program '{}': {}", program.title, e);
                self.presenter.notify_error(&e.to_string());
                Err(e)
            }
        }
    }

    fn run_program(&mut self, program: &Program) -> Result<Flow> {
        self.presenter.announce_preview(program)?;
        proceed!(self.gate("Ready to start the program?")?);

        for week in &program.weeks {
            proceed!(self.run_week(week)?);
        }

        self.presenter.announce_run_complete()?;
        Ok(ControlFlow::Continue(()))
    }

    fn run_week(&mut self, week: &Week) -> Result<Flow> {
        tracing::debug!("Week {} start", week.number);
        self.presenter.announce_week(week)?;
        proceed!(self.gate("Ready to start the week?")?);

        for day in &week.days {
            proceed!(self.run_day(day)?);
        }

        self.presenter.announce_week_complete(week, self.progress)?;
        Ok(ControlFlow::Continue(()))
    }

    fn run_day(&mut self, day: &Day) -> Result<Flow> {
        if day.is_rest_day {
            tracing::debug!("Rest day '{}'", day.name);
            self.presenter.announce_rest_day(day)?;
            proceed!(self.gate("Press Enter to continue")?);
            self.progress.completed_days += 1;
            return Ok(ControlFlow::Continue(()));
        }

        tracing::debug!(
            "Training day '{}' with {} sections",
            day.name,
            day.sections.len()
        );
        let preview = DayPreview::for_day(day);
        self.presenter.announce_day(day, &preview)?;
        proceed!(self.gate("Ready to start the workout?")?);

        for section in &day.sections {
            proceed!(self.run_section(section)?);
        }

        self.progress.completed_days += 1;
        self.presenter.announce_day_complete(day, self.progress)?;
        Ok(ControlFlow::Continue(()))
    }

    fn run_section(&mut self, section: &Section) -> Result<Flow> {
        self.presenter.announce_section(section)?;
        proceed!(self.gate("Moving on to the exercises")?);

        for exercise in &section.exercises {
            proceed!(self.run_exercise(exercise)?);
        }

        Ok(ControlFlow::Continue(()))
    }

    fn run_exercise(&mut self, exercise: &Exercise) -> Result<Flow> {
        tracing::debug!("Exercise '{}' ({:?})", exercise.name, exercise.kind);
        self.presenter
            .announce_exercise(exercise, &detail_for(exercise))?;

        match exercise.kind {
            ExerciseKind::Info => self.run_info(exercise),
            ExerciseKind::Timed => self.run_sets(exercise, self.pacing.timed_set_rest_seconds),
            ExerciseKind::Reps => self.run_sets(exercise, self.pacing.reps_set_rest_seconds),
            ExerciseKind::Rest => {
                self.countdown(exercise.duration, &exercise.name, CountdownKind::Rest)?;
                Ok(ControlFlow::Continue(()))
            }
        }
    }

    fn run_info(&mut self, exercise: &Exercise) -> Result<Flow> {
        if exercise.read_time > 0 {
            self.countdown(exercise.read_time, READING_LABEL, CountdownKind::Reading)?;
        }
        self.gate("Got it? Moving on")
    }

    /// Set loop shared by timed and reps exercises
    fn run_sets(&mut self, exercise: &Exercise, rest_seconds: u32) -> Result<Flow> {
        let total = exercise.set_count();

        for set in 1..=total {
            self.presenter.announce_set(exercise, set, total)?;

            match exercise.kind {
                ExerciseKind::Timed => {
                    proceed!(self.gate("Ready to start?")?);
                    self.countdown(exercise.duration, &exercise.name, CountdownKind::Work)?;
                }
                _ => {
                    proceed!(self.gate("Do the set, then confirm")?);
                }
            }

            if set < total {
                self.presenter.announce_set_complete()?;
                self.countdown(rest_seconds, SET_REST_LABEL, CountdownKind::Rest)?;
            }
        }

        self.presenter.announce_exercise_complete()?;
        Ok(ControlFlow::Continue(()))
    }

    fn countdown(&mut self, seconds: u32, label: &str, kind: CountdownKind) -> Result<()> {
        Countdown::new(seconds, label, kind).run(&mut *self.presenter, &mut *self.clock)
    }

    fn gate(&mut self, prompt: &str) -> Result<Flow> {
        if self.presenter.confirm(prompt)? {
            Ok(ControlFlow::Continue(()))
        } else {
            Ok(ControlFlow::Break(()))
        }
    }
}
