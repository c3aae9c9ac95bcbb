//! Recording presenter used by the unit tests.

use crate::presenter::{Presenter, Progress};
use crate::rollup::DayPreview;
use crate::timer::{CountdownKind, Tick};
use crate::{Day, Error, Exercise, Program, Result, Section, Week};
use std::collections::VecDeque;

/// Everything a presenter can be asked to do, flattened for assertions
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Preview(String),
    Week(u32),
    Day(String, DayPreview),
    RestDay(String, String),
    Section(String),
    Exercise(String, String),
    Set(String, u32, u32),
    Tick(Tick),
    CountdownComplete(String, CountdownKind),
    SetComplete,
    ExerciseComplete,
    DayComplete(String, Progress),
    WeekComplete(u32, Progress),
    RunComplete,
    Confirm(String),
    Error(String),
}

/// Presenter that records events instead of rendering them
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub events: Vec<Event>,
    /// Scripted confirmation answers; `true` once exhausted
    pub answers: VecDeque<bool>,
    /// Fail the n-th (1-based) tick call
    pub fail_on_tick: Option<usize>,
    /// Fail the n-th (1-based) confirm call
    pub fail_on_confirm: Option<usize>,
    ticks_seen: usize,
    confirms_seen: usize,
}

impl RecordingPresenter {
    pub fn with_answers(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Presenter whose n-th (1-based) tick call fails
    pub fn failing_on_tick(n: usize) -> Self {
        Self {
            fail_on_tick: Some(n),
            ..Self::default()
        }
    }

    /// Presenter whose n-th (1-based) confirm call fails
    pub fn failing_on_confirm(n: usize) -> Self {
        Self {
            fail_on_confirm: Some(n),
            ..Self::default()
        }
    }

    pub fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }

    pub fn tick_count(&self) -> usize {
        self.count(|e| matches!(e, Event::Tick(_)))
    }
}

impl Presenter for RecordingPresenter {
    fn announce_preview(&mut self, program: &Program) -> Result<()> {
        self.events.push(Event::Preview(program.title.clone()));
        Ok(())
    }

    fn announce_week(&mut self, week: &Week) -> Result<()> {
        self.events.push(Event::Week(week.number));
        Ok(())
    }

    fn announce_day(&mut self, day: &Day, preview: &DayPreview) -> Result<()> {
        self.events.push(Event::Day(day.name.clone(), preview.clone()));
        Ok(())
    }

    fn announce_rest_day(&mut self, day: &Day) -> Result<()> {
        self.events
            .push(Event::RestDay(day.name.clone(), day.rest_message.clone()));
        Ok(())
    }

    fn announce_section(&mut self, section: &Section) -> Result<()> {
        self.events.push(Event::Section(section.name.clone()));
        Ok(())
    }

    fn announce_exercise(&mut self, exercise: &Exercise, detail: &str) -> Result<()> {
        self.events
            .push(Event::Exercise(exercise.name.clone(), detail.to_string()));
        Ok(())
    }

    fn announce_set(&mut self, exercise: &Exercise, index: u32, total: u32) -> Result<()> {
        self.events
            .push(Event::Set(exercise.name.clone(), index, total));
        Ok(())
    }

    fn tick(&mut self, tick: &Tick) -> Result<()> {
        self.ticks_seen += 1;
        if self.fail_on_tick == Some(self.ticks_seen) {
            return Err(Error::Presentation("output closed".into()));
        }
        self.events.push(Event::Tick(tick.clone()));
        Ok(())
    }

    fn announce_countdown_complete(&mut self, label: &str, kind: CountdownKind) -> Result<()> {
        self.events
            .push(Event::CountdownComplete(label.to_string(), kind));
        Ok(())
    }

    fn announce_set_complete(&mut self) -> Result<()> {
        self.events.push(Event::SetComplete);
        Ok(())
    }

    fn announce_exercise_complete(&mut self) -> Result<()> {
        self.events.push(Event::ExerciseComplete);
        Ok(())
    }

    fn announce_day_complete(&mut self, day: &Day, progress: Progress) -> Result<()> {
        self.events
            .push(Event::DayComplete(day.name.clone(), progress));
        Ok(())
    }

    fn announce_week_complete(&mut self, week: &Week, progress: Progress) -> Result<()> {
        self.events.push(Event::WeekComplete(week.number, progress));
        Ok(())
    }

    fn announce_run_complete(&mut self) -> Result<()> {
        self.events.push(Event::RunComplete);
        Ok(())
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        self.confirms_seen += 1;
        if self.fail_on_confirm == Some(self.confirms_seen) {
            return Err(Error::Presentation("input stream closed".into()));
        }
        self.events.push(Event::Confirm(prompt.to_string()));
        Ok(self.answers.pop_front().unwrap_or(true))
    }

    fn notify_error(&mut self, message: &str) {
        self.events.push(Event::Error(message.to_string()));
    }
}
