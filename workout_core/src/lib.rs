#![forbid(unsafe_code)]

//! Core domain model and progression engine for the workout trainer.
//!
//! This crate provides:
//! - Plan types (program, weeks, days, sections, exercises)
//! - YAML plan loading and validation
//! - Day and program rollups for previews
//! - Countdown timer with an injectable clock
//! - The presentation port and the progression engine driving it

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod plan;
pub mod rollup;
pub mod timer;
pub mod presenter;
pub mod engine;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use plan::{load_program, parse_program};
pub use rollup::{exercise_detail, DayPreview, ProgramOutline};
pub use timer::{Clock, Countdown, CountdownKind, SystemClock, Tick};
pub use presenter::{Presenter, Progress};
pub use engine::{Pacing, ProgressionEngine, RunOutcome};
