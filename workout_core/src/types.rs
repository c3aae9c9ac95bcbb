//! Core domain types for the workout trainer.
//!
//! This module defines the hierarchical plan the engine walks:
//! - Program: the whole multi-week plan
//! - Weeks and days (training days or rest days)
//! - Sections grouping exercises
//! - Exercises, tagged with a closed [`ExerciseKind`]
//!
//! Field names follow the on-disk YAML plan format.

use serde::{Deserialize, Serialize};

// ============================================================================
// Plan Types
// ============================================================================

/// A complete multi-week workout program
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Program {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Display-only duration label, e.g. "2 weeks"
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub weeks: Vec<Week>,
}

/// One week of the program
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Week {
    pub number: u32,
    #[serde(default)]
    pub days: Vec<Day>,
}

/// A training day or a rest day
///
/// Rest days carry a message and no sections; training days carry at
/// least one section.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Day {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub is_rest_day: bool,
    #[serde(default)]
    pub rest_message: String,
}

/// A named group of exercises (warm-up, main block, cool-down...)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Section {
    pub name: String,
    /// Display-only duration label; timing comes from the exercises
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

// ============================================================================
// Exercise Types
// ============================================================================

/// Kind of step an exercise produces
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    /// Held for `duration` seconds per set
    Timed,
    /// `reps` repetitions per set, self-paced
    Reps,
    /// Single rest countdown of `duration` seconds
    Rest,
    /// Reading material, optionally with a `read_time` countdown
    Info,
}

/// A single exercise definition
///
/// Only the fields relevant to `kind` are used by the engine.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ExerciseKind,
    /// Seconds, for timed and rest exercises
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub reps: u32,
    /// Zero means a single set
    #[serde(default)]
    pub sets: u32,
    #[serde(default)]
    pub description: String,
    /// Seconds, for info exercises
    #[serde(default)]
    pub read_time: u32,
}

impl Exercise {
    /// Create an exercise of the given kind with every numeric field unset
    pub fn new(name: impl Into<String>, kind: ExerciseKind) -> Self {
        Self {
            name: name.into(),
            kind,
            duration: 0,
            reps: 0,
            sets: 0,
            description: String::new(),
            read_time: 0,
        }
    }

    /// Number of sets actually performed (an unset count means one set)
    pub fn set_count(&self) -> u32 {
        self.sets.max(1)
    }
}

impl Program {
    /// Total number of days across all weeks, rest days included
    pub fn total_days(&self) -> usize {
        self.weeks.iter().map(|w| w.days.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_count_defaults_to_one() {
        let mut exercise = Exercise::new("Plank", ExerciseKind::Timed);
        assert_eq!(exercise.set_count(), 1);

        exercise.sets = 1;
        assert_eq!(exercise.set_count(), 1);

        exercise.sets = 4;
        assert_eq!(exercise.set_count(), 4);
    }

    #[test]
    fn test_total_days_counts_rest_days() {
        let program = Program {
            title: "Test".into(),
            weeks: vec![
                Week {
                    number: 1,
                    days: vec![Day::default(), Day::default()],
                },
                Week {
                    number: 2,
                    days: vec![Day {
                        is_rest_day: true,
                        ..Day::default()
                    }],
                },
            ],
            ..Program::default()
        };

        assert_eq!(program.total_days(), 3);
    }

    #[test]
    fn test_kind_uses_lowercase_type_tag() {
        let exercise: Exercise = serde_yaml::from_str(
            "name: Squats\ntype: reps\nreps: 12\nsets: 3\n",
        )
        .unwrap();

        assert_eq!(exercise.kind, ExerciseKind::Reps);
        assert_eq!(exercise.reps, 12);
        assert_eq!(exercise.duration, 0);
    }
}
