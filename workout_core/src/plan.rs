//! Workout plan loading.
//!
//! Plans are YAML files describing a [`Program`]. Loading parses the file
//! and validates its structure so the engine can treat every program it
//! receives as well-formed.

use crate::{Error, ExerciseKind, Program, Result};
use std::path::Path;

/// Load and validate a plan from a YAML file
pub fn load_program(path: &Path) -> Result<Program> {
    let contents = std::fs::read_to_string(path)?;
    let program = parse_program(&contents)?;
    tracing::info!(
        "Loaded plan '{}' from {:?} ({} weeks)",
        program.title,
        path,
        program.weeks.len()
    );
    Ok(program)
}

/// Parse and validate a plan from YAML text
pub fn parse_program(contents: &str) -> Result<Program> {
    let program: Program = serde_yaml::from_str(contents)?;

    let errors = program.validate();
    if !errors.is_empty() {
        for error in &errors {
            tracing::warn!("Plan validation: {}", error);
        }
        return Err(Error::PlanValidation(errors.join("; ")));
    }

    Ok(program)
}

impl Program {
    /// Validate the program structure
    ///
    /// Returns a list of problems; empty means the program is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push("Program has empty title".to_string());
        }
        if self.weeks.is_empty() {
            errors.push("Program has no weeks".to_string());
        }

        for week in &self.weeks {
            if week.days.is_empty() {
                errors.push(format!("Week {} has no days", week.number));
            }

            for day in &week.days {
                let day_ref = format!("Week {} day '{}'", week.number, day.name);

                if day.name.trim().is_empty() {
                    errors.push(format!("Week {} has a day with empty name", week.number));
                }

                if day.is_rest_day {
                    if !day.sections.is_empty() {
                        errors.push(format!("{} is a rest day but has sections", day_ref));
                    }
                    continue;
                }

                if day.sections.is_empty() {
                    errors.push(format!("{} has no sections", day_ref));
                }

                for section in &day.sections {
                    if section.name.trim().is_empty() {
                        errors.push(format!("{} has a section with empty name", day_ref));
                    }
                    if section.exercises.is_empty() {
                        errors.push(format!(
                            "{} section '{}' has no exercises",
                            day_ref, section.name
                        ));
                    }

                    for exercise in &section.exercises {
                        if exercise.name.trim().is_empty() {
                            errors.push(format!(
                                "{} section '{}' has an exercise with empty name",
                                day_ref, section.name
                            ));
                        }
                        // Zero-length timers are allowed; the engine emits no ticks
                        if exercise.kind == ExerciseKind::Reps && exercise.reps == 0 {
                            tracing::warn!(
                                "{} exercise '{}' has no rep target",
                                day_ref,
                                exercise.name
                            );
                        }
                    }
                }
            }
        }

        errors
    }
}
