//! Read-only previews of the plan.
//!
//! Flattens days and programs into display-ready structures for the
//! day-overview and program-overview announcements. Nothing here mutates
//! or reorders the underlying [`Program`].

use crate::{Day, Exercise, ExerciseKind, Program};

/// Short description of an exercise's workload
///
/// Pure function of `(kind, duration, reps, sets)`; `sets <= 1` reads as a
/// single set.
pub fn exercise_detail(kind: ExerciseKind, duration: u32, reps: u32, sets: u32) -> String {
    match kind {
        ExerciseKind::Timed if sets <= 1 => format!("{} sec", duration),
        ExerciseKind::Timed => format!("{} sets × {} sec", sets, duration),
        ExerciseKind::Reps if sets <= 1 => format!("{} reps", reps),
        ExerciseKind::Reps => format!("{} sets × {} reps", sets, reps),
        ExerciseKind::Rest => format!("{} sec rest", duration),
        // Info exercises reuse the duration slot for their read time
        ExerciseKind::Info if duration == 0 => "info".to_string(),
        ExerciseKind::Info => format!("{} sec to review", duration),
    }
}

/// Detail string for a concrete exercise
pub fn detail_for(exercise: &Exercise) -> String {
    let seconds = match exercise.kind {
        ExerciseKind::Info => exercise.read_time,
        _ => exercise.duration,
    };
    exercise_detail(exercise.kind, seconds, exercise.reps, exercise.sets)
}

/// One exercise line of a day preview
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewEntry {
    /// 1-based position within its section
    pub ordinal: usize,
    pub label: String,
    pub kind: ExerciseKind,
    pub detail: String,
}

/// One section of a day preview
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewSection {
    /// 1-based position within the day
    pub ordinal: usize,
    pub name: String,
    pub duration: String,
    pub exercises: Vec<PreviewEntry>,
}

/// Rollup of a day's sections and exercises
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct DayPreview {
    pub sections: Vec<PreviewSection>,
}

impl DayPreview {
    /// Build the preview for a day, in declared order
    pub fn for_day(day: &Day) -> Self {
        let sections = day
            .sections
            .iter()
            .enumerate()
            .map(|(i, section)| PreviewSection {
                ordinal: i + 1,
                name: section.name.clone(),
                duration: section.duration.clone(),
                exercises: section
                    .exercises
                    .iter()
                    .enumerate()
                    .map(|(j, exercise)| PreviewEntry {
                        ordinal: j + 1,
                        label: exercise.name.clone(),
                        kind: exercise.kind,
                        detail: detail_for(exercise),
                    })
                    .collect(),
            })
            .collect();

        Self { sections }
    }

    /// Total number of exercise lines
    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.exercises.len()).sum()
    }
}

/// Day line of a program outline
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutlineDay {
    pub name: String,
    pub title: String,
    pub is_rest_day: bool,
}

/// Week block of a program outline
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutlineWeek {
    pub number: u32,
    pub days: Vec<OutlineDay>,
}

/// Week-by-week listing of a program's days
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ProgramOutline {
    pub weeks: Vec<OutlineWeek>,
}

impl ProgramOutline {
    pub fn for_program(program: &Program) -> Self {
        let weeks = program
            .weeks
            .iter()
            .map(|week| OutlineWeek {
                number: week.number,
                days: week
                    .days
                    .iter()
                    .map(|day| OutlineDay {
                        name: day.name.clone(),
                        title: day.title.clone(),
                        is_rest_day: day.is_rest_day,
                    })
                    .collect(),
            })
            .collect();

        Self { weeks }
    }

    /// Number of training (non-rest) days in the outline
    pub fn training_days(&self) -> usize {
        self.weeks
            .iter()
            .flat_map(|w| &w.days)
            .filter(|d| !d.is_rest_day)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Section, Week};

    fn timed(name: &str, duration: u32, sets: u32) -> Exercise {
        Exercise {
            duration,
            sets,
            ..Exercise::new(name, ExerciseKind::Timed)
        }
    }

    fn reps(name: &str, reps: u32, sets: u32) -> Exercise {
        Exercise {
            reps,
            sets,
            ..Exercise::new(name, ExerciseKind::Reps)
        }
    }

    #[test]
    fn test_detail_timed() {
        assert_eq!(exercise_detail(ExerciseKind::Timed, 30, 0, 3), "3 sets × 30 sec");
        assert_eq!(exercise_detail(ExerciseKind::Timed, 45, 0, 1), "45 sec");
        assert_eq!(exercise_detail(ExerciseKind::Timed, 45, 0, 0), "45 sec");
    }

    #[test]
    fn test_detail_reps() {
        assert_eq!(exercise_detail(ExerciseKind::Reps, 0, 12, 2), "2 sets × 12 reps");
        assert_eq!(exercise_detail(ExerciseKind::Reps, 0, 12, 0), "12 reps");
    }

    #[test]
    fn test_detail_rest_and_info() {
        assert_eq!(exercise_detail(ExerciseKind::Rest, 90, 0, 0), "90 sec rest");
        assert_eq!(exercise_detail(ExerciseKind::Info, 20, 0, 0), "20 sec to review");
        assert_eq!(exercise_detail(ExerciseKind::Info, 0, 0, 0), "info");
    }

    #[test]
    fn test_detail_is_pure() {
        let first = exercise_detail(ExerciseKind::Reps, 10, 8, 4);
        for _ in 0..3 {
            exercise_detail(ExerciseKind::Timed, 99, 1, 7);
            assert_eq!(exercise_detail(ExerciseKind::Reps, 10, 8, 4), first);
        }
    }

    #[test]
    fn test_detail_for_info_uses_read_time() {
        let mut info = Exercise::new("Breathing", ExerciseKind::Info);
        info.duration = 99;
        info.read_time = 15;
        assert_eq!(detail_for(&info), "15 sec to review");
    }

    #[test]
    fn test_day_preview_keeps_order() {
        let day = Day {
            name: "Monday".into(),
            title: "Full body".into(),
            sections: vec![
                Section {
                    name: "Warm-up".into(),
                    duration: "5 min".into(),
                    exercises: vec![timed("Jumping jacks", 60, 0)],
                },
                Section {
                    name: "Main".into(),
                    duration: "20 min".into(),
                    exercises: vec![reps("Squats", 12, 3), timed("Plank", 30, 2)],
                },
            ],
            ..Day::default()
        };
        let before = day.clone();

        let preview = DayPreview::for_day(&day);

        assert_eq!(day, before);
        assert_eq!(preview.sections.len(), 2);
        assert_eq!(preview.entry_count(), 3);
        assert_eq!(preview.sections[1].ordinal, 2);
        assert_eq!(preview.sections[1].exercises[0].label, "Squats");
        assert_eq!(preview.sections[1].exercises[0].detail, "3 sets × 12 reps");
        assert_eq!(preview.sections[1].exercises[1].ordinal, 2);
        assert_eq!(preview.sections[1].exercises[1].detail, "2 sets × 30 sec");
    }

    #[test]
    fn test_program_outline_marks_rest_days() {
        let program = Program {
            title: "Beginner".into(),
            weeks: vec![Week {
                number: 1,
                days: vec![
                    Day {
                        name: "Day 1".into(),
                        ..Day::default()
                    },
                    Day {
                        name: "Day 2".into(),
                        is_rest_day: true,
                        ..Day::default()
                    },
                ],
            }],
            ..Program::default()
        };

        let outline = ProgramOutline::for_program(&program);

        assert_eq!(outline.weeks[0].number, 1);
        assert!(outline.weeks[0].days[1].is_rest_day);
        assert_eq!(outline.training_days(), 1);
    }
}
