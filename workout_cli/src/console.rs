//! Terminal presenter for the workout trainer.
//!
//! Renders engine announcements as plain text with colours and emoji,
//! draws countdowns on a single updating line when attached to a terminal,
//! and reads confirmations from stdin.

use crossterm::cursor::MoveTo;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use crossterm::tty::IsTty;
use std::io::{self, BufRead, Write};
use workout_core::presenter::{Presenter, Progress};
use workout_core::{
    CountdownKind, Day, DayPreview, Error, Exercise, ExerciseKind, Program, ProgramOutline,
    Result, Section, Tick, Week,
};

const BAR_WIDTH: usize = 30;

const REST_MOTIVATION: &[&str] = &[
    "💪 Muscles are recovering!",
    "🫁 Breathe deep and steady",
    "💧 Don't forget to drink water",
    "🧘 Relax and let go",
    "⚡ Getting ready for the next exercise",
    "🎯 You're doing great!",
];

/// Rendering options for [`TerminalPresenter`]
#[derive(Clone, Copy, Debug)]
pub struct ConsoleOptions {
    /// Clear the screen before each new step (terminal only)
    pub clear_screen: bool,
    pub show_motivation: bool,
    /// Answer every confirmation with yes without reading input
    pub auto_confirm: bool,
    /// Output is an interactive terminal
    pub interactive: bool,
}

/// Presenter writing to `output` and reading answers from `input`
pub struct TerminalPresenter<R, W> {
    input: R,
    output: W,
    options: ConsoleOptions,
    on_tick_line: bool,
}

impl TerminalPresenter<io::StdinLock<'static>, io::Stdout> {
    /// Presenter bound to the process's stdin and stdout
    pub fn stdio(mut options: ConsoleOptions) -> Self {
        let output = io::stdout();
        options.interactive = output.is_tty();
        if !options.interactive {
            crossterm::style::force_color_output(false);
        }
        Self::new(io::stdin().lock(), output, options)
    }
}

impl<R: BufRead, W: Write> TerminalPresenter<R, W> {
    pub fn new(input: R, output: W, options: ConsoleOptions) -> Self {
        Self {
            input,
            output,
            options,
            on_tick_line: false,
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Start a new screen for the next step
    fn begin_step(&mut self) -> Result<()> {
        self.end_tick_line()?;
        if self.options.clear_screen && self.options.interactive {
            crossterm::execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))
                .map_err(output_error)?;
        }
        Ok(())
    }

    fn end_tick_line(&mut self) -> Result<()> {
        if self.on_tick_line {
            self.on_tick_line = false;
            writeln!(self.output).map_err(output_error)?;
        }
        Ok(())
    }

    fn line(&mut self, text: impl std::fmt::Display) -> Result<()> {
        self.end_tick_line()?;
        writeln!(self.output, "{}", text).map_err(output_error)
    }

    fn header(&mut self, text: &str) -> Result<()> {
        let rule = "─".repeat(text.chars().count() + 4);
        self.line(format!("╭{}╮", rule))?;
        self.line(format!("│  {}  │", text.bold()))?;
        self.line(format!("╰{}╯", rule))
    }
}

impl<R: BufRead, W: Write> Presenter for TerminalPresenter<R, W> {
    fn announce_preview(&mut self, program: &Program) -> Result<()> {
        self.begin_step()?;
        self.header(&format!("📋 {}", program.title))?;
        if !program.description.is_empty() {
            self.line(format!("📖 {}", program.description))?;
        }
        if !program.duration.is_empty() {
            self.line(format!("⏱️  Duration: {}", program.duration))?;
        }
        self.line("")?;

        let outline = ProgramOutline::for_program(program);
        for week in &outline.weeks {
            self.line(format!("📅 Week {}", week.number).blue().bold())?;
            for day in &week.days {
                let emoji = if day.is_rest_day { "😌" } else { "🏃" };
                self.line(format!("   {} {} - {}", emoji, day.name, day.title))?;
            }
        }
        self.line(format!(
            "\n{} training days in total",
            outline.training_days()
        ))
    }

    fn announce_week(&mut self, week: &Week) -> Result<()> {
        self.begin_step()?;
        self.line(format!("📅 Starting week {}", week.number).cyan().bold())
    }

    fn announce_day(&mut self, day: &Day, preview: &DayPreview) -> Result<()> {
        self.begin_step()?;
        self.header(&format!("🔥 {} - {}", day.name, day.title))?;

        for section in &preview.sections {
            if section.duration.is_empty() {
                self.line(format!("{}. {}", section.ordinal, section.name).bold())?;
            } else {
                self.line(
                    format!("{}. {} ({})", section.ordinal, section.name, section.duration)
                        .bold(),
                )?;
            }
            for entry in &section.exercises {
                self.line(format!(
                    "   {} {} ({})",
                    kind_emoji(entry.kind),
                    entry.label,
                    entry.detail
                ))?;
            }
        }
        Ok(())
    }

    fn announce_rest_day(&mut self, day: &Day) -> Result<()> {
        self.begin_step()?;
        self.header(&format!("😌 REST DAY: {} - {}", day.name, day.title))?;
        self.line(format!("🛌 {}", day.rest_message).green())
    }

    fn announce_section(&mut self, section: &Section) -> Result<()> {
        self.begin_step()?;
        self.header(&format!("📝 {}", section.name))?;
        if !section.duration.is_empty() {
            self.line(format!("⏱️  Approximate duration: {}", section.duration))?;
        }
        self.line("🏃 Get ready for the exercises!".yellow())
    }

    fn announce_exercise(&mut self, exercise: &Exercise, detail: &str) -> Result<()> {
        self.begin_step()?;
        self.header(&format!("{} {}", kind_emoji(exercise.kind), exercise.name))?;
        if !exercise.description.is_empty() {
            self.line(format!("📖 {}", exercise.description))?;
        }
        self.line(format!("🎯 {}", detail).cyan())
    }

    fn announce_set(&mut self, exercise: &Exercise, index: u32, total: u32) -> Result<()> {
        self.end_tick_line()?;
        if total > 1 {
            self.line(format!("🔄 Set {} of {}", index, total).bold())?;
        }
        if exercise.kind == ExerciseKind::Reps {
            self.line(format!("🎯 Perform {} reps", exercise.reps).yellow().bold())?;
        }
        Ok(())
    }

    fn tick(&mut self, tick: &Tick) -> Result<()> {
        let mut text = format!(
            "{} {}  {}  [{}] {:5.1}%",
            countdown_emoji(tick.kind),
            tick.label,
            format_remaining(tick.remaining, tick.kind),
            progress_bar(tick.fraction(), BAR_WIDTH),
            tick.fraction() * 100.0
        );
        if tick.kind == CountdownKind::Rest && self.options.show_motivation {
            text.push_str("  ");
            text.push_str(motivation_for(tick));
        }

        if self.options.interactive {
            crossterm::queue!(self.output, Clear(ClearType::CurrentLine)).map_err(output_error)?;
            write!(self.output, "\r{}", text).map_err(output_error)?;
            self.on_tick_line = true;
        } else {
            writeln!(self.output, "{}", text).map_err(output_error)?;
        }
        self.output.flush().map_err(output_error)
    }

    fn announce_countdown_complete(&mut self, label: &str, kind: CountdownKind) -> Result<()> {
        match kind {
            CountdownKind::Rest => self.line("⚡ Rested! Ready to keep going!".green()),
            _ => self.line(format!("✅ {} done!", label).green()),
        }
    }

    fn announce_set_complete(&mut self) -> Result<()> {
        self.line("✅ Set complete!".green())
    }

    fn announce_exercise_complete(&mut self) -> Result<()> {
        self.line("🎉 Exercise complete!".green().bold())
    }

    fn announce_day_complete(&mut self, day: &Day, progress: Progress) -> Result<()> {
        self.line(format!("✅ Workout '{}' complete!", day.title).green().bold())?;
        self.line(format!(
            "📈 Program progress: {:.0}% ({}/{} days)",
            progress.percent(),
            progress.completed_days,
            progress.total_days
        ))
    }

    fn announce_week_complete(&mut self, week: &Week, progress: Progress) -> Result<()> {
        self.line(format!("🎉 Week {} complete!", week.number).green().bold())?;
        self.line(format!("📈 Program progress: {:.0}%", progress.percent()))
    }

    fn announce_run_complete(&mut self) -> Result<()> {
        self.begin_step()?;
        self.header("🎉 CONGRATULATIONS!")?;
        self.line("🏆 You finished the program!")?;
        self.line("💪 Your body got stronger!")?;
        self.line("🚀 Keep it up!")
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        self.end_tick_line()?;
        if self.options.auto_confirm {
            return self.line(format!("❯ {} [auto]", prompt)).map(|_| true);
        }

        write!(self.output, "❯ {} [Y/n] ", prompt.bold()).map_err(output_error)?;
        self.output.flush().map_err(output_error)?;

        let mut answer = String::new();
        let read = self
            .input
            .read_line(&mut answer)
            .map_err(|e| Error::Presentation(format!("failed to read input: {}", e)))?;
        if read == 0 {
            return Err(Error::Presentation("input stream closed".into()));
        }

        Ok(!matches!(
            answer.trim().to_lowercase().as_str(),
            "n" | "no" | "q" | "quit"
        ))
    }

    fn notify_error(&mut self, message: &str) {
        let _ = self.end_tick_line();
        eprintln!("{}", format!("✖ {}", message).red().bold());
    }
}

fn output_error(e: io::Error) -> Error {
    Error::Presentation(format!("failed to write output: {}", e))
}

fn kind_emoji(kind: ExerciseKind) -> &'static str {
    match kind {
        ExerciseKind::Timed => "⏱️",
        ExerciseKind::Reps => "🔢",
        ExerciseKind::Rest => "😌",
        ExerciseKind::Info => "📖",
    }
}

fn countdown_emoji(kind: CountdownKind) -> &'static str {
    match kind {
        CountdownKind::Work => "⏱️",
        CountdownKind::Rest => "💤",
        CountdownKind::Reading => "📖",
    }
}

/// `MM:SS` for rests and anything a minute or longer, `NN sec` otherwise
pub fn format_remaining(remaining: u32, kind: CountdownKind) -> String {
    let minutes = remaining / 60;
    let seconds = remaining % 60;
    if minutes > 0 || kind == CountdownKind::Rest {
        format!("{:02}:{:02}", minutes, seconds)
    } else {
        format!("{:02} sec", seconds)
    }
}

pub fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn motivation_for(tick: &Tick) -> &'static str {
    REST_MOTIVATION[tick.elapsed() as usize % REST_MOTIVATION.len()]
}
