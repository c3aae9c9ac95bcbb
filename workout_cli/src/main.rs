mod console;

use clap::Parser;
use console::{ConsoleOptions, TerminalPresenter};
use std::path::PathBuf;
use std::process::ExitCode;
use workout_core::*;

#[derive(Parser)]
#[command(name = "workout")]
#[command(about = "Interactive step-by-step workout trainer", long_about = None)]
struct Cli {
    /// Path to the YAML workout plan
    plan: PathBuf,

    /// Use this config file instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Answer yes to every confirmation (for scripting and testing)
    #[arg(long)]
    auto_confirm: bool,

    /// Run countdowns without waiting between ticks
    #[arg(long)]
    fast: bool,

    /// Show the program outline and day rollups, then exit
    #[arg(long)]
    preview: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        workout_core::logging::init_with_level("debug");
    } else {
        workout_core::logging::init();
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let program = match load_program(&cli.plan) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("Error loading workout: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut presenter = TerminalPresenter::stdio(ConsoleOptions {
        clear_screen: config.display.clear_screen && !cli.preview,
        show_motivation: config.display.show_motivation,
        auto_confirm: cli.auto_confirm,
        interactive: false,
    });

    if cli.preview {
        return match show_preview(&program, &mut presenter) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                presenter.notify_error(&e.to_string());
                ExitCode::FAILURE
            }
        };
    }

    let tick_millis = if cli.fast { 0 } else { config.pacing.tick_millis };
    let mut clock = SystemClock::from_millis(tick_millis);
    let pacing = Pacing::from(&config.pacing);
    tracing::debug!("Tick length {} ms, pacing {:?}", tick_millis, pacing);

    // Engine failures are already reported through the presenter
    match ProgressionEngine::new(&mut presenter, &mut clock, pacing).run(&program) {
        Ok(RunOutcome::Completed) => ExitCode::SUCCESS,
        Ok(RunOutcome::Stopped) => {
            println!("\nWorkout stopped. See you next time!");
            ExitCode::FAILURE
        }
        Err(_) => ExitCode::FAILURE,
    }
}

/// Print the program outline and every training day's rollup without running
fn show_preview<P: Presenter>(program: &Program, presenter: &mut P) -> Result<()> {
    presenter.announce_preview(program)?;
    for week in &program.weeks {
        presenter.announce_week(week)?;
        for day in &week.days {
            if day.is_rest_day {
                presenter.announce_rest_day(day)?;
            } else {
                presenter.announce_day(day, &DayPreview::for_day(day))?;
            }
        }
    }
    Ok(())
}
