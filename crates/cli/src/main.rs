//! Tween CLI - replay command scripts against a headless canvas.
//!
//! Scripts are JSON commands and queries (see the `api` crate). Every step
//! prints one JSON line with its result and the canvas events it caused.

mod logger;
mod script;

use anyhow::{Context, Result};
use api::{Command, Query};
use canvas::{Canvas, CanvasConfig};
use clap::{Parser, Subcommand};
use logger::{level_from, log_section, TweenLogger, LOG_ENV};
use script::{run_step, Step};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Tween CLI - drive the shape editor from JSON
#[derive(Parser)]
#[command(name = "tween")]
#[command(about = "Replay shape editing scripts against a headless canvas")]
struct Cli {
    /// Canvas configuration file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Also append log lines to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a script file
    Run {
        /// Script path: a JSON array of steps, or one step per line
        script: PathBuf,

        /// Keep going after a failing step
        #[arg(long)]
        keep_going: bool,
    },

    /// Check that a script parses without running it
    Check {
        /// Script path
        script: PathBuf,
    },

    /// Read steps from stdin, one JSON object per line
    Repl,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_level = std::env::var(LOG_ENV).ok();
    TweenLogger::init(level_from(cli.verbose, env_level.as_deref()), cli.log_file.as_deref())?;

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Run { script, keep_going } => run_script(&script, config, keep_going),
        Commands::Check { script } => check_script(&script),
        Commands::Repl => repl(config),
    }
}

fn load_config(path: Option<&Path>) -> Result<CanvasConfig> {
    let Some(path) = path else {
        return Ok(CanvasConfig::default());
    };
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config: CanvasConfig = serde_json::from_str(&source)
        .with_context(|| format!("Invalid config: {}", path.display()))?;
    if !(config.min_size > 0.0) {
        anyhow::bail!("min_size must be positive, got {}", config.min_size);
    }
    log::info!("Loaded config from {}: {:?}", path.display(), config);
    Ok(config)
}

fn run_script(path: &Path, config: CanvasConfig, keep_going: bool) -> Result<()> {
    let steps = script::load(path)?;
    log_section(&path.display().to_string());

    let mut canvas = Canvas::new(config);
    let mut failures = 0;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for (index, step) in steps.into_iter().enumerate() {
        let outcome = run_step(&mut canvas, step);
        writeln!(out, "{}", serde_json::to_string(&outcome)?)?;
        if outcome.is_error() {
            failures += 1;
            if !keep_going {
                anyhow::bail!("Step {} failed", index + 1);
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} step(s) failed", failures);
    }
    Ok(())
}

fn check_script(path: &Path) -> Result<()> {
    let steps = script::load(path)?;
    let commands = steps
        .iter()
        .filter(|step| matches!(step, Step::Command(_)))
        .count();
    println!(
        "{}: {} steps ({} commands, {} queries)",
        path.display(),
        steps.len(),
        commands,
        steps.len() - commands
    );
    Ok(())
}

fn repl(config: CanvasConfig) -> Result<()> {
    let mut canvas = Canvas::new(config);
    let stdin = std::io::stdin();

    loop {
        print!("tween> ");
        std::io::stdout().flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let step = match input {
            "help" | "?" => {
                print_help();
                continue;
            }
            "quit" | "exit" => break,
            "shapes" => Step::Query(Query::GetAllShapes),
            "selection" => Step::Query(Query::GetSelection),
            "order" => Step::Query(Query::GetOrder),
            "count" => Step::Query(Query::GetShapeCount),
            "deselect" => Step::Command(Command::ClearSelection),
            _ => match serde_json::from_str(input) {
                Ok(step) => step,
                Err(err) => {
                    println!("Invalid command or query: {err}");
                    continue;
                }
            },
        };

        let outcome = run_step(&mut canvas, step);
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    }

    Ok(())
}

fn print_help() {
    println!("Tween interactive mode");
    println!("======================");
    println!();
    println!("Built-in commands:");
    println!("  shapes      - Get all shapes, front to back");
    println!("  selection   - Get current selection");
    println!("  order       - Get the stacking order");
    println!("  count       - Get shape count");
    println!("  deselect    - Clear the selection");
    println!("  help, ?     - Show this help");
    println!("  quit, exit  - Exit interactive mode");
    println!();
    println!("JSON Commands (examples):");
    println!("  {{\"type\": \"create_shape\", \"position\": [100, 100], \"size\": [120, 80]}}");
    println!("  {{\"type\": \"select_all\"}}");
    println!("  {{\"type\": \"drag_handle\", \"shape\": \"<id>\", \"handle\": \"top_left\", \"from\": [100, 100], \"to\": [80, 90]}}");
    println!("  {{\"type\": \"bring_to_front\", \"target\": \"selection\"}}");
    println!("  {{\"type\": \"attach_timeline\", \"playhead\": 12}}");
    println!();
    println!("JSON Queries:");
    println!("  {{\"type\": \"get_selection\"}}");
    println!("  {{\"type\": \"get_keyframes\", \"id\": \"<id>\"}}");
    println!("  {{\"type\": \"get_timeline\"}}");
}
