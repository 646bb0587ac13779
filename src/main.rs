//! Vimlet - a small modal text editor for the terminal.
//!
//! # Usage
//!
//! ```bash
//! vimlet notes.txt
//! vimlet --no-line-numbers notes.txt
//! vimlet --keys "A ' world' escape" notes.txt
//! ```

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vimlet::app::{App, DEFAULT_TICK_MS, read_initial_text};
use vimlet::config::{
    ConfigFlags, LogLevel, clear_config_flags, global_config_path, load_config_flags,
    local_override_path, parse_flag_tokens, save_config_flags,
};
use vimlet::editor::Engine;
use vimlet::input::ScriptedInput;

/// A small modal text editor for the terminal
#[derive(Parser, Debug)]
#[command(name = "vimlet", version, about, long_about = None)]
struct Cli {
    /// File to edit (starts with an empty buffer if omitted or missing)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Hide the line-number gutter
    #[arg(long)]
    no_line_numbers: bool,

    /// Hide the status bar
    #[arg(long)]
    no_status: bool,

    /// Input tick length in milliseconds
    #[arg(long, value_name = "MS")]
    tick_ms: Option<u64>,

    /// Log verbosity (defaults to debug with --debug-log, warn otherwise)
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,

    /// Write engine logs to a file instead of stderr
    #[arg(long, value_name = "PATH")]
    debug_log: Option<PathBuf>,

    /// Run key notation against the buffer without a terminal and print the result
    #[arg(long, value_name = "NOTATION")]
    keys: Option<String>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn init_logging(flags: &ConfigFlags) -> Result<()> {
    let default_level = flags.log_level.map_or_else(
        || {
            if flags.debug_log.is_some() {
                tracing::Level::DEBUG
            } else {
                tracing::Level::WARN
            }
        },
        LogLevel::to_tracing,
    );
    let filter = EnvFilter::from_default_env().add_directive(default_level.into());

    match &flags.debug_log {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create debug log {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn run_headless(file: Option<&Path>, notation: &str) -> Result<()> {
    let mut source = ScriptedInput::from_script(notation).context("Invalid --keys notation")?;
    let mut engine = Engine::new(&read_initial_text(file)?);
    while !source.is_exhausted() {
        engine.tick(&mut source);
    }
    println!("{}", engine.text());
    Ok(())
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    init_logging(&effective)?;
    tracing::debug!(?effective, "configuration");

    if let Some(notation) = cli.keys.as_deref() {
        return run_headless(cli.file.as_deref(), notation);
    }

    let mut app = App::new(cli.file)
        .with_line_numbers(!effective.no_line_numbers)
        .with_status(!effective.no_status)
        .with_tick_ms(effective.tick_ms.unwrap_or(DEFAULT_TICK_MS));

    app.run().context("Application error")
}
