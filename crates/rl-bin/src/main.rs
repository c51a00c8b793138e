//! Redline entrypoint: a small demo shell over the line-editing engine.
//!
//! Reads lines with word navigation, selection, clipboard chords, and
//! prefix completion over a sample lexicon, echoing each committed line
//! until `:q` is entered.

use anyhow::Result;
use clap::Parser;
use core_clipboard::SystemClipboard;
use core_complete::PrefixLexicon;
use core_console::{Console, CrosstermConsole};
use core_session::LineReader;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

mod config;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "redline", version, about = "Interactive line editing demo")]
struct Args {
    /// Optional configuration file path (overrides discovery of `redline.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

fn configure_logging(default_filter: &str) -> Option<WorkerGuard> {
    let log_dir = Path::new(".");
    let log_path = log_dir.join("redline.log");
    if log_path.exists() {
        let _ = std::fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(log_dir, "redline.log");
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    match tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(nb_writer)
        .with_ansi(false)
        .try_init()
    {
        Ok(_) => Some(guard),
        Err(_err) => {
            // Global tracing subscriber already installed; drop guard so writer shuts down.
            None
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let cfg = config::load_from(args.config)?;
    let _log_guard = configure_logging(&cfg.log.filter);
    info!(target: "runtime", "startup");

    let reader = LineReader::new(PrefixLexicon::new(["foo", "foobar", "foobarbaz"]));
    let mut clipboard = SystemClipboard;
    let mut console = CrosstermConsole::new();
    let mut guard = console.raw_guard()?;

    loop {
        guard.write(&cfg.prompt.text)?;
        let line = reader.read_line(&mut *guard, &mut clipboard)?;
        if line == ":q" {
            break;
        }
        if !line.is_empty() {
            guard.write(&line)?;
            guard.write("\r\n")?;
        }
    }

    info!(target: "runtime", "shutdown");
    Ok(())
}
