//! branchpick - pick a git branch from the terminal

use anyhow::Result;
use branchpick::app::{App, Mode};
use branchpick::config::Config;
use branchpick::git::{self, BranchSource};
use branchpick::paths;
use branchpick::store::{BranchUpdate, branch_store};
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

/// Pick a git branch and print it
#[derive(Parser)]
#[command(name = "branchpick")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Repository to read branches from
    #[arg(long, default_value = ".")]
    repo: PathBuf,

    /// Branch to mark as selected when the picker opens
    #[arg(long)]
    selected: Option<String>,

    /// Open the picker directly and exit when it closes
    #[arg(long)]
    once: bool,

    /// Configuration file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Use these branches instead of reading a repository (repeatable)
    #[arg(long = "branch", value_name = "NAME")]
    branches: Vec<String>,

    /// Checked-out branch to report alongside `--branch`
    #[arg(long, requires = "branches")]
    current: Option<String>,
}

fn main() -> Result<()> {
    // Log to the temp dir, see `paths::log_path`
    // Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level > 0 {
        let level = match debug_level {
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        };

        let file_appender =
            tracing_appender::rolling::never(paths::log_dir(), paths::LOG_FILE_NAME);
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_max_level(level)
            .with_ansi(false)
            .init();
        tracing::info!(path = %paths::log_path().display(), "Logging enabled");
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            eprintln!("error: {e}\n");
            Cli::command().print_help()?;
            std::process::exit(2);
        }
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let (mut writer, store) = branch_store();
    let source = if cli.branches.is_empty() {
        let source = BranchSource::discover(&cli.repo)?;
        git::refresh(&source, &mut writer)?;
        Some(source)
    } else {
        writer.update(BranchUpdate::new(
            cli.branches.iter().cloned(),
            cli.current.as_deref(),
        ));
        None
    };

    let mode = if cli.once {
        Mode::PickerOnly
    } else {
        Mode::Session
    };
    let mut app = App::new(config, store, cli.selected, mode);
    branchpick::tui::run(&mut app, source.as_ref().map(|s| (s, &mut writer)))?;

    if let Some(branch) = app.result() {
        println!("{branch}");
        Ok(())
    } else {
        std::process::exit(1);
    }
}
