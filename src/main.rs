mod cli;
mod command;
mod config;
mod consts;
mod game;
mod term;
mod util;
mod view;
use crate::cli::{Arguments, Command};
use crate::config::{Config, ConfigError, Settings};
use crate::game::{Runner, Summary};
use crate::term::{CrosstermInput, TerminalRenderer};
use anyhow::Context;
use std::io::{self, ErrorKind};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Mutex;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    let args = match Command::from_parser(lexopt::Parser::from_env()) {
        Ok(Command::Run(args)) => args,
        Ok(Command::Help) => {
            print!("{}", cli::USAGE);
            return ExitCode::SUCCESS;
        }
        Ok(Command::Version) => {
            println!("slither {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("slither: {e}");
            eprintln!("Run `slither --help` for usage.");
            return ExitCode::FAILURE;
        }
    };
    let settings = match prepare(&args) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("slither: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let glyphs = settings.glyphs();
    let terminal = ratatui::init();
    let r = Runner::new(
        settings,
        CrosstermInput,
        TerminalRenderer::new(terminal, glyphs),
        rand::rng(),
    )
    .run();
    ratatui::restore();
    io_exit(r)
}

/// Set up logging and turn the configuration file plus command-line
/// overrides into validated game settings
fn prepare(args: &Arguments) -> anyhow::Result<Settings> {
    if let Some(ref path) = args.log_file {
        init_logging(path)?;
    }
    let config = match args.config {
        Some(ref path) => Config::load(path, false)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => match Config::default_path() {
            Ok(path) => Config::load(&path, true)
                .with_context(|| format!("failed to load {}", path.display()))?,
            Err(ConfigError::NoPath) => {
                warn!("Could not determine configuration directory; using defaults");
                Config::default()
            }
            Err(e) => return Err(e.into()),
        },
    };
    let mut options = config.game;
    args.apply(&mut options);
    let settings = options.settings().context("invalid game settings")?;
    info!(?options, "Loaded settings");
    Ok(settings)
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = fs_err::File::create(path).context("failed to open log file")?;
    let filter = EnvFilter::try_from_env(consts::LOG_FILTER_VAR)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(filter)
        .try_init()
        .context("failed to initialize logging")?;
    Ok(())
}

fn io_exit(r: io::Result<Summary>) -> ExitCode {
    match r {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("slither: {e}");
            ExitCode::from(2)
        }
    }
}
