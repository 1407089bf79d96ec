mod cli;
mod command;
mod config;
mod consts;
mod engine;
mod game;
mod highscore;
mod render;
mod term;
use crate::cli::{Arguments, Cli};
use crate::config::Config;
use crate::engine::Engine;
use crate::game::Game;
use crate::highscore::JsonFileStore;
use crate::render::Painter;
use crate::term::{TerminalInput, TerminalSurface};
use anyhow::Context;
use ratatui::DefaultTerminal;
use simplelog::{LevelFilter, WriteLogger};
use std::borrow::Cow;
use std::io::{self, ErrorKind};
use std::process::ExitCode;
use std::time::Instant;

fn main() -> ExitCode {
    match Cli::from_env() {
        Ok(Cli::Run(args)) => run(&args),
        Ok(Cli::Help) => {
            print!("{}", cli::HELP);
            ExitCode::SUCCESS
        }
        Ok(Cli::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("gridsnake: {e}");
            eprintln!("Run `gridsnake --help` for usage.");
            ExitCode::from(2)
        }
    }
}

fn run(args: &Arguments) -> ExitCode {
    let config = match load_config(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("gridsnake: {e:#}");
            return ExitCode::from(2);
        }
    };
    if let Err(e) = init_logging(&config, args.verbose) {
        eprintln!("gridsnake: warning: logging disabled: {e:#}");
    }
    log::info!("Starting gridsnake {}", env!("CARGO_PKG_VERSION"));
    log::debug!("Configuration: {config:?}");
    let store = JsonFileStore::new(config.high_score_file().map(Cow::into_owned));
    let game = Game::new(config.grid, config.speed, rand::rng(), store);
    let terminal = ratatui::init();
    let r = play(game, &config, terminal);
    ratatui::restore();
    io_exit(r)
}

fn play(game: Game, config: &Config, terminal: DefaultTerminal) -> io::Result<()> {
    let surface = TerminalSurface::new(terminal, config.display.cell_size)?;
    let mut engine = Engine::new(
        game,
        Painter::new(config),
        TerminalInput,
        surface,
        Instant::now(),
    );
    engine.run()
}

/// Read the configuration file (`--config` or the default one) and apply
/// command-line overrides
fn load_config(args: &Arguments) -> anyhow::Result<Config> {
    let (path, allow_missing) = match args.config {
        Some(ref p) => (p.clone(), false),
        None => (Config::default_path()?, true),
    };
    let mut config = Config::load(&path, allow_missing)
        .with_context(|| format!("failed to load configuration from {}", path.display()))?;
    args.apply(&mut config).context("invalid command-line options")?;
    Ok(config)
}

fn init_logging(config: &Config, verbose: bool) -> anyhow::Result<()> {
    let path = config
        .log_file()
        .context("failed to determine path to log file")?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent)?;
    }
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&*path)?;
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    WriteLogger::init(level, simplelog::Config::default(), file)?;
    Ok(())
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Exiting on I/O error: {e}");
            eprintln!("gridsnake: {e}");
            ExitCode::from(2)
        }
    }
}
