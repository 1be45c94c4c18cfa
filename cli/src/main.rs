//! CLI entrypoint for word-undercover
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::fs::File;
use std::io;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use undercover_application::{GameError, GameSession, PoolSettings};
use undercover_domain::PlayerCount;
use undercover_infrastructure::{ChaChaRandom, ConfigLoader, FileConfig, FileWordStore};
use undercover_presentation::{Cli, DisplayConfig, GameRepl};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(&cli)?;

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    check_config(&config)?;

    info!("Starting word-undercover");

    // CLI flags override config
    let active = cli.words.clone().unwrap_or_else(|| config.words.active.clone());
    let used = cli.used.clone().unwrap_or_else(|| config.words.used.clone());
    let seed = cli.seed.or(config.game.seed);

    let mut display =
        DisplayConfig::default().with_clear_screen(!cli.no_clear && config.output.clear_screen);
    if let Some(format) = cli.output.map(Into::into).or(config.output.format) {
        display = display.with_format(format);
    }

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let initial_players = match cli.players {
        Some(n) => Some(PlayerCount::new(n).context("Invalid --players value")?),
        None => None,
    };

    // === Dependency Injection ===
    let store = FileWordStore::new(&active, &used);
    let rng = ChaChaRandom::new(seed);
    let settings = PoolSettings::default().with_separator(config.separator());

    let session = match GameSession::load(store, rng, settings) {
        Ok(session) => session,
        Err(GameError::MissingSource(location)) => {
            bail!("Word pool file not found: {}", location)
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to load word pool {}", active.display()));
        }
    };
    info!("Loaded {} word pairs", session.remaining_pairs());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut repl = GameRepl::new(session, stdin.lock(), stdout.lock())
        .with_display(display)
        .with_default_players(config.default_players())
        .with_initial_players(initial_players);

    repl.run().context("Terminal I/O failed")?;

    Ok(())
}

/// Install the stderr subscriber, plus a file writer for `--log-file`
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let (file_layer, guard) = match &cli.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_target(false)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(file_layer)
        .init();

    Ok(guard)
}

fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in issues.iter().filter(|issue| !issue.is_error()) {
        warn!("{}", issue.message);
    }

    let errors: Vec<&str> = issues
        .iter()
        .filter(|issue| issue.is_error())
        .map(|issue| issue.message.as_str())
        .collect();
    if !errors.is_empty() {
        bail!("Invalid configuration:\n  {}", errors.join("\n  "));
    }
    Ok(())
}
