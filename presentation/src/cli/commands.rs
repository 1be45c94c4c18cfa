//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the final reveal summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Reveal screen for humans
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for undercover_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => undercover_domain::OutputFormat::Text,
            OutputFormat::Json => undercover_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for word-undercover
#[derive(Parser, Debug)]
#[command(name = "word-undercover")]
#[command(author, version, about = "Pass-the-device word game: find the undercover")]
#[command(long_about = r#"
Every player secretly gets a word. All but one get the same word; the
undercover gets a related one. Pass the terminal around: each player presses
Enter to see their word, then Enter again to hide it.

Word pairs are read from the pool file, one pair per line:
  猫,狗
  苹果,香蕉
Each round moves its pair from the pool file into the used file.

Configuration files are loaded from (in priority order):
1. UNDERCOVER_* environment variables (e.g. UNDERCOVER_GAME__SEED=7)
2. --config <path>     Explicit config file
3. ./undercover.toml   Project-level config
4. ~/.config/word-undercover/config.toml   Global config

Example:
  word-undercover
  word-undercover -p 6 --words party.txt
  word-undercover --seed 42 --output json
"#)]
pub struct Cli {
    /// Number of players for the first round (skips the prompt)
    #[arg(short, long, value_name = "N")]
    pub players: Option<usize>,

    /// Word pool file
    #[arg(long, value_name = "PATH")]
    pub words: Option<PathBuf>,

    /// File that receives used word pairs
    #[arg(long, value_name = "PATH")]
    pub used: Option<PathBuf>,

    /// Seed for reproducible rounds
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Format of the final reveal
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Do not clear the terminal between players
    #[arg(long)]
    pub no_clear: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
