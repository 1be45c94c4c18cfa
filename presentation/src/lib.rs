//! Presentation layer for word-undercover
//!
//! This crate contains the CLI definition, screen formatting and the
//! interactive pass-the-device game loop.

pub mod cli;
pub mod config;
pub mod game;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use config::DisplayConfig;
pub use game::GameRepl;
pub use output::console::ConsoleFormatter;
