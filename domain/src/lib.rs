//! Domain layer for word-undercover
//!
//! This crate contains the core game logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Word pool
//!
//! Word pairs loaded from a pool file. Each round takes one pair out of the
//! pool for good; the pool only shrinks.
//!
//! ## Round
//!
//! One pair dealt to N players: N-1 get the majority word, a single
//! undercover gets the minority word. Which word of the pair is which is
//! decided by a coin flip every round.
//!
//! ## Reveal
//!
//! Players look at their word one at a time (intro screen, then word screen)
//! before the whole assignment is revealed.

pub mod config;
pub mod core;
pub mod reveal;
pub mod round;
pub mod words;

// Re-export commonly used types
pub use config::OutputFormat;
pub use config::validation::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::{
    error::DomainError,
    random::{RandomSource, ScriptedRandom},
};
pub use reveal::{
    sequencer::{RevealSequencer, RevealState, RevealView, SubPhase},
    summary::RevealSummary,
};
pub use round::{
    player_count::PlayerCount,
    session::{AssignedPair, RoundSession},
};
pub use words::{
    line_format::{count_rejected_lines, parse_pairs, remove_first_match},
    pair::{COMMENT_PREFIX, DEFAULT_SEPARATOR, WordPair},
    pool::WordPool,
};
