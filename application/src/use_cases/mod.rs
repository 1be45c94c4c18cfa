//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod game_session;
pub mod start_round;
pub mod word_pool;
