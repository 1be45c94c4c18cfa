//! Round setup: validated player count and the dealt word assignment.

pub mod player_count;
pub mod session;
