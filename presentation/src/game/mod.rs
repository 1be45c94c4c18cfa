//! Interactive pass-the-device game loop

mod repl;

pub use repl::GameRepl;
