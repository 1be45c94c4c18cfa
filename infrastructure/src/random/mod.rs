//! Random source adapters

mod chacha;

pub use chacha::ChaChaRandom;
