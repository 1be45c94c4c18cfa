//! Per-player reveal sequencing and the end-of-round summary.

pub mod sequencer;
pub mod summary;
