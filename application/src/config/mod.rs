//! Application-level configuration.
//!
//! - [`PoolSettings`]: how pool files are parsed and written

pub mod pool_settings;

pub use pool_settings::PoolSettings;
