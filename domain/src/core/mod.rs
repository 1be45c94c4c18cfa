//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`random::RandomSource`]: injected randomness for dealing rounds

pub mod error;
pub mod random;
