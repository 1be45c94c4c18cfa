//! Word store port
//!
//! Defines how the durable pool files are read and written. The two stores
//! (active and used) are written separately and never as one transaction.

use std::collections::VecDeque;
use thiserror::Error;

/// Errors that can occur while accessing the word stores
#[derive(Error, Debug)]
pub enum WordStoreError {
    #[error("Word pool file not found: {0}")]
    Missing(String),

    #[error("Failed to read {location}: {source}")]
    Read {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {location}: {source}")]
    Write {
        location: String,
        #[source]
        source: std::io::Error,
    },
}

/// Durable backing for the word pool.
///
/// Implementations live in the infrastructure layer. The active store holds
/// the pairs still in play; the used store is append-only.
pub trait WordStore {
    /// Read the whole active store.
    ///
    /// Must fail with [`WordStoreError::Missing`] when the store does not exist.
    fn read_active(&self) -> Result<String, WordStoreError>;

    /// Replace the whole active store.
    fn write_active(&mut self, contents: &str) -> Result<(), WordStoreError>;

    /// Append one line to the used store, creating it if needed.
    fn append_used(&mut self, line: &str) -> Result<(), WordStoreError>;

    /// Human-readable location of the active store (for messages).
    fn active_location(&self) -> String;

    /// Human-readable location of the used store (for messages).
    fn used_location(&self) -> String;
}

/// Word store kept entirely in memory.
///
/// Useful for dry runs and tests. `active: None` behaves like a missing file.
/// Write failures can be injected with [`InMemoryWordStore::fail_next_write`]
/// and [`InMemoryWordStore::fail_next_active_write`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryWordStore {
    active: Option<String>,
    used: Vec<String>,
    failures: VecDeque<(FailureTarget, String)>,
}

/// Which write an injected failure applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FailureTarget {
    Any,
    Active,
}

impl InMemoryWordStore {
    pub fn new(active: impl Into<String>) -> Self {
        Self {
            active: Some(active.into()),
            ..Self::default()
        }
    }

    /// A store whose active file does not exist.
    pub fn missing() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn used_lines(&self) -> &[String] {
        &self.used
    }

    /// Make the next write (active or used) fail with `message`.
    pub fn fail_next_write(&mut self, message: impl Into<String>) {
        self.failures.push_back((FailureTarget::Any, message.into()));
    }

    /// Make the next rewrite of the active store fail; appends still succeed.
    pub fn fail_next_active_write(&mut self, message: impl Into<String>) {
        self.failures.push_back((FailureTarget::Active, message.into()));
    }

    fn take_failure(
        &mut self,
        target: FailureTarget,
        location: &str,
    ) -> Result<(), WordStoreError> {
        let applies = match self.failures.front() {
            Some((FailureTarget::Any, _)) => true,
            Some((pending, _)) => *pending == target,
            None => false,
        };
        match applies.then(|| self.failures.pop_front()).flatten() {
            Some((_, message)) => Err(WordStoreError::Write {
                location: location.to_string(),
                source: std::io::Error::other(message),
            }),
            None => Ok(()),
        }
    }
}

impl WordStore for InMemoryWordStore {
    fn read_active(&self) -> Result<String, WordStoreError> {
        self.active
            .clone()
            .ok_or_else(|| WordStoreError::Missing(self.active_location()))
    }

    fn write_active(&mut self, contents: &str) -> Result<(), WordStoreError> {
        self.take_failure(FailureTarget::Active, "memory:active")?;
        self.active = Some(contents.to_string());
        Ok(())
    }

    fn append_used(&mut self, line: &str) -> Result<(), WordStoreError> {
        self.take_failure(FailureTarget::Any, "memory:used")?;
        self.used.push(line.to_string());
        Ok(())
    }

    fn active_location(&self) -> String {
        "memory:active".to_string()
    }

    fn used_location(&self) -> String {
        "memory:used".to_string()
    }
}
