//! Word store on the local file system
//!
//! Two plain UTF-8 files: the active pool (rewritten on every consume) and
//! the used pool (append-only). No locking is done; the process assumes it
//! is the only writer while a game is running.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use undercover_application::{WordStore, WordStoreError};

/// [`WordStore`] over an active file and a used file.
#[derive(Debug, Clone)]
pub struct FileWordStore {
    active: PathBuf,
    used: PathBuf,
}

impl FileWordStore {
    pub fn new(active: impl Into<PathBuf>, used: impl Into<PathBuf>) -> Self {
        Self {
            active: active.into(),
            used: used.into(),
        }
    }

    pub fn active_path(&self) -> &Path {
        &self.active
    }

    pub fn used_path(&self) -> &Path {
        &self.used
    }
}

impl WordStore for FileWordStore {
    fn read_active(&self) -> Result<String, WordStoreError> {
        match fs::read_to_string(&self.active) {
            Ok(contents) => Ok(contents),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(WordStoreError::Missing(self.active_location()))
            }
            Err(e) => Err(WordStoreError::Read {
                location: self.active_location(),
                source: e,
            }),
        }
    }

    fn write_active(&mut self, contents: &str) -> Result<(), WordStoreError> {
        debug!("Rewriting {}", self.active.display());
        fs::write(&self.active, contents).map_err(|e| WordStoreError::Write {
            location: self.active_location(),
            source: e,
        })
    }

    fn append_used(&mut self, line: &str) -> Result<(), WordStoreError> {
        debug!("Appending to {}", self.used.display());
        let to_write_error = |e| WordStoreError::Write {
            location: self.used_location(),
            source: e,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.used)
            .map_err(to_write_error)?;
        writeln!(file, "{}", line).map_err(to_write_error)
    }

    fn active_location(&self) -> String {
        self.active.display().to_string()
    }

    fn used_location(&self) -> String {
        self.used.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use undercover_application::{GameError, PoolSettings, StoredWordPool};
    use undercover_domain::{ScriptedRandom, WordPair};

    fn store_in(dir: &tempfile::TempDir, active: Option<&str>) -> FileWordStore {
        let active_path = dir.path().join("words.txt");
        if let Some(contents) = active {
            fs::write(&active_path, contents).unwrap();
        }
        FileWordStore::new(active_path, dir.path().join("words_used.txt"))
    }

    #[test]
    fn test_missing_active_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir, None);
        match store.read_active() {
            Err(WordStoreError::Missing(location)) => assert!(location.ends_with("words.txt")),
            other => panic!("expected Missing, got {:?}", other),
        }
    }

    #[test]
    fn test_append_creates_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir, Some("猫,狗\n"));

        store.append_used("猫,狗").unwrap();
        store.append_used("苹果,香蕉").unwrap();

        let used = fs::read_to_string(store.used_path()).unwrap();
        assert_eq!(used, "猫,狗\n苹果,香蕉\n");
    }

    #[test]
    fn test_write_active_replaces_contents() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir, Some("猫,狗\n苹果,香蕉\n"));
        store.write_active("苹果,香蕉\n").unwrap();
        assert_eq!(store.read_active().unwrap(), "苹果,香蕉\n");
    }

    #[test]
    fn test_stored_pool_over_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir, Some("# 词库\n猫,狗\n  苹果 , 香蕉  \n"));
        let active_path = store.active_path().to_path_buf();
        let used_path = store.used_path().to_path_buf();

        let mut pool = StoredWordPool::load(store, PoolSettings::default()).unwrap();
        let mut rng = ScriptedRandom::new(vec![1], vec![]);
        let drawn = pool.draw(&mut rng).unwrap();
        assert_eq!(drawn, WordPair::new("苹果", "香蕉").unwrap());
        pool.consume(&drawn).unwrap();

        assert_eq!(fs::read_to_string(&active_path).unwrap(), "# 词库\n猫,狗\n");
        assert_eq!(fs::read_to_string(&used_path).unwrap(), "苹果,香蕉\n");

        let drawn = pool.draw(&mut rng).unwrap();
        pool.consume(&drawn).unwrap();
        assert_eq!(fs::read_to_string(&active_path).unwrap(), "# 词库\n");
        assert_eq!(
            fs::read_to_string(&used_path).unwrap(),
            "苹果,香蕉\n猫,狗\n"
        );

        assert!(pool.draw(&mut rng).unwrap_err().is_exhausted());
    }

    #[test]
    fn test_load_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = StoredWordPool::load(store_in(&dir, None), PoolSettings::default()).unwrap_err();
        assert!(matches!(err, GameError::MissingSource(_)));
    }

    #[test]
    fn test_load_file_without_valid_lines_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = StoredWordPool::load(store_in(&dir, Some("\n#\n坏\n")), PoolSettings::default())
            .unwrap_err();
        assert!(err.is_fatal());
    }
}
