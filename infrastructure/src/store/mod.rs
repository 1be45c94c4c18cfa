//! File-backed word stores

mod file_store;

pub use file_store::FileWordStore;
