//! Key-value persistence for the high score
//!
//! The game only needs `get`/`set` of a string under a fixed key, the same
//! contract a browser's local storage offers. [`JsonFileStore`] keeps the
//! entries in a JSON object on disk; [`MemoryStore`] keeps them in a map.

pub mod file;
pub mod highscore;
pub mod memory;

use std::path::PathBuf;

use thiserror::Error;

pub use file::JsonFileStore;
pub use highscore::Highscore;
pub use memory::MemoryStore;

/// Key the high score is stored under
pub const HIGHSCORE_KEY: &str = "snake-highscore";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access store file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("store file {path:?} is not a JSON object of strings: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// String key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}
