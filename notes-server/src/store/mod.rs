//! Durable storage of the note collection.
//!
//! A store only knows how to load and save the whole collection. Locking and
//! the read-failure policy live one level up in [`crate::notes::NoteRepo`].

mod json_file;
mod memory;

use std::path::PathBuf;

use async_trait::async_trait;
use notes_types::Note;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed note file {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait NoteStore: Send + Sync {
    async fn load_all(&self) -> Result<Vec<Note>>;

    /// Replaces the stored collection with `notes`.
    async fn save_all(&self, notes: &[Note]) -> Result<()>;
}
