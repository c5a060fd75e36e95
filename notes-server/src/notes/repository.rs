use std::sync::Arc;

use notes_types::Note;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::store::{self, NoteStore};

/// Shared handle to the note store.
///
/// Every mutation runs read -> modify -> write while holding [`NoteRepo::write_lock`],
/// so two requests in this process cannot overwrite each other's changes.
#[derive(Clone)]
pub struct NoteRepo {
    store: Arc<dyn NoteStore>,
    lock: Arc<RwLock<()>>,
}

impl NoteRepo {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self {
            store,
            lock: Arc::new(RwLock::new(())),
        }
    }

    pub async fn read_lock(&self) -> RwLockReadGuard<'_, ()> {
        self.lock.read().await
    }

    pub async fn write_lock(&self) -> RwLockWriteGuard<'_, ()> {
        self.lock.write().await
    }

    /// An unreadable or corrupt store reads as empty.
    pub async fn read(&self) -> Vec<Note> {
        match self.store.load_all().await {
            Ok(notes) => notes,
            Err(error) => {
                tracing::error!(%error, "error reading notes");
                Vec::new()
            }
        }
    }

    pub async fn write(&self, notes: &[Note]) -> store::Result<()> {
        self.store.save_all(notes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::JsonFileStore;

    #[tokio::test]
    async fn corrupt_file_reads_as_empty() -> store::Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("notes.json")).await?;
        std::fs::write(store.path(), "[{\"id\": ").unwrap();

        let repo = NoteRepo::new(Arc::new(store));

        assert!(repo.read().await.is_empty());
        Ok(())
    }
}
