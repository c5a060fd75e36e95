use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use notes_types::Note;
use tokio::sync::RwLock;

use super::{Error, NoteStore, Result};

#[derive(Debug, Default)]
pub struct MemoryStore {
    notes: RwLock<Vec<Note>>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new(notes: Vec<Note>) -> Self {
        Self {
            notes: RwLock::new(notes),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// While set, every `save_all` fails and leaves the contents untouched.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn load_all(&self) -> Result<Vec<Note>> {
        Ok(self.notes.read().await.clone())
    }

    async fn save_all(&self, notes: &[Note]) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Error::Unavailable("writes disabled".into()));
        }
        *self.notes.write().await = notes.to_vec();
        Ok(())
    }
}
