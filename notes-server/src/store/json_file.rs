use std::path::{Path, PathBuf};

use async_trait::async_trait;
use notes_types::Note;
use tokio::fs;

use super::{Error, NoteStore, Result};

/// The whole collection as a JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates the parent directory and an empty `[]` file when they are missing.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|source| Error::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let exists = fs::try_exists(&path).await.map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        if !exists {
            fs::write(&path, "[]").await.map_err(|source| Error::Io {
                path: path.clone(),
                source,
            })?;
            tracing::info!(path = %path.display(), "created empty note file");
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> Error {
        Error::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn json_error(&self, source: serde_json::Error) -> Error {
        Error::Json {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl NoteStore for JsonFileStore {
    async fn load_all(&self) -> Result<Vec<Note>> {
        let raw = fs::read_to_string(&self.path).await.map_err(|e| self.io_error(e))?;
        serde_json::from_str(&raw).map_err(|e| self.json_error(e))
    }

    async fn save_all(&self, notes: &[Note]) -> Result<()> {
        let raw = serde_json::to_string_pretty(notes).map_err(|e| self.json_error(e))?;
        fs::write(&self.path, raw).await.map_err(|e| self.io_error(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::Map;

    fn note(id: &str) -> Note {
        Note {
            id: id.into(),
            title: format!("note {id}"),
            content: String::new(),
            color: "#ffffff".into(),
            created_at: Some(Utc::now()),
            updated_at: None,
            extra: Map::new(),
        }
    }

    #[tokio::test]
    async fn open_creates_directory_and_empty_file() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("notes.json");

        let store = JsonFileStore::open(&path).await?;

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
        assert!(store.load_all().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn open_keeps_existing_file() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        let existing = serde_json::to_string(&vec![note("1")]).unwrap();
        std::fs::write(&path, &existing).unwrap();

        let store = JsonFileStore::open(&path).await?;

        assert_eq!(store.load_all().await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn save_then_load_keeps_order() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("notes.json")).await?;

        store.save_all(&[note("b"), note("a"), note("c")]).await?;

        let ids = store.load_all().await?.into_iter().map(|n| n.id).collect::<Vec<_>>();
        assert_eq!(ids, ["b", "a", "c"]);

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.starts_with("[\n  {"));
        Ok(())
    }

    #[tokio::test]
    async fn load_reports_malformed_file() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("notes.json")).await?;
        std::fs::write(store.path(), "{ not json").unwrap();

        assert!(matches!(store.load_all().await, Err(Error::Json { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn save_reports_io_failure() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("notes.json")).await?;
        std::fs::remove_file(store.path()).unwrap();
        std::fs::create_dir(store.path()).unwrap();

        assert!(matches!(store.save_all(&[note("1")]).await, Err(Error::Io { .. })));
        Ok(())
    }
}
