use chrono::Utc;
use notes_types::{DEFAULT_COLOR, DEFAULT_TITLE};
use serde_json::Map;
use uuid::Uuid;

use crate::{Error, Result};

use super::{CreateNote, DeleteNoteResponse, Note, NoteRepo, UpdateNote};

pub async fn list_notes(repo: &NoteRepo) -> Vec<Note> {
    let _guard = repo.read_lock().await;
    repo.read().await
}

pub async fn create_note(CreateNote { title, content, color }: CreateNote, repo: &NoteRepo) -> Result<Note> {
    let title = title.filter(|t| !t.is_empty());
    let content = content.filter(|c| !c.is_empty());
    if title.is_none() && content.is_none() {
        return Err(Error::Validation("Title or content required".into()));
    }

    let _guard = repo.write_lock().await;
    let mut notes = repo.read().await;

    let note = Note {
        id: next_id(&notes),
        title: title.unwrap_or_else(|| DEFAULT_TITLE.into()),
        content: content.unwrap_or_default(),
        color: color.filter(|c| !c.is_empty()).unwrap_or_else(|| DEFAULT_COLOR.into()),
        created_at: Some(Utc::now()),
        updated_at: None,
        extra: Map::new(),
    };
    notes.push(note.clone());

    repo.write(&notes).await.map_err(Error::persist("Failed to save note"))?;

    tracing::info!(note_id = %note.id, "note created");
    Ok(note)
}

pub async fn update_note(
    note_id: String,
    UpdateNote { title, content, color }: UpdateNote,
    repo: &NoteRepo,
) -> Result<Note> {
    let _guard = repo.write_lock().await;
    let mut notes = repo.read().await;

    let note = notes
        .iter_mut()
        .find(|n| n.id == note_id)
        .ok_or_else(|| Error::NotFound("Note not found".into()))?;

    if let Some(title) = title {
        note.title = title;
    }
    if let Some(content) = content {
        note.content = content;
    }
    if let Some(color) = color {
        note.color = color;
    }
    note.updated_at = Some(Utc::now());
    let note = note.clone();

    repo.write(&notes).await.map_err(Error::persist("Failed to update note"))?;

    tracing::info!(note_id = %note.id, "note updated");
    Ok(note)
}

pub async fn delete_note(note_id: String, repo: &NoteRepo) -> Result<DeleteNoteResponse> {
    let _guard = repo.write_lock().await;
    let mut notes = repo.read().await;

    let initial_len = notes.len();
    notes.retain(|n| n.id != note_id);
    if notes.len() == initial_len {
        return Err(Error::NotFound("Note not found".into()));
    }

    repo.write(&notes).await.map_err(Error::persist("Failed to delete note"))?;

    tracing::info!(%note_id, "note deleted");
    Ok(DeleteNoteResponse::deleted())
}

fn next_id(notes: &[Note]) -> String {
    loop {
        let id = Uuid::now_v7().to_string();
        if !notes.iter().any(|n| n.id == id) {
            return id;
        }
    }
}
