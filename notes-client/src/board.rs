//! Local state behind the notes board: a best-effort mirror of the server's
//! collection plus search, navigation and editor state.
//!
//! Operations that talk to the server log failures and otherwise leave the
//! state as it was; nothing is surfaced to the caller.

use notes_types::{CreateNote, Note, UpdateNote};

use crate::api::NotesApi;

/// Sidebar navigation. Only changes which entry is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Favorites,
    Archive,
}

/// The note being composed in the editor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    /// Set when editing an existing note.
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    pub color: Option<String>,
}

impl From<&Note> for Draft {
    fn from(note: &Note) -> Self {
        Self {
            id: Some(note.id.clone()),
            title: note.title.clone(),
            content: note.content.clone(),
            color: Some(note.color.clone()),
        }
    }
}

#[derive(Debug, Default)]
pub struct Board {
    notes: Vec<Note>,
    search_query: String,
    active_tab: Tab,
    editor_open: bool,
    editing: bool,
    draft: Draft,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Notes matching the search query, in collection order.
    pub fn visible_notes(&self) -> Vec<&Note> {
        self.notes.iter().filter(|n| n.matches(&self.search_query)).collect()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn is_editor_open(&self) -> bool {
        self.editor_open
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    /// Opens the editor on `note`, or on an empty draft when `None`.
    pub fn open_editor(&mut self, note: Option<&Note>) {
        match note {
            Some(note) => {
                self.draft = Draft::from(note);
                self.editing = true;
            }
            None => {
                self.draft = Draft::default();
                self.editing = false;
            }
        }
        self.editor_open = true;
    }

    pub fn close_editor(&mut self) {
        self.editor_open = false;
        self.editing = false;
        self.draft = Draft::default();
    }

    /// Replaces the local collection with the server's.
    pub async fn fetch(&mut self, api: &NotesApi) {
        match api.list().await {
            Ok(notes) => self.notes = notes,
            Err(error) => tracing::error!(%error, "error fetching notes"),
        }
    }

    /// Creates or updates the draft depending on the editor mode, then closes the editor.
    pub async fn save(&mut self, api: &NotesApi) {
        let Draft {
            id,
            title,
            content,
            color,
        } = self.draft.clone();

        let saved = match (self.editing, id) {
            (true, Some(id)) => {
                let update = UpdateNote {
                    title: Some(title),
                    content: Some(content),
                    color,
                };
                api.update(&id, &update).await.map(|note| {
                    if let Some(existing) = self.notes.iter_mut().find(|n| n.id == note.id) {
                        *existing = note;
                    }
                })
            }
            _ => {
                let create = CreateNote {
                    title: Some(title),
                    content: Some(content),
                    color,
                };
                api.create(&create).await.map(|note| self.notes.push(note))
            }
        };

        match saved {
            Ok(()) => self.close_editor(),
            Err(error) => tracing::error!(%error, "error saving note"),
        }
    }

    /// Deletes `id` on the server and locally once `confirm` agrees.
    pub async fn delete<F>(&mut self, api: &NotesApi, id: &str, confirm: F)
    where
        F: FnOnce(&Note) -> bool,
    {
        let Some(note) = self.notes.iter().find(|n| n.id == id) else {
            return;
        };
        if !confirm(note) {
            return;
        }

        match api.delete(id).await {
            Ok(_) => self.notes.retain(|n| n.id != id),
            Err(error) => tracing::error!(%error, note_id = id, "error deleting note"),
        }
    }
}
