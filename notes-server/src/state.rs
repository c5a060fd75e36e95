use axum::extract::FromRef;

use crate::notes::NoteRepo;

#[derive(FromRef, Clone)]
pub struct AppState {
    pub notes: NoteRepo,
}
