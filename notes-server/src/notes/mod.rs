mod handlers;
mod repository;
mod routes;

pub use notes_types::{CreateNote, DeleteNoteResponse, Note, UpdateNote};
pub use repository::NoteRepo;

use crate::{openapi::aide::axum::ApiRouter, state::AppState};

pub fn router(state: AppState) -> ApiRouter {
    ApiRouter::new().merge(routes::router(state))
}
