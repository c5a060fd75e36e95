use crate::{
    openapi::{
        aide::axum::{
            routing::{get, put},
            ApiRouter, IntoApiResponse,
        },
        Json, Path,
    },
    state::AppState,
};
use axum::{extract::State, http::StatusCode};

use schemars::JsonSchema;

use serde::Deserialize;

use super::{handlers, CreateNote, Note, NoteRepo, UpdateNote};

#[derive(Debug, Deserialize, JsonSchema)]
struct NoteIdPath {
    note_id: String,
}

pub fn router(state: AppState) -> ApiRouter {
    ApiRouter::new()
        .api_route(
            "/api/notes",
            get(list_notes).post_with(create_note, |t| t.response::<201, Json<Note>>()),
        )
        .api_route("/api/notes/{note_id}", put(update_note).delete(delete_note))
        .with_state(state)
}

async fn list_notes(State(repo): State<NoteRepo>) -> impl IntoApiResponse {
    Json(handlers::list_notes(&repo).await)
}

async fn create_note(State(repo): State<NoteRepo>, Json(args): Json<CreateNote>) -> impl IntoApiResponse {
    handlers::create_note(args, &repo)
        .await
        .map(|r| (StatusCode::CREATED, Json(r)))
}

async fn update_note(
    Path(NoteIdPath { note_id }): Path<NoteIdPath>,
    State(repo): State<NoteRepo>,
    Json(args): Json<UpdateNote>,
) -> impl IntoApiResponse {
    handlers::update_note(note_id, args, &repo).await.map(Json)
}

async fn delete_note(
    Path(NoteIdPath { note_id }): Path<NoteIdPath>,
    State(repo): State<NoteRepo>,
) -> impl IntoApiResponse {
    handlers::delete_note(note_id, &repo).await.map(Json)
}
