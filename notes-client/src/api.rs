use notes_types::{CreateNote, DeleteNoteResponse, Note, UpdateNote};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
    #[error("{ctx} ({status}): {body}")]
    Http {
        ctx: &'static str,
        status: StatusCode,
        body: String,
    },
    #[error("unexpected response body: {0}")]
    Parse(#[source] reqwest::Error),
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Thin client for the notes REST API.
#[derive(Clone, Debug)]
pub struct NotesApi {
    http: reqwest::Client,
    base_url: String,
}

impl NotesApi {
    /// `base_url` is the server origin, e.g. `http://localhost:5000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn notes_url(&self) -> String {
        format!("{}/api/notes", self.base_url)
    }

    fn note_url(&self, id: &str) -> String {
        format!("{}/api/notes/{id}", self.base_url)
    }

    pub async fn list(&self) -> ApiResult<Vec<Note>> {
        let res = self.http.get(self.notes_url()).send().await.map_err(ApiError::Network)?;
        parse(res, "Failed to fetch notes").await
    }

    pub async fn create(&self, note: &CreateNote) -> ApiResult<Note> {
        let res = self
            .http
            .post(self.notes_url())
            .json(note)
            .send()
            .await
            .map_err(ApiError::Network)?;
        parse(res, "Failed to create note").await
    }

    pub async fn update(&self, id: &str, note: &UpdateNote) -> ApiResult<Note> {
        let res = self
            .http
            .put(self.note_url(id))
            .json(note)
            .send()
            .await
            .map_err(ApiError::Network)?;
        parse(res, "Failed to update note").await
    }

    pub async fn delete(&self, id: &str) -> ApiResult<DeleteNoteResponse> {
        let res = self
            .http
            .delete(self.note_url(id))
            .send()
            .await
            .map_err(ApiError::Network)?;
        parse(res, "Failed to delete note").await
    }
}

async fn parse<T: DeserializeOwned>(res: Response, ctx: &'static str) -> ApiResult<T> {
    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(ApiError::Http { ctx, status, body });
    }
    res.json::<T>().await.map_err(ApiError::Parse)
}
