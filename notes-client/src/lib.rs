//! Client side of the notes service: an HTTP client for `/api/notes` and the
//! board state a UI renders from.

pub mod api;
pub mod board;

pub use api::{ApiError, ApiResult, NotesApi};
pub use board::{Board, Draft, Tab};
pub use notes_types::Note;
