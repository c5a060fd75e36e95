pub mod config;

pub mod app;
pub mod errors;
pub mod notes;
pub mod openapi;
pub mod shared;
pub mod state;
pub mod store;

pub use config::config;
pub use errors::{Error, Result};

#[cfg(test)]
pub mod tests {
    use std::sync::Arc;

    use crate::{
        app::{create, AppParams},
        errors::Result,
        state::AppState,
        store::NoteStore,
    };
    use aide::axum::ApiRouter;
    use axum_test::TestServer;

    pub async fn test_server<R>(store: Arc<dyn NoteStore>, router: R) -> Result<TestServer>
    where
        R: FnOnce(AppState) -> ApiRouter,
    {
        let (app, _) = create(AppParams { store, router }).await?;

        Ok(TestServer::new(app).unwrap())
    }
}
