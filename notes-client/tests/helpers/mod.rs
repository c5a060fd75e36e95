use std::sync::Arc;

use notes_client::NotesApi;
use notes_server::{
    app::{create, routes, AppParams},
    store::JsonFileStore,
};
use tempfile::TempDir;
use tokio::net::TcpListener;

/// A notes server on an ephemeral port, backed by a note file in a temp dir.
pub struct TestApp {
    pub api: NotesApi,
    pub dir: TempDir,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("data").join("notes.json"))
            .await
            .unwrap();

        let (app, _) = create(AppParams {
            store: Arc::new(store),
            router: routes,
        })
        .await
        .unwrap();

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        Self {
            api: NotesApi::new(format!("http://{addr}")),
            dir,
        }
    }

    pub fn note_file(&self) -> std::path::PathBuf {
        self.dir.path().join("data").join("notes.json")
    }
}
