use std::sync::Arc;

use notes_server::{
    app::{self, AppParams},
    config,
    shared::tracing::{add_http_layers, setup_tracing},
    store::JsonFileStore,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> notes_server::Result<()> {
    let config = config();

    setup_tracing(config.log_json);

    let store = JsonFileStore::open(&config.data_file).await?;
    tracing::info!(path = %store.path().display(), "using note file");

    let (app, _api) = app::create(AppParams {
        store: Arc::new(store),
        router: app::routes,
    })
    .await?;

    let app = add_http_layers(app);

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;

    tracing::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
