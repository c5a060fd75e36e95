use aide::scalar::Scalar;
use axum::{
    middleware::{self},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;

use crate::config;

use serde_json::json;

use crate::{
    errors::{self, on_error, ErrorResponse},
    notes::{self, NoteRepo},
    openapi::{self, aide::axum::ApiRouter, OpenApi},
    state::AppState,
    store::NoteStore,
};

pub struct AppParams<Router>
where
    Router: FnOnce(AppState) -> ApiRouter,
{
    pub store: Arc<dyn NoteStore>,
    pub router: Router,
}

pub async fn create<R>(AppParams { store, router }: AppParams<R>) -> errors::Result<(Router, OpenApi)>
where
    R: FnOnce(AppState) -> ApiRouter,
{
    let mut api = OpenApi::default();

    let state = AppState {
        notes: NoteRepo::new(store),
    };

    let docs_router = axum::Router::new()
        .route(
            "/__docs__",
            get(Scalar::new("/__docs__/spec.json").with_title("Notes API").axum_handler()),
        )
        .route("/__docs__/spec.json", get(serve_docs));

    let app = ApiRouter::new()
        .route("/__version__", get(version))
        .route("/__heartbeat__", get(heartbeat))
        .route("/__lbheartbeat__", get(lbheartbeat))
        .merge(docs_router)
        .merge(router(state))
        .finish_api_with(&mut api, |t| {
            t.title("Notes").default_response::<openapi::Json<ErrorResponse>>()
        })
        .layer(
            ServiceBuilder::new()
                .layer(Extension(Arc::new(api.clone())))
                .layer(middleware::from_fn(on_error)),
        );

    Ok((app, api))
}

/// Every API route group the service exposes.
pub fn routes(state: AppState) -> ApiRouter {
    ApiRouter::new().merge(notes::router(state))
}

async fn version() -> impl IntoResponse {
    let config = config();
    Json(json!({
        "source" : config.source,
        "version": config.version,
        "commit" : config.git_commit,
        "build"  : config.pipeline_id
    }))
}

async fn heartbeat() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn lbheartbeat() -> impl IntoResponse {
    ""
}

async fn serve_docs(Extension(api): Extension<Arc<OpenApi>>) -> impl IntoResponse {
    Json(api.as_ref().clone())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::store::MemoryStore;
    use axum_test::TestServer;
    use serde_json::Value;

    async fn test_server() -> TestServer {
        crate::tests::test_server(Arc::new(MemoryStore::default()), super::routes)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn heartbeat() {
        let server = test_server().await;

        let response = server.get("/__heartbeat__").await;

        assert_eq!(response.status_code(), 200);
        assert_eq!(response.json::<Value>()["status"], "ok");
        server.get("/__lbheartbeat__").await.assert_status_ok();
    }

    #[tokio::test]
    async fn openapi_spec_lists_note_routes() {
        let server = test_server().await;

        let spec = server.get("/__docs__/spec.json").await.json::<Value>();

        assert!(spec["paths"]["/api/notes"]["get"].is_object());
        assert!(spec["paths"]["/api/notes"]["post"].is_object());
        assert!(spec["paths"]["/api/notes/{note_id}"]["put"].is_object());
        assert!(spec["paths"]["/api/notes/{note_id}"]["delete"].is_object());
    }
}
