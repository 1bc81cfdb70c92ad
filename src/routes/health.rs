use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::{json, Value};

use crate::state::AppState;
use crate::store::StoreError;

/// How many collection names the diagnostic enumerates at most.
const COLLECTION_SAMPLE_CAP: usize = 20;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/test", get(store_diagnostics))
}

async fn index() -> Json<Value> {
    Json(json!({ "service": "creatorhub", "status": "ok" }))
}

#[derive(Debug, Serialize)]
struct StoreDiagnostics {
    backend: &'static str,
    store: String,
    database_name: String,
    connection_status: &'static str,
    collections: Vec<String>,
}

/// Store connectivity report. Downgrades every store failure into a
/// descriptive body; this endpoint never answers with a 5xx.
async fn store_diagnostics(State(state): State<AppState>) -> Json<StoreDiagnostics> {
    let database_name = state.config.database.name.clone();

    let diagnostics = match state.store.collection_names(COLLECTION_SAMPLE_CAP).await {
        Ok(collections) => StoreDiagnostics {
            backend: "running",
            store: "connected".to_string(),
            database_name,
            connection_status: "connected",
            collections,
        },
        Err(StoreError::Unavailable(message)) => StoreDiagnostics {
            backend: "running",
            store: format!("unavailable: {message}"),
            database_name,
            connection_status: "not connected",
            collections: Vec::new(),
        },
        Err(error) => StoreDiagnostics {
            backend: "running",
            store: format!("error: {error}"),
            database_name,
            connection_status: "not connected",
            collections: Vec::new(),
        },
    };

    Json(diagnostics)
}
