pub mod analytics;
pub mod billing;
pub mod discovery;
pub mod health;
pub mod live;
pub mod messages;
pub mod notifications;
pub mod posts;
pub mod users;

use axum::{Json, Router};
use mongodb::bson;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::AppResult;
use crate::state::AppState;
use crate::store::StoreError;

/// Response body for every create endpoint.
#[derive(Debug, Serialize)]
pub struct IdResponse {
    pub id: String,
}

/// Build the full application router. Kept separate from `main` so the
/// integration tests can drive it against an in-memory store.
pub fn router(state: AppState) -> Router {
    // The API is consumed from arbitrary web origins; CORS is wide open.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(health::router())
        .merge(users::router())
        .merge(posts::router())
        .merge(messages::router())
        .merge(billing::router())
        .merge(notifications::router())
        .merge(live::router())
        .merge(discovery::router())
        .merge(analytics::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Shared create path: serialize the validated record, insert, return `{id}`.
pub(crate) async fn insert_entity<T: Serialize>(
    state: &AppState,
    collection: &str,
    entity: &T,
) -> AppResult<Json<IdResponse>> {
    let document = bson::to_document(entity).map_err(StoreError::from)?;
    let id = state.store.insert_one(collection, document).await?;
    Ok(Json(IdResponse { id }))
}
