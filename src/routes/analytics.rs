use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use crate::error::AppResult;
use crate::extractors::ValidatedJson;
use crate::routes::{insert_entity, IdResponse};
use crate::schemas::AnalyticsEvent;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/analytics", post(track))
}

async fn track(
    State(state): State<AppState>,
    ValidatedJson(event): ValidatedJson<AnalyticsEvent>,
) -> AppResult<Json<IdResponse>> {
    insert_entity(&state, AnalyticsEvent::COLLECTION, &event).await
}
