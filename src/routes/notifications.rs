use axum::extract::{Query, State};
use axum::routing::post;
use axum::{Json, Router};
use mongodb::bson::Document;
use serde::Deserialize;

use crate::error::AppResult;
use crate::extractors::ValidatedJson;
use crate::routes::{insert_entity, IdResponse};
use crate::schemas::Notification;
use crate::state::AppState;
use crate::store::Filter;

const LIST_CAP: i64 = 100;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/notifications",
        post(create_notification).get(list_notifications),
    )
}

async fn create_notification(
    State(state): State<AppState>,
    ValidatedJson(notification): ValidatedJson<Notification>,
) -> AppResult<Json<IdResponse>> {
    insert_entity(&state, Notification::COLLECTION, &notification).await
}

#[derive(Debug, Deserialize)]
struct ListNotificationsParams {
    user_id: String,
}

async fn list_notifications(
    State(state): State<AppState>,
    Query(params): Query<ListNotificationsParams>,
) -> AppResult<Json<Vec<Document>>> {
    let notifications = state
        .store
        .find_many(
            Notification::COLLECTION,
            Filter::eq("user_id", params.user_id),
            LIST_CAP,
        )
        .await?;
    Ok(Json(notifications))
}
