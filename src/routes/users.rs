use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use mongodb::bson::Document;

use crate::error::AppResult;
use crate::extractors::ValidatedJson;
use crate::routes::{insert_entity, IdResponse};
use crate::schemas::User;
use crate::state::AppState;
use crate::store::Filter;

const LIST_CAP: i64 = 50;

pub fn router() -> Router<AppState> {
    Router::new().route("/users", post(create_user).get(list_users))
}

async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(user): ValidatedJson<User>,
) -> AppResult<Json<IdResponse>> {
    insert_entity(&state, User::COLLECTION, &user).await
}

async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<Document>>> {
    let users = state
        .store
        .find_many(User::COLLECTION, Filter::All, LIST_CAP)
        .await?;
    Ok(Json(users))
}
