use axum::extract::{Query, State};
use axum::routing::post;
use axum::{Json, Router};
use mongodb::bson::Document;
use serde::Deserialize;

use crate::error::AppResult;
use crate::extractors::ValidatedJson;
use crate::routes::{insert_entity, IdResponse};
use crate::schemas::Message;
use crate::state::AppState;
use crate::store::Filter;

const LIST_CAP: i64 = 200;

pub fn router() -> Router<AppState> {
    Router::new().route("/messages", post(send_message).get(list_messages))
}

async fn send_message(
    State(state): State<AppState>,
    ValidatedJson(message): ValidatedJson<Message>,
) -> AppResult<Json<IdResponse>> {
    insert_entity(&state, Message::COLLECTION, &message).await
}

#[derive(Debug, Deserialize)]
pub struct ListMessagesParams {
    pub user_id: String,
    pub with_user: Option<String>,
}

async fn list_messages(
    State(state): State<AppState>,
    Query(params): Query<ListMessagesParams>,
) -> AppResult<Json<Vec<Document>>> {
    let messages = state
        .store
        .find_many(Message::COLLECTION, message_filter(&params), LIST_CAP)
        .await?;
    Ok(Json(messages))
}

/// Without `with_user` (or with it empty): everything the user sent or
/// received. With it: exactly the conversation between the two, in either
/// direction.
fn message_filter(params: &ListMessagesParams) -> Filter {
    let user = params.user_id.clone();
    match params.with_user.as_deref().filter(|w| !w.is_empty()) {
        Some(other) => Filter::Or(vec![
            Filter::And(vec![
                Filter::eq("sender_id", user.clone()),
                Filter::eq("recipient_id", other),
            ]),
            Filter::And(vec![
                Filter::eq("sender_id", other),
                Filter::eq("recipient_id", user),
            ]),
        ]),
        None => Filter::Or(vec![
            Filter::eq("sender_id", user.clone()),
            Filter::eq("recipient_id", user),
        ]),
    }
}
