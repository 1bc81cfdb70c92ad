//! Live streams and audio rooms.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use crate::error::AppResult;
use crate::extractors::ValidatedJson;
use crate::routes::{insert_entity, IdResponse};
use crate::schemas::{AudioRoom, Stream};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/streams", post(create_stream))
        .route("/audio-rooms", post(create_audio_room))
}

async fn create_stream(
    State(state): State<AppState>,
    ValidatedJson(stream): ValidatedJson<Stream>,
) -> AppResult<Json<IdResponse>> {
    insert_entity(&state, Stream::COLLECTION, &stream).await
}

async fn create_audio_room(
    State(state): State<AppState>,
    ValidatedJson(room): ValidatedJson<AudioRoom>,
) -> AppResult<Json<IdResponse>> {
    insert_entity(&state, AudioRoom::COLLECTION, &room).await
}
