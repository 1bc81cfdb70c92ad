//! Posts and their engagement records (comments, likes).

use axum::extract::{Query, State};
use axum::routing::post;
use axum::{Json, Router};
use mongodb::bson::Document;
use serde::Deserialize;

use crate::error::AppResult;
use crate::extractors::ValidatedJson;
use crate::routes::{insert_entity, IdResponse};
use crate::schemas::{Comment, Like, Post};
use crate::state::AppState;
use crate::store::Filter;

const LIST_CAP: i64 = 100;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/posts", post(create_post).get(list_posts))
        .route("/comments", post(add_comment))
        .route("/likes", post(add_like))
}

async fn create_post(
    State(state): State<AppState>,
    ValidatedJson(post): ValidatedJson<Post>,
) -> AppResult<Json<IdResponse>> {
    insert_entity(&state, Post::COLLECTION, &post).await
}

#[derive(Debug, Deserialize)]
pub struct ListPostsParams {
    pub tag: Option<String>,
    pub author_id: Option<String>,
}

async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<ListPostsParams>,
) -> AppResult<Json<Vec<Document>>> {
    let posts = state
        .store
        .find_many(Post::COLLECTION, post_filter(&params), LIST_CAP)
        .await?;
    Ok(Json(posts))
}

async fn add_comment(
    State(state): State<AppState>,
    ValidatedJson(comment): ValidatedJson<Comment>,
) -> AppResult<Json<IdResponse>> {
    insert_entity(&state, Comment::COLLECTION, &comment).await
}

async fn add_like(
    State(state): State<AppState>,
    ValidatedJson(like): ValidatedJson<Like>,
) -> AppResult<Json<IdResponse>> {
    insert_entity(&state, Like::COLLECTION, &like).await
}

/// `tag` and `author_id` are independent restrictions; both given means both
/// must hold. Empty-string params count as absent.
fn post_filter(params: &ListPostsParams) -> Filter {
    let mut clauses = Vec::new();
    if let Some(tag) = params.tag.as_deref().filter(|t| !t.is_empty()) {
        clauses.push(Filter::contains("tags", tag));
    }
    if let Some(author_id) = params.author_id.as_deref().filter(|a| !a.is_empty()) {
        clauses.push(Filter::eq("author_id", author_id));
    }

    match clauses.len() {
        0 => Filter::All,
        1 => clauses.remove(0),
        _ => Filter::And(clauses),
    }
}
