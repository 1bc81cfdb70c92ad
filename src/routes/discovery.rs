//! Search and recommendations. Both are deliberate placeholders: search is
//! a substring/tag scan over posts, recommendations a static visibility
//! filter with no ranking.

use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use mongodb::bson::Document;
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::extractors::ValidatedJson;
use crate::schemas::Post;
use crate::state::AppState;
use crate::store::Filter;

const SEARCH_CAP: i64 = 50;
const RECOMMENDATION_CAP: i64 = 20;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/search", post(search))
        .route("/recommendations", get(recommendations))
}

#[derive(Debug, Deserialize, Validate)]
pub struct SearchQuery {
    pub q: String,
}

async fn search(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SearchQuery>,
) -> AppResult<Json<Vec<Document>>> {
    let posts = state
        .store
        .find_many(Post::COLLECTION, search_filter(&payload.q), SEARCH_CAP)
        .await?;
    Ok(Json(posts))
}

#[derive(Debug, Deserialize)]
struct RecommendationsParams {
    // Accepted for API compatibility; there is no personalization yet.
    #[allow(dead_code)]
    user_id: Option<String>,
}

async fn recommendations(
    State(state): State<AppState>,
    Query(_params): Query<RecommendationsParams>,
) -> AppResult<Json<Vec<Document>>> {
    let posts = state
        .store
        .find_many(
            Post::COLLECTION,
            recommendation_filter(),
            RECOMMENDATION_CAP,
        )
        .await?;
    Ok(Json(posts))
}

/// Case-insensitive substring over post text, or an exact tag.
fn search_filter(q: &str) -> Filter {
    Filter::Or(vec![
        Filter::matches_insensitive("text", q),
        Filter::contains("tags", q),
    ])
}

/// Only broadly visible posts are ever recommended.
fn recommendation_filter() -> Filter {
    Filter::is_in("visibility", vec!["public", "followers"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn search_matches_text_substring_case_insensitively() {
        let filter = search_filter("Rust");
        assert!(filter.matches(&doc! { "text": "learning rust today", "tags": [] }));
        assert!(!filter.matches(&doc! { "text": "learning go today", "tags": [] }));
    }

    #[test]
    fn search_matches_exact_tag() {
        let filter = search_filter("rust");
        assert!(filter.matches(&doc! { "text": "", "tags": ["rust"] }));
        // Tag membership is exact, not substring.
        assert!(!filter.matches(&doc! { "text": "", "tags": ["rustacean"] }));
    }

    #[test]
    fn recommendations_exclude_restricted_visibilities() {
        let filter = recommendation_filter();
        assert!(filter.matches(&doc! { "visibility": "public" }));
        assert!(filter.matches(&doc! { "visibility": "followers" }));
        assert!(!filter.matches(&doc! { "visibility": "subscribers" }));
        assert!(!filter.matches(&doc! { "visibility": "private" }));
    }
}
