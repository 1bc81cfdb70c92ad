//! Subscription plans, subscriptions, and payment records.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use crate::error::AppResult;
use crate::extractors::ValidatedJson;
use crate::routes::{insert_entity, IdResponse};
use crate::schemas::{Payment, Subscription, SubscriptionPlan};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/plans", post(create_plan))
        .route("/subscriptions", post(create_subscription))
        .route("/payments", post(create_payment))
}

async fn create_plan(
    State(state): State<AppState>,
    ValidatedJson(plan): ValidatedJson<SubscriptionPlan>,
) -> AppResult<Json<IdResponse>> {
    insert_entity(&state, SubscriptionPlan::COLLECTION, &plan).await
}

// No provider webhook verification here; subscriptions are recorded as-is.
async fn create_subscription(
    State(state): State<AppState>,
    ValidatedJson(subscription): ValidatedJson<Subscription>,
) -> AppResult<Json<IdResponse>> {
    insert_entity(&state, Subscription::COLLECTION, &subscription).await
}

async fn create_payment(
    State(state): State<AppState>,
    ValidatedJson(payment): ValidatedJson<Payment>,
) -> AppResult<Json<IdResponse>> {
    insert_entity(&state, Payment::COLLECTION, &payment).await
}
