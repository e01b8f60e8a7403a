use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};

use crate::{
    api::AccountId,
    error::ApiResult,
    main_lib::AppState,
};
use inmoflow_core::leads::LeadActionOutcome;
use inmoflow_core::matching::{MatchQuery, MatchResults};

async fn search_matches(
    State(state): State<Arc<AppState>>,
    account: AccountId,
    Json(query): Json<MatchQuery>,
) -> ApiResult<Json<MatchResults>> {
    let results = state.matching_service.find_matches(&query, &account.0)?;
    Ok(Json(results))
}

/// Identifies one (prospect, listing) pair for the side-effecting actions.
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct PairRequest {
    prospect_id: String,
    listing_id: String,
}

async fn create_lead(
    State(state): State<Arc<AppState>>,
    account: AccountId,
    Json(body): Json<PairRequest>,
) -> ApiResult<Json<LeadActionOutcome>> {
    let outcome = state
        .lead_service
        .create_lead(&body.prospect_id, &body.listing_id, &account.0)
        .await;
    Ok(Json(outcome))
}

async fn dismiss_lead(
    State(state): State<Arc<AppState>>,
    account: AccountId,
    Json(body): Json<PairRequest>,
) -> ApiResult<Json<LeadActionOutcome>> {
    let outcome = state
        .lead_service
        .dismiss_lead(&body.prospect_id, &body.listing_id, &account.0)
        .await;
    Ok(Json(outcome))
}

async fn save_match(
    State(state): State<Arc<AppState>>,
    account: AccountId,
    Json(body): Json<PairRequest>,
) -> ApiResult<Json<LeadActionOutcome>> {
    let outcome = state
        .lead_service
        .save_match(&body.prospect_id, &body.listing_id, &account.0)
        .await;
    Ok(Json(outcome))
}

async fn contact_match(
    State(state): State<Arc<AppState>>,
    account: AccountId,
    Json(body): Json<PairRequest>,
) -> ApiResult<Json<LeadActionOutcome>> {
    let outcome = state
        .lead_service
        .contact_match(&body.prospect_id, &body.listing_id, &account.0)
        .await;
    Ok(Json(outcome))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/matches/search", post(search_matches))
        .route("/matches/leads", post(create_lead))
        .route("/matches/leads/dismiss", post(dismiss_lead))
        .route("/matches/save", post(save_match))
        .route("/matches/contact", post(contact_match))
}
