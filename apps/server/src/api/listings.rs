use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::{api::AccountId, error::ApiResult, main_lib::AppState};
use inmoflow_core::completion::CompletionResult;
use inmoflow_core::listings::{
    Listing, ListingStatus, ListingUpdate, ListingView, NewListing,
};

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListParams {
    is_active: Option<bool>,
    status: Option<ListingStatus>,
}

async fn list_listings(
    State(state): State<Arc<AppState>>,
    account: AccountId,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Vec<ListingView>>> {
    let statuses = params.status.map(|s| vec![s]);
    let listings = state.listing_service.list_listings(
        &account.0,
        params.is_active,
        statuses.as_deref(),
    )?;
    Ok(Json(listings))
}

async fn get_listing(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<ListingView>> {
    let listing = state.listing_service.get_listing(&id)?;
    Ok(Json(listing))
}

async fn create_listing(
    State(state): State<Arc<AppState>>,
    account: AccountId,
    Json(mut body): Json<NewListing>,
) -> ApiResult<Json<ListingView>> {
    body.account_id = account.0;
    let listing = state.listing_service.create_listing(body).await?;
    Ok(Json(listing))
}

async fn update_listing(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ListingUpdate>,
) -> ApiResult<Json<ListingView>> {
    let listing = state.listing_service.update_listing(body).await?;
    Ok(Json(listing))
}

async fn delete_listing(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.listing_service.delete_listing(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Completion report backing the progress indicator and the publish gate.
async fn get_completion(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<CompletionResult>> {
    let completion = state.listing_service.get_completion(&id)?;
    Ok(Json(completion))
}

async fn publish_listing(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Listing>> {
    let listing = state.listing_service.publish_listing(&id).await?;
    Ok(Json(listing))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/listings",
            get(list_listings).post(create_listing).put(update_listing),
        )
        .route("/listings/{id}", get(get_listing).delete(delete_listing))
        .route("/listings/{id}/completion", get(get_completion))
        .route("/listings/{id}/publish", post(publish_listing))
}
