use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::{api::AccountId, error::ApiResult, main_lib::AppState};
use inmoflow_core::prospects::{
    NewProspect, Prospect, ProspectStatus, ProspectUpdate, ProspectView,
};

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListParams {
    status: Option<ProspectStatus>,
}

async fn list_prospects(
    State(state): State<Arc<AppState>>,
    account: AccountId,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Vec<ProspectView>>> {
    let prospects = state
        .prospect_service
        .list_prospects(&account.0, params.status)?;
    Ok(Json(prospects))
}

async fn get_prospect(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Prospect>> {
    let prospect = state.prospect_service.get_prospect(&id)?;
    Ok(Json(prospect))
}

async fn create_prospect(
    State(state): State<Arc<AppState>>,
    account: AccountId,
    Json(mut body): Json<NewProspect>,
) -> ApiResult<Json<Prospect>> {
    body.account_id = account.0;
    let prospect = state.prospect_service.create_prospect(body).await?;
    Ok(Json(prospect))
}

async fn update_prospect(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ProspectUpdate>,
) -> ApiResult<Json<Prospect>> {
    let prospect = state.prospect_service.update_prospect(body).await?;
    Ok(Json(prospect))
}

async fn delete_prospect(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.prospect_service.delete_prospect(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/prospects",
            get(list_prospects)
                .post(create_prospect)
                .put(update_prospect),
        )
        .route("/prospects/{id}", get(get_prospect).delete(delete_prospect))
}
