use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::{api::AccountId, error::ApiResult, main_lib::AppState};
use inmoflow_core::contacts::{Contact, NewContact};

async fn list_contacts(
    State(state): State<Arc<AppState>>,
    account: AccountId,
) -> ApiResult<Json<Vec<Contact>>> {
    let contacts = state.contact_repository.list_by_account(&account.0)?;
    Ok(Json(contacts))
}

async fn get_contact(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Contact>> {
    let contact = state.contact_repository.get_by_id(&id)?;
    Ok(Json(contact))
}

async fn create_contact(
    State(state): State<Arc<AppState>>,
    account: AccountId,
    Json(mut body): Json<NewContact>,
) -> ApiResult<Json<Contact>> {
    body.account_id = account.0;
    let contact = state.contact_repository.create(body).await?;
    Ok(Json(contact))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/contacts", get(list_contacts).post(create_contact))
        .route("/contacts/{id}", get(get_contact))
}
