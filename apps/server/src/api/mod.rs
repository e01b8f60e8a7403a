//! HTTP API surface.

mod contacts;
mod context;
mod listings;
mod matches;
mod prospects;
mod status;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::main_lib::AppState;

pub use context::AccountId;

pub fn app_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(matches::router())
        .merge(prospects::router())
        .merge(listings::router())
        .merge(contacts::router())
        .merge(status::router());

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .with_state(state)
}
