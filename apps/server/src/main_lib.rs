use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use inmoflow_core::{
    contacts::ContactRepositoryTrait,
    leads::{LeadService, LeadServiceTrait},
    listings::{ListingService, ListingServiceTrait},
    matching::{MatchingService, MatchingServiceTrait},
    prospects::{ProspectService, ProspectServiceTrait},
};
use inmoflow_storage_sqlite::{
    contacts::ContactRepository, db, leads::LeadRepository, listings::ListingRepository,
    prospects::ProspectRepository,
};

pub struct AppState {
    pub contact_repository: Arc<dyn ContactRepositoryTrait + Send + Sync>,
    pub prospect_service: Arc<dyn ProspectServiceTrait + Send + Sync>,
    pub listing_service: Arc<dyn ListingServiceTrait + Send + Sync>,
    pub matching_service: Arc<dyn MatchingServiceTrait + Send + Sync>,
    pub lead_service: Arc<dyn LeadServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("IF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    let writer = db::spawn_writer(pool.clone());

    let contact_repository = Arc::new(ContactRepository::new(pool.clone(), writer.clone()));
    let prospect_repository = Arc::new(ProspectRepository::new(pool.clone(), writer.clone()));
    let listing_repository = Arc::new(ListingRepository::new(pool.clone(), writer.clone()));
    let lead_repository = Arc::new(LeadRepository::new(pool.clone(), writer.clone()));

    let prospect_service = Arc::new(ProspectService::new(prospect_repository.clone()));
    let listing_service = Arc::new(ListingService::new(listing_repository.clone()));
    let matching_service = Arc::new(MatchingService::new(
        prospect_repository.clone(),
        listing_repository.clone(),
        lead_repository.clone(),
    ));
    let lead_service = Arc::new(LeadService::new(
        lead_repository.clone(),
        prospect_repository.clone(),
    ));

    Ok(Arc::new(AppState {
        contact_repository,
        prospect_service,
        listing_service,
        matching_service,
        lead_service,
    }))
}
