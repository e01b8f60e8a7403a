//! End-to-end repository tests over a real SQLite file: migrations, the
//! writer actor, the candidate join, and the duplicate-lead guard.

use std::sync::Arc;

use rust_decimal::Decimal;
use tempfile::TempDir;

use inmoflow_core::accounts::{AccountRepositoryTrait, NewAccount};
use inmoflow_core::contacts::{ContactRepositoryTrait, NewContact};
use inmoflow_core::leads::{LeadCreation, LeadRepositoryTrait, LeadService, LeadServiceTrait, NewLead};
use inmoflow_core::listings::{
    ListingRepositoryTrait, ListingStatus, NewListing, PropertyType, TransactionType,
};
use inmoflow_core::matching::{MatchQuery, MatchType, MatchingService, MatchingServiceTrait};
use inmoflow_core::prospects::{NewProspect, ProspectRepositoryTrait, ProspectStatus};
use inmoflow_storage_sqlite::accounts::AccountRepository;
use inmoflow_storage_sqlite::contacts::ContactRepository;
use inmoflow_storage_sqlite::db;
use inmoflow_storage_sqlite::leads::LeadRepository;
use inmoflow_storage_sqlite::listings::ListingRepository;
use inmoflow_storage_sqlite::prospects::ProspectRepository;

struct TestDb {
    _dir: TempDir,
    pool: db::DbPool,
    writer: db::WriteHandle,
}

fn setup() -> TestDb {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("inmoflow-test.db");
    let db_path = db_path.to_string_lossy().to_string();
    db::init(&db_path).unwrap();
    let pool = db::create_pool(&db_path).unwrap();
    let writer = db::spawn_writer(pool.clone());
    TestDb {
        _dir: dir,
        pool,
        writer,
    }
}

async fn seed_account(db: &TestDb, name: &str) -> String {
    let repo = AccountRepository::new(db.pool.clone(), db.writer.clone());
    repo.create(NewAccount {
        id: None,
        name: name.to_string(),
        is_active: true,
    })
    .await
    .unwrap()
    .id
}

async fn seed_contact(db: &TestDb, account_id: &str, name: &str) -> String {
    let repo = ContactRepository::new(db.pool.clone(), db.writer.clone());
    repo.create(NewContact {
        id: None,
        account_id: account_id.to_string(),
        name: name.to_string(),
        email: None,
        phone: None,
    })
    .await
    .unwrap()
    .id
}

fn new_listing(account_id: &str, price: i64) -> NewListing {
    NewListing {
        id: None,
        account_id: account_id.to_string(),
        listing_type: TransactionType::Sale,
        price: Some(Decimal::from(price)),
        status: ListingStatus::Published,
        is_active: true,
        property_type: PropertyType::Piso,
        title: Some("Piso en Malasaña".to_string()),
        bedrooms: Some(2),
        bathrooms: Some(Decimal::ONE),
        square_meter: Some(Decimal::from(70)),
        built_surface_area: None,
        neighborhood_id: None,
        has_elevator: true,
        has_garage: false,
        has_storage_room: false,
        has_terrace: false,
        street: Some("Calle del Pez 10".to_string()),
        city: Some("Madrid".to_string()),
        province: Some("Madrid".to_string()),
        postal_code: Some("28004".to_string()),
        description: Some("Piso luminoso con balcón a la calle".to_string()),
        construction_year: Some(1950),
        image_count: 6,
    }
}

fn new_prospect(account_id: &str, contact_id: &str) -> NewProspect {
    NewProspect {
        id: None,
        account_id: account_id.to_string(),
        contact_id: contact_id.to_string(),
        status: ProspectStatus::Active,
        transaction_type: TransactionType::Sale,
        property_type: PropertyType::Piso,
        min_price: Some(Decimal::from(100_000)),
        max_price: Some(Decimal::from(200_000)),
        min_bedrooms: Some(2),
        min_bathrooms: None,
        min_area: None,
        max_area: None,
        preferred_areas: Vec::new(),
        extras: Some(r#"{"elevator":true}"#.to_string()),
        urgency: 2,
        is_funding_ready: true,
        notes: None,
    }
}

#[tokio::test]
async fn test_listing_roundtrip_through_join() {
    let db = setup();
    let account_id = seed_account(&db, "Agencia Centro").await;

    let repo = ListingRepository::new(db.pool.clone(), db.writer.clone());
    let view = repo.create(new_listing(&account_id, 150_000)).await.unwrap();

    assert_eq!(view.listing.account_id, account_id);
    assert_eq!(view.property.property_type, PropertyType::Piso);
    assert_eq!(view.listing.price, Some(Decimal::from(150_000)));

    let reloaded = repo.get_view(&view.listing.id).unwrap();
    assert_eq!(reloaded.listing.id, view.listing.id);
    assert_eq!(reloaded.property.bedrooms, Some(2));

    let candidates = repo.list_candidates(&account_id, false).unwrap();
    assert_eq!(candidates.len(), 1);
}

#[tokio::test]
async fn test_draft_listings_are_not_candidates() {
    let db = setup();
    let account_id = seed_account(&db, "Agencia Centro").await;

    let repo = ListingRepository::new(db.pool.clone(), db.writer.clone());
    let mut draft = new_listing(&account_id, 120_000);
    draft.status = ListingStatus::Draft;
    repo.create(draft).await.unwrap();

    assert!(repo.list_candidates(&account_id, false).unwrap().is_empty());
    // Cross-account scope excludes drafts as well.
    assert!(repo.list_candidates(&account_id, true).unwrap().is_empty());
}

#[tokio::test]
async fn test_prospect_roundtrip_preserves_ranges_and_extras() {
    let db = setup();
    let account_id = seed_account(&db, "Agencia Centro").await;
    let contact_id = seed_contact(&db, &account_id, "Lucía Martín").await;

    let repo = ProspectRepository::new(db.pool.clone(), db.writer.clone());
    let prospect = repo
        .create(new_prospect(&account_id, &contact_id))
        .await
        .unwrap();

    let loaded = repo.get_by_id(&prospect.id).unwrap();
    assert_eq!(loaded.min_price, Some(Decimal::from(100_000)));
    assert_eq!(loaded.max_price, Some(Decimal::from(200_000)));
    assert_eq!(loaded.extras.as_deref(), Some(r#"{"elevator":true}"#));
    assert_eq!(loaded.status, ProspectStatus::Active);

    // Scoped fetch only resolves within the owning account.
    assert!(repo
        .get_for_account(&prospect.id, &account_id)
        .unwrap()
        .is_some());
    assert!(repo
        .get_for_account(&prospect.id, "other-account")
        .unwrap()
        .is_none());

    let views = repo.list_views(&account_id, Some(ProspectStatus::Active)).unwrap();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].contact.name, "Lucía Martín");
}

#[tokio::test]
async fn test_matching_end_to_end_over_sqlite() {
    let db = setup();
    let account_id = seed_account(&db, "Agencia Centro").await;
    let contact_id = seed_contact(&db, &account_id, "Lucía Martín").await;

    let prospect_repo = Arc::new(ProspectRepository::new(db.pool.clone(), db.writer.clone()));
    let listing_repo = Arc::new(ListingRepository::new(db.pool.clone(), db.writer.clone()));
    let lead_repo = Arc::new(LeadRepository::new(db.pool.clone(), db.writer.clone()));

    prospect_repo
        .create(new_prospect(&account_id, &contact_id))
        .await
        .unwrap();
    listing_repo
        .create(new_listing(&account_id, 150_000))
        .await
        .unwrap();
    // Out of band even with tolerance: 250000 > 200000 * 1.05.
    listing_repo
        .create(new_listing(&account_id, 250_000))
        .await
        .unwrap();

    let service = MatchingService::new(prospect_repo, listing_repo, lead_repo);
    let results = service
        .find_matches(&MatchQuery::default(), &account_id)
        .unwrap();

    assert_eq!(results.total_count, 1);
    assert_eq!(results.matches[0].match_type, MatchType::Strict);
    assert!(!results.matches[0].has_existing_lead);
}

#[tokio::test]
async fn test_lead_create_is_duplicate_guarded() {
    let db = setup();
    let account_id = seed_account(&db, "Agencia Centro").await;
    let contact_id = seed_contact(&db, &account_id, "Lucía Martín").await;

    let listing_repo = ListingRepository::new(db.pool.clone(), db.writer.clone());
    let listing = listing_repo
        .create(new_listing(&account_id, 150_000))
        .await
        .unwrap();

    let lead_repo = LeadRepository::new(db.pool.clone(), db.writer.clone());
    let new_lead = NewLead {
        id: None,
        account_id: account_id.clone(),
        listing_id: listing.listing.id.clone(),
        contact_id: contact_id.clone(),
        contact_type: "buyer".to_string(),
        status: "Cita Pendiente".to_string(),
        source: "Buscador".to_string(),
    };

    let first = lead_repo.create_if_absent(new_lead.clone()).await.unwrap();
    assert!(matches!(first, LeadCreation::Created(_)));

    let second = lead_repo.create_if_absent(new_lead.clone()).await.unwrap();
    assert!(matches!(second, LeadCreation::Duplicate(_)));

    // Concurrent creations serialize on the writer actor: exactly one of two
    // racing inserts for a fresh pair wins.
    let deleted = lead_repo
        .delete_buyer_lead(&account_id, &contact_id, &listing.listing.id)
        .await
        .unwrap();
    assert_eq!(deleted, 1);
    let (a, b) = tokio::join!(
        lead_repo.create_if_absent(new_lead.clone()),
        lead_repo.create_if_absent(new_lead.clone())
    );
    let created = [a.unwrap(), b.unwrap()]
        .iter()
        .filter(|c| matches!(c, LeadCreation::Created(_)))
        .count();
    assert_eq!(created, 1);

    let found = lead_repo
        .find_buyer_lead(&account_id, &contact_id, &listing.listing.id)
        .unwrap();
    assert!(found.is_some());

    let deleted = lead_repo
        .delete_buyer_lead(&account_id, &contact_id, &listing.listing.id)
        .await
        .unwrap();
    assert_eq!(deleted, 1);
}

#[tokio::test]
async fn test_lead_service_flow_over_sqlite() {
    let db = setup();
    let account_id = seed_account(&db, "Agencia Centro").await;
    let contact_id = seed_contact(&db, &account_id, "Lucía Martín").await;

    let prospect_repo = Arc::new(ProspectRepository::new(db.pool.clone(), db.writer.clone()));
    let listing_repo = ListingRepository::new(db.pool.clone(), db.writer.clone());
    let lead_repo = Arc::new(LeadRepository::new(db.pool.clone(), db.writer.clone()));

    let prospect = prospect_repo
        .create(new_prospect(&account_id, &contact_id))
        .await
        .unwrap();
    let listing = listing_repo
        .create(new_listing(&account_id, 150_000))
        .await
        .unwrap();

    let service = LeadService::new(lead_repo, prospect_repo);

    let created = service
        .create_lead(&prospect.id, &listing.listing.id, &account_id)
        .await;
    assert!(created.success);

    let duplicate = service
        .create_lead(&prospect.id, &listing.listing.id, &account_id)
        .await;
    assert!(!duplicate.success);

    let dismissed = service
        .dismiss_lead(&prospect.id, &listing.listing.id, &account_id)
        .await;
    assert!(dismissed.success);

    let again = service
        .dismiss_lead(&prospect.id, &listing.listing.id, &account_id)
        .await;
    assert!(!again.success);
}
