use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, error};

use super::matching_engine::{evaluate_pair, PairEvaluation};
use super::matching_model::{
    AccountScope, ExistingLeadSummary, MatchQuery, MatchResults, MatchType, ProspectMatch,
};
use super::matching_traits::MatchingServiceTrait;
use crate::errors::Result;
use crate::leads::{Lead, LeadRepositoryTrait};
use crate::listings::{ListingRepositoryTrait, ListingView};
use crate::prospects::{ProspectRepositoryTrait, ProspectStatus, ProspectView};
use crate::Error;

/// The matching search: bulk candidate retrieval, filter predicates, the
/// pure pair engine, lead annotation, ordering, and pagination.
///
/// Three bulk round-trips per query - prospects with contacts, listing
/// candidates, and one batch lead lookup. Never one query per pair.
pub struct MatchingService {
    prospect_repository: Arc<dyn ProspectRepositoryTrait>,
    listing_repository: Arc<dyn ListingRepositoryTrait>,
    lead_repository: Arc<dyn LeadRepositoryTrait>,
}

impl MatchingService {
    pub fn new(
        prospect_repository: Arc<dyn ProspectRepositoryTrait>,
        listing_repository: Arc<dyn ListingRepositoryTrait>,
        lead_repository: Arc<dyn LeadRepositoryTrait>,
    ) -> Self {
        MatchingService {
            prospect_repository,
            listing_repository,
            lead_repository,
        }
    }

    fn assemble(&self, query: &MatchQuery, account_id: &str) -> Result<MatchResults> {
        let filters = &query.filters;

        let prospects: Vec<ProspectView> = self
            .prospect_repository
            .list_views(account_id, Some(ProspectStatus::Active))?
            .into_iter()
            .filter(|view| {
                (filters.prospect_types.is_empty()
                    || filters
                        .prospect_types
                        .contains(&view.prospect.transaction_type))
                    && (filters.urgency_levels.is_empty()
                        || filters.urgency_levels.contains(&view.prospect.urgency))
            })
            .collect();

        let cross_account = filters.account_scope == AccountScope::CrossAccount;
        let listings: Vec<ListingView> = self
            .listing_repository
            .list_candidates(account_id, cross_account)?
            .into_iter()
            .filter(|view| {
                (filters.property_types.is_empty()
                    || filters
                        .property_types
                        .contains(&view.property.property_type))
                    && (filters.listing_types.is_empty()
                        || filters.listing_types.contains(&view.listing.listing_type))
                    && (filters.statuses.is_empty()
                        || filters.statuses.contains(&view.listing.status))
                    && (filters.location_ids.is_empty()
                        || view
                            .property
                            .neighborhood_id
                            .as_ref()
                            .is_some_and(|id| filters.location_ids.contains(id)))
            })
            .collect();

        let mut evaluated: Vec<(&ProspectView, &ListingView, PairEvaluation)> = Vec::new();
        for prospect_view in &prospects {
            for listing_view in &listings {
                if let Some(evaluation) = evaluate_pair(&prospect_view.prospect, listing_view) {
                    evaluated.push((prospect_view, listing_view, evaluation));
                }
            }
        }

        if !filters.include_near_strict {
            evaluated.retain(|(_, _, eval)| eval.match_type == MatchType::Strict);
        }

        // No ordering is inherent to the pair set; sort by listing creation
        // time, listing id, prospect id so pagination is stable across runs.
        evaluated.sort_by(|a, b| {
            (a.1.listing.created_at, &a.1.listing.id, &a.0.prospect.id).cmp(&(
                b.1.listing.created_at,
                &b.1.listing.id,
                &b.0.prospect.id,
            ))
        });

        // One batch lookup for the whole pre-pagination set.
        let pairs: Vec<(String, String)> = evaluated
            .iter()
            .map(|(p, l, _)| (p.prospect.contact_id.clone(), l.listing.id.clone()))
            .collect();
        let leads_by_pair: HashMap<(String, String), Lead> = self
            .lead_repository
            .find_buyer_leads_for_pairs(account_id, &pairs)?
            .into_iter()
            .map(|lead| ((lead.contact_id.clone(), lead.listing_id.clone()), lead))
            .collect();

        let total_count = evaluated.len();
        let offset = query.pagination.offset.max(0) as usize;
        let limit = query.pagination.limit.max(0) as usize;
        let has_next_page = total_count > offset + limit;

        let matches: Vec<ProspectMatch> = evaluated
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(|(prospect_view, listing_view, evaluation)| {
                let existing = leads_by_pair.get(&(
                    prospect_view.prospect.contact_id.clone(),
                    listing_view.listing.id.clone(),
                ));
                build_match(prospect_view, listing_view, evaluation, existing, account_id)
            })
            .collect();

        debug!(
            "Matching for account {}: {} pairs, {} returned",
            account_id,
            total_count,
            matches.len()
        );
        Ok(MatchResults {
            matches,
            total_count,
            has_next_page,
        })
    }
}

/// Shapes one evaluated pair into its display form. Kept apart from the
/// decision logic so the engine tests need no display fixtures.
fn build_match(
    prospect_view: &ProspectView,
    listing_view: &ListingView,
    evaluation: PairEvaluation,
    existing_lead: Option<&Lead>,
    account_id: &str,
) -> ProspectMatch {
    let is_cross_account = listing_view.listing.account_id != account_id;
    ProspectMatch {
        prospect_id: prospect_view.prospect.id.clone(),
        listing_id: listing_view.listing.id.clone(),
        listing_account_id: listing_view.listing.account_id.clone(),
        match_type: evaluation.match_type,
        tolerance_reasons: evaluation.tolerance_reasons,
        is_cross_account,
        can_contact: !is_cross_account,
        has_existing_lead: existing_lead.is_some(),
        existing_lead: existing_lead.map(ExistingLeadSummary::from),
        prospect: (&prospect_view.prospect).into(),
        listing: listing_view.into(),
        contact: prospect_view.contact.clone(),
    }
}

impl MatchingServiceTrait for MatchingService {
    fn find_matches(&self, query: &MatchQuery, account_id: &str) -> Result<MatchResults> {
        self.assemble(query, account_id).map_err(|e| {
            error!("Matching query failed: {}", e);
            Error::Repository("Failed to fetch matches".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::RwLock;

    use async_trait::async_trait;
    use chrono::NaiveDateTime;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::contacts::ContactSummary;
    use crate::errors::DatabaseError;
    use crate::leads::{LeadCreation, NewLead};
    use crate::listings::{
        Listing, ListingStatus, ListingUpdate, NewListing, Property, PropertyType,
        TransactionType,
    };
    use crate::matching::Pagination;
    use crate::prospects::{NewProspect, Prospect, ProspectUpdate};

    // ============== Mock repositories ==============

    struct MockProspectRepository {
        views: Vec<ProspectView>,
        fail: bool,
    }

    #[async_trait]
    impl ProspectRepositoryTrait for MockProspectRepository {
        async fn create(&self, _: NewProspect) -> Result<Prospect> {
            unimplemented!()
        }
        async fn update(&self, _: ProspectUpdate) -> Result<Prospect> {
            unimplemented!()
        }
        async fn delete(&self, _: &str) -> Result<usize> {
            unimplemented!()
        }
        fn get_by_id(&self, _: &str) -> Result<Prospect> {
            unimplemented!()
        }
        fn get_for_account(&self, _: &str, _: &str) -> Result<Option<Prospect>> {
            unimplemented!()
        }
        fn list_views(
            &self,
            account_id: &str,
            status_filter: Option<ProspectStatus>,
        ) -> Result<Vec<ProspectView>> {
            if self.fail {
                return Err(Error::Database(DatabaseError::QueryFailed(
                    "connection reset".to_string(),
                )));
            }
            Ok(self
                .views
                .iter()
                .filter(|v| {
                    v.prospect.account_id == account_id
                        && status_filter.map_or(true, |s| v.prospect.status == s)
                })
                .cloned()
                .collect())
        }
    }

    struct MockListingRepository {
        views: Vec<ListingView>,
    }

    #[async_trait]
    impl ListingRepositoryTrait for MockListingRepository {
        async fn create(&self, _: NewListing) -> Result<ListingView> {
            unimplemented!()
        }
        async fn update(&self, _: ListingUpdate) -> Result<ListingView> {
            unimplemented!()
        }
        async fn set_status(&self, _: &str, _: ListingStatus) -> Result<Listing> {
            unimplemented!()
        }
        async fn delete(&self, _: &str) -> Result<usize> {
            unimplemented!()
        }
        fn get_view(&self, _: &str) -> Result<ListingView> {
            unimplemented!()
        }
        fn list_views(
            &self,
            _: &str,
            _: Option<bool>,
            _: Option<&[ListingStatus]>,
        ) -> Result<Vec<ListingView>> {
            unimplemented!()
        }
        fn list_candidates(
            &self,
            account_id: &str,
            cross_account: bool,
        ) -> Result<Vec<ListingView>> {
            Ok(self
                .views
                .iter()
                .filter(|v| {
                    v.listing.is_active
                        && v.listing.status != ListingStatus::Draft
                        && (cross_account || v.listing.account_id == account_id)
                })
                .cloned()
                .collect())
        }
    }

    #[derive(Default)]
    struct MockLeadRepository {
        leads: RwLock<Vec<Lead>>,
    }

    #[async_trait]
    impl LeadRepositoryTrait for MockLeadRepository {
        async fn create_if_absent(&self, _: NewLead) -> Result<LeadCreation> {
            unimplemented!()
        }
        async fn delete_buyer_lead(&self, _: &str, _: &str, _: &str) -> Result<usize> {
            unimplemented!()
        }
        fn find_buyer_lead(&self, _: &str, _: &str, _: &str) -> Result<Option<Lead>> {
            unimplemented!()
        }
        fn find_buyer_leads_for_pairs(
            &self,
            account_id: &str,
            pairs: &[(String, String)],
        ) -> Result<Vec<Lead>> {
            Ok(self
                .leads
                .read()
                .unwrap()
                .iter()
                .filter(|l| {
                    l.account_id == account_id
                        && pairs
                            .iter()
                            .any(|(c, li)| c == &l.contact_id && li == &l.listing_id)
                })
                .cloned()
                .collect())
        }
    }

    // ============== Fixtures ==============

    fn ts(seconds: i64) -> NaiveDateTime {
        chrono::DateTime::from_timestamp(seconds, 0).unwrap().naive_utc()
    }

    fn make_prospect_view(id: &str, account_id: &str) -> ProspectView {
        ProspectView {
            prospect: Prospect {
                id: id.to_string(),
                account_id: account_id.to_string(),
                contact_id: format!("contact-{}", id),
                status: ProspectStatus::Active,
                transaction_type: TransactionType::Sale,
                property_type: PropertyType::Piso,
                min_price: None,
                max_price: None,
                min_bedrooms: None,
                min_bathrooms: None,
                min_area: None,
                max_area: None,
                preferred_areas: Vec::new(),
                extras: None,
                urgency: 2,
                is_funding_ready: false,
                notes: None,
                created_at: ts(0),
                updated_at: ts(0),
            },
            contact: ContactSummary {
                id: format!("contact-{}", id),
                name: "Ana Gómez".to_string(),
                email: None,
                phone: None,
            },
        }
    }

    fn make_listing_view(id: &str, account_id: &str, created: i64) -> ListingView {
        ListingView {
            listing: Listing {
                id: id.to_string(),
                account_id: account_id.to_string(),
                property_id: format!("prop-{}", id),
                listing_type: TransactionType::Sale,
                price: Some(dec!(150000)),
                status: ListingStatus::Published,
                is_active: true,
                created_at: ts(created),
                updated_at: ts(created),
            },
            property: Property {
                id: format!("prop-{}", id),
                property_type: PropertyType::Piso,
                title: None,
                bedrooms: Some(3),
                bathrooms: Some(dec!(2)),
                square_meter: Some(dec!(90)),
                built_surface_area: None,
                neighborhood_id: Some("5".to_string()),
                has_elevator: true,
                has_garage: false,
                has_storage_room: false,
                has_terrace: false,
                street: None,
                city: None,
                province: None,
                postal_code: None,
                description: None,
                construction_year: None,
                image_count: 5,
                created_at: ts(created),
                updated_at: ts(created),
            },
            location: None,
        }
    }

    fn make_service(
        prospects: Vec<ProspectView>,
        listings: Vec<ListingView>,
        leads: Vec<Lead>,
    ) -> MatchingService {
        MatchingService::new(
            Arc::new(MockProspectRepository {
                views: prospects,
                fail: false,
            }),
            Arc::new(MockListingRepository { views: listings }),
            Arc::new(MockLeadRepository {
                leads: RwLock::new(leads),
            }),
        )
    }

    fn query() -> MatchQuery {
        MatchQuery::default()
    }

    // ============== Tests ==============

    #[test]
    fn test_single_strict_match() {
        let service = make_service(
            vec![make_prospect_view("p1", "acc1")],
            vec![make_listing_view("l1", "acc1", 100)],
            vec![],
        );

        let results = service.find_matches(&query(), "acc1").unwrap();
        assert_eq!(results.total_count, 1);
        assert!(!results.has_next_page);
        let m = &results.matches[0];
        assert_eq!(m.match_type, MatchType::Strict);
        assert!(!m.is_cross_account);
        assert!(m.can_contact);
        assert!(!m.has_existing_lead);
    }

    #[test]
    fn test_near_strict_excluded_when_disabled() {
        let mut prospect = make_prospect_view("p1", "acc1");
        prospect.prospect.max_price = Some(dec!(145000)); // listing at 150000: +3.4%

        let mut q = query();
        let service = make_service(
            vec![prospect.clone()],
            vec![make_listing_view("l1", "acc1", 100)],
            vec![],
        );
        let results = service.find_matches(&q, "acc1").unwrap();
        assert_eq!(results.total_count, 1);
        assert_eq!(results.matches[0].match_type, MatchType::NearStrict);

        q.filters.include_near_strict = false;
        let service = make_service(
            vec![prospect],
            vec![make_listing_view("l1", "acc1", 100)],
            vec![],
        );
        let results = service.find_matches(&q, "acc1").unwrap();
        assert_eq!(results.total_count, 0);
    }

    #[test]
    fn test_cross_account_scope_and_flags() {
        let mut q = query();
        let prospects = vec![make_prospect_view("p1", "acc1")];
        let listings = vec![
            make_listing_view("l1", "acc1", 100),
            make_listing_view("l2", "acc2", 200),
        ];

        // Current scope only sees the caller's listing.
        let service = make_service(prospects.clone(), listings.clone(), vec![]);
        let results = service.find_matches(&q, "acc1").unwrap();
        assert_eq!(results.total_count, 1);
        assert_eq!(results.matches[0].listing_id, "l1");

        // Cross-account sees both; the foreign one is flagged.
        q.filters.account_scope = AccountScope::CrossAccount;
        let service = make_service(prospects, listings, vec![]);
        let results = service.find_matches(&q, "acc1").unwrap();
        assert_eq!(results.total_count, 2);
        let foreign = results
            .matches
            .iter()
            .find(|m| m.listing_id == "l2")
            .unwrap();
        assert!(foreign.is_cross_account);
        assert!(!foreign.can_contact);
    }

    #[test]
    fn test_pagination_window_and_ordering() {
        let prospects = vec![make_prospect_view("p1", "acc1")];
        let listings = vec![
            make_listing_view("l3", "acc1", 300),
            make_listing_view("l1", "acc1", 100),
            make_listing_view("l2", "acc1", 200),
        ];
        let service = make_service(prospects, listings, vec![]);

        let mut q = query();
        q.pagination = Pagination {
            offset: 0,
            limit: 2,
        };
        let results = service.find_matches(&q, "acc1").unwrap();
        assert_eq!(results.total_count, 3);
        assert!(results.has_next_page);
        // Ordered by listing creation time.
        assert_eq!(results.matches[0].listing_id, "l1");
        assert_eq!(results.matches[1].listing_id, "l2");

        q.pagination = Pagination {
            offset: 2,
            limit: 2,
        };
        let results = service.find_matches(&q, "acc1").unwrap();
        assert_eq!(results.total_count, 3);
        assert!(!results.has_next_page);
        assert_eq!(results.matches.len(), 1);
        assert_eq!(results.matches[0].listing_id, "l3");
    }

    #[test]
    fn test_existing_lead_annotation() {
        let prospect = make_prospect_view("p1", "acc1");
        let now = ts(500);
        let lead = Lead {
            id: "lead-1".to_string(),
            account_id: "acc1".to_string(),
            listing_id: "l1".to_string(),
            contact_id: prospect.prospect.contact_id.clone(),
            contact_type: "buyer".to_string(),
            status: "Cita Pendiente".to_string(),
            source: "Buscador".to_string(),
            created_at: now,
            updated_at: now,
        };
        let service = make_service(
            vec![prospect],
            vec![
                make_listing_view("l1", "acc1", 100),
                make_listing_view("l2", "acc1", 200),
            ],
            vec![lead],
        );

        let results = service.find_matches(&query(), "acc1").unwrap();
        let with_lead = results
            .matches
            .iter()
            .find(|m| m.listing_id == "l1")
            .unwrap();
        assert!(with_lead.has_existing_lead);
        assert_eq!(
            with_lead.existing_lead.as_ref().unwrap().id,
            "lead-1".to_string()
        );
        let without_lead = results
            .matches
            .iter()
            .find(|m| m.listing_id == "l2")
            .unwrap();
        assert!(!without_lead.has_existing_lead);
    }

    #[test]
    fn test_empty_filter_arrays_impose_nothing() {
        let service = make_service(
            vec![make_prospect_view("p1", "acc1")],
            vec![make_listing_view("l1", "acc1", 100)],
            vec![],
        );
        let results = service.find_matches(&query(), "acc1").unwrap();
        assert_eq!(results.total_count, 1);
    }

    #[test]
    fn test_filter_predicates_restrict_by_membership() {
        let mut garaje = make_listing_view("l2", "acc1", 200);
        garaje.property.property_type = PropertyType::Garaje;

        let mut garaje_prospect = make_prospect_view("p2", "acc1");
        garaje_prospect.prospect.property_type = PropertyType::Garaje;
        garaje_prospect.prospect.urgency = 3;

        let prospects = vec![make_prospect_view("p1", "acc1"), garaje_prospect];
        let listings = vec![make_listing_view("l1", "acc1", 100), garaje];

        let mut q = query();
        q.filters.property_types = vec![PropertyType::Garaje];
        let service = make_service(prospects.clone(), listings.clone(), vec![]);
        let results = service.find_matches(&q, "acc1").unwrap();
        assert_eq!(results.total_count, 1);
        assert_eq!(results.matches[0].listing_id, "l2");

        let mut q = query();
        q.filters.urgency_levels = vec![3];
        let service = make_service(prospects.clone(), listings.clone(), vec![]);
        let results = service.find_matches(&q, "acc1").unwrap();
        assert_eq!(results.total_count, 1);
        assert_eq!(results.matches[0].prospect_id, "p2");

        let mut q = query();
        q.filters.location_ids = vec!["unknown".to_string()];
        let service = make_service(prospects, listings, vec![]);
        let results = service.find_matches(&q, "acc1").unwrap();
        assert_eq!(results.total_count, 0);
    }

    #[test]
    fn test_paused_prospects_are_not_matched() {
        let mut paused = make_prospect_view("p1", "acc1");
        paused.prospect.status = ProspectStatus::Paused;
        let service = make_service(
            vec![paused],
            vec![make_listing_view("l1", "acc1", 100)],
            vec![],
        );
        let results = service.find_matches(&query(), "acc1").unwrap();
        assert_eq!(results.total_count, 0);
    }

    #[test]
    fn test_repository_failure_surfaces_generic_error() {
        let service = MatchingService::new(
            Arc::new(MockProspectRepository {
                views: vec![],
                fail: true,
            }),
            Arc::new(MockListingRepository { views: vec![] }),
            Arc::new(MockLeadRepository::default()),
        );

        let err = service.find_matches(&query(), "acc1").unwrap_err();
        assert_eq!(err.to_string(), "Repository error: Failed to fetch matches");
    }

    #[test]
    fn test_end_to_end_rent_scenario() {
        let mut prospect = make_prospect_view("p1", "acc1");
        prospect.prospect.transaction_type = TransactionType::Rent;
        prospect.prospect.min_price = Some(dec!(800));
        prospect.prospect.max_price = Some(dec!(1000));
        prospect.prospect.min_bedrooms = Some(2);
        prospect.prospect.extras = Some(r#"{"elevator":true}"#.to_string());

        let mut listing = make_listing_view("l1", "acc1", 100);
        listing.listing.listing_type = TransactionType::Rent;
        listing.listing.price = Some(dec!(1040));
        listing.property.bedrooms = Some(3);
        listing.property.has_elevator = true;

        let service = make_service(vec![prospect], vec![listing], vec![]);
        let results = service.find_matches(&query(), "acc1").unwrap();
        assert_eq!(results.total_count, 1);
        let m = &results.matches[0];
        assert_eq!(m.match_type, MatchType::NearStrict);
        assert_eq!(m.tolerance_reasons, vec!["Price +4.0%".to_string()]);
    }
}
