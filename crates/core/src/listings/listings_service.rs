use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::listings_model::{
    Listing, ListingStatus, ListingUpdate, ListingView, NewListing,
};
use super::listings_traits::{ListingRepositoryTrait, ListingServiceTrait};
use crate::completion::{calculate_completion, CompletionResult};
use crate::errors::{Result, ValidationError};
use crate::Error;

/// Service for managing listings.
///
/// Publication goes through the completion tracker: a listing with pending
/// mandatory fields cannot be published.
pub struct ListingService {
    repository: Arc<dyn ListingRepositoryTrait>,
}

impl ListingService {
    pub fn new(repository: Arc<dyn ListingRepositoryTrait>) -> Self {
        ListingService { repository }
    }
}

#[async_trait]
impl ListingServiceTrait for ListingService {
    async fn create_listing(&self, new_listing: NewListing) -> Result<ListingView> {
        new_listing.validate()?;
        debug!(
            "Creating {} listing for account {}",
            new_listing.property_type.as_str(),
            new_listing.account_id
        );
        self.repository.create(new_listing).await
    }

    async fn update_listing(&self, update: ListingUpdate) -> Result<ListingView> {
        update.validate()?;
        self.repository.update(update).await
    }

    async fn delete_listing(&self, listing_id: &str) -> Result<()> {
        self.repository.delete(listing_id).await?;
        Ok(())
    }

    fn get_listing(&self, listing_id: &str) -> Result<ListingView> {
        self.repository.get_view(listing_id)
    }

    fn list_listings(
        &self,
        account_id: &str,
        is_active_filter: Option<bool>,
        statuses: Option<&[ListingStatus]>,
    ) -> Result<Vec<ListingView>> {
        self.repository
            .list_views(account_id, is_active_filter, statuses)
    }

    fn get_completion(&self, listing_id: &str) -> Result<CompletionResult> {
        let view = self.repository.get_view(listing_id)?;
        Ok(calculate_completion(Some(&view.to_fields())))
    }

    async fn publish_listing(&self, listing_id: &str) -> Result<Listing> {
        let view = self.repository.get_view(listing_id)?;
        let completion = calculate_completion(Some(&view.to_fields()));
        if !completion.can_publish_to_portals {
            let pending: Vec<String> = completion
                .mandatory
                .pending
                .iter()
                .map(|f| f.label.clone())
                .collect();
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Listing cannot be published, pending mandatory fields: {}",
                pending.join(", ")
            ))));
        }
        self.repository
            .set_status(listing_id, ListingStatus::Published)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::RwLock;

    use rust_decimal_macros::dec;

    use super::*;
    use crate::listings::{ListingFields, Property, PropertyType, TransactionType};

    struct MockListingRepository {
        views: RwLock<Vec<ListingView>>,
        statuses_set: RwLock<Vec<(String, ListingStatus)>>,
    }

    impl MockListingRepository {
        fn new(views: Vec<ListingView>) -> Self {
            Self {
                views: RwLock::new(views),
                statuses_set: RwLock::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ListingRepositoryTrait for MockListingRepository {
        async fn create(&self, _: NewListing) -> Result<ListingView> {
            unimplemented!()
        }
        async fn update(&self, _: ListingUpdate) -> Result<ListingView> {
            unimplemented!()
        }
        async fn set_status(&self, listing_id: &str, status: ListingStatus) -> Result<Listing> {
            self.statuses_set
                .write()
                .unwrap()
                .push((listing_id.to_string(), status));
            let view = self.get_view(listing_id)?;
            let mut listing = view.listing;
            listing.status = status;
            Ok(listing)
        }
        async fn delete(&self, _: &str) -> Result<usize> {
            unimplemented!()
        }
        fn get_view(&self, listing_id: &str) -> Result<ListingView> {
            self.views
                .read()
                .unwrap()
                .iter()
                .find(|v| v.listing.id == listing_id)
                .cloned()
                .ok_or_else(|| {
                    Error::Database(crate::errors::DatabaseError::NotFound(
                        listing_id.to_string(),
                    ))
                })
        }
        fn list_views(
            &self,
            _: &str,
            _: Option<bool>,
            _: Option<&[ListingStatus]>,
        ) -> Result<Vec<ListingView>> {
            Ok(self.views.read().unwrap().clone())
        }
        fn list_candidates(&self, _: &str, _: bool) -> Result<Vec<ListingView>> {
            Ok(self.views.read().unwrap().clone())
        }
    }

    fn make_view(id: &str, fields: ListingFields) -> ListingView {
        let now = chrono::NaiveDateTime::default();
        ListingView {
            listing: Listing {
                id: id.to_string(),
                account_id: "acc1".to_string(),
                property_id: format!("prop-{}", id),
                listing_type: fields.listing_type.unwrap_or(TransactionType::Sale),
                price: fields.price,
                status: ListingStatus::Draft,
                is_active: true,
                created_at: now,
                updated_at: now,
            },
            property: Property {
                id: format!("prop-{}", id),
                property_type: fields.property_type,
                title: fields.title.clone(),
                bedrooms: fields.bedrooms,
                bathrooms: fields.bathrooms,
                square_meter: fields.square_meter,
                built_surface_area: fields.built_surface_area,
                neighborhood_id: None,
                has_elevator: fields.has_elevator,
                has_garage: fields.has_garage,
                has_storage_room: fields.has_storage_room,
                has_terrace: fields.has_terrace,
                street: fields.street.clone(),
                city: fields.city.clone(),
                province: fields.province.clone(),
                postal_code: fields.postal_code.clone(),
                description: fields.description.clone(),
                construction_year: fields.construction_year,
                image_count: fields.image_count,
                created_at: now,
                updated_at: now,
            },
            location: None,
        }
    }

    fn complete_fields() -> ListingFields {
        ListingFields {
            property_type: PropertyType::Piso,
            listing_type: Some(TransactionType::Sale),
            price: Some(dec!(250000)),
            street: Some("Calle Mayor 12".to_string()),
            city: Some("Madrid".to_string()),
            province: Some("Madrid".to_string()),
            postal_code: Some("28013".to_string()),
            description: Some("Luminoso piso reformado junto a la Plaza Mayor".to_string()),
            image_count: 6,
            square_meter: Some(dec!(85)),
            built_surface_area: None,
            bedrooms: Some(2),
            bathrooms: Some(dec!(1)),
            title: None,
            construction_year: None,
            has_elevator: false,
            has_garage: false,
            has_storage_room: false,
            has_terrace: false,
        }
    }

    #[tokio::test]
    async fn test_publish_complete_listing() {
        let repo = Arc::new(MockListingRepository::new(vec![make_view(
            "l1",
            complete_fields(),
        )]));
        let service = ListingService::new(repo.clone());

        let listing = service.publish_listing("l1").await.unwrap();
        assert_eq!(listing.status, ListingStatus::Published);
        assert_eq!(repo.statuses_set.read().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_publish_refused_with_pending_mandatory() {
        let mut fields = complete_fields();
        fields.description = None;
        let repo = Arc::new(MockListingRepository::new(vec![make_view("l1", fields)]));
        let service = ListingService::new(repo.clone());

        let result = service.publish_listing("l1").await;
        assert!(matches!(result, Err(Error::Validation(_))));
        assert!(repo.statuses_set.read().unwrap().is_empty());
    }
}
