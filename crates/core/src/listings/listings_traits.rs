//! Listing repository and service traits.
//!
//! These traits define the contract for listing operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::listings_model::{Listing, ListingStatus, ListingUpdate, ListingView, NewListing};
use crate::completion::CompletionResult;
use crate::errors::Result;

/// Trait defining the contract for Listing repository operations.
///
/// A listing and its property are created and updated together; the
/// implementation handles the two-table write transactionally.
#[async_trait]
pub trait ListingRepositoryTrait: Send + Sync {
    /// Creates a listing together with its property.
    async fn create(&self, new_listing: NewListing) -> Result<ListingView>;

    /// Updates a listing and its property.
    async fn update(&self, update: ListingUpdate) -> Result<ListingView>;

    /// Sets the lifecycle status of a listing.
    async fn set_status(&self, listing_id: &str, status: ListingStatus) -> Result<Listing>;

    /// Deletes a listing (and its property). Returns the number of deleted
    /// listing rows.
    async fn delete(&self, listing_id: &str) -> Result<usize>;

    /// Retrieves a listing joined with its property and location.
    fn get_view(&self, listing_id: &str) -> Result<ListingView>;

    /// Lists an account's listings with optional filters.
    fn list_views(
        &self,
        account_id: &str,
        is_active_filter: Option<bool>,
        statuses: Option<&[ListingStatus]>,
    ) -> Result<Vec<ListingView>>;

    /// Lists match candidates in one round-trip: active, non-draft listings,
    /// either scoped to the given account or across all tenants.
    fn list_candidates(&self, account_id: &str, cross_account: bool) -> Result<Vec<ListingView>>;
}

/// Trait defining the contract for Listing service operations.
#[async_trait]
pub trait ListingServiceTrait: Send + Sync {
    /// Creates a listing with business validation.
    async fn create_listing(&self, new_listing: NewListing) -> Result<ListingView>;

    /// Updates a listing with business validation.
    async fn update_listing(&self, update: ListingUpdate) -> Result<ListingView>;

    /// Deletes a listing.
    async fn delete_listing(&self, listing_id: &str) -> Result<()>;

    /// Retrieves a listing joined with property and location.
    fn get_listing(&self, listing_id: &str) -> Result<ListingView>;

    /// Lists an account's listings with optional filters.
    fn list_listings(
        &self,
        account_id: &str,
        is_active_filter: Option<bool>,
        statuses: Option<&[ListingStatus]>,
    ) -> Result<Vec<ListingView>>;

    /// Computes the completion report for a listing.
    fn get_completion(&self, listing_id: &str) -> Result<CompletionResult>;

    /// Publishes a listing, refusing when mandatory fields are pending.
    async fn publish_listing(&self, listing_id: &str) -> Result<Listing>;
}
