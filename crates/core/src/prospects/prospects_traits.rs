//! Prospect repository and service traits.

use async_trait::async_trait;

use super::prospects_model::{
    NewProspect, Prospect, ProspectStatus, ProspectUpdate, ProspectView,
};
use crate::errors::Result;

/// Trait defining the contract for Prospect repository operations.
#[async_trait]
pub trait ProspectRepositoryTrait: Send + Sync {
    /// Creates a new prospect.
    async fn create(&self, new_prospect: NewProspect) -> Result<Prospect>;

    /// Updates an existing prospect.
    async fn update(&self, update: ProspectUpdate) -> Result<Prospect>;

    /// Deletes a prospect. Returns the number of deleted records.
    async fn delete(&self, prospect_id: &str) -> Result<usize>;

    /// Retrieves a prospect by its ID.
    fn get_by_id(&self, prospect_id: &str) -> Result<Prospect>;

    /// Retrieves a prospect only when it belongs to the given account.
    fn get_for_account(&self, prospect_id: &str, account_id: &str) -> Result<Option<Prospect>>;

    /// Lists an account's prospects joined with their contacts, optionally
    /// filtered by status. One round-trip.
    fn list_views(
        &self,
        account_id: &str,
        status_filter: Option<ProspectStatus>,
    ) -> Result<Vec<ProspectView>>;
}

/// Trait defining the contract for Prospect service operations.
#[async_trait]
pub trait ProspectServiceTrait: Send + Sync {
    /// Creates a new prospect with business validation.
    async fn create_prospect(&self, new_prospect: NewProspect) -> Result<Prospect>;

    /// Updates a prospect with business validation.
    async fn update_prospect(&self, update: ProspectUpdate) -> Result<Prospect>;

    /// Deletes a prospect.
    async fn delete_prospect(&self, prospect_id: &str) -> Result<()>;

    /// Retrieves a prospect by ID.
    fn get_prospect(&self, prospect_id: &str) -> Result<Prospect>;

    /// Lists an account's prospects with optional status filter.
    fn list_prospects(
        &self,
        account_id: &str,
        status_filter: Option<ProspectStatus>,
    ) -> Result<Vec<ProspectView>>;
}
