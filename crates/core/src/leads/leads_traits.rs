//! Lead repository and service traits.

use async_trait::async_trait;

use super::leads_model::{Lead, LeadActionOutcome, LeadCreation, NewLead};
use crate::errors::Result;

/// Trait defining the contract for Lead repository operations.
#[async_trait]
pub trait LeadRepositoryTrait: Send + Sync {
    /// Inserts a lead unless an active lead of the same contact type already
    /// exists for the (contact, listing) pair in the account. Check and
    /// insert execute as one serialized write job.
    async fn create_if_absent(&self, new_lead: NewLead) -> Result<LeadCreation>;

    /// Hard-deletes the buyer lead for the pair. Returns the number of
    /// deleted records (0 when there was nothing to dismiss).
    async fn delete_buyer_lead(
        &self,
        account_id: &str,
        contact_id: &str,
        listing_id: &str,
    ) -> Result<usize>;

    /// Looks up the buyer lead for one pair.
    fn find_buyer_lead(
        &self,
        account_id: &str,
        contact_id: &str,
        listing_id: &str,
    ) -> Result<Option<Lead>>;

    /// Batch lookup of the account's buyer leads for (contact_id,
    /// listing_id) pairs. One round-trip regardless of the number of pairs.
    fn find_buyer_leads_for_pairs(
        &self,
        account_id: &str,
        pairs: &[(String, String)],
    ) -> Result<Vec<Lead>>;
}

/// Trait defining the contract for lead actions triggered from the matching
/// search. All operations report through [`LeadActionOutcome`]; they do not
/// error on business-rule violations.
#[async_trait]
pub trait LeadServiceTrait: Send + Sync {
    /// Creates a buyer lead for a (prospect, listing) pair.
    async fn create_lead(
        &self,
        prospect_id: &str,
        listing_id: &str,
        account_id: &str,
    ) -> LeadActionOutcome;

    /// Dismisses (hard-deletes) the buyer lead for a pair.
    async fn dismiss_lead(
        &self,
        prospect_id: &str,
        listing_id: &str,
        account_id: &str,
    ) -> LeadActionOutcome;

    /// Extension point: bookmark a match. Not yet backed by persistence.
    async fn save_match(
        &self,
        prospect_id: &str,
        listing_id: &str,
        account_id: &str,
    ) -> LeadActionOutcome;

    /// Extension point: record an outreach attempt. Not yet backed by
    /// persistence.
    async fn contact_match(
        &self,
        prospect_id: &str,
        listing_id: &str,
        account_id: &str,
    ) -> LeadActionOutcome;
}
