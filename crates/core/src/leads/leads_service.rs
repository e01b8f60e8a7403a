use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};

use super::leads_model::{LeadActionOutcome, LeadCreation, NewLead};
use super::leads_traits::{LeadRepositoryTrait, LeadServiceTrait};
use crate::constants::{
    CONTACT_TYPE_BUYER, LEAD_SOURCE_SEARCH, LEAD_STATUS_APPOINTMENT_PENDING,
};
use crate::errors::Result;
use crate::prospects::ProspectRepositoryTrait;

/// Service for the lead actions reachable from the matching search.
pub struct LeadService {
    lead_repository: Arc<dyn LeadRepositoryTrait>,
    prospect_repository: Arc<dyn ProspectRepositoryTrait>,
}

impl LeadService {
    pub fn new(
        lead_repository: Arc<dyn LeadRepositoryTrait>,
        prospect_repository: Arc<dyn ProspectRepositoryTrait>,
    ) -> Self {
        LeadService {
            lead_repository,
            prospect_repository,
        }
    }

    async fn try_create(
        &self,
        prospect_id: &str,
        listing_id: &str,
        account_id: &str,
    ) -> Result<LeadActionOutcome> {
        let Some(prospect) = self
            .prospect_repository
            .get_for_account(prospect_id, account_id)?
        else {
            return Ok(LeadActionOutcome::failure("Prospect not found"));
        };

        let creation = self
            .lead_repository
            .create_if_absent(NewLead {
                id: None,
                account_id: account_id.to_string(),
                listing_id: listing_id.to_string(),
                contact_id: prospect.contact_id,
                contact_type: CONTACT_TYPE_BUYER.to_string(),
                status: LEAD_STATUS_APPOINTMENT_PENDING.to_string(),
                source: LEAD_SOURCE_SEARCH.to_string(),
            })
            .await?;

        Ok(match creation {
            LeadCreation::Created(lead) => {
                debug!("Created lead {} for listing {}", lead.id, listing_id);
                LeadActionOutcome::ok("Lead created", Some(lead.id))
            }
            LeadCreation::Duplicate(_) => LeadActionOutcome::failure(
                "A lead already exists for this prospect and listing",
            ),
        })
    }

    async fn try_dismiss(
        &self,
        prospect_id: &str,
        listing_id: &str,
        account_id: &str,
    ) -> Result<LeadActionOutcome> {
        let Some(prospect) = self
            .prospect_repository
            .get_for_account(prospect_id, account_id)?
        else {
            return Ok(LeadActionOutcome::failure("Prospect not found"));
        };

        let deleted = self
            .lead_repository
            .delete_buyer_lead(account_id, &prospect.contact_id, listing_id)
            .await?;
        if deleted == 0 {
            return Ok(LeadActionOutcome::failure(
                "No lead found for this prospect and listing",
            ));
        }
        Ok(LeadActionOutcome::ok("Lead dismissed", None))
    }
}

#[async_trait]
impl LeadServiceTrait for LeadService {
    async fn create_lead(
        &self,
        prospect_id: &str,
        listing_id: &str,
        account_id: &str,
    ) -> LeadActionOutcome {
        match self.try_create(prospect_id, listing_id, account_id).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("create_lead failed: {}", e);
                LeadActionOutcome::failure(format!("Failed to create lead: {}", e))
            }
        }
    }

    async fn dismiss_lead(
        &self,
        prospect_id: &str,
        listing_id: &str,
        account_id: &str,
    ) -> LeadActionOutcome {
        match self.try_dismiss(prospect_id, listing_id, account_id).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("dismiss_lead failed: {}", e);
                LeadActionOutcome::failure(format!("Failed to dismiss lead: {}", e))
            }
        }
    }

    async fn save_match(&self, _: &str, _: &str, _: &str) -> LeadActionOutcome {
        // Extension point, nothing persisted yet.
        LeadActionOutcome::ok("Match saved", None)
    }

    async fn contact_match(&self, _: &str, _: &str, _: &str) -> LeadActionOutcome {
        // Extension point, nothing persisted yet.
        LeadActionOutcome::ok("Contact recorded", None)
    }
}
