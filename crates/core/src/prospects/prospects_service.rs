use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::prospects_model::{
    NewProspect, Prospect, ProspectStatus, ProspectUpdate, ProspectView,
};
use super::prospects_traits::{ProspectRepositoryTrait, ProspectServiceTrait};
use crate::errors::Result;

/// Service for managing prospects.
pub struct ProspectService {
    repository: Arc<dyn ProspectRepositoryTrait>,
}

impl ProspectService {
    pub fn new(repository: Arc<dyn ProspectRepositoryTrait>) -> Self {
        ProspectService { repository }
    }
}

#[async_trait]
impl ProspectServiceTrait for ProspectService {
    async fn create_prospect(&self, new_prospect: NewProspect) -> Result<Prospect> {
        new_prospect.validate()?;
        debug!(
            "Creating prospect for contact {} (account {})",
            new_prospect.contact_id, new_prospect.account_id
        );
        self.repository.create(new_prospect).await
    }

    async fn update_prospect(&self, update: ProspectUpdate) -> Result<Prospect> {
        update.validate()?;
        self.repository.update(update).await
    }

    async fn delete_prospect(&self, prospect_id: &str) -> Result<()> {
        self.repository.delete(prospect_id).await?;
        Ok(())
    }

    fn get_prospect(&self, prospect_id: &str) -> Result<Prospect> {
        self.repository.get_by_id(prospect_id)
    }

    fn list_prospects(
        &self,
        account_id: &str,
        status_filter: Option<ProspectStatus>,
    ) -> Result<Vec<ProspectView>> {
        self.repository.list_views(account_id, status_filter)
    }
}
