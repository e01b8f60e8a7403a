//! Contact repository trait.

use async_trait::async_trait;

use super::contacts_model::{Contact, NewContact};
use crate::errors::Result;

/// Trait defining the contract for Contact repository operations.
#[async_trait]
pub trait ContactRepositoryTrait: Send + Sync {
    /// Creates a new contact.
    async fn create(&self, new_contact: NewContact) -> Result<Contact>;

    /// Retrieves a contact by its ID.
    fn get_by_id(&self, contact_id: &str) -> Result<Contact>;

    /// Lists contacts belonging to an account.
    fn list_by_account(&self, account_id: &str) -> Result<Vec<Contact>>;
}
