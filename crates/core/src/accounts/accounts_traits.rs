//! Account repository trait.
//!
//! Database-agnostic contract implemented by the storage layer.

use async_trait::async_trait;

use super::accounts_model::{Account, NewAccount};
use crate::errors::Result;

/// Trait defining the contract for Account repository operations.
#[async_trait]
pub trait AccountRepositoryTrait: Send + Sync {
    /// Creates a new account.
    async fn create(&self, new_account: NewAccount) -> Result<Account>;

    /// Retrieves an account by its ID.
    fn get_by_id(&self, account_id: &str) -> Result<Account>;

    /// Lists accounts, optionally filtered by active status.
    fn list(&self, is_active_filter: Option<bool>) -> Result<Vec<Account>>;
}
