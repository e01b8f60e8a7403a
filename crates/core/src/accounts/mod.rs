//! Accounts module - agency tenants.

mod accounts_model;
mod accounts_traits;

pub use accounts_model::{Account, NewAccount};
pub use accounts_traits::AccountRepositoryTrait;
