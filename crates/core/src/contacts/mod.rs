//! Contacts module - people attached to prospects, listings, and leads.

mod contacts_model;
mod contacts_traits;

pub use contacts_model::{Contact, ContactSummary, NewContact};
pub use contacts_traits::ContactRepositoryTrait;
