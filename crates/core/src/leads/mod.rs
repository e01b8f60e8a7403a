//! Leads module - persisted buyer interest on a listing.

mod leads_model;
mod leads_service;
mod leads_traits;

pub use leads_model::{Lead, LeadActionOutcome, LeadCreation, NewLead};
pub use leads_service::LeadService;
pub use leads_traits::{LeadRepositoryTrait, LeadServiceTrait};
