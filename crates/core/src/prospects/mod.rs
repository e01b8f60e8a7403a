//! Prospects module - demand-side search criteria.

mod prospects_model;
mod prospects_service;
mod prospects_traits;

pub use prospects_model::{
    NewProspect, PreferredArea, Prospect, ProspectExtras, ProspectStatus, ProspectUpdate,
    ProspectView,
};
pub use prospects_service::ProspectService;
pub use prospects_traits::{ProspectRepositoryTrait, ProspectServiceTrait};
