//! Listings module - supply-side records and the publish gate.

mod listings_model;
mod listings_service;
mod listings_traits;

pub use listings_model::{
    Listing, ListingFields, ListingStatus, ListingUpdate, ListingView, Location, NewListing,
    Property, PropertyType, TransactionType,
};
pub use listings_service::ListingService;
pub use listings_traits::{ListingRepositoryTrait, ListingServiceTrait};
