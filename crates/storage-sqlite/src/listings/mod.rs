pub mod model;
pub mod repository;

pub use model::{ListingDb, NeighborhoodDb, PropertyDb};
pub use repository::ListingRepository;
