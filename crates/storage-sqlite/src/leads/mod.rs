pub mod model;
pub mod repository;

pub use model::LeadDb;
pub use repository::LeadRepository;
