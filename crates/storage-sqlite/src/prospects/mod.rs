pub mod model;
pub mod repository;

pub use model::ProspectDb;
pub use repository::ProspectRepository;
