pub mod model;
pub mod repository;

pub use model::AccountDb;
pub use repository::AccountRepository;
