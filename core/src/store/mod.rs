pub mod memory;
pub mod repository;
pub mod seed;
pub(crate) mod state;

pub use memory::InMemoryCatalog;
pub use repository::CarRepository;
pub use seed::sample_cars;
