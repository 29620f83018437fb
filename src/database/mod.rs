pub mod manager;
pub mod memory;
pub mod models;
pub mod record;
pub mod repository;
pub mod store;

pub use manager::{DatabaseError, DatabaseManager};
pub use memory::MemoryAirplaneStore;
pub use models::{Airplane, NewAirplane};
pub use record::PayloadError;
pub use repository::PgAirplaneStore;
pub use store::AirplaneStore;
