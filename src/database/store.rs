use async_trait::async_trait;

use crate::database::manager::DatabaseError;
use crate::database::models::{Airplane, NewAirplane};

/// Data access for the airplanes table.
///
/// Every call is a single statement committed on its own; nothing spans calls.
#[async_trait]
pub trait AirplaneStore: Send + Sync {
    /// Insert a row and return it with the store-assigned id
    async fn insert(&self, airplane: NewAirplane) -> Result<Airplane, DatabaseError>;

    /// All rows ordered by id
    async fn list(&self) -> Result<Vec<Airplane>, DatabaseError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Airplane>, DatabaseError>;

    /// Replace every column except id. `None` when no row has that id.
    async fn update(&self, airplane: Airplane) -> Result<Option<Airplane>, DatabaseError>;

    /// Remove by id and return the removed row, `None` when it did not exist
    async fn delete(&self, id: i32) -> Result<Option<Airplane>, DatabaseError>;
}
