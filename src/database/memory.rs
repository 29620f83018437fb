use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::database::manager::DatabaseError;
use crate::database::models::{Airplane, NewAirplane};
use crate::database::store::AirplaneStore;

#[derive(Debug, Default)]
struct Table {
    last_id: i32,
    rows: BTreeMap<i32, Airplane>,
}

/// In-process `AirplaneStore` with the same id and ordering rules as the SQL table.
/// Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct MemoryAirplaneStore {
    table: RwLock<Table>,
}

impl MemoryAirplaneStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AirplaneStore for MemoryAirplaneStore {
    async fn insert(&self, airplane: NewAirplane) -> Result<Airplane, DatabaseError> {
        let mut table = self.table.write().await;
        let id = table
            .last_id
            .checked_add(1)
            .ok_or(DatabaseError::IdsExhausted("airplanes"))?;
        table.last_id = id;
        let row = airplane.with_id(id);
        table.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn list(&self) -> Result<Vec<Airplane>, DatabaseError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Airplane>, DatabaseError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn update(&self, airplane: Airplane) -> Result<Option<Airplane>, DatabaseError> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&airplane.id) {
            Some(row) => {
                *row = airplane;
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i32) -> Result<Option<Airplane>, DatabaseError> {
        Ok(self.table.write().await.rows.remove(&id))
    }
}
