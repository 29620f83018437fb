use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{Airplane, NewAirplane};
use crate::database::store::AirplaneStore;

const COLUMNS: &str = "id, producer_name, model_name, passenger_capacity";

/// `AirplaneStore` backed by the `airplanes` table in PostgreSQL
#[derive(Clone)]
pub struct PgAirplaneStore {
    pool: PgPool,
}

impl PgAirplaneStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AirplaneStore for PgAirplaneStore {
    async fn insert(&self, airplane: NewAirplane) -> Result<Airplane, DatabaseError> {
        let sql = format!(
            "INSERT INTO airplanes (producer_name, model_name, passenger_capacity) \
             VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, Airplane>(&sql)
            .bind(airplane.producer_name)
            .bind(airplane.model_name)
            .bind(airplane.passenger_capacity)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list(&self) -> Result<Vec<Airplane>, DatabaseError> {
        let sql = format!("SELECT {COLUMNS} FROM airplanes ORDER BY id");
        let rows = sqlx::query_as::<_, Airplane>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Airplane>, DatabaseError> {
        let sql = format!("SELECT {COLUMNS} FROM airplanes WHERE id = $1");
        let row = sqlx::query_as::<_, Airplane>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, airplane: Airplane) -> Result<Option<Airplane>, DatabaseError> {
        let sql = format!(
            "UPDATE airplanes SET producer_name = $2, model_name = $3, passenger_capacity = $4 \
             WHERE id = $1 RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, Airplane>(&sql)
            .bind(airplane.id)
            .bind(airplane.producer_name)
            .bind(airplane.model_name)
            .bind(airplane.passenger_capacity)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: i32) -> Result<Option<Airplane>, DatabaseError> {
        let sql = format!("DELETE FROM airplanes WHERE id = $1 RETURNING {COLUMNS}");
        let row = sqlx::query_as::<_, Airplane>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}
