use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted airplane row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Airplane {
    pub id: i32,
    pub producer_name: Option<String>,
    pub model_name: Option<String>,
    pub passenger_capacity: i32,
}

/// Column values for an airplane that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAirplane {
    pub producer_name: Option<String>,
    pub model_name: Option<String>,
    pub passenger_capacity: i32,
}

impl NewAirplane {
    pub fn with_id(self, id: i32) -> Airplane {
        Airplane {
            id,
            producer_name: self.producer_name,
            model_name: self.model_name,
            passenger_capacity: self.passenger_capacity,
        }
    }
}

impl Airplane {
    /// "Producer Model" as used in confirmation messages
    pub fn label(&self) -> String {
        label(self.producer_name.as_deref(), self.model_name.as_deref())
    }
}

/// Joins the non-empty name parts, falling back to "(unnamed)"
pub fn label(producer_name: Option<&str>, model_name: Option<&str>) -> String {
    let parts: Vec<&str> = [producer_name, model_name]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if parts.is_empty() {
        "(unnamed)".to_string()
    } else {
        parts.join(" ")
    }
}
